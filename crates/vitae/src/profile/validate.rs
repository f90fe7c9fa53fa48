//! Canonical record validation and free-text sanitization.
//!
//! Validation accumulates every violation so a form can highlight all
//! offending fields at once; it never fails fast on the first.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::identifier::validate_npi;

use super::transform::{NpiDataRecord, UserProfileRecord};

/// Permissive RFC-shaped email check: something@something.something,
/// no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Cap applied to every free-text field before it is trusted.
const MAX_FREE_TEXT_LEN: usize = 1000;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The offending field.
    pub field: String,
    /// What the form should tell the user.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a canonical user profile record, accumulating all
/// violations.
pub fn validate_user_profile(record: &UserProfileRecord) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if record.first_name.trim().is_empty() {
        violations.push(FieldViolation::new("first_name", "First name is required"));
    }
    if record.last_name.trim().is_empty() {
        violations.push(FieldViolation::new("last_name", "Last name is required"));
    }

    if record.email.trim().is_empty() {
        violations.push(FieldViolation::new("email", "Email is required"));
    } else if !EMAIL_PATTERN.is_match(record.email.trim()) {
        violations.push(FieldViolation::new("email", "Email address is not valid"));
    }

    if let Some(npi) = record.npi.as_deref() {
        violations.extend(npi_violations(npi));
    }

    violations
}

/// Validate a canonical NPI data record, accumulating all violations.
pub fn validate_npi_data(record: &NpiDataRecord) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if record.npi.trim().is_empty() {
        violations.push(FieldViolation::new("npi", "NPI number is required"));
    } else {
        violations.extend(npi_violations(&record.npi));
    }

    if record.last_name.as_deref().unwrap_or("").trim().is_empty() {
        violations.push(FieldViolation::new("last_name", "Provider last name is required"));
    }

    violations
}

fn npi_violations(npi: &str) -> Vec<FieldViolation> {
    let digits: String = npi.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        vec![FieldViolation::new("npi", "NPI must be exactly 10 digits")]
    } else if !validate_npi(npi) {
        vec![FieldViolation::new("npi", "NPI check digit does not match")]
    } else {
        Vec::new()
    }
}

/// Sanitize a free-text field: trim, strip angle brackets, and truncate
/// to 1000 characters on a char boundary.
pub fn sanitize_free_text(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_FREE_TEXT_LEN)
        .collect()
}
