//! ClinicalTrials.gov NCT identifier validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exact NCT format: the literal prefix plus eight digits.
static NCT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^NCT\d{8}$").unwrap());

/// Maximum length of a well-formed NCT identifier (`NCT` + 8 digits).
const NCT_MAX_LEN: usize = 11;

/// Uppercase and strip everything outside `[A-Z0-9]`.
fn normalize(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Validate an NCT trial identifier.
///
/// Input is normalized (uppercased, punctuation stripped) before the
/// fixed-pattern match. Validation is independent of any interactive
/// auto-formatting.
pub fn validate_nct_id(input: &str) -> bool {
    NCT_PATTERN.is_match(&normalize(input))
}

/// Auto-format partial NCT input during interactive entry.
///
/// Digits-only input gains the `NCT` prefix; anything beyond 11
/// characters is cut. The result may still be incomplete; callers
/// must run [`validate_nct_id`] before accepting it.
pub fn format_nct_input(input: &str) -> String {
    let mut formatted = normalize(input);
    if !formatted.is_empty() && formatted.chars().all(|c| c.is_ascii_digit()) {
        formatted.insert_str(0, "NCT");
    }
    formatted.truncate(NCT_MAX_LEN);
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nct_id() {
        assert!(validate_nct_id("NCT12345678"));
        assert!(validate_nct_id("nct12345678"));
        assert!(validate_nct_id(" NCT-1234-5678 "));
    }

    #[test]
    fn test_wrong_digit_count() {
        assert!(!validate_nct_id("NCT1234567"));
        assert!(!validate_nct_id("NCT123456789"));
    }

    #[test]
    fn test_missing_prefix() {
        assert!(!validate_nct_id("12345678"));
        // Normalization keeps the letters, so no NCT prefix survives.
        assert!(!validate_nct_id("abc12345678"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate_nct_id(""));
    }

    #[test]
    fn test_format_prepends_prefix_for_digits() {
        assert_eq!(format_nct_input("12345678"), "NCT12345678");
        assert_eq!(format_nct_input("123"), "NCT123");
    }

    #[test]
    fn test_format_keeps_existing_prefix() {
        assert_eq!(format_nct_input("nct12345678"), "NCT12345678");
        assert_eq!(format_nct_input("NCT123"), "NCT123");
    }

    #[test]
    fn test_format_caps_length() {
        assert_eq!(format_nct_input("NCT123456789999"), "NCT12345678");
        assert_eq!(format_nct_input("123456789999"), "NCT12345678");
    }

    #[test]
    fn test_formatted_output_validates_when_complete() {
        assert!(validate_nct_id(&format_nct_input("12345678")));
        assert!(!validate_nct_id(&format_nct_input("1234")));
    }
}
