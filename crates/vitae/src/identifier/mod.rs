//! Validation for externally sourced profile identifiers.
//!
//! Every identifier admitted into a provider profile passes through this
//! module first: NPI numbers (10-digit Luhn checksum), ClinicalTrials.gov
//! NCT ids (fixed pattern), DOIs and PMIDs for manually entered
//! publications, and article URLs. All validators are total functions:
//! they report invalidity through their return value and never panic on
//! caller input, so forms can render inline feedback without error
//! handling.

mod link;
mod nct;
mod npi;
mod scholarly;

pub use link::{normalize_url, validate_url};
pub use nct::{format_nct_input, validate_nct_id};
pub use npi::{format_npi, validate_npi};
pub use scholarly::{normalize_doi, validate_doi, validate_pmid};

use serde::{Deserialize, Serialize};

/// Kinds of identifiers accepted by the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// National Provider Identifier.
    Npi,
    /// ClinicalTrials.gov study identifier.
    NctId,
    /// Digital Object Identifier for a publication.
    Doi,
    /// PubMed identifier for a publication.
    Pmid,
    /// Link to a media article.
    ArticleUrl,
}

impl IdentifierKind {
    /// Get the registry this identifier resolves against.
    pub fn registry(&self) -> &'static str {
        match self {
            IdentifierKind::Npi => "NPPES NPI Registry",
            IdentifierKind::NctId => "ClinicalTrials.gov",
            IdentifierKind::Doi => "Crossref",
            IdentifierKind::Pmid => "PubMed",
            IdentifierKind::ArticleUrl => "Web",
        }
    }

    /// Get the URL template for linking out to the registry entry.
    pub fn url_template(&self) -> Option<&'static str> {
        match self {
            IdentifierKind::Npi => Some("https://npiregistry.cms.hhs.gov/provider-view/{}"),
            IdentifierKind::NctId => Some("https://clinicaltrials.gov/study/{}"),
            IdentifierKind::Doi => Some("https://doi.org/{}"),
            IdentifierKind::Pmid => Some("https://pubmed.ncbi.nlm.nih.gov/{}"),
            IdentifierKind::ArticleUrl => None,
        }
    }

    /// Get the expected format, phrased for inline form feedback.
    pub fn format_description(&self) -> &'static str {
        match self {
            IdentifierKind::Npi => "10 digits with a valid check digit (e.g., 1234567893)",
            IdentifierKind::NctId => "NCT followed by 8 digits (e.g., NCT12345678)",
            IdentifierKind::Doi => "10. prefix and suffix (e.g., 10.1056/NEJMoa2034577)",
            IdentifierKind::Pmid => "1-8 digits (e.g., 33301246)",
            IdentifierKind::ArticleUrl => "a well-formed http(s) URL",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IdentifierKind::Npi => "NPI",
            IdentifierKind::NctId => "NCT",
            IdentifierKind::Doi => "DOI",
            IdentifierKind::Pmid => "PMID",
            IdentifierKind::ArticleUrl => "URL",
        };
        f.write_str(name)
    }
}

/// Result of validating a single identifier.
///
/// A transient artifact: profiles only ever persist identifiers taken
/// from a result whose `is_valid` flag is set.
#[derive(Debug, Clone)]
pub struct IdentifierValidation {
    /// The original input value.
    pub input: String,
    /// The kind of identifier that was checked.
    pub kind: IdentifierKind,
    /// Whether the identifier format is valid.
    pub is_valid: bool,
    /// Canonical form suitable for storage and deduplication.
    pub normalized: Option<String>,
    /// Feedback message when invalid.
    pub error: Option<String>,
}

/// Validate an identifier of a known kind.
pub fn validate_identifier(kind: IdentifierKind, input: &str) -> IdentifierValidation {
    let (is_valid, normalized) = match kind {
        IdentifierKind::Npi => {
            let valid = validate_npi(input);
            let normalized =
                valid.then(|| input.chars().filter(|c| c.is_ascii_digit()).collect::<String>());
            (valid, normalized)
        }
        IdentifierKind::NctId => {
            let formatted = format_nct_input(input);
            let valid = validate_nct_id(input);
            (valid, valid.then_some(formatted))
        }
        IdentifierKind::Doi => {
            let valid = validate_doi(input);
            (valid, valid.then(|| normalize_doi(input)))
        }
        IdentifierKind::Pmid => {
            let valid = validate_pmid(input);
            (valid, valid.then(|| input.trim().to_string()))
        }
        IdentifierKind::ArticleUrl => {
            let normalized = normalize_url(input);
            (normalized.is_some(), normalized)
        }
    };

    IdentifierValidation {
        input: input.to_string(),
        kind,
        is_valid,
        normalized,
        error: (!is_valid).then(|| format!("Expected {}", kind.format_description())),
    }
}
