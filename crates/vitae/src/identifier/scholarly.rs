//! DOI and PubMed identifier validation for manually entered publications.

use once_cell::sync::Lazy;
use regex::Regex;

/// DOI shape: `10.` + registrant prefix + `/` + suffix, no whitespace.
static DOI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^10\.\d{4,9}/\S+$").unwrap());

/// PMIDs are plain digit strings, at most eight digits today.
static PMID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,8}$").unwrap());

/// Validate a DOI.
///
/// A leading `doi:` label or `https://doi.org/` resolver prefix is
/// stripped before the match, so all common citation forms are accepted.
pub fn validate_doi(input: &str) -> bool {
    DOI_PATTERN.is_match(&normalize_doi(input))
}

/// Strip resolver prefixes and lowercase a DOI for use as a natural key.
pub fn normalize_doi(input: &str) -> String {
    let trimmed = input.trim().to_lowercase();
    let stripped = trimmed
        .strip_prefix("https://doi.org/")
        .or_else(|| trimmed.strip_prefix("http://doi.org/"))
        .or_else(|| trimmed.strip_prefix("doi:"))
        .unwrap_or(&trimmed);
    stripped.trim().to_string()
}

/// Validate a PubMed identifier.
pub fn validate_pmid(input: &str) -> bool {
    PMID_PATTERN.is_match(input.trim())
}
