//! Article URL validation and normalization.

use url::Url;

/// Prepend `https://` when the input carries no explicit scheme.
fn with_scheme(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validate an article URL.
///
/// A scheme is defaulted before parsing, so `example.com/story` is as
/// acceptable as the fully qualified form. A successful generic parse is
/// sufficient; no reachability check is performed.
pub fn validate_url(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    Url::parse(&with_scheme(input)).is_ok()
}

/// Normalize a URL to the canonical form used as a media natural key.
///
/// The scheme is defaulted, the host is lowercased by the parser, the
/// fragment is dropped, and a trailing slash is trimmed. Returns `None`
/// when the input does not parse.
pub fn normalize_url(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    let mut parsed = Url::parse(&with_scheme(input)).ok()?;
    parsed.set_fragment(None);
    let mut normalized = parsed.to_string();
    if normalized.ends_with('/') {
        normalized.pop();
    }
    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_qualified_urls() {
        assert!(validate_url("https://www.statnews.com/2024/01/story"));
        assert!(validate_url("http://example.com"));
    }

    #[test]
    fn test_scheme_is_defaulted() {
        assert!(validate_url("www.healthline.com/article"));
        assert!(validate_url("example.com"));
    }

    #[test]
    fn test_malformed_urls_rejected() {
        assert!(!validate_url(""));
        assert!(!validate_url("   "));
        assert!(!validate_url("not a url"));
        assert!(!validate_url("https://exa mple.com"));
    }

    #[test]
    fn test_normalize_lowercases_host() {
        assert_eq!(
            normalize_url("HTTPS://Example.COM/Story").as_deref(),
            Some("https://example.com/Story")
        );
    }

    #[test]
    fn test_normalize_trims_trailing_slash_and_fragment() {
        assert_eq!(
            normalize_url("https://example.com/").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_url("example.com/story#section-2").as_deref(),
            Some("https://example.com/story")
        );
    }

    #[test]
    fn test_normalize_equates_scheme_variants() {
        assert_eq!(
            normalize_url("www.example.com/story"),
            normalize_url("https://www.example.com/story")
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_url("not a url"), None);
        assert_eq!(normalize_url(""), None);
    }
}
