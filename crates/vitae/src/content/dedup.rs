//! Deduplication of discovered candidates across repeated discovery runs.

use std::collections::HashSet;

use tracing::debug;

use super::item::{ContentItem, ContentPayload};

/// Check whether a discovered candidate duplicates an existing item.
///
/// Matching is by natural key only; differing titles or summaries do not
/// make a candidate novel. Rejected items still count, so a rejected
/// candidate is not re-admitted by the next discovery run. Candidates
/// without a natural key are never treated as duplicates.
pub fn is_duplicate(existing: &[ContentItem], candidate: &ContentPayload) -> bool {
    let Some(key) = candidate.natural_key() else {
        return false;
    };
    existing
        .iter()
        .any(|item| item.natural_key().as_deref() == Some(key.as_str()))
}

/// Filter a discovery batch down to novel candidates.
///
/// Drops candidates that match an existing item's natural key and
/// duplicates within the batch itself.
pub fn filter_novel(
    existing: &[ContentItem],
    candidates: Vec<ContentPayload>,
) -> Vec<ContentPayload> {
    let mut seen: HashSet<String> = existing
        .iter()
        .filter_map(|item| item.natural_key())
        .collect();

    let mut novel = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match candidate.natural_key() {
            Some(key) if seen.contains(&key) => {
                debug!(%key, "dropping duplicate discovery candidate");
            }
            Some(key) => {
                seen.insert(key);
                novel.push(candidate);
            }
            None => novel.push(candidate),
        }
    }
    novel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::lifecycle::{admit_discovered, reject};

    fn trial(nct_id: &str, title: &str) -> ContentPayload {
        ContentPayload::ClinicalTrial {
            nct_id: nct_id.to_string(),
            title: title.to_string(),
            phase: None,
            recruitment_status: None,
            condition: None,
        }
    }

    fn media(url: &str) -> ContentPayload {
        ContentPayload::MediaArticle {
            url: url.to_string(),
            title: "Coverage".to_string(),
            outlet: None,
            summary: None,
        }
    }

    #[test]
    fn test_same_nct_id_is_duplicate_despite_different_title() {
        let existing = vec![admit_discovered(trial("NCT12345678", "Original title"))];

        let candidate = trial("NCT12345678", "Retitled by the registry");
        assert!(is_duplicate(&existing, &candidate));
    }

    #[test]
    fn test_different_nct_id_is_novel() {
        let existing = vec![admit_discovered(trial("NCT12345678", "Study A"))];
        assert!(!is_duplicate(&existing, &trial("NCT87654321", "Study B")));
    }

    #[test]
    fn test_rejected_item_still_blocks_readmission() {
        let rejected = reject(&admit_discovered(trial("NCT12345678", "Study"))).unwrap();
        let existing = vec![rejected];

        assert!(is_duplicate(&existing, &trial("NCT12345678", "Study")));
    }

    #[test]
    fn test_url_variants_collapse_to_one_key() {
        let existing = vec![admit_discovered(media("https://www.example.com/story"))];
        assert!(is_duplicate(&existing, &media("www.Example.com/story/")));
    }

    #[test]
    fn test_filter_novel_drops_within_batch_duplicates() {
        let batch = vec![
            trial("NCT11111111", "First"),
            trial("NCT11111111", "First again"),
            trial("NCT22222222", "Second"),
        ];

        let novel = filter_novel(&[], batch);
        assert_eq!(novel.len(), 2);
    }

    #[test]
    fn test_filter_novel_keeps_keyless_candidates() {
        let batch = vec![ContentPayload::Publication {
            title: "No identifiers yet".to_string(),
            journal: None,
            doi: None,
            pmid: None,
            authors: Vec::new(),
            published_year: None,
        }];

        assert_eq!(filter_novel(&[], batch).len(), 1);
    }
}
