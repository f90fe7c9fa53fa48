//! Content item records subject to the discovery/review lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifier::{normalize_doi, normalize_url};

/// Lifecycle status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Discovered and awaiting review.
    Pending,
    /// Reviewed and approved for public display.
    Approved,
    /// Reviewed and declined. Terminal.
    Rejected,
    /// Previously shown, toggled off by the provider.
    Hidden,
    /// Entered by hand, admitted without review.
    Manual,
}

impl ItemStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "Pending",
            ItemStatus::Approved => "Approved",
            ItemStatus::Rejected => "Rejected",
            ItemStatus::Hidden => "Hidden",
            ItemStatus::Manual => "Manual",
        }
    }

    /// Check if an item in this status may carry `is_visible = true`.
    pub fn allows_visibility(&self) -> bool {
        matches!(self, ItemStatus::Approved | ItemStatus::Manual)
    }

    /// Check if this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Rejected)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
            ItemStatus::Hidden => "hidden",
            ItemStatus::Manual => "manual",
        })
    }
}

/// How a content item entered the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    /// Surfaced by an automatic discovery run.
    Discovered,
    /// Entered by the provider.
    Manual,
}

impl ItemOrigin {
    /// Status a hidden item returns to when shown again.
    ///
    /// Origin is kept separately from status so hide/show is
    /// non-destructive: a hidden manual item re-shows as `manual`, a
    /// hidden discovered item as `approved`.
    pub fn restored_status(&self) -> ItemStatus {
        match self {
            ItemOrigin::Discovered => ItemStatus::Approved,
            ItemOrigin::Manual => ItemStatus::Manual,
        }
    }
}

/// The three curated content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Publication,
    ClinicalTrial,
    MediaArticle,
}

impl ContentType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Publication => "Publication",
            ContentType::ClinicalTrial => "Clinical Trial",
            ContentType::MediaArticle => "Media Article",
        }
    }
}

/// Type-specific payload carried by a content item.
///
/// One state machine covers all three content types; only the payload
/// varies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPayload {
    /// Bibliographic record for a journal publication.
    Publication {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        journal: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        doi: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pmid: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        authors: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        published_year: Option<i32>,
    },
    /// Registry metadata for a clinical trial.
    ClinicalTrial {
        nct_id: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        phase: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        recruitment_status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    },
    /// Press or media coverage.
    MediaArticle {
        url: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        outlet: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
}

impl ContentPayload {
    /// Get the content type of this payload.
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentPayload::Publication { .. } => ContentType::Publication,
            ContentPayload::ClinicalTrial { .. } => ContentType::ClinicalTrial,
            ContentPayload::MediaArticle { .. } => ContentType::MediaArticle,
        }
    }

    /// Get the title shown in review lists.
    pub fn title(&self) -> &str {
        match self {
            ContentPayload::Publication { title, .. }
            | ContentPayload::ClinicalTrial { title, .. }
            | ContentPayload::MediaArticle { title, .. } => title,
        }
    }

    /// Natural key used to recognize the same record across discovery
    /// runs: NCT id for trials, DOI (falling back to PMID) for
    /// publications, normalized URL for media.
    ///
    /// Keys are prefixed by scheme so equal raw values of different
    /// kinds never collide.
    pub fn natural_key(&self) -> Option<String> {
        match self {
            ContentPayload::Publication { doi, pmid, .. } => {
                if let Some(doi) = doi.as_deref().filter(|d| !d.trim().is_empty()) {
                    Some(format!("doi:{}", normalize_doi(doi)))
                } else {
                    pmid.as_deref()
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(|p| format!("pmid:{p}"))
                }
            }
            ContentPayload::ClinicalTrial { nct_id, .. } => {
                let trimmed = nct_id.trim();
                (!trimmed.is_empty()).then(|| format!("nct:{}", trimmed.to_uppercase()))
            }
            ContentPayload::MediaArticle { url, .. } => {
                normalize_url(url).map(|u| format!("url:{u}"))
            }
        }
    }
}

/// A curated content record owned by a provider profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier for this item.
    pub id: String,

    /// How the item entered the profile.
    pub origin: ItemOrigin,

    /// Current lifecycle status.
    pub status: ItemStatus,

    /// Whether the item is rendered on the public profile. True only
    /// when `status` is approved or manual.
    pub is_visible: bool,

    /// Whether the item is selected in the review list.
    pub is_selected: bool,

    /// When the item was admitted.
    pub added_at: DateTime<Utc>,

    /// When the item last changed.
    pub last_modified: DateTime<Utc>,

    /// Type-specific payload.
    pub payload: ContentPayload,
}

impl ContentItem {
    /// Get the content type of this item.
    pub fn content_type(&self) -> ContentType {
        self.payload.content_type()
    }

    /// Natural key of the underlying payload.
    pub fn natural_key(&self) -> Option<String> {
        self.payload.natural_key()
    }

    /// Toggle the review-list selection flag. Not a lifecycle
    /// transition; the audit stamp is untouched.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }
}

/// Counts of content items by lifecycle status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub hidden: usize,
    pub manual: usize,
}

impl ItemCounts {
    /// Tally a set of items.
    pub fn from_items(items: &[ContentItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.status {
                ItemStatus::Pending => counts.pending += 1,
                ItemStatus::Approved => counts.approved += 1,
                ItemStatus::Rejected => counts.rejected += 1,
                ItemStatus::Hidden => counts.hidden += 1,
                ItemStatus::Manual => counts.manual += 1,
            }
        }
        counts
    }

    /// Total number of items.
    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected + self.hidden + self.manual
    }

    /// Number of items that have been through review (not pending).
    pub fn decided(&self) -> usize {
        self.approved + self.rejected + self.hidden + self.manual
    }

    /// Number of items eligible for public display.
    pub fn publicly_visible(&self) -> usize {
        self.approved + self.manual
    }
}

/// Generate a unique content item ID.
pub(crate) fn generate_item_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("item_{:03}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_payload(nct_id: &str) -> ContentPayload {
        ContentPayload::ClinicalTrial {
            nct_id: nct_id.to_string(),
            title: "A Study".to_string(),
            phase: None,
            recruitment_status: None,
            condition: None,
        }
    }

    #[test]
    fn test_status_visibility_rules() {
        assert!(ItemStatus::Approved.allows_visibility());
        assert!(ItemStatus::Manual.allows_visibility());
        assert!(!ItemStatus::Pending.allows_visibility());
        assert!(!ItemStatus::Hidden.allows_visibility());
        assert!(!ItemStatus::Rejected.allows_visibility());
    }

    #[test]
    fn test_only_rejected_is_terminal() {
        assert!(ItemStatus::Rejected.is_terminal());
        assert!(!ItemStatus::Hidden.is_terminal());
        assert!(!ItemStatus::Pending.is_terminal());
    }

    #[test]
    fn test_restored_status_follows_origin() {
        assert_eq!(ItemOrigin::Discovered.restored_status(), ItemStatus::Approved);
        assert_eq!(ItemOrigin::Manual.restored_status(), ItemStatus::Manual);
    }

    #[test]
    fn test_trial_natural_key_uppercases() {
        let key = trial_payload("nct12345678").natural_key();
        assert_eq!(key.as_deref(), Some("nct:NCT12345678"));
    }

    #[test]
    fn test_publication_key_prefers_doi() {
        let payload = ContentPayload::Publication {
            title: "Outcomes".to_string(),
            journal: None,
            doi: Some("10.1056/NEJMoa2034577".to_string()),
            pmid: Some("33301246".to_string()),
            authors: Vec::new(),
            published_year: None,
        };
        assert_eq!(
            payload.natural_key().as_deref(),
            Some("doi:10.1056/nejmoa2034577")
        );
    }

    #[test]
    fn test_publication_key_falls_back_to_pmid() {
        let payload = ContentPayload::Publication {
            title: "Outcomes".to_string(),
            journal: None,
            doi: None,
            pmid: Some("33301246".to_string()),
            authors: Vec::new(),
            published_year: None,
        };
        assert_eq!(payload.natural_key().as_deref(), Some("pmid:33301246"));
    }

    #[test]
    fn test_media_key_normalizes_url() {
        let payload = ContentPayload::MediaArticle {
            url: "WWW.Example.com/story/".to_string(),
            title: "Coverage".to_string(),
            outlet: None,
            summary: None,
        };
        assert_eq!(
            payload.natural_key().as_deref(),
            Some("url:https://www.example.com/story")
        );
    }

    #[test]
    fn test_missing_key_fields_yield_none() {
        let payload = ContentPayload::Publication {
            title: "No identifiers".to_string(),
            journal: None,
            doi: None,
            pmid: None,
            authors: Vec::new(),
            published_year: None,
        };
        assert_eq!(payload.natural_key(), None);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = generate_item_id();
        let b = generate_item_id();
        assert_ne!(a, b);
        assert!(a.starts_with("item_"));
    }
}
