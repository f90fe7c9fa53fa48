//! Lifecycle transitions for content items.
//!
//! ```text
//! discovered → pending
//! pending    → approved | rejected
//! approved   → hidden → approved      (visibility toggle)
//! manual     → hidden → manual        (same toggle, origin preserved)
//! ```
//!
//! `rejected` is terminal: re-discovery creates a new candidate rather
//! than resurrecting a rejected one. Every transition returns a new
//! [`ContentItem`] value; an illegal edge returns
//! [`VitaeError::InvalidTransition`] and never silently succeeds.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VitaeError};
use crate::identifier::{validate_doi, validate_nct_id, validate_pmid, validate_url, IdentifierKind};

use super::item::{generate_item_id, ContentItem, ContentPayload, ItemOrigin, ItemStatus};

/// Actions that drive lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Approve,
    Reject,
    Hide,
    Show,
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LifecycleAction::Approve => "approve",
            LifecycleAction::Reject => "reject",
            LifecycleAction::Hide => "hide",
            LifecycleAction::Show => "show",
        })
    }
}

/// Admit a discovered candidate into the review queue.
///
/// The item starts `pending`, unselected, and invisible; it reaches the
/// public profile only through [`approve`].
pub fn admit_discovered(payload: ContentPayload) -> ContentItem {
    let now = Utc::now();
    let item = ContentItem {
        id: generate_item_id(),
        origin: ItemOrigin::Discovered,
        status: ItemStatus::Pending,
        is_visible: false,
        is_selected: false,
        added_at: now,
        last_modified: now,
        payload,
    };
    debug!(item_id = %item.id, content_type = ?item.content_type(), "admitted discovered candidate");
    item
}

/// Admit a manually entered item, validating its identifier first.
///
/// Trials must carry a well-formed NCT id, media articles a parseable
/// URL, and publications a valid DOI or PMID. On failure no item is
/// created. On success the item is admitted with status `manual` and is
/// immediately visible.
pub fn admit_manual(payload: ContentPayload) -> Result<ContentItem> {
    validate_manual_identifier(&payload)?;

    let now = Utc::now();
    let item = ContentItem {
        id: generate_item_id(),
        origin: ItemOrigin::Manual,
        status: ItemStatus::Manual,
        is_visible: true,
        is_selected: false,
        added_at: now,
        last_modified: now,
        payload,
    };
    debug!(item_id = %item.id, content_type = ?item.content_type(), "admitted manual item");
    Ok(item)
}

/// Approve a pending item for public display.
pub fn approve(item: &ContentItem) -> Result<ContentItem> {
    require_status(item, ItemStatus::Pending, LifecycleAction::Approve)?;

    let mut approved = item.clone();
    approved.status = ItemStatus::Approved;
    approved.is_visible = true;
    approved.last_modified = Utc::now();
    Ok(approved)
}

/// Reject a pending item. Terminal for this candidate.
pub fn reject(item: &ContentItem) -> Result<ContentItem> {
    require_status(item, ItemStatus::Pending, LifecycleAction::Reject)?;

    let mut rejected = item.clone();
    rejected.status = ItemStatus::Rejected;
    rejected.is_visible = false;
    rejected.last_modified = Utc::now();
    Ok(rejected)
}

/// Toggle an item's public visibility.
///
/// Legal only from `approved`, `manual`, or `hidden`. Hiding sets status
/// `hidden`; showing restores the status implied by the item's origin,
/// so the manual/approved distinction survives a hide/show cycle. A
/// toggle that matches the current state returns the item unchanged.
pub fn set_visibility(item: &ContentItem, visible: bool) -> Result<ContentItem> {
    let action = if visible {
        LifecycleAction::Show
    } else {
        LifecycleAction::Hide
    };

    match (item.status, visible) {
        (ItemStatus::Approved | ItemStatus::Manual, false) => {
            let mut hidden = item.clone();
            hidden.status = ItemStatus::Hidden;
            hidden.is_visible = false;
            hidden.last_modified = Utc::now();
            Ok(hidden)
        }
        (ItemStatus::Hidden, true) => {
            let mut shown = item.clone();
            shown.status = item.origin.restored_status();
            shown.is_visible = true;
            shown.last_modified = Utc::now();
            Ok(shown)
        }
        // Already in the requested state.
        (ItemStatus::Approved | ItemStatus::Manual, true) | (ItemStatus::Hidden, false) => {
            Ok(item.clone())
        }
        (from, _) => Err(VitaeError::InvalidTransition { from, action }),
    }
}

fn require_status(item: &ContentItem, expected: ItemStatus, action: LifecycleAction) -> Result<()> {
    if item.status != expected {
        return Err(VitaeError::InvalidTransition {
            from: item.status,
            action,
        });
    }
    Ok(())
}

fn validate_manual_identifier(payload: &ContentPayload) -> Result<()> {
    match payload {
        ContentPayload::ClinicalTrial { nct_id, .. } => {
            if !validate_nct_id(nct_id) {
                return Err(VitaeError::InvalidIdentifier {
                    kind: IdentifierKind::NctId,
                    input: nct_id.clone(),
                });
            }
        }
        ContentPayload::MediaArticle { url, .. } => {
            if !validate_url(url) {
                return Err(VitaeError::InvalidIdentifier {
                    kind: IdentifierKind::ArticleUrl,
                    input: url.clone(),
                });
            }
        }
        ContentPayload::Publication { doi, pmid, .. } => {
            if let Some(doi) = doi.as_deref().filter(|d| !d.trim().is_empty()) {
                if !validate_doi(doi) {
                    return Err(VitaeError::InvalidIdentifier {
                        kind: IdentifierKind::Doi,
                        input: doi.to_string(),
                    });
                }
            } else if let Some(pmid) = pmid.as_deref().filter(|p| !p.trim().is_empty()) {
                if !validate_pmid(pmid) {
                    return Err(VitaeError::InvalidIdentifier {
                        kind: IdentifierKind::Pmid,
                        input: pmid.to_string(),
                    });
                }
            } else {
                return Err(VitaeError::InvalidIdentifier {
                    kind: IdentifierKind::Doi,
                    input: String::new(),
                });
            }
        }
    }
    Ok(())
}
