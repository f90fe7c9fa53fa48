//! Profile section records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Filled in and current.
    Complete,
    /// Present but stale or partially filled.
    NeedsUpdate,
    /// Nothing entered yet.
    Missing,
}

impl CompletionStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CompletionStatus::Complete => "Complete",
            CompletionStatus::NeedsUpdate => "Needs Update",
            CompletionStatus::Missing => "Missing",
        }
    }
}

/// Editorial priority of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPriority {
    High,
    Medium,
    Low,
}

impl SectionPriority {
    /// Ranking weight used when ordering sections needing attention.
    pub fn weight(&self) -> u8 {
        match self {
            SectionPriority::High => 3,
            SectionPriority::Medium => 2,
            SectionPriority::Low => 1,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionPriority::High => "High",
            SectionPriority::Medium => "Medium",
            SectionPriority::Low => "Low",
        }
    }
}

/// A section of the provider profile.
///
/// Section content is edited elsewhere; the visibility engine mutates
/// only the `is_visible` and `is_required` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    /// Stable section identifier (e.g., `biography`).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Whether this section counts toward profile completion.
    pub is_required: bool,

    /// Whether this section appears on the profile.
    pub is_visible: bool,

    /// Completion state as assessed by the section's editor.
    pub completion: CompletionStatus,

    /// Editorial priority.
    pub priority: SectionPriority,

    /// When the section content last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProfileSection {
    /// Create a section with neutral defaults: visible, not required,
    /// missing content, medium priority.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_required: false,
            is_visible: true,
            completion: CompletionStatus::Missing,
            priority: SectionPriority::Medium,
            last_updated: None,
        }
    }

    /// Set the completion status.
    pub fn with_completion(mut self, completion: CompletionStatus) -> Self {
        self.completion = completion;
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: SectionPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the last-updated stamp.
    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Check if this section should surface in the attention list.
    pub fn needs_attention(&self) -> bool {
        matches!(
            self.completion,
            CompletionStatus::NeedsUpdate | CompletionStatus::Missing
        )
    }
}
