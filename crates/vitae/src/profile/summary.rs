//! Dashboard summary composed from sections and content items.

use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, ItemCounts};
use crate::sections::{
    calculate_completion, most_critical_section, rank_sections_needing_attention, ProfileSection,
    SectionConfig,
};

/// Snapshot of a profile's review and completion state.
///
/// This is the boundary where the content lifecycle and the visibility
/// engine compose; dashboard views render it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Completion over the tenant's required sections, 0-100.
    pub completion_percent: u8,

    /// Content items by lifecycle status.
    pub item_counts: ItemCounts,

    /// Items currently shown on the public profile.
    pub visible_item_count: usize,

    /// Items waiting on review.
    pub pending_review_count: usize,

    /// Sections ranked as needing attention.
    pub sections_needing_attention: usize,

    /// Id of the section most in need of attention, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_critical_section_id: Option<String>,
}

impl ProfileSummary {
    /// Compose a summary from resolved sections, the tenant's config,
    /// and the profile's content items.
    pub fn compose(
        sections: &[ProfileSection],
        config: &SectionConfig,
        items: &[ContentItem],
    ) -> Self {
        let item_counts = ItemCounts::from_items(items);
        let visible_item_count = items.iter().filter(|item| item.is_visible).count();

        Self {
            completion_percent: calculate_completion(sections, config),
            pending_review_count: item_counts.pending,
            visible_item_count,
            sections_needing_attention: rank_sections_needing_attention(sections).len(),
            most_critical_section_id: most_critical_section(sections).map(|s| s.id),
            item_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{admit_discovered, approve, ContentPayload};
    use crate::sections::{CompletionStatus, SectionPriority};

    fn trial(nct_id: &str) -> ContentPayload {
        ContentPayload::ClinicalTrial {
            nct_id: nct_id.to_string(),
            title: "Study".to_string(),
            phase: None,
            recruitment_status: None,
            condition: None,
        }
    }

    #[test]
    fn test_compose_summary() {
        let sections = vec![
            ProfileSection::new("biography", "Biography")
                .with_completion(CompletionStatus::Complete),
            ProfileSection::new("specialties", "Specialties")
                .with_completion(CompletionStatus::Missing)
                .with_priority(SectionPriority::High),
        ];
        let config = SectionConfig {
            visible_sections: vec!["biography".to_string(), "specialties".to_string()],
            required_sections: vec!["biography".to_string(), "specialties".to_string()],
        };

        let pending = admit_discovered(trial("NCT11111111"));
        let approved = approve(&admit_discovered(trial("NCT22222222"))).unwrap();
        let items = vec![pending, approved];

        let summary = ProfileSummary::compose(&sections, &config, &items);

        assert_eq!(summary.completion_percent, 50);
        assert_eq!(summary.pending_review_count, 1);
        assert_eq!(summary.visible_item_count, 1);
        assert_eq!(summary.item_counts.total(), 2);
        assert_eq!(summary.sections_needing_attention, 1);
        assert_eq!(summary.most_critical_section_id.as_deref(), Some("specialties"));
    }

    #[test]
    fn test_compose_summary_empty_profile() {
        let config = SectionConfig::default();
        let summary = ProfileSummary::compose(&[], &config, &[]);

        assert_eq!(summary.completion_percent, 100);
        assert_eq!(summary.item_counts.total(), 0);
        assert!(summary.most_critical_section_id.is_none());
    }
}
