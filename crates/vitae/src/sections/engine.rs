//! Section visibility resolution and completion scoring.
//!
//! The archetype [`SectionConfig`] is always applied before any
//! hospital-specific [`PermissionOverlay`], so the overlay is the final
//! authority on what a tenant shows and requires.

use std::cmp::Reverse;

use super::config::SectionConfig;
use super::overlay::PermissionOverlay;
use super::section::{CompletionStatus, ProfileSection};

/// Apply an archetype config to the section catalog.
///
/// Visibility and requirement come from id membership in the config's
/// lists. Sections the config does not list as visible are excluded
/// from the output entirely, not merely flagged.
pub fn apply_config(sections: &[ProfileSection], config: &SectionConfig) -> Vec<ProfileSection> {
    sections
        .iter()
        .filter(|section| config.is_visible(&section.id))
        .map(|section| {
            let mut resolved = section.clone();
            resolved.is_visible = true;
            resolved.is_required = config.is_required(&section.id);
            resolved
        })
        .collect()
}

/// Apply a hospital's permission overlay on top of archetype-resolved
/// sections.
///
/// Where the overlay carries an entry for a section, its flags replace
/// the archetype-derived ones; absent entries inherit. The result is
/// filtered to visible sections, mirroring [`apply_config`].
pub fn apply_permission_overlay(
    sections: &[ProfileSection],
    overlay: &PermissionOverlay,
) -> Vec<ProfileSection> {
    sections
        .iter()
        .map(|section| {
            let mut resolved = section.clone();
            if let Some(permission) = overlay.get(&section.id) {
                resolved.is_visible = permission.is_visible;
                resolved.is_required = permission.is_required;
            }
            resolved
        })
        .filter(|section| section.is_visible)
        .collect()
}

/// Resolve the tenant-facing section list: archetype config first, then
/// the overlay when one exists.
pub fn resolve_visible_sections(
    sections: &[ProfileSection],
    config: &SectionConfig,
    overlay: Option<&PermissionOverlay>,
) -> Vec<ProfileSection> {
    let configured = apply_config(sections, config);
    match overlay {
        Some(overlay) => apply_permission_overlay(&configured, overlay),
        None => configured,
    }
}

/// Profile completion as an integer percentage.
///
/// Only sections the config marks required count. An empty required set
/// is vacuously complete. A required section absent from the catalog
/// counts as incomplete.
pub fn calculate_completion(sections: &[ProfileSection], config: &SectionConfig) -> u8 {
    let required_count = config.required_sections.len();
    if required_count == 0 {
        return 100;
    }

    let completed_count = sections
        .iter()
        .filter(|section| config.is_required(&section.id))
        .filter(|section| section.completion == CompletionStatus::Complete)
        .count();

    (100.0 * completed_count as f64 / required_count as f64).round() as u8
}

/// Sections needing attention, most critical first.
///
/// Filters to `needs_update`/`missing` and sorts descending by priority
/// weight. The sort is stable, so ties keep their original relative
/// order.
pub fn rank_sections_needing_attention(sections: &[ProfileSection]) -> Vec<ProfileSection> {
    let mut ranked: Vec<ProfileSection> = sections
        .iter()
        .filter(|section| section.needs_attention())
        .cloned()
        .collect();
    ranked.sort_by_key(|section| Reverse(section.priority.weight()));
    ranked
}

/// The single section most in need of attention, if any.
pub fn most_critical_section(sections: &[ProfileSection]) -> Option<ProfileSection> {
    rank_sections_needing_attention(sections).into_iter().next()
}
