//! Section visibility and completion for hospital tenants.
//!
//! A hospital archetype supplies the base [`SectionConfig`]; a
//! per-tenant [`PermissionOverlay`] then overrides individual sections.
//! The engine resolves the visible/required section set and scores
//! profile completion over the required sections.
//!
//! # Usage
//!
//! ```
//! use vitae::sections::{
//!     calculate_completion, resolve_section_config, resolve_visible_sections,
//!     HospitalArchetype, ProfileSection,
//! };
//!
//! let catalog = vec![ProfileSection::new("biography", "Biography")];
//! let config = resolve_section_config(HospitalArchetype::resolve(Some("general")));
//!
//! let visible = resolve_visible_sections(&catalog, &config, None);
//! let percent = calculate_completion(&visible, &config);
//! assert!(percent <= 100);
//! ```

mod config;
mod engine;
mod overlay;
mod section;

pub use config::{resolve_section_config, HospitalArchetype, SectionConfig};
pub use engine::{
    apply_config, apply_permission_overlay, calculate_completion, most_critical_section,
    rank_sections_needing_attention, resolve_visible_sections,
};
pub use overlay::{
    resolve_hospital_id, PermissionOverlay, PermissionStore, SectionPermission,
    StaticPermissionStore,
};
pub use section::{CompletionStatus, ProfileSection, SectionPriority};
