//! Per-tenant permission overlays and the permission-store seam.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility and requirement override for a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPermission {
    pub is_visible: bool,
    pub is_required: bool,
}

/// Fine-grained overrides for one hospital tenant.
///
/// Absent entries mean "inherit the archetype-derived value, do not
/// force requirement". Immutable once fetched for a render cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionOverlay {
    /// Hospital tenant this overlay belongs to.
    pub hospital_id: String,

    /// Section id → override, in store order.
    pub sections: IndexMap<String, SectionPermission>,
}

impl PermissionOverlay {
    /// Create an empty overlay for a hospital.
    pub fn new(hospital_id: impl Into<String>) -> Self {
        Self {
            hospital_id: hospital_id.into(),
            sections: IndexMap::new(),
        }
    }

    /// Add or replace a section override.
    pub fn with_section(mut self, section_id: impl Into<String>, permission: SectionPermission) -> Self {
        self.sections.insert(section_id.into(), permission);
        self
    }

    /// Look up the override for a section, if any.
    pub fn get(&self, section_id: &str) -> Option<&SectionPermission> {
        self.sections.get(section_id)
    }
}

/// External permission store collaborator.
///
/// Maps organization names to hospital tenants and serves their
/// overlays. Implementations wrap whatever backend holds the records;
/// this crate only consumes already-fetched values.
pub trait PermissionStore {
    /// Resolve an organization name to a hospital id, if mapped.
    fn hospital_id_for(&self, organization: &str) -> Option<String>;

    /// Fetch the overlay for a hospital, if one exists.
    fn overlay_for(&self, hospital_id: &str) -> Option<PermissionOverlay>;
}

/// In-memory permission store seeded with static mappings.
///
/// The fallback hospital id is injected at construction and returned
/// whenever an organization has no mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissionStore {
    organizations: IndexMap<String, String>,
    overlays: IndexMap<String, PermissionOverlay>,
    default_hospital_id: String,
}

impl StaticPermissionStore {
    /// Create a store with the given fallback hospital id.
    pub fn new(default_hospital_id: impl Into<String>) -> Self {
        Self {
            organizations: IndexMap::new(),
            overlays: IndexMap::new(),
            default_hospital_id: default_hospital_id.into(),
        }
    }

    /// Register an organization → hospital mapping.
    pub fn with_organization(
        mut self,
        organization: impl Into<String>,
        hospital_id: impl Into<String>,
    ) -> Self {
        self.organizations
            .insert(organization.into(), hospital_id.into());
        self
    }

    /// Register a hospital overlay.
    pub fn with_overlay(mut self, overlay: PermissionOverlay) -> Self {
        self.overlays.insert(overlay.hospital_id.clone(), overlay);
        self
    }
}

impl PermissionStore for StaticPermissionStore {
    fn hospital_id_for(&self, organization: &str) -> Option<String> {
        self.organizations.get(organization).cloned()
    }

    fn overlay_for(&self, hospital_id: &str) -> Option<PermissionOverlay> {
        self.overlays.get(hospital_id).cloned()
    }
}

/// Resolve an organization to its hospital id, falling back to the
/// injected default when no mapping exists.
pub fn resolve_hospital_id(
    store: &dyn PermissionStore,
    organization: &str,
    default_hospital_id: &str,
) -> String {
    match store.hospital_id_for(organization) {
        Some(id) => id,
        None => {
            debug!(%organization, "no hospital mapping, using default");
            default_hospital_id.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StaticPermissionStore {
        StaticPermissionStore::new("hosp_default")
            .with_organization("Cleveland Clinic", "hosp_ccf")
            .with_overlay(PermissionOverlay::new("hosp_ccf").with_section(
                "biography",
                SectionPermission {
                    is_visible: false,
                    is_required: false,
                },
            ))
    }

    #[test]
    fn test_known_organization_resolves() {
        let store = store();
        assert_eq!(
            store.hospital_id_for("Cleveland Clinic").as_deref(),
            Some("hosp_ccf")
        );
    }

    #[test]
    fn test_unknown_organization_falls_back() {
        let store = store();
        let id = resolve_hospital_id(&store, "Unmapped Practice", "hosp_default");
        assert_eq!(id, "hosp_default");
    }

    #[test]
    fn test_overlay_lookup() {
        let store = store();
        let overlay = store.overlay_for("hosp_ccf").unwrap();

        let biography = overlay.get("biography").unwrap();
        assert!(!biography.is_visible);
        assert!(overlay.get("education").is_none());
    }

    #[test]
    fn test_overlay_preserves_insertion_order() {
        let overlay = PermissionOverlay::new("hosp_x")
            .with_section(
                "publications",
                SectionPermission {
                    is_visible: true,
                    is_required: true,
                },
            )
            .with_section(
                "biography",
                SectionPermission {
                    is_visible: false,
                    is_required: false,
                },
            );

        let ids: Vec<&str> = overlay.sections.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["publications", "biography"]);
    }
}
