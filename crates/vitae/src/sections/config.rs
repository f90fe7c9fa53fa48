//! Archetype-level section configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Named hospital categories, each carrying a default section bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HospitalArchetype {
    General,
    AcademicMedicalCenter,
    CommunityHospital,
}

impl HospitalArchetype {
    /// Parse an archetype name. Unknown or absent names resolve to
    /// `General`; the substitution is logged, not reported as an error.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("general") | None | Some("") => HospitalArchetype::General,
            Some("academic_medical_center") => HospitalArchetype::AcademicMedicalCenter,
            Some("community_hospital") => HospitalArchetype::CommunityHospital,
            Some(other) => {
                warn!(archetype = other, "unknown hospital archetype, using general");
                HospitalArchetype::General
            }
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HospitalArchetype::General => "General",
            HospitalArchetype::AcademicMedicalCenter => "Academic Medical Center",
            HospitalArchetype::CommunityHospital => "Community Hospital",
        }
    }
}

/// A named bundle of visible and required section ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Sections shown on the profile, in display order.
    pub visible_sections: Vec<String>,

    /// Sections counted toward profile completion.
    pub required_sections: Vec<String>,
}

impl SectionConfig {
    /// Check whether a section id is visible under this config.
    pub fn is_visible(&self, section_id: &str) -> bool {
        self.visible_sections.iter().any(|id| id == section_id)
    }

    /// Check whether a section id is required under this config.
    pub fn is_required(&self, section_id: &str) -> bool {
        self.required_sections.iter().any(|id| id == section_id)
    }
}

/// Look up the section bundle for a hospital archetype.
pub fn resolve_section_config(archetype: HospitalArchetype) -> SectionConfig {
    let (visible, required): (&[&str], &[&str]) = match archetype {
        HospitalArchetype::General => (
            &[
                "biography",
                "specialties",
                "education",
                "certifications",
                "locations",
                "publications",
                "media_coverage",
            ],
            &["biography", "specialties", "locations"],
        ),
        HospitalArchetype::AcademicMedicalCenter => (
            &[
                "biography",
                "specialties",
                "education",
                "certifications",
                "locations",
                "publications",
                "clinical_trials",
                "research_interests",
                "awards",
                "media_coverage",
            ],
            &[
                "biography",
                "specialties",
                "education",
                "publications",
                "research_interests",
            ],
        ),
        HospitalArchetype::CommunityHospital => (
            &[
                "biography",
                "specialties",
                "education",
                "locations",
                "insurance_plans",
            ],
            &["biography", "locations", "insurance_plans"],
        ),
    };

    SectionConfig {
        visible_sections: visible.iter().map(ToString::to_string).collect(),
        required_sections: required.iter().map(ToString::to_string).collect(),
    }
}
