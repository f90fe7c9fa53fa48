//! Vitae: content curation and visibility engine for healthcare
//! provider profiles.
//!
//! Vitae is the review and policy core behind a provider profile
//! application. It validates externally sourced identifiers before they
//! enter a profile, runs the review lifecycle for discoverable content
//! (publications, clinical trials, media coverage), and resolves which
//! profile sections each hospital tenant shows and requires.
//!
//! # Core Principles
//!
//! - **Nothing unvalidated**: identifiers are checked before admission,
//!   and manual entries that fail validation create no item.
//! - **Explicit transitions**: every lifecycle edge either produces a
//!   new item value or a typed error; illegal edges never silently
//!   succeed.
//! - **Overlay is final**: archetype defaults are applied first, then
//!   the hospital's permission overlay overrides them.
//!
//! # Example
//!
//! ```
//! use vitae::content::{admit_discovered, approve, ContentPayload};
//! use vitae::identifier::validate_nct_id;
//!
//! let nct_id = "NCT12345678".to_string();
//! assert!(validate_nct_id(&nct_id));
//!
//! let pending = admit_discovered(ContentPayload::ClinicalTrial {
//!     nct_id,
//!     title: "A Phase 2 Study".to_string(),
//!     phase: None,
//!     recruitment_status: None,
//!     condition: None,
//! });
//! let approved = approve(&pending).unwrap();
//! assert!(approved.is_visible);
//! ```

pub mod content;
pub mod error;
pub mod identifier;
pub mod profile;
pub mod sections;

pub use content::{ContentItem, ContentPayload, ContentType, ItemOrigin, ItemStatus};
pub use error::{Result, VitaeError};
pub use identifier::IdentifierKind;
pub use profile::ProfileSummary;
pub use sections::{HospitalArchetype, PermissionOverlay, ProfileSection, SectionConfig};
