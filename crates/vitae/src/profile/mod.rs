//! Profile assembly: upstream payloads → canonical records.
//!
//! Maps loosely-shaped registry lookup results and signup forms into
//! the profile's canonical shape, validates the canonical shape with
//! accumulated violations, and composes the dashboard summary.

mod lookup;
mod summary;
mod transform;
mod validate;

pub use lookup::{
    LookupResponse, ProviderAddress, ProviderBasic, ProviderLookup, ProviderTaxonomy,
};
pub use summary::ProfileSummary;
pub use transform::{to_npi_data_record, to_user_profile_record, NpiDataRecord, SignupInput, UserProfileRecord};
pub use validate::{sanitize_free_text, validate_npi_data, validate_user_profile, FieldViolation};
