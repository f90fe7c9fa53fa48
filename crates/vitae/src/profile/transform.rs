//! Transformers from upstream payloads to canonical persisted shapes.

use serde::{Deserialize, Serialize};

use super::lookup::{ProviderAddress, ProviderLookup, ProviderTaxonomy};
use super::validate::sanitize_free_text;

/// Raw signup form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Canonical user profile record destined for the persistence
/// collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Canonical NPI registry data record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpiDataRecord {
    pub npi: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_specialty: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Map a signup payload to the canonical user profile shape.
///
/// Free-text fields are sanitized; the display name is derived from the
/// trimmed name parts.
pub fn to_user_profile_record(signup: &SignupInput) -> UserProfileRecord {
    let first_name = sanitize_free_text(&signup.first_name);
    let last_name = sanitize_free_text(&signup.last_name);
    let display_name = [first_name.as_str(), last_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    UserProfileRecord {
        email: signup.email.trim().to_string(),
        first_name,
        last_name,
        display_name,
        npi: normalize_optional(signup.npi.as_deref()),
        organization: signup
            .organization
            .as_deref()
            .map(sanitize_free_text)
            .filter(|s| !s.is_empty()),
        title: signup
            .title
            .as_deref()
            .map(sanitize_free_text)
            .filter(|s| !s.is_empty()),
    }
}

/// Map a registry lookup result to the canonical NPI data shape.
///
/// When the upstream does not flag a primary, selection is
/// deterministic first-wins: the first address and the first taxonomy.
/// A taxonomy the upstream explicitly marks `primary` wins over
/// position.
pub fn to_npi_data_record(lookup: &ProviderLookup) -> NpiDataRecord {
    let address = primary_address(&lookup.addresses);
    let taxonomy = primary_taxonomy(&lookup.taxonomies);

    NpiDataRecord {
        npi: lookup.number.as_deref().unwrap_or_default().trim().to_string(),
        first_name: normalize_optional(lookup.basic.first_name.as_deref()),
        last_name: normalize_optional(lookup.basic.last_name.as_deref()),
        credential: normalize_optional(lookup.basic.credential.as_deref()),
        primary_specialty: taxonomy.and_then(|t| normalize_optional(t.desc.as_deref())),
        specialty_code: taxonomy.and_then(|t| normalize_optional(t.code.as_deref())),
        address_line: address.and_then(|a| normalize_optional(a.address_1.as_deref())),
        city: address.and_then(|a| normalize_optional(a.city.as_deref())),
        state: address.and_then(|a| normalize_optional(a.state.as_deref())),
        postal_code: address.and_then(|a| normalize_optional(a.postal_code.as_deref())),
        phone: address.and_then(|a| normalize_optional(a.telephone_number.as_deref())),
    }
}

fn primary_address(addresses: &[ProviderAddress]) -> Option<&ProviderAddress> {
    addresses.first()
}

fn primary_taxonomy(taxonomies: &[ProviderTaxonomy]) -> Option<&ProviderTaxonomy> {
    taxonomies
        .iter()
        .find(|t| t.primary)
        .or_else(|| taxonomies.first())
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}
