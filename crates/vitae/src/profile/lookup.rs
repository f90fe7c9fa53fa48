//! Upstream NPI-registry payload shapes.
//!
//! These structs mirror the external registry's response contract as
//! given; every field is optional because the upstream is loosely
//! shaped. This crate consumes already-resolved lookup results; the
//! network call lives elsewhere.

use serde::{Deserialize, Serialize};

/// Top-level registry response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub result_count: usize,

    #[serde(default)]
    pub results: Vec<ProviderLookup>,
}

impl LookupResponse {
    /// Parse an already-fetched registry response payload.
    pub fn from_json(payload: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// First matching provider record, if any.
    ///
    /// Zero results is a valid "no match" outcome, distinct from a
    /// lookup failure.
    pub fn first(&self) -> Option<&ProviderLookup> {
        self.results.first()
    }
}

/// One provider record from the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderLookup {
    /// The provider's NPI number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumeration_type: Option<String>,

    #[serde(default)]
    pub basic: ProviderBasic,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<ProviderAddress>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxonomies: Vec<ProviderTaxonomy>,
}

/// Name and credential block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderBasic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A practice or mailing address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,

    /// `LOCATION` or `MAILING` in the upstream contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_purpose: Option<String>,
}

/// A taxonomy (specialty) entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderTaxonomy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Whether the upstream flags this entry as the primary taxonomy.
    #[serde(default)]
    pub primary: bool,
}
