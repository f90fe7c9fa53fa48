//! Error types for the Vitae library.

use thiserror::Error;

use crate::content::{ItemStatus, LifecycleAction};
use crate::identifier::IdentifierKind;

/// Main error type for Vitae operations.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// A lifecycle action was attempted on an item whose current state
    /// forbids it.
    #[error("cannot {action} a content item in state '{from}'")]
    InvalidTransition {
        from: ItemStatus,
        action: LifecycleAction,
    },

    /// A manually entered identifier failed format validation.
    #[error("invalid {kind} identifier: '{input}'")]
    InvalidIdentifier {
        kind: IdentifierKind,
        input: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vitae operations.
pub type Result<T> = std::result::Result<T, VitaeError>;
