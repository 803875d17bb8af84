//! # Schema Generation Errors
//!
//! Every failure a conversion can surface, with the offending field path
//! attached so a misconfigured descriptor is diagnosable from the message
//! alone.

use thiserror::Error;

use crate::registry::HookKind;

/// Result type for schema generation operations
pub type SchemaGenResult<T> = Result<T, SchemaGenError>;

/// Schema generation errors
#[derive(Debug, Clone, Error)]
pub enum SchemaGenError {
    /// Malformed registration call or descriptor value
    #[error("invalid value for '{key}': {reason}")]
    InvalidArgument { key: String, reason: String },

    /// A `type` leaf names something outside the canonical type set
    #[error("unknown type '{name}' for field '{field}'")]
    UnknownType { field: String, name: String },

    /// A hook name was never registered
    #[error("no {kind} registered under '{name}' for field '{field}'")]
    NotFound {
        kind: HookKind,
        field: String,
        name: String,
    },

    /// A descriptor file could not be read or parsed
    #[error("malformed descriptor '{path}': {reason}")]
    MalformedDescriptor { path: String, reason: String },

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl SchemaGenError {
    /// Create an invalid argument error
    pub fn invalid_argument(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownType {
            field: field.into(),
            name: name.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(kind: HookKind, field: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            field: field.into(),
            name: name.into(),
        }
    }

    /// Create a malformed descriptor error
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "GEN_INVALID_ARGUMENT",
            Self::UnknownType { .. } => "GEN_UNKNOWN_TYPE",
            Self::NotFound { .. } => "GEN_NOT_FOUND",
            Self::MalformedDescriptor { .. } => "GEN_MALFORMED_DESCRIPTOR",
            Self::Internal(_) => "GEN_INTERNAL",
        }
    }

    /// Rewrites the offending-field context, keeping the error kind.
    ///
    /// Used when a lookup raised deep in a collaborator learns its full
    /// descriptor path only at the call site.
    pub(crate) fn with_field(self, field: &str) -> Self {
        match self {
            Self::UnknownType { name, .. } => Self::UnknownType {
                field: field.to_string(),
                name,
            },
            Self::NotFound { kind, name, .. } => Self::NotFound {
                kind,
                field: field.to_string(),
                name,
            },
            other => other,
        }
    }
}
