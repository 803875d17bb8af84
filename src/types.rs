//! Canonical field types
//!
//! Supported types:
//! - string: UTF-8 string
//! - number: numeric value
//! - boolean: Boolean
//! - date: calendar date/time
//! - buffer: binary blob
//! - objectid: document reference identifier
//! - mixed: any value, no type constraint
//! - array: scalar array marker
//! - object: free-form object marker

use serde::{Deserialize, Serialize};

use crate::errors::{SchemaGenError, SchemaGenResult};

/// Resolved type token for a `type` leaf in a descriptor.
///
/// Tokens are flat: nested shapes are expressed by the definition tree
/// itself, never by the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Numeric value
    Number,
    /// Boolean
    Boolean,
    /// Calendar date/time
    Date,
    /// Binary blob
    Buffer,
    /// Document reference identifier
    ObjectId,
    /// Any value, no type constraint
    Mixed,
    /// Explicit scalar array marker
    Array,
    /// Free-form object marker
    Object,
}

impl FieldType {
    /// Resolves a canonical type name, case-insensitively.
    ///
    /// Matching is exact over the canonical set; anything else fails with
    /// `UnknownType`. Mapping- or list-shaped `type` values never reach
    /// this function, they denote nested descriptors.
    pub fn resolve(name: &str) -> SchemaGenResult<Self> {
        match name.to_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "date" => Ok(FieldType::Date),
            "buffer" => Ok(FieldType::Buffer),
            "objectid" => Ok(FieldType::ObjectId),
            "mixed" => Ok(FieldType::Mixed),
            "array" => Ok(FieldType::Array),
            "object" => Ok(FieldType::Object),
            _ => Err(SchemaGenError::unknown_type("type", name)),
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Buffer => "buffer",
            FieldType::ObjectId => "objectid",
            FieldType::Mixed => "mixed",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }
}
