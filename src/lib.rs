//! aeroschema - declarative schema descriptor conversion for document models
//!
//! A JSON descriptor names its types and custom behaviors symbolically:
//!
//! ```json
//! {"name": {"type": "String", "validate": "notEmpty", "match": "^[a-z]+$"}}
//! ```
//!
//! This crate resolves those symbols against a hook registry and a canonical
//! type set, producing a definition tree that structurally mirrors the
//! descriptor and is ready to hand to an external schema constructor. The
//! crate never touches a database, a model registry, or any persistence
//! layer; its output is the constructor argument, nothing more.
//!
//! # Usage
//!
//! ```ignore
//! use aeroschema::{DescriptorConverter, HookRegistry};
//! use serde_json::json;
//!
//! let registry = HookRegistry::new();
//! registry.register_validator("notEmpty", |v| {
//!     v.as_str().is_some_and(|s| !s.is_empty())
//! })?;
//!
//! let converter = DescriptorConverter::new(&registry);
//! let definition = converter.convert(&json!({
//!     "name": {"type": "String", "validate": "notEmpty"}
//! }))?;
//! ```

pub mod convert;
pub mod definition;
pub mod errors;
pub mod loader;
pub mod registry;
pub mod transform;
pub mod types;

pub use convert::DescriptorConverter;
pub use definition::Definition;
pub use errors::{SchemaGenError, SchemaGenResult};
pub use loader::DescriptorLoader;
pub use registry::{DefaultFn, GetterFn, Hook, HookKind, HookRegistry, SetterFn, ValidatorFn};
pub use transform::{FieldKey, FieldTransformer, Transformed};
pub use types::FieldType;
