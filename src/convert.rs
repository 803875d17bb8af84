//! Descriptor conversion
//!
//! Walks an arbitrary nested/array descriptor depth-first, resolving every
//! key/value pair through the field transformer and producing a definition
//! tree that mirrors the input structurally.
//!
//! Conversion is deterministic and pure given a snapshot of the registry:
//! the converter borrows its collaborators and holds no state of its own.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::definition::Definition;
use crate::errors::SchemaGenResult;
use crate::registry::HookRegistry;
use crate::transform::{FieldTransformer, Transformed};

/// Converts raw descriptors into resolved definitions.
pub struct DescriptorConverter<'a> {
    transformer: FieldTransformer<'a>,
}

impl<'a> DescriptorConverter<'a> {
    /// Creates a converter backed by the given registry.
    pub fn new(registry: &'a HookRegistry) -> Self {
        Self {
            transformer: FieldTransformer::new(registry),
        }
    }

    /// Converts a whole descriptor tree.
    ///
    /// The first failure aborts the conversion and surfaces unchanged; no
    /// partial definition is ever returned.
    pub fn convert(&self, descriptor: &Value) -> SchemaGenResult<Definition> {
        debug!("converting descriptor");
        self.convert_node(descriptor, "")
    }

    fn convert_node(&self, value: &Value, path: &str) -> SchemaGenResult<Definition> {
        match value {
            // A bare list is an array-of-subdocuments marker: every element
            // converts on its own and order is preserved.
            Value::Array(items) => {
                let mut elements = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let element_path = format!("{}[{}]", path, index);
                    elements.push(self.convert_node(item, &element_path)?);
                }
                Ok(Definition::List(elements))
            }
            Value::Object(map) => {
                let mut fields = BTreeMap::new();
                for (key, val) in map {
                    let field_path = make_path(path, key);
                    let definition = match self.transformer.transform(&field_path, key, val)? {
                        Transformed::Resolved(definition) => {
                            trace!(field = %field_path, "field resolved");
                            definition
                        }
                        Transformed::Passthrough => match val {
                            // Carried-through containers are nested
                            // descriptors in their own right.
                            Value::Object(_) | Value::Array(_) => {
                                self.convert_node(val, &field_path)?
                            }
                            leaf => Definition::Value(leaf.clone()),
                        },
                    };
                    fields.insert(key.clone(), definition);
                }
                Ok(Definition::Map(fields))
            }
            leaf => Ok(Definition::Value(leaf.clone())),
        }
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
