//! Resolved definition trees
//!
//! The output of a conversion: structurally identical to the descriptor it
//! came from, with symbolic leaves replaced by resolved values. The tree is
//! owned entirely by the caller; the converter keeps no reference to it.

use std::collections::BTreeMap;

use regex::Regex;
use serde_json::Value;

use crate::registry::Hook;
use crate::types::FieldType;

/// One node of a resolved schema definition.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Resolved canonical type token
    Type(FieldType),
    /// Resolved named hook
    Hook(Hook),
    /// Compiled `match` pattern
    Pattern(Regex),
    /// Pass-through leaf value
    Value(Value),
    /// Mapping node
    Map(BTreeMap<String, Definition>),
    /// List node, one element per subdocument shape
    List(Vec<Definition>),
}

impl Definition {
    /// Returns the node name for error messages
    pub fn node_name(&self) -> &'static str {
        match self {
            Definition::Type(_) => "type",
            Definition::Hook(_) => "hook",
            Definition::Pattern(_) => "pattern",
            Definition::Value(_) => "value",
            Definition::Map(_) => "map",
            Definition::List(_) => "list",
        }
    }

    /// Returns the resolved type token, if this node is one
    pub fn as_type(&self) -> Option<FieldType> {
        match self {
            Definition::Type(token) => Some(*token),
            _ => None,
        }
    }

    /// Returns the resolved hook, if this node is one
    pub fn as_hook(&self) -> Option<&Hook> {
        match self {
            Definition::Hook(hook) => Some(hook),
            _ => None,
        }
    }

    /// Returns the compiled pattern, if this node is one
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Definition::Pattern(regex) => Some(regex),
            _ => None,
        }
    }

    /// Returns the pass-through value, if this node is one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Definition::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the mapping, if this node is one
    pub fn as_map(&self) -> Option<&BTreeMap<String, Definition>> {
        match self {
            Definition::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the elements, if this node is a list
    pub fn as_list(&self) -> Option<&[Definition]> {
        match self {
            Definition::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// Looks up a key on a mapping node
    pub fn field(&self, key: &str) -> Option<&Definition> {
        self.as_map().and_then(|fields| fields.get(key))
    }

    /// Looks up an element on a list node
    pub fn element(&self, index: usize) -> Option<&Definition> {
        self.as_list().and_then(|elements| elements.get(index))
    }
}

// Patterns compare by source text, hooks by registration identity.
impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Definition::Type(a), Definition::Type(b)) => a == b,
            (Definition::Hook(a), Definition::Hook(b)) => a == b,
            (Definition::Pattern(a), Definition::Pattern(b)) => a.as_str() == b.as_str(),
            (Definition::Value(a), Definition::Value(b)) => a == b,
            (Definition::Map(a), Definition::Map(b)) => a == b,
            (Definition::List(a), Definition::List(b)) => a == b,
            _ => false,
        }
    }
}
