//! # Hook Registry
//!
//! Named custom behaviors consulted during descriptor conversion. Four
//! categories are supported: validators, setters, getters, and default
//! producers. Registration happens at application start, lookups happen
//! while converting; names are unique per category and the last
//! registration wins.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::debug;

use crate::errors::{SchemaGenError, SchemaGenResult};

/// Validator hook: judges a candidate value
pub type ValidatorFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Setter hook: rewrites a value on the way in
pub type SetterFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Getter hook: rewrites a value on the way out
pub type GetterFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Default hook: produces a value for an absent field
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Hook categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Validator,
    Setter,
    Getter,
    Default,
}

impl HookKind {
    /// Returns the category name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::Validator => "validator",
            HookKind::Setter => "setter",
            HookKind::Getter => "getter",
            HookKind::Default => "default",
        }
    }

    /// Returns the descriptor key this category is looked up under
    pub fn descriptor_key(&self) -> &'static str {
        match self {
            HookKind::Validator => "validate",
            HookKind::Setter => "set",
            HookKind::Getter => "get",
            HookKind::Default => "default",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved named callable, as stored in a definition tree.
#[derive(Clone)]
pub enum Hook {
    Validator(ValidatorFn),
    Setter(SetterFn),
    Getter(GetterFn),
    Default(DefaultFn),
}

impl Hook {
    /// Returns the category this hook was registered under
    pub fn kind(&self) -> HookKind {
        match self {
            Hook::Validator(_) => HookKind::Validator,
            Hook::Setter(_) => HookKind::Setter,
            Hook::Getter(_) => HookKind::Getter,
            Hook::Default(_) => HookKind::Default,
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({})", self.kind())
    }
}

// Two hooks are equal when they are the same registration, not merely
// behaviorally alike.
impl PartialEq for Hook {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Hook::Validator(a), Hook::Validator(b)) => Arc::ptr_eq(a, b),
            (Hook::Setter(a), Hook::Setter(b)) => Arc::ptr_eq(a, b),
            (Hook::Getter(a), Hook::Getter(b)) => Arc::ptr_eq(a, b),
            (Hook::Default(a), Hook::Default(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The four category maps, guarded together.
#[derive(Default)]
struct Categories {
    validators: HashMap<String, ValidatorFn>,
    setters: HashMap<String, SetterFn>,
    getters: HashMap<String, GetterFn>,
    defaults: HashMap<String, DefaultFn>,
}

/// Registry of named hooks.
///
/// A single lock guards all four category maps: registration takes a write
/// lock, lookup takes a read lock, and conversion only ever reads.
#[derive(Default)]
pub struct HookRegistry {
    categories: RwLock<Categories>,
}

impl HookRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator under `name`
    pub fn register_validator(
        &self,
        name: &str,
        hook: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> SchemaGenResult<()> {
        let name = checked_name(HookKind::Validator, name)?;
        self.write()?.validators.insert(name, Arc::new(hook));
        Ok(())
    }

    /// Register a setter under `name`
    pub fn register_setter(
        &self,
        name: &str,
        hook: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> SchemaGenResult<()> {
        let name = checked_name(HookKind::Setter, name)?;
        self.write()?.setters.insert(name, Arc::new(hook));
        Ok(())
    }

    /// Register a getter under `name`
    pub fn register_getter(
        &self,
        name: &str,
        hook: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> SchemaGenResult<()> {
        let name = checked_name(HookKind::Getter, name)?;
        self.write()?.getters.insert(name, Arc::new(hook));
        Ok(())
    }

    /// Register a default-value producer under `name`
    pub fn register_default(
        &self,
        name: &str,
        hook: impl Fn() -> Value + Send + Sync + 'static,
    ) -> SchemaGenResult<()> {
        let name = checked_name(HookKind::Default, name)?;
        self.write()?.defaults.insert(name, Arc::new(hook));
        Ok(())
    }

    /// Look up a hook by category and name.
    ///
    /// Fails with `NotFound` when nothing was registered under that pair;
    /// the failure propagates to the conversion caller, it is never
    /// defaulted away.
    pub fn lookup(&self, kind: HookKind, name: &str) -> SchemaGenResult<Hook> {
        let categories = self.read()?;
        let hook = match kind {
            HookKind::Validator => categories.validators.get(name).cloned().map(Hook::Validator),
            HookKind::Setter => categories.setters.get(name).cloned().map(Hook::Setter),
            HookKind::Getter => categories.getters.get(name).cloned().map(Hook::Getter),
            HookKind::Default => categories.defaults.get(name).cloned().map(Hook::Default),
        };
        hook.ok_or_else(|| SchemaGenError::not_found(kind, kind.descriptor_key(), name))
    }

    /// Get the total hook count across categories
    pub fn len(&self) -> usize {
        self.categories
            .read()
            .map(|c| c.validators.len() + c.setters.len() + c.getters.len() + c.defaults.len())
            .unwrap_or(0)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> SchemaGenResult<RwLockReadGuard<'_, Categories>> {
        self.categories
            .read()
            .map_err(|_| SchemaGenError::internal("hook registry lock poisoned"))
    }

    fn write(&self) -> SchemaGenResult<RwLockWriteGuard<'_, Categories>> {
        self.categories
            .write()
            .map_err(|_| SchemaGenError::internal("hook registry lock poisoned"))
    }
}

/// Rejects names that cannot appear as a descriptor token.
fn checked_name(kind: HookKind, name: &str) -> SchemaGenResult<String> {
    if name.trim().is_empty() {
        return Err(SchemaGenError::invalid_argument(
            kind.as_str(),
            "hook name must be a non-empty string",
        ));
    }
    debug!(kind = %kind, name, "registering hook");
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_lookup() {
        let registry = HookRegistry::new();
        registry
            .register_validator("notEmpty", |v| v.as_str().is_some_and(|s| !s.is_empty()))
            .unwrap();

        let hook = registry.lookup(HookKind::Validator, "notEmpty").unwrap();
        match hook {
            Hook::Validator(f) => {
                assert!(f(&json!("x")));
                assert!(!f(&json!("")));
            }
            other => panic!("unexpected hook: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_unregistered_fails() {
        let registry = HookRegistry::new();
        let result = registry.lookup(HookKind::Validator, "missingName");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code(), "GEN_NOT_FOUND");
        assert!(format!("{}", err).contains("missingName"));
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = HookRegistry::new();
        registry.register_default("answer", || json!(1)).unwrap();
        registry.register_default("answer", || json!(42)).unwrap();

        match registry.lookup(HookKind::Default, "answer").unwrap() {
            Hook::Default(f) => assert_eq!(f(), json!(42)),
            other => panic!("unexpected hook: {:?}", other),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_categories_are_isolated() {
        let registry = HookRegistry::new();
        registry.register_setter("trim", |v| v).unwrap();

        assert!(registry.lookup(HookKind::Setter, "trim").is_ok());
        assert!(registry.lookup(HookKind::Getter, "trim").is_err());
        assert!(registry.lookup(HookKind::Validator, "trim").is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let registry = HookRegistry::new();
        for name in ["", "   ", "\t"] {
            let result = registry.register_getter(name, |v| v);
            assert!(result.is_err());
            assert_eq!(result.unwrap_err().code(), "GEN_INVALID_ARGUMENT");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_returns_the_registered_hook() {
        let registry = HookRegistry::new();
        registry.register_getter("identity", |v| v).unwrap();

        let first = registry.lookup(HookKind::Getter, "identity").unwrap();
        let second = registry.lookup(HookKind::Getter, "identity").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hook_kind_names() {
        assert_eq!(HookKind::Validator.as_str(), "validator");
        assert_eq!(HookKind::Setter.as_str(), "setter");
        assert_eq!(HookKind::Getter.as_str(), "getter");
        assert_eq!(HookKind::Default.as_str(), "default");

        assert_eq!(HookKind::Validator.descriptor_key(), "validate");
        assert_eq!(HookKind::Setter.descriptor_key(), "set");
        assert_eq!(HookKind::Getter.descriptor_key(), "get");
        assert_eq!(HookKind::Default.descriptor_key(), "default");
    }
}
