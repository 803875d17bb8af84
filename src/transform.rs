//! Field-level key resolution
//!
//! Decides, for a single key/value pair at any depth of a descriptor, how
//! the value is represented in the resolved definition. Pure computation:
//! the only effects are the typed failures.

use regex::Regex;
use serde_json::Value;

use crate::definition::Definition;
use crate::errors::{SchemaGenError, SchemaGenResult};
use crate::registry::{HookKind, HookRegistry};
use crate::types::FieldType;

/// Descriptor keys, classified once per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// `type`: canonical type name or nested shape
    Type,
    /// `validate`: named validator
    Validate,
    /// `get`: named getter
    Get,
    /// `set`: named setter
    Set,
    /// `default`: named default producer
    Default,
    /// `match`: pattern source
    Match,
    /// Recognized field attribute, carried through unchanged
    Attribute,
    /// Unrecognized key, carried through unchanged
    Unrecognized,
}

impl FieldKey {
    /// Classifies a descriptor key.
    pub fn classify(key: &str) -> Self {
        match key {
            "type" => FieldKey::Type,
            "validate" => FieldKey::Validate,
            "get" => FieldKey::Get,
            "set" => FieldKey::Set,
            "default" => FieldKey::Default,
            "match" => FieldKey::Match,
            "required" | "ref" | "min" | "max" | "enum" | "select" | "index" | "unique"
            | "sparse" | "lowercase" | "uppercase" | "trim" => FieldKey::Attribute,
            _ => FieldKey::Unrecognized,
        }
    }

    /// Whether the key belongs to the recognized descriptor vocabulary.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FieldKey::Unrecognized)
    }
}

/// Outcome of transforming one key/value pair.
#[derive(Debug)]
pub enum Transformed {
    /// The value resolved to a definition leaf
    Resolved(Definition),
    /// The value is carried through; nested shapes recurse in the converter
    Passthrough,
}

/// Resolves individual descriptor pairs against a hook registry.
pub struct FieldTransformer<'a> {
    registry: &'a HookRegistry,
}

impl<'a> FieldTransformer<'a> {
    /// Creates a transformer backed by the given registry.
    pub fn new(registry: &'a HookRegistry) -> Self {
        Self { registry }
    }

    /// Resolves one key/value pair.
    ///
    /// `field` is the dotted path to the pair, used only in diagnostics.
    pub fn transform(&self, field: &str, key: &str, value: &Value) -> SchemaGenResult<Transformed> {
        match FieldKey::classify(key) {
            FieldKey::Type => resolve_type(field, value),
            FieldKey::Validate => self.resolve_hook(HookKind::Validator, field, value),
            FieldKey::Get => self.resolve_hook(HookKind::Getter, field, value),
            FieldKey::Set => self.resolve_hook(HookKind::Setter, field, value),
            FieldKey::Default => self.resolve_hook(HookKind::Default, field, value),
            FieldKey::Match => compile_match(field, value),
            FieldKey::Attribute | FieldKey::Unrecognized => Ok(Transformed::Passthrough),
        }
    }

    fn resolve_hook(
        &self,
        kind: HookKind,
        field: &str,
        value: &Value,
    ) -> SchemaGenResult<Transformed> {
        let name = value.as_str().ok_or_else(|| {
            SchemaGenError::invalid_argument(
                field,
                format!(
                    "expected a registered {} name, got {}",
                    kind,
                    json_type_name(value)
                ),
            )
        })?;

        let hook = self
            .registry
            .lookup(kind, name)
            .map_err(|err| err.with_field(field))?;
        Ok(Transformed::Resolved(Definition::Hook(hook)))
    }
}

fn resolve_type(field: &str, value: &Value) -> SchemaGenResult<Transformed> {
    match value {
        Value::String(name) => {
            let token = FieldType::resolve(name).map_err(|err| err.with_field(field))?;
            Ok(Transformed::Resolved(Definition::Type(token)))
        }
        // A mapping- or list-shaped `type` denotes a subdocument, not a
        // leaf type; the converter recurses into it.
        Value::Object(_) | Value::Array(_) => Ok(Transformed::Passthrough),
        other => Err(SchemaGenError::unknown_type(field, other.to_string())),
    }
}

fn compile_match(field: &str, value: &Value) -> SchemaGenResult<Transformed> {
    let pattern = value.as_str().ok_or_else(|| {
        SchemaGenError::invalid_argument(
            field,
            format!("expected a string pattern, got {}", json_type_name(value)),
        )
    })?;

    let regex = Regex::new(pattern).map_err(|err| {
        SchemaGenError::invalid_argument(field, format!("invalid pattern '{}': {}", pattern, err))
    })?;
    Ok(Transformed::Resolved(Definition::Pattern(regex)))
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transformer_fixture() -> HookRegistry {
        let registry = HookRegistry::new();
        registry
            .register_validator("notEmpty", |v| v.as_str().is_some_and(|s| !s.is_empty()))
            .unwrap();
        registry.register_default("nowhere", || json!("n/a")).unwrap();
        registry
    }

    #[test]
    fn test_classify_recognized_keys() {
        assert_eq!(FieldKey::classify("type"), FieldKey::Type);
        assert_eq!(FieldKey::classify("validate"), FieldKey::Validate);
        assert_eq!(FieldKey::classify("get"), FieldKey::Get);
        assert_eq!(FieldKey::classify("set"), FieldKey::Set);
        assert_eq!(FieldKey::classify("default"), FieldKey::Default);
        assert_eq!(FieldKey::classify("match"), FieldKey::Match);
        assert_eq!(FieldKey::classify("required"), FieldKey::Attribute);
        assert_eq!(FieldKey::classify("sparse"), FieldKey::Attribute);
        assert_eq!(FieldKey::classify("color"), FieldKey::Unrecognized);
        assert!(!FieldKey::classify("color").is_recognized());
    }

    #[test]
    fn test_type_string_resolves() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let result = transformer.transform("a.type", "type", &json!("String")).unwrap();
        match result {
            Transformed::Resolved(def) => assert_eq!(def.as_type(), Some(FieldType::String)),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_type_nested_shape_passes_through() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let nested = json!({"first": {"type": "String"}});
        assert!(matches!(
            transformer.transform("a.type", "type", &nested).unwrap(),
            Transformed::Passthrough
        ));

        let listed = json!([{"type": "Number"}]);
        assert!(matches!(
            transformer.transform("a.type", "type", &listed).unwrap(),
            Transformed::Passthrough
        ));
    }

    #[test]
    fn test_type_scalar_non_string_rejected() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let err = transformer.transform("a.type", "type", &json!(5)).unwrap_err();
        assert_eq!(err.code(), "GEN_UNKNOWN_TYPE");
        assert!(format!("{}", err).contains("a.type"));
    }

    #[test]
    fn test_hook_lookup_by_category() {
        let registry = transformer_fixture();
        let transformer = FieldTransformer::new(&registry);

        let result = transformer
            .transform("name.validate", "validate", &json!("notEmpty"))
            .unwrap();
        match result {
            Transformed::Resolved(def) => {
                assert_eq!(def.as_hook().unwrap().kind(), HookKind::Validator)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_unregistered_hook_fails_with_path() {
        let registry = transformer_fixture();
        let transformer = FieldTransformer::new(&registry);

        let err = transformer
            .transform("name.validate", "validate", &json!("missingName"))
            .unwrap_err();
        let display = format!("{}", err);
        assert_eq!(err.code(), "GEN_NOT_FOUND");
        assert!(display.contains("missingName"));
        assert!(display.contains("name.validate"));
    }

    #[test]
    fn test_non_string_hook_name_rejected() {
        let registry = transformer_fixture();
        let transformer = FieldTransformer::new(&registry);

        let err = transformer.transform("a.get", "get", &json!(12)).unwrap_err();
        assert_eq!(err.code(), "GEN_INVALID_ARGUMENT");
        assert!(format!("{}", err).contains("number"));
    }

    #[test]
    fn test_match_compiles_to_pattern() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let result = transformer.transform("a.match", "match", &json!("^test$")).unwrap();
        match result {
            Transformed::Resolved(def) => {
                let pattern = def.as_pattern().unwrap();
                assert!(pattern.is_match("test"));
                assert!(!pattern.is_match("other"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_match_rejects_non_string() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let err = transformer.transform("a.match", "match", &json!(12345)).unwrap_err();
        assert_eq!(err.code(), "GEN_INVALID_ARGUMENT");
    }

    #[test]
    fn test_match_rejects_bad_pattern() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        let err = transformer.transform("a.match", "match", &json!("[unclosed")).unwrap_err();
        assert_eq!(err.code(), "GEN_INVALID_ARGUMENT");
        assert!(format!("{}", err).contains("[unclosed"));
    }

    #[test]
    fn test_attributes_pass_through() {
        let registry = HookRegistry::new();
        let transformer = FieldTransformer::new(&registry);

        for (key, value) in [
            ("required", json!(true)),
            ("min", json!(0)),
            ("ref", json!("User")),
            ("enum", json!(["a", "b"])),
            ("some_future_key", json!("anything")),
        ] {
            assert!(matches!(
                transformer.transform(key, key, &value).unwrap(),
                Transformed::Passthrough
            ));
        }
    }
}
