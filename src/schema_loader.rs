//! JSON Schema compilation for catalog files.
//!
//! The catalog schema ships inside the binary so validation never depends on
//! where the crate was installed. Compilation happens once per process.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

/// Bundled schema for reference catalog files.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/reference_catalog.schema.json");

/// Compiled JSON Schema plus the raw document it was built from.
pub struct SchemaValidator {
    compiled: JSONSchema,
    raw: Value,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("title", &self.raw.get("title"))
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    pub fn compile(schema_text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(schema_text).context("parsing catalog schema")?;
        let compiled = JSONSchema::compile(&raw)
            .map_err(|err| anyhow!("compiling catalog schema: {err}"))?;
        Ok(Self { compiled, raw })
    }

    /// Every violation in `instance`, one line each, prefixed by its JSON
    /// pointer. Empty when the instance is valid.
    pub fn violations(&self, instance: &Value) -> Vec<String> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    let location = if pointer.is_empty() { "/" } else { pointer.as_str() };
                    format!("{location}: {err}")
                })
                .collect(),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// The bundled catalog schema, compiled on first use.
pub fn bundled_catalog_schema() -> Result<&'static SchemaValidator> {
    static BUNDLED: OnceLock<SchemaValidator> = OnceLock::new();
    if let Some(validator) = BUNDLED.get() {
        return Ok(validator);
    }
    let validator = SchemaValidator::compile(CATALOG_SCHEMA_JSON)?;
    Ok(BUNDLED.get_or_init(|| validator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_schema_compiles() {
        let schema = bundled_catalog_schema().expect("schema compiles");
        assert_eq!(
            schema.raw().get("title").and_then(Value::as_str),
            Some("Reference catalog")
        );
    }

    #[test]
    fn violations_name_the_offending_pointer() {
        let schema = bundled_catalog_schema().unwrap();
        let errors = schema.violations(&json!({
            "categories": [{"id": "a", "name": "A", "icon": "i", "entries": [
                {"id": "x", "name": "X", "category": "a", "kind": "informative"}
            ]}]
        }));
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].starts_with("/categories/0/entries/0"), "{errors:?}");
        assert!(errors[0].contains("content"));
    }

    #[test]
    fn valid_document_has_no_violations() {
        let schema = bundled_catalog_schema().unwrap();
        let errors = schema.violations(&json!({
            "categories": [{"id": "a", "name": "A", "icon": "i", "entries": [
                {"id": "x", "name": "X", "category": "a", "kind": "dynamic",
                 "modality": ["US"], "content": "<p></p>"}
            ]}]
        }));
        assert!(errors.is_empty(), "{errors:?}");
    }
}
