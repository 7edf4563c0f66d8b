//! Schema gate for input documents
//!
//! The embedded draft-07 schema closes the theme object: unknown
//! top-level keys, malformed token values, and color roles outside the
//! fixed six are all rejected before the pipeline touches the document.

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{BuildError, Result};

const SCHEMA_JSON: &str = include_str!("schema.json");

/// Compile the embedded theme schema.
pub fn compile() -> Result<Validator> {
    let schema: Value = serde_json::from_str(SCHEMA_JSON)?;
    jsonschema::validator_for(&schema).map_err(|err| BuildError::SchemaCompile(err.to_string()))
}

/// Validate a document, collecting every violation.
pub fn validate(document: &Value) -> Result<()> {
    let validator = compile()?;

    let errors: Vec<String> = validator
        .iter_errors(document)
        .map(|err| {
            let path = err.instance_path().to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{path}: {err}")
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(BuildError::SchemaValidationFailed { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_theme_passes() {
        let document = json!({
            "name": "Example",
            "colors": { "primary": "blue" },
        });
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn full_theme_passes() {
        let document = json!({
            "name": "Example",
            "colors": {
                "primary": "blue",
                "accent": "violet",
                "success": "green",
                "warning": "amber",
                "error": "red",
                "info": "cyan",
            },
            "scale": {
                "base": [16, 20],
                "ratio": "perfect-fifth",
                "points": 10,
                "pointStart": -3,
                "unit": "px",
                "fields": ["fontSizes", "space"],
            },
            "fonts": { "body": "Inter", "heading": "Inter", "monospace": "Fira Code" },
            "radii": [2, 4, 8],
            "fontWeights": { "body": 400, "heading": 600, "bold": 700 },
            "lineHeights": { "body": 1.5, "heading": 1.2 },
            "fontSize": { "value": 1, "unit": "rem" },
        });
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn missing_colors_fails_with_violations() {
        let err = validate(&json!({ "name": "Example" })).unwrap_err();
        let BuildError::SchemaValidationFailed { errors } = err else {
            panic!("expected schema failure");
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        let document = json!({
            "name": "Example",
            "colors": { "primary": "blue" },
            "shadows": ["0 1px 2px"],
        });
        assert!(validate(&document).is_err());
    }

    #[test]
    fn color_roles_outside_the_six_are_rejected() {
        let document = json!({
            "name": "Example",
            "colors": { "tertiary": "blue" },
        });
        assert!(validate(&document).is_err());
    }
}
