//! Theme build pipeline
//!
//! One build is a straight line: read → validate → split → normalize →
//! generate scale → expand colors → merge → write theme JSON + write
//! stylesheet. The merged output is assembled fully in memory before
//! the first write, so every pipeline failure aborts with zero output.
//! The two writes themselves are independent; a failure between them
//! can leave a theme document without a matching stylesheet.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::colors::{self, ColorRole};
use crate::error::{BuildError, Result};
use crate::scale::{self, ScaleRecipe};
use crate::theme::{css, schema};
use crate::value::{self, Normalized};

/// Output paths for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path for the expanded theme document (JSON).
    pub theme_path: PathBuf,
    /// Path for the custom-property stylesheet.
    pub css_path: PathBuf,
}

/// Run one full build from the input document to both artifacts.
pub fn build(input: &Path, opts: &BuildOptions) -> Result<()> {
    let document = read_input(input)?;

    if let Err(err) = schema::validate(&document) {
        error!("✖ failed JSON schema validation");
        if let BuildError::SchemaValidationFailed { errors } = &err {
            for violation in errors {
                error!(%violation);
            }
        }
        return Err(err);
    }
    info!("✔ passed JSON schema validation");

    let output = expand_document(&document)?;

    fs::write(&opts.theme_path, serde_json::to_string_pretty(&output)?)?;
    info!(path = %opts.theme_path.display(), "✔ theme saved");

    fs::write(&opts.css_path, css::to_custom_properties(&output))?;
    info!(path = %opts.css_path.display(), "✔ css properties saved");

    info!("✔ done");
    Ok(())
}

/// Read and parse the input document. Both a missing file and invalid
/// JSON surface as [`BuildError::InputNotFound`], before any output
/// exists.
fn read_input(path: &Path) -> Result<Value> {
    let missing = || BuildError::InputNotFound {
        path: path.display().to_string(),
    };

    let text = fs::read_to_string(path).map_err(|_| missing())?;
    serde_json::from_str(&text).map_err(|_| missing())
}

/// Expand a schema-valid document into the merged output document.
///
/// Output key order is `name`, the normalized pass-through fields in
/// input order, the scale key(s), then `colors`. Derived fields are
/// inserted last, so they win any token-name collision.
pub fn expand_document(document: &Value) -> Result<Value> {
    let fields = document
        .as_object()
        .ok_or_else(|| BuildError::SchemaValidationFailed {
            errors: vec!["document must be an object".into()],
        })?;

    let mut output = Map::new();

    if let Some(name) = fields.get("name") {
        output.insert("name".into(), name.clone());
    }

    // Everything outside name/colors/scale is a pass-through token
    // field; fields with no normalized form are dropped entirely.
    for (key, raw) in fields {
        if matches!(key.as_str(), "name" | "colors" | "scale") {
            continue;
        }
        match value::normalize(raw, true) {
            Some(Normalized::Text(text)) => {
                output.insert(key.clone(), Value::String(text));
            }
            Some(Normalized::Table(table)) => {
                output.insert(key.clone(), table_to_value(table));
            }
            None => debug!(field = %key, "dropping field with no normalized form"),
        }
    }

    let recipe: ScaleRecipe = match fields.get("scale") {
        Some(raw) => {
            serde_json::from_value(raw.clone()).map_err(|err| BuildError::InvalidRecipe {
                reason: err.to_string(),
            })?
        }
        None => ScaleRecipe::default(),
    };
    let generated = table_to_value(scale::generate(&recipe)?);
    output.insert("scale".into(), generated.clone());
    if let Some(field) = &recipe.field {
        output.insert(field.clone(), generated.clone());
    } else if let Some(extra) = &recipe.fields {
        for field in extra {
            output.insert(field.clone(), generated.clone());
        }
    }

    let roles = fields
        .get("colors")
        .and_then(Value::as_object)
        .ok_or_else(|| BuildError::SchemaValidationFailed {
            errors: vec!["colors must be an object".into()],
        })?;
    let mut expanded = Map::new();
    for (key, scheme) in roles {
        let role: ColorRole = serde_json::from_value(Value::String(key.clone()))?;
        let scheme_name = scheme.as_str().ok_or_else(|| BuildError::SchemaValidationFailed {
            errors: vec![format!("colors.{key} must be a scheme name")],
        })?;
        expanded.insert(
            role.as_str().to_string(),
            table_to_value(colors::expand(scheme_name)?),
        );
    }
    output.insert("colors".into(), Value::Object(expanded));

    Ok(Value::Object(output))
}

fn table_to_value(table: IndexMap<String, String>) -> Value {
    Value::Object(
        table
            .into_iter()
            .map(|(key, text)| (key, Value::String(text)))
            .collect(),
    )
}
