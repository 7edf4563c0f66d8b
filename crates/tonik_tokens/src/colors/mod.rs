//! Semantic color roles and ramp expansion
//!
//! An input theme assigns each semantic role a named color scheme; the
//! expander replaces that name with the scheme's full ramp, re-labeled
//! by the fixed twelve step names.

pub mod schemes;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// The closed set of semantic color roles a theme may assign.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Accent,
    Success,
    Warning,
    Error,
    Info,
}

impl ColorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Accent => "accent",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
        }
    }
}

/// The twelve ramp steps, in ramp order. A scheme's colors map onto
/// these positionally.
pub const COLOR_STEPS: [&str; 12] = [
    "base",
    "bgSubtle",
    "bg",
    "bgHover",
    "bgActive",
    "line",
    "border",
    "borderHover",
    "solid",
    "solidHover",
    "text",
    "textContrast",
];

/// Expand a scheme name into its step-labeled ramp.
///
/// Unknown names fail with [`BuildError::UnknownColorScheme`]; the error
/// text echoes the queried name. Schemes shorter than twelve entries
/// yield a partially filled ramp (trailing steps absent).
pub fn expand(scheme_name: &str) -> Result<IndexMap<String, String>> {
    let colors = schemes::lookup(scheme_name).ok_or_else(|| BuildError::UnknownColorScheme {
        name: scheme_name.to_string(),
    })?;

    let mut ramp = IndexMap::with_capacity(COLOR_STEPS.len());
    for (step, color) in COLOR_STEPS.iter().zip(colors) {
        ramp.insert((*step).to_string(), (*color).to_string());
    }

    Ok(ramp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_labels_every_step_in_order() {
        let ramp = expand("blue").unwrap();

        let keys: Vec<&str> = ramp.keys().map(String::as_str).collect();
        assert_eq!(keys, COLOR_STEPS.to_vec());

        let raw = schemes::lookup("blue").unwrap();
        for (i, value) in ramp.values().enumerate() {
            assert_eq!(value, raw[i]);
        }
    }

    #[test]
    fn every_bundled_scheme_has_twelve_steps() {
        for name in schemes::NAMES {
            let ramp = expand(name).unwrap();
            assert_eq!(ramp.len(), 12, "scheme {name}");
        }
    }

    #[test]
    fn unknown_scheme_echoes_the_queried_name() {
        let err = expand("not-a-real-scheme").unwrap_err();
        assert!(matches!(err, BuildError::UnknownColorScheme { .. }));
        assert!(err.to_string().contains("not-a-real-scheme"));
    }

    #[test]
    fn role_names_serialize_lowercase() {
        for role in [
            ColorRole::Primary,
            ColorRole::Accent,
            ColorRole::Success,
            ColorRole::Warning,
            ColorRole::Error,
            ColorRole::Info,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
