//! Token value normalization
//!
//! Input documents carry token values in several shapes: bare strings,
//! bare numbers, `{value, unit}` pairs, or arrays of those. All of them
//! serialize to plain strings in the output document. Values are
//! classified into a tagged variant first, then normalized with one
//! arm per variant; shapes outside the variant set normalize to absent
//! and the owning field is skipped rather than written as null.

use indexmap::IndexMap;
use serde_json::Value;

use crate::scale;

/// A token value classified by shape.
#[derive(Debug)]
pub enum ThemeValue<'a> {
    Text(&'a str),
    Number(&'a serde_json::Number),
    CustomUnit { value: &'a Value, unit: &'a str },
    Sequence(&'a [Value]),
}

impl<'a> ThemeValue<'a> {
    /// Classify a raw JSON value. `None` means the shape has no
    /// normalized form (null, booleans, plain objects).
    pub fn classify(raw: &'a Value) -> Option<Self> {
        match raw {
            Value::String(text) => Some(ThemeValue::Text(text)),
            Value::Number(number) => Some(ThemeValue::Number(number)),
            Value::Array(items) => Some(ThemeValue::Sequence(items)),
            Value::Object(fields) => {
                let value = fields.get("value")?;
                let unit = fields.get("unit")?.as_str()?;
                Some(ThemeValue::CustomUnit { value, unit })
            }
            _ => None,
        }
    }
}

/// A normalized token value: a single string, or a step-labeled table
/// built from an array's element positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Text(String),
    Table(IndexMap<String, String>),
}

/// Normalize one token value.
///
/// Bare numbers pick up a `px` suffix when `convert_to_px` is set;
/// strings pass through verbatim, so already-normalized values are
/// fixed points. Returns `None` when the value has no normalized form.
pub fn normalize(raw: &Value, convert_to_px: bool) -> Option<Normalized> {
    match ThemeValue::classify(raw)? {
        ThemeValue::Text(text) => Some(Normalized::Text(text.to_string())),
        ThemeValue::Number(number) => {
            let suffix = if convert_to_px { "px" } else { "" };
            Some(Normalized::Text(format!("{number}{suffix}")))
        }
        ThemeValue::CustomUnit { value, unit } => {
            let rendered = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                _ => return None,
            };
            Some(Normalized::Text(format!("{rendered}{unit}")))
        }
        ThemeValue::Sequence(items) => {
            let mut table = IndexMap::with_capacity(items.len());
            for (position, item) in items.iter().enumerate() {
                // Elements that normalize to nothing are dropped; the
                // label still reflects the element's original position.
                if let Some(Normalized::Text(text)) = normalize(item, convert_to_px) {
                    table.insert(scale::label(position as i64), text);
                }
            }
            Some(Normalized::Table(table))
        }
    }
}
