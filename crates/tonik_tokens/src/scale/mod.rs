//! Modular scale generation
//!
//! A modular scale is a sequence of sizes produced by repeated
//! multiplication of a base value by a fixed ratio, indexed by integer
//! steps around a "medium" reference point. Steps are addressed by
//! t-shirt labels derived from the index (`xxs` .. `m` .. `xxl`).
//!
//! A recipe may carry several base values ("strands"); these are folded
//! into the first strand's octave window and interleaved across the
//! steps, so distinct pivots (say body and heading sizes) share one
//! scale while keeping ratio spacing between octaves.

pub mod ratios;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{BuildError, Result};

/// Recipe defaults, used for any field the input leaves unset. A theme
/// without a `scale` entry builds entirely from these.
pub const DEFAULT_BASE: f64 = 16.0;
pub const DEFAULT_POINTS: i64 = 10;
pub const DEFAULT_POINT_START: i64 = -3;
pub const DEFAULT_UNIT: &str = "px";

/// A ratio given either as a bare multiplier or as a symbolic name
/// resolved through [`ratios::lookup`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RatioSpec {
    Multiplier(f64),
    Name(String),
}

/// One or more base values. Two or more entries interleave as strands.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScaleBase {
    Single(f64),
    Strands(Vec<f64>),
}

/// The `scale` block of an input theme.
///
/// `field`/`fields` name extra output keys that receive a copy of the
/// generated scale on top of the conventional `scale` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScaleRecipe {
    pub base: Option<ScaleBase>,
    pub ratio: Option<RatioSpec>,
    pub points: Option<i64>,
    pub point_start: Option<i64>,
    pub unit: Option<String>,
    pub field: Option<String>,
    pub fields: Option<Vec<String>>,
}

/// Derive the step label for an integer scale index.
///
/// Index 0 is `m`; positive indices grow through `l`, `xl`, `xxl`, ...;
/// negative indices shrink through `s`, `xs`, `xxs`, ... The label is a
/// pure function of the index, independent of any recipe.
pub fn label(idx: i64) -> String {
    let size = if idx == 0 {
        "m"
    } else if idx > 0 {
        "l"
    } else {
        "s"
    };

    let reps = idx.abs() - 1;
    if reps > 0 {
        format!("{}{size}", "x".repeat(reps as usize))
    } else {
        size.to_string()
    }
}

/// Resolve a [`RatioSpec`] to a finite positive multiplier.
fn resolve_ratio(spec: Option<&RatioSpec>) -> Result<f64> {
    let ratio = match spec {
        None => ratios::DEFAULT_RATIO,
        Some(RatioSpec::Multiplier(value)) => *value,
        Some(RatioSpec::Name(name)) => {
            let folded = ratios::fold_hyphen_case(name);
            debug!(raw = %name, folded = %folded, "resolving symbolic ratio");
            ratios::lookup(&folded).ok_or_else(|| BuildError::UnknownRatio {
                name: name.clone(),
            })?
        }
    };

    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(BuildError::InvalidRecipe {
            reason: format!("ratio must be a finite positive number, got {ratio}"),
        });
    }

    Ok(ratio)
}

/// Compute the raw scale value for one point.
fn value_at(point: i64, ratio: f64, strands: &[f64]) -> f64 {
    if strands.len() == 1 {
        return ratio.powi(point as i32) * strands[0];
    }

    // Fold every strand into the first strand's octave window
    // [first, ratio * first), then sort ascending.
    let first = strands[0];
    let high = ratio * first;
    let mut folded = strands.to_vec();
    for value in folded.iter_mut().skip(1) {
        while *value < first {
            *value *= ratio;
        }
        while *value >= high {
            *value /= ratio;
        }
    }
    folded.sort_by(|a, b| a.total_cmp(b));

    let count = folded.len() as f64;
    let octave = (point as f64 / count).floor();
    let slot = ((point as f64 / count - octave) * count).round() as usize;
    // Rounding can land one past the last strand; clamp to it.
    let slot = slot.min(folded.len() - 1);

    ratio.powi(octave as i32) * folded[slot]
}

/// Round to 3 decimal places and print the shortest representation
/// (`16` rather than `16.000`), with the unit appended.
fn format_value(value: f64, unit: &str) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}{unit}")
}

/// Generate the ordered label → value mapping for a recipe.
///
/// Labels cover the half-open index range
/// `[pointStart, pointStart + points)` in ascending index order.
pub fn generate(recipe: &ScaleRecipe) -> Result<IndexMap<String, String>> {
    let strands: Vec<f64> = match &recipe.base {
        None => vec![DEFAULT_BASE],
        Some(ScaleBase::Single(value)) => vec![*value],
        Some(ScaleBase::Strands(values)) => values.clone(),
    };
    if strands.is_empty() {
        return Err(BuildError::InvalidRecipe {
            reason: "base must hold at least one value".into(),
        });
    }
    // Octave folding multiplies a strand until it clears the first
    // strand's value; a zero or negative strand never does.
    if let Some(bad) = strands.iter().find(|value| !value.is_finite() || **value <= 0.0) {
        return Err(BuildError::InvalidRecipe {
            reason: format!("base values must be finite positive numbers, got {bad}"),
        });
    }

    let points = recipe.points.unwrap_or(DEFAULT_POINTS);
    if points < 1 {
        return Err(BuildError::InvalidRecipe {
            reason: format!("points must be at least 1, got {points}"),
        });
    }

    let point_start = recipe.point_start.unwrap_or(DEFAULT_POINT_START);
    let unit = recipe.unit.as_deref().unwrap_or(DEFAULT_UNIT);
    let ratio = resolve_ratio(recipe.ratio.as_ref())?;

    debug!(ratio, points, point_start, strands = strands.len(), "generating scale");

    let mut values = IndexMap::with_capacity(points as usize);
    for point in point_start..point_start + points {
        let value = format_value(value_at(point, ratio, &strands), unit);
        values.insert(label(point), value);
    }

    Ok(values)
}
