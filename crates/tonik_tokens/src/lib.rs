//! tonik token engine
//!
//! Expands a compact "summary" theme document into two derived
//! artifacts: a fully-resolved theme JSON (modular scale steps, a
//! twelve-step color ramp per semantic role, normalized token values)
//! and a stylesheet of root-scoped custom properties.
//!
//! # Overview
//!
//! - [`scale`]: modular scale generation — named ratios, multi-strand
//!   base interleaving, index-to-label mapping
//! - [`colors`]: semantic roles, the fixed twelve ramp steps, and
//!   scheme expansion
//! - [`value`]: normalization of heterogeneous token values into their
//!   serialized string form
//! - [`theme`]: the schema gate, the build pipeline, and stylesheet
//!   serialization
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tonik_tokens::{build, BuildOptions};
//!
//! build(
//!     "theme.summary.json".as_ref(),
//!     &BuildOptions {
//!         theme_path: "theme.json".into(),
//!         css_path: "_variables.css".into(),
//!     },
//! )?;
//! ```

pub mod colors;
pub mod error;
pub mod scale;
pub mod theme;
pub mod value;

// Re-export commonly used types
pub use colors::{ColorRole, COLOR_STEPS};
pub use error::{BuildError, Result};
pub use scale::{ScaleRecipe, RatioSpec, ScaleBase};
pub use theme::{build, BuildOptions};
