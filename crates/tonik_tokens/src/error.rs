//! Error taxonomy for theme builds
//!
//! Every failure in the pipeline is fatal: the build aborts before any
//! output file is written (the merged document is assembled fully in
//! memory first). The only non-transactional spot is the theme/stylesheet
//! two-write sequence, which can leave a theme document without a
//! matching stylesheet if the second write fails.

use thiserror::Error;

/// Fatal build failures.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The input document could not be read or parsed.
    #[error("Unable to find \"{path}\". Are you sure it exists?")]
    InputNotFound { path: String },

    /// The input document was rejected by the theme schema.
    #[error("Failed JSON schema validation ({} violation{})", errors.len(), if errors.len() == 1 { "" } else { "s" })]
    SchemaValidationFailed { errors: Vec<String> },

    /// A symbolic ratio name has no entry in the ratio table.
    #[error("Unknown ratio \"{name}\"")]
    UnknownRatio { name: String },

    /// A color scheme name has no entry in the scheme table.
    #[error("\"{name}\" isn't available from the color scheme table. Check spelling.")]
    UnknownColorScheme { name: String },

    /// The scale recipe is structurally unusable.
    #[error("Invalid scale recipe: {reason}")]
    InvalidRecipe { reason: String },

    /// The embedded schema failed to compile.
    #[error("Theme schema failed to compile: {0}")]
    SchemaCompile(String),

    /// Output serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// File write failed (disk full, permissions). Not retried.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;
