//! Theme documents: schema gate, build pipeline, stylesheet output

pub mod build;
pub mod css;
pub mod schema;

pub use build::{build, expand_document, BuildOptions};
