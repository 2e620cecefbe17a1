//! Catalog data sources.
//!
//! The catalog is a read-only import loaded once at startup. This module
//! provides the [`CatalogSource`] seam and its JSON implementations.

pub mod backend;
pub mod json;

pub use backend::CatalogSource;
pub use json::{parse_catalog, EmbeddedSource, JsonFileSource};
