//! JSON catalog sources.
//!
//! Both sources share [`parse_catalog`], which checks the document shape
//! before deserializing: a missing or non-array `books` field is rejected with
//! `Source required` so the plugin never starts with a partial catalog.

use crate::domain::error::{BookcaseError, Result};
use crate::domain::{Catalog, CatalogData};
use crate::infrastructure::strip_host_prefix;
use crate::source::backend::CatalogSource;
use serde_json::Value;
use std::path::PathBuf;

/// Catalog shipped inside the plugin binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Parses and validates a catalog JSON document.
///
/// # Errors
///
/// Returns [`BookcaseError::Catalog`] if the text is not JSON, `books` is
/// missing or not an array, or any record fails validation.
///
/// # Examples
///
/// ```
/// use bookcase::source::parse_catalog;
///
/// assert!(parse_catalog(r#"{ "books": {} }"#).is_err());
/// let catalog = parse_catalog(r#"{ "books": [] }"#)?;
/// assert!(catalog.is_empty());
/// # Ok::<(), bookcase::BookcaseError>(())
/// ```
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let document: Value = serde_json::from_str(contents)
        .map_err(|e| BookcaseError::Catalog(format!("failed to parse JSON: {e}")))?;

    match document.get("books") {
        Some(Value::Array(books)) => {
            tracing::debug!(book_count = books.len(), "catalog document shape ok");
        }
        Some(other) => {
            tracing::warn!(found = %json_type(other), "catalog books field is not an array");
            return Err(BookcaseError::Catalog("Source required".to_string()));
        }
        None => {
            tracing::warn!("catalog document has no books field");
            return Err(BookcaseError::Catalog("Source required".to_string()));
        }
    }

    let data: CatalogData = serde_json::from_value(document)
        .map_err(|e| BookcaseError::Catalog(format!("invalid catalog record: {e}")))?;

    Catalog::new(data)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The catalog compiled into the plugin (`data/catalog.json`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn load(&self) -> Result<Catalog> {
        parse_catalog(EMBEDDED_CATALOG)
    }

    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }
}

/// A catalog JSON file on disk.
///
/// In the Zellij sandbox the host filesystem is mounted at `/host`; callers
/// pass paths through [`expand_tilde`](crate::infrastructure::expand_tilde)
/// first.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!(path = ?self.file_path, "reading catalog file");
        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_catalog(&contents)
    }

    fn describe(&self) -> String {
        let shown = self.file_path.to_string_lossy();
        format!("catalog file {}", strip_host_prefix(&shown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ONE_BOOK: &str = r#"{
        "books_per_page": 12,
        "authors": { "a1": "Ursula Wren" },
        "genres": { "g1": "Fantasy" },
        "books": [{
            "id": "b1",
            "title": "The Salt Road",
            "image": "https://covers.example/b1.jpg",
            "description": "A caravan crosses the flats.",
            "published": "1998-06-14T00:00:00.000Z",
            "author": "a1",
            "genres": ["g1"]
        }]
    }"#;

    #[test]
    fn rejects_missing_or_non_array_books() {
        for doc in [r#"{}"#, r#"{ "books": null }"#, r#"{ "books": "b1" }"#, r#"[]"#] {
            let err = parse_catalog(doc).unwrap_err();
            assert_eq!(err.to_string(), "Catalog error: Source required", "{doc}");
        }
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_catalog("{ books: "),
            Err(BookcaseError::Catalog(_))
        ));
    }

    #[test]
    fn page_size_defaults_when_absent() {
        let catalog = parse_catalog(r#"{ "books": [] }"#).unwrap();
        assert_eq!(catalog.books_per_page(), crate::domain::DEFAULT_BOOKS_PER_PAGE);
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = EmbeddedSource.load().unwrap();
        assert!(!catalog.is_empty());
        for book in catalog.books() {
            assert!(catalog.author_name(&book.author).is_ok(), "{}", book.id);
        }
    }

    #[test]
    fn file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_BOOK.as_bytes()).unwrap();

        let catalog = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books_per_page(), 12);
        assert_eq!(catalog.book("b1").unwrap().published_year(), 1998);
    }

    #[test]
    fn file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, BookcaseError::Io(_)));
    }
}
