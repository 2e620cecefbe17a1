//! The catalog store: books plus author and genre lookup tables.
//!
//! A [`Catalog`] is built once at startup from a [`CatalogData`] document and
//! never mutated afterwards. Every lookup is typed and reports misses as
//! [`BookcaseError::NotFound`] rather than producing empty values.

use super::book::{Book, BookRecord};
use super::error::{BookcaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Page size used when the data source does not declare one.
pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

const fn default_books_per_page() -> usize {
    DEFAULT_BOOKS_PER_PAGE
}

/// Catalog document as supplied by a data source.
///
/// ```json
/// {
///   "books_per_page": 36,
///   "authors": { "a1": "Ursula Wren" },
///   "genres": { "g1": "Fantasy" },
///   "books": [
///     {
///       "id": "b1",
///       "title": "The Salt Road",
///       "image": "https://covers.example/b1.jpg",
///       "description": "...",
///       "published": "1998-06-14T00:00:00.000Z",
///       "author": "a1",
///       "genres": ["g1"]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default = "default_books_per_page")]
    pub books_per_page: usize,
    #[serde(default)]
    pub authors: BTreeMap<String, String>,
    #[serde(default)]
    pub genres: BTreeMap<String, String>,
    pub books: Vec<BookRecord>,
}

/// Immutable in-memory catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
    books_per_page: usize,
}

impl Catalog {
    /// Validates a catalog document and builds the store.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Catalog`] if the page size is zero, a book id is
    /// duplicated, or a publication date does not parse.
    pub fn new(data: CatalogData) -> Result<Self> {
        if data.books_per_page == 0 {
            return Err(BookcaseError::Catalog(
                "books_per_page must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(data.books.len());
        let mut books = Vec::with_capacity(data.books.len());
        for record in data.books {
            if !seen.insert(record.id.clone()) {
                return Err(BookcaseError::Catalog(format!(
                    "duplicate book id {}",
                    record.id
                )));
            }
            books.push(Book::try_from(record)?);
        }

        tracing::debug!(
            books = books.len(),
            authors = data.authors.len(),
            genres = data.genres.len(),
            books_per_page = data.books_per_page,
            "catalog built"
        );

        Ok(Self {
            books,
            authors: data.authors,
            genres: data.genres,
            books_per_page: data.books_per_page,
        })
    }

    /// All books in source order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub const fn books_per_page(&self) -> usize {
        self.books_per_page
    }

    #[must_use]
    pub const fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    /// Looks up a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if no book has this id.
    pub fn book(&self, id: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| BookcaseError::not_found("book", id))
    }

    /// Resolves an author id to its display name.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if the author table has no entry.
    pub fn author_name(&self, id: &str) -> Result<&str> {
        lookup(&self.authors, "author", id)
    }

    /// Resolves a genre id to its display name.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if the genre table has no entry.
    pub fn genre_name(&self, id: &str) -> Result<&str> {
        lookup(&self.genres, "genre", id)
    }

    /// Replaces the page size, keeping every other field.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Config`] for a zero page size.
    pub fn with_books_per_page(mut self, books_per_page: usize) -> Result<Self> {
        if books_per_page == 0 {
            return Err(BookcaseError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        self.books_per_page = books_per_page;
        Ok(self)
    }
}

/// Typed table lookup with an explicit miss.
pub fn lookup<'a>(
    table: &'a BTreeMap<String, String>,
    kind: &'static str,
    id: &str,
) -> Result<&'a str> {
    table
        .get(id)
        .map(String::as_str)
        .ok_or_else(|| BookcaseError::not_found(kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> BookRecord {
        BookRecord {
            id: id.to_string(),
            title: format!("Title {id}"),
            image: format!("https://covers.example/{id}.jpg"),
            description: String::new(),
            published: "2001-01-01T00:00:00Z".to_string(),
            author: "a1".to_string(),
            genres: vec![],
        }
    }

    fn data(books: Vec<BookRecord>) -> CatalogData {
        CatalogData {
            books_per_page: 36,
            authors: BTreeMap::from([("a1".to_string(), "Ursula Wren".to_string())]),
            genres: BTreeMap::from([("g1".to_string(), "Fantasy".to_string())]),
            books,
        }
    }

    #[test]
    fn lookups_report_misses() {
        let catalog = Catalog::new(data(vec![record("b1")])).unwrap();

        assert_eq!(catalog.book("b1").unwrap().title, "Title b1");
        assert_eq!(catalog.author_name("a1").unwrap(), "Ursula Wren");
        assert_eq!(catalog.genre_name("g1").unwrap(), "Fantasy");

        assert!(matches!(
            catalog.book("nope"),
            Err(BookcaseError::NotFound { kind: "book", .. })
        ));
        assert!(matches!(
            catalog.author_name("a9"),
            Err(BookcaseError::NotFound { kind: "author", .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(data(vec![record("b1"), record("b1")])).unwrap_err();
        assert!(matches!(err, BookcaseError::Catalog(_)));
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut bad = data(vec![]);
        bad.books_per_page = 0;
        assert!(Catalog::new(bad).is_err());

        let catalog = Catalog::new(data(vec![])).unwrap();
        assert!(catalog.clone().with_books_per_page(0).is_err());
        assert_eq!(catalog.with_books_per_page(12).unwrap().books_per_page(), 12);
    }
}
