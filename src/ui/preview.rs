//! Preview tiles for the catalog list.

use crate::domain::catalog::lookup;
use crate::domain::error::Result;
use crate::domain::Book;
use std::collections::BTreeMap;

/// Everything a list tile shows for one book.
///
/// Carries the book id so a tile can be resolved back to its book when the
/// detail overlay is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    pub id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

impl PreviewHandle {
    /// Builds the tile for `book`, resolving the author name through `authors`.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`](crate::BookcaseError::NotFound) if
    /// the book's author id is missing from the table.
    ///
    /// ```rust
    /// use bookcase::source::{CatalogSource, EmbeddedSource};
    /// use bookcase::ui::preview::PreviewHandle;
    ///
    /// let catalog = EmbeddedSource.load()?;
    /// let book = &catalog.books()[0];
    /// let tile = PreviewHandle::render(book, catalog.authors())?;
    /// assert_eq!(tile.id, book.id);
    /// # Ok::<(), bookcase::BookcaseError>(())
    /// ```
    pub fn render(book: &Book, authors: &BTreeMap<String, String>) -> Result<Self> {
        let author = lookup(authors, "author", &book.author)?;
        Ok(Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: author.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookcaseError;
    use chrono::{TimeZone, Utc};

    fn book(author: &str) -> Book {
        Book {
            id: "b1".to_string(),
            title: "The Salt Road".to_string(),
            image: "https://covers.example/b1.jpg".to_string(),
            description: String::new(),
            published: Utc.with_ymd_and_hms(1998, 6, 14, 0, 0, 0).unwrap(),
            author: author.to_string(),
            genres: vec!["g1".to_string()],
        }
    }

    #[test]
    fn resolves_author_name() {
        let authors = BTreeMap::from([("a1".to_string(), "Ursula Wren".to_string())]);
        let tile = PreviewHandle::render(&book("a1"), &authors).unwrap();
        assert_eq!(
            tile,
            PreviewHandle {
                id: "b1".to_string(),
                image: "https://covers.example/b1.jpg".to_string(),
                title: "The Salt Road".to_string(),
                author: "Ursula Wren".to_string(),
            }
        );
    }

    #[test]
    fn missing_author_is_not_found() {
        let err = PreviewHandle::render(&book("a404"), &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, BookcaseError::NotFound { kind: "author", ref id } if id == "a404"));
    }
}
