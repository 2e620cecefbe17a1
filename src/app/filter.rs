//! Catalog filtering by title, author and genre.
//!
//! [`apply_filter`] is a pure function over the catalog: it keeps catalog order
//! and includes a book only when all three predicates hold.
//!
//! # Title matching
//!
//! The title query is trimmed and matched as a case-insensitive substring. An
//! empty query matches every title, so all-wildcard criteria return the whole
//! catalog.

use crate::domain::Book;
use std::fmt;

/// Form value meaning "no restriction".
pub const ANY: &str = "any";

/// One choice of a select field: the wildcard or a concrete id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Builds a selection from a submitted form value.
    ///
    /// ```rust
    /// use bookcase::app::filter::Selection;
    ///
    /// assert_eq!(Selection::from_form("any"), Selection::Any);
    /// assert_eq!(Selection::from_form("g7"), Selection::Id("g7".into()));
    /// ```
    #[must_use]
    pub fn from_form(value: &str) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    /// The value a form would submit for this selection.
    #[must_use]
    pub fn as_form_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Id(id) => id,
        }
    }

    fn matches(&self, predicate: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => predicate(id),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// A submitted search: title query plus author and genre selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Builds criteria from the three raw form fields.
    #[must_use]
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: Selection::from_form(author),
            genre: Selection::from_form(genre),
        }
    }

    /// Whether these criteria restrict nothing.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.title.trim().is_empty()
            && self.author == Selection::Any
            && self.genre == Selection::Any
    }

    /// Tests one book against all three predicates.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let query = self.title.trim().to_lowercase();
        let title_match = query.is_empty() || book.title.to_lowercase().contains(&query);
        let author_match = self.author.matches(|id| book.author == id);
        let genre_match = self.genre.matches(|id| book.has_genre(id));

        title_match && author_match && genre_match
    }
}

/// Returns the books matching `criteria`, in catalog order.
#[must_use]
pub fn apply_filter(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "apply_filter",
        total_books = books.len(),
        query_len = criteria.title.len(),
        author = %criteria.author,
        genre = %criteria.genre
    )
    .entered();

    if criteria.is_wildcard() {
        return books.to_vec();
    }

    let result: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(matched = result.len(), "filter applied");
    result
}
