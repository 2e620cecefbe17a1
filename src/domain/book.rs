//! Book domain model.
//!
//! A [`Book`] is one immutable catalog entry. Books are deserialized from a raw
//! [`BookRecord`] whose publication date is still a string, then validated into
//! a `Book` with a parsed timestamp.

use super::error::{BookcaseError, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Raw book entry as it appears in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 timestamp, e.g. `"1998-06-14T00:00:00.000Z"`.
    pub published: String,
    /// Author id, resolved through the catalog's author table.
    pub author: String,
    /// Genre ids in the order the source lists them.
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A single catalog entry.
///
/// Immutable once loaded; owned by [`Catalog`](super::Catalog). Everything
/// else (result sets, the detail overlay) refers to books by `id` or holds
/// clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub author: String,
    pub genres: Vec<String>,
}

impl Book {
    /// Year of publication, shown in the detail subtitle.
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Whether the book is tagged with the given genre id.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = BookcaseError;

    fn try_from(record: BookRecord) -> Result<Self> {
        let published = DateTime::parse_from_rfc3339(&record.published)
            .map_err(|e| {
                BookcaseError::Catalog(format!(
                    "book {} has an invalid published date {:?}: {e}",
                    record.id, record.published
                ))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: record.id,
            title: record.title,
            image: record.image,
            description: record.description,
            published,
            author: record.author,
            genres: record.genres,
        })
    }
}
