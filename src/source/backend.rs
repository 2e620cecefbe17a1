//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait hides where the catalog document comes from, so
//! startup code can switch between the embedded catalog and a file on the host
//! without touching the rest of the plugin.

use crate::domain::error::Result;
use crate::domain::Catalog;

/// A read-only provider of the catalog.
///
/// # Implementations
///
/// - [`EmbeddedSource`](super::EmbeddedSource): catalog compiled into the plugin
/// - [`JsonFileSource`](super::JsonFileSource): catalog JSON read from disk
///
/// # Examples
///
/// ```
/// use bookcase::source::{CatalogSource, EmbeddedSource};
///
/// let catalog = EmbeddedSource.load()?;
/// assert!(!catalog.is_empty());
/// # Ok::<(), bookcase::BookcaseError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, is not shaped like a
    /// catalog, or fails validation. Callers treat this as fatal.
    fn load(&self) -> Result<Catalog>;

    /// Short description used in log lines.
    fn describe(&self) -> String;
}
