//! Domain layer for the Bookcase plugin.
//!
//! Core types independent of Zellij APIs: the immutable catalog, its book
//! records and the crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record and its validated form
//! - [`catalog`]: Catalog store with author and genre tables

pub mod book;
pub mod catalog;
pub mod error;

pub use book::{Book, BookRecord};
pub use catalog::{Catalog, CatalogData, DEFAULT_BOOKS_PER_PAGE};
pub use error::{BookcaseError, Result};
