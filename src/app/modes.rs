//! Input mode types.
//!
//! The input mode decides which key bindings are live and which footer hint is
//! shown. It is derived from the overlay stack, never stored: the detail panel
//! wins over settings, settings wins over search, and with no overlay open the
//! keys drive the tile list.
//!
//! ```rust
//! use bookcase::app::modes::{InputMode, SearchField};
//!
//! let mode = InputMode::Search(SearchField::Title);
//! assert_eq!(SearchField::Title.next(), SearchField::Author);
//! # let _ = mode;
//! ```

/// Focused field of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Free-text title query. Receives typed characters.
    #[default]
    Title,
    /// Author select. Left/Right cycle its options.
    Author,
    /// Genre select. Left/Right cycle its options.
    Genre,
}

impl SearchField {
    /// Tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// Reverse tab order, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// No overlay open: j/k move, Enter opens detail, m shows more,
    /// / opens search, s opens settings, q quits.
    List,

    /// Search overlay open with the given field focused.
    Search(SearchField),

    /// Settings overlay open.
    Settings,

    /// Detail overlay open.
    Detail,
}
