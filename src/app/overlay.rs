//! Open/closed state of the three overlay panels.
//!
//! Each overlay is a two-state machine, `Closed ⇄ Open`. Search and settings
//! only carry a flag; the detail overlay carries the id of the active book,
//! so it can only be open when a book was resolved.

/// Overlay panel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Search,
    Settings,
    Detail,
}

/// State of all three overlays.
///
/// ```rust
/// use bookcase::app::overlay::{OverlayKind, Overlays};
///
/// let mut overlays = Overlays::default();
/// overlays.open_search();
/// assert_eq!(overlays.topmost(), Some(OverlayKind::Search));
///
/// assert!(!overlays.open_detail(None));
/// assert!(overlays.active_book().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlays {
    search_open: bool,
    settings_open: bool,
    detail: Option<String>,
}

impl Overlays {
    #[must_use]
    pub const fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Search => self.search_open,
            OverlayKind::Settings => self.settings_open,
            OverlayKind::Detail => self.detail.is_some(),
        }
    }

    /// The overlay receiving input: detail over settings over search.
    #[must_use]
    pub const fn topmost(&self) -> Option<OverlayKind> {
        if self.detail.is_some() {
            Some(OverlayKind::Detail)
        } else if self.settings_open {
            Some(OverlayKind::Settings)
        } else if self.search_open {
            Some(OverlayKind::Search)
        } else {
            None
        }
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    /// Opens the detail overlay for a resolved book id.
    ///
    /// Returns `false` and stays closed when `book_id` is `None`.
    pub fn open_detail(&mut self, book_id: Option<&str>) -> bool {
        match book_id {
            Some(id) => {
                self.detail = Some(id.to_string());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Search => self.search_open = false,
            OverlayKind::Settings => self.settings_open = false,
            OverlayKind::Detail => self.detail = None,
        }
    }

    /// Id of the book shown in the detail overlay.
    #[must_use]
    pub fn active_book(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}
