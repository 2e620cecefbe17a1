//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only.
//!
//! ```rust
//! use bookcase::ui::viewmodel::{FooterInfo, HeaderInfo, ShowMoreInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     tiles: vec![],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Bookcase (0) ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     show_more: ShowMoreInfo { label: "Show more (0)".to_string(), enabled: false },
//!     empty_state: None,
//!     overlay: None,
//! };
//! assert!(!vm.show_more.enabled);
//! ```

use crate::app::modes::SearchField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Tiles inside the visible window of the list.
    pub tiles: Vec<TileItem>,

    /// Index of the selected tile within `tiles`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub show_more: ShowMoreInfo,

    /// Shown instead of the list when the last search matched nothing.
    pub empty_state: Option<EmptyState>,

    /// The topmost open overlay, drawn over the list.
    pub overlay: Option<OverlayView>,
}

/// One preview tile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileItem {
    pub id: String,
    pub title: String,
    /// Blank when the author id did not resolve.
    pub author: String,
    pub image: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// The "show more" control under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    /// `Show more (N)` with N the unrevealed count.
    pub label: String,
    /// False when nothing remains.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Overlay panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    Search(SearchPanel),
    Settings(SettingsPanel),
    Detail(DetailPanel),
}

/// Search form fields as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub focus: SearchField,
}

/// Settings form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    /// Known theme names with a flag for the one the form currently holds.
    pub options: Vec<(String, bool)>,
}

/// Detail overlay for the active book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    /// Backdrop image; the cover itself is used.
    pub blur: String,
    pub image: String,
    pub title: String,
    /// `"<author> (<year>)"`.
    pub subtitle: String,
    pub description: String,
}
