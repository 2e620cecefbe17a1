//! Application state and view model computation.
//!
//! [`AppState`] is the single session record: the catalog, the current result
//! set, the page cursor, both forms, the overlay stack and the applied theme.
//! It is mutated only by the event handler; view models are computed from it
//! on demand.
//!
//! # View Model Computation
//!
//! The list shows every revealed tile (pages are appended, not replaced). When
//! the pane is shorter than the revealed list, a window is centered on the
//! selected tile.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//! use bookcase::source::{CatalogSource, EmbeddedSource};
//! use bookcase::ui::theme::Theme;
//!
//! let state = AppState::new(EmbeddedSource.load()?, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.show_more.enabled);
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use super::filter::{apply_filter, FilterCriteria};
use super::forms::{SearchForm, SettingsForm};
use super::modes::InputMode;
use super::overlay::{OverlayKind, Overlays};
use super::pagination::Pagination;
use crate::domain::error::Result;
use crate::domain::{Book, Catalog};
use crate::ui::preview::PreviewHandle;
use crate::ui::theme::{Theme, ThemeName};
use crate::ui::viewmodel::{
    DetailPanel, EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchPanel, SettingsPanel,
    ShowMoreInfo, TileItem, UIViewModel,
};

/// Rows taken by the header, borders, show-more line and footer.
const CHROME_ROWS: usize = 7;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog loaded at startup.
    pub catalog: Catalog,

    /// Books matching `criteria`, in catalog order.
    pub matches: Vec<Book>,

    /// Criteria of the last submitted search.
    pub criteria: FilterCriteria,

    pub pagination: Pagination,

    /// Zero-based index of the selected tile within the revealed tiles.
    pub selected_index: usize,

    pub search_form: SearchForm,
    pub settings_form: SettingsForm,
    pub overlays: Overlays,
    pub theme: Theme,

    /// Set when the last submitted search matched nothing.
    pub no_results: bool,
}

impl AppState {
    /// Starts with the whole catalog as the result set, on page 1.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let matches = catalog.books().to_vec();
        let pagination = Pagination::new(catalog.books_per_page());
        let search_form = SearchForm::new(&catalog);
        let settings_form = SettingsForm::new(theme.name());

        Self {
            catalog,
            matches,
            criteria: FilterCriteria::default(),
            pagination,
            selected_index: 0,
            search_form,
            settings_form,
            overlays: Overlays::default(),
            theme,
            no_results: false,
        }
    }

    /// Input mode derived from the overlay stack.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.overlays.topmost() {
            Some(OverlayKind::Detail) => InputMode::Detail,
            Some(OverlayKind::Settings) => InputMode::Settings,
            Some(OverlayKind::Search) => InputMode::Search(self.search_form.focus()),
            None => InputMode::List,
        }
    }

    /// Tiles shown so far.
    #[must_use]
    pub fn revealed(&self) -> &[Book] {
        self.pagination.revealed(&self.matches)
    }

    /// Results not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pagination.remaining(&self.matches)
    }

    /// Moves the tile selection down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.revealed().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the tile selection up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.revealed().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.revealed().get(self.selected_index)
    }

    /// Reveals the next page and moves the selection to its first tile.
    ///
    /// Always advances the cursor, even with nothing left; returns whether new
    /// tiles appeared.
    pub fn show_more(&mut self) -> bool {
        let before = self.revealed().len();
        self.pagination.advance();
        let after = self.revealed().len();

        tracing::debug!(
            page = self.pagination.page(),
            revealed = after,
            remaining = self.remaining(),
            "show more"
        );

        if after > before {
            self.selected_index = before;
            true
        } else {
            false
        }
    }

    /// Applies `criteria` to the catalog and starts over from page 1.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.matches = apply_filter(self.catalog.books(), &criteria);
        self.criteria = criteria;
        self.pagination.reset();
        self.selected_index = 0;
        self.no_results = self.matches.is_empty();

        tracing::debug!(
            matched = self.matches.len(),
            no_results = self.no_results,
            "criteria applied"
        );
    }

    pub fn open_search(&mut self) {
        self.search_form.focus_title();
        self.overlays.open_search();
    }

    /// Filters with the search form's values, then closes the overlay.
    pub fn submit_search(&mut self) {
        let criteria = self.search_form.to_criteria();
        self.apply_criteria(criteria);
        self.overlays.close(OverlayKind::Search);
    }

    /// Opens settings preset to the applied theme.
    pub fn open_settings(&mut self) {
        self.settings_form = SettingsForm::new(self.theme.name());
        self.overlays.open_settings();
    }

    /// Applies the settings value and closes the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`](crate::BookcaseError::NotFound) for
    /// an unknown theme value. The theme and overlay are left as they were.
    pub fn submit_settings(&mut self) -> Result<()> {
        self.theme.update(self.settings_form.value())?;
        self.overlays.close(OverlayKind::Settings);
        Ok(())
    }

    /// Opens the detail overlay for `id` if it names a catalog book.
    pub fn open_detail(&mut self, id: &str) -> bool {
        let resolved = match self.catalog.book(id) {
            Ok(book) => Some(book.id.as_str()),
            Err(e) => {
                tracing::debug!(error = %e, "detail request ignored");
                None
            }
        };
        self.overlays.open_detail(resolved)
    }

    /// Book shown in the detail overlay.
    #[must_use]
    pub fn active_book(&self) -> Option<&Book> {
        self.overlays
            .active_book()
            .and_then(|id| self.catalog.book(id).ok())
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let revealed = self.revealed();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(revealed.len());
        if visible_end - visible_start.min(visible_end) < available_rows
            && revealed.len() >= available_rows
        {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let tiles = revealed[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, book)| self.compute_tile(book, visible_start + offset, cols))
            .collect();

        let remaining = self.remaining();

        UIViewModel {
            tiles,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            show_more: ShowMoreInfo {
                label: format!("Show more ({remaining})"),
                enabled: remaining > 0,
            },
            empty_state: self.no_results.then(|| EmptyState {
                message: "No results found. Your filters might be too narrow.".to_string(),
                subtitle: "Press / to change the search".to_string(),
            }),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_tile(&self, book: &Book, absolute_idx: usize, cols: usize) -> TileItem {
        let preview = PreviewHandle::render(book, self.catalog.authors()).unwrap_or_else(|e| {
            tracing::debug!(book_id = %book.id, error = %e, "author unresolved");
            PreviewHandle {
                id: book.id.clone(),
                image: book.image.clone(),
                title: book.title.clone(),
                author: String::new(),
            }
        });

        let max_title = cols.saturating_sub(cols / 3).max(8);

        TileItem {
            id: preview.id,
            title: truncate(&preview.title, max_title),
            author: preview.author,
            image: preview.image,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.matches.len();
        let title = if self.criteria.is_wildcard() {
            format!(" Bookcase ({count}) ")
        } else {
            format!(" Bookcase: filtered ({count}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::List => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            InputMode::Search(_) => {
                "Tab: next field  ←/→: change choice  Enter: search  ESC: cancel"
            }
            InputMode::Settings => "←/→: change theme  Enter: save  ESC: cancel",
            InputMode::Detail => "ESC/Enter: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self) -> Option<OverlayView> {
        match self.overlays.topmost()? {
            OverlayKind::Search => Some(OverlayView::Search(SearchPanel {
                title: self.search_form.title.clone(),
                author: self.search_form.author.label().to_string(),
                genre: self.search_form.genre.label().to_string(),
                focus: self.search_form.focus(),
            })),
            OverlayKind::Settings => Some(OverlayView::Settings(SettingsPanel {
                options: ThemeName::ALL
                    .iter()
                    .map(|name| {
                        (
                            name.as_str().to_string(),
                            name.as_str() == self.settings_form.value(),
                        )
                    })
                    .collect(),
            })),
            OverlayKind::Detail => {
                let book = self.active_book()?;
                let author = self.catalog.author_name(&book.author).unwrap_or_default();
                Some(OverlayView::Detail(DetailPanel {
                    blur: book.image.clone(),
                    image: book.image.clone(),
                    title: book.title.clone(),
                    subtitle: format!("{author} ({})", book.published_year()),
                    description: book.description.clone(),
                }))
            }
        }
    }
}

/// Shortens `text` to `max` characters, ending in "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
