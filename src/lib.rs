//! Bookcase: a Zellij plugin for browsing a book catalog.
//!
//! Bookcase renders a paginated list of preview tiles for an in-memory catalog,
//! filters it by title, author and genre, switches between a day and a night
//! palette, and shows a detail panel for the selected book.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event dispatch, session state                    │
//! │  - Filter engine, pagination                        │
//! │  - Overlay and form state                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Domain        │
//! │ (ui/)         │   │ (source/)     │   │ (domain/)     │
//! │ - Rendering   │   │ - Embedded    │   │ - Book        │
//! │ - Day/night   │   │ - JSON file   │   │ - Catalog     │
//! │ - Previews    │   │               │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookcase.wasm" {
//!         catalog_file "~/books/catalog.json"
//!         color_scheme "dark"
//!         palette_file "~/.config/bookcase/palettes.toml"
//!         page_size "24"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Every key is optional. Without `catalog_file` the catalog compiled into the
//! plugin is used.
//!
//! # Example
//!
//! ```rust
//! use bookcase::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! for event in [Event::OpenSearch, Event::Char('s'), Event::SubmitSearch] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod source;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchField};
pub use domain::{Book, BookcaseError, Catalog, Result};
pub use ui::Theme;

use source::{CatalogSource, EmbeddedSource, JsonFileSource};
use std::collections::BTreeMap;
use ui::theme::Palettes;

/// Plugin configuration parsed from Zellij's plugin configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON to load instead of the embedded catalog. `~` maps to
    /// `/host`.
    pub catalog_file: Option<String>,

    /// Host preference for a dark color scheme (`color_scheme "dark"`).
    pub prefers_dark: bool,

    /// TOML file overriding some or all of the built-in palettes.
    pub palette_file: Option<String>,

    /// Overrides the catalog's `books_per_page`.
    pub page_size: Option<usize>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            prefers_dark: false,
            palette_file: None,
            page_size: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration with typed fallbacks.
    ///
    /// Unparsable or zero `page_size` values are ignored; any `color_scheme`
    /// other than `dark` counts as light.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookcase::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("color_scheme".to_string(), "dark".to_string()),
    ///     ("page_size".to_string(), "12".to_string()),
    /// ]);
    /// let config = Config::from_zellij(&map);
    /// assert!(config.prefers_dark);
    /// assert_eq!(config.page_size, Some(12));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let prefers_dark = config
            .get("color_scheme")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("dark"));

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);

        Self {
            catalog_file: non_empty("catalog_file"),
            prefers_dark,
            palette_file: non_empty("palette_file"),
            page_size,
            trace_level: non_empty("trace_level").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// The catalog source this configuration selects.
    #[must_use]
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_file {
            Some(path) => Box::new(JsonFileSource::new(infrastructure::expand_tilde(path))),
            None => Box::new(EmbeddedSource),
        }
    }

    fn palettes(&self) -> Palettes {
        self.palette_file.as_ref().map_or_else(Palettes::builtin, |file| {
            let path = infrastructure::expand_tilde(file);
            match Palettes::from_file(&path) {
                Ok(overrides) => Palettes::builtin().with_overrides(overrides),
                Err(e) => {
                    tracing::debug!(palette_file = %path, error = %e, "failed to load palettes, using built-in");
                    Palettes::builtin()
                }
            }
        })
    }
}

/// Loads the catalog and builds the initial session state.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or validated, or if the
/// palette table lacks the initial theme. The plugin treats either as fatal.
pub fn initialize(config: &Config) -> Result<AppState> {
    let source = config.catalog_source();
    tracing::debug!(source = %source.describe(), "initializing bookcase plugin");

    let mut catalog = source.load()?;
    if let Some(page_size) = config.page_size {
        catalog = catalog.with_books_per_page(page_size)?;
    }

    let theme = Theme::new(config.palettes(), config.prefers_dark)?;

    tracing::debug!(
        books = catalog.len(),
        books_per_page = catalog.books_per_page(),
        theme = %theme.name(),
        "catalog ready"
    );

    Ok(AppState::new(catalog, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::overlay::OverlayKind;
    use crate::app::FilterCriteria;
    use crate::ui::theme::{Rgb, ThemeName};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_CATALOG: &str = r#"{
        "books_per_page": 2,
        "authors": { "A1": "Ursula Wren", "A2": "Amos Reed" },
        "genres": { "G1": "Fantasy", "G7": "Biography" },
        "books": [
            { "id": "b1", "title": "The Salt Road", "image": "https://covers.example/b1.jpg",
              "description": "A caravan crosses the flats.", "published": "1998-06-14T00:00:00.000Z",
              "author": "A1", "genres": ["G1"] },
            { "id": "b2", "title": "A Life in Ink", "image": "https://covers.example/b2.jpg",
              "description": "The printer's memoir.", "published": "2004-01-02T00:00:00.000Z",
              "author": "A2", "genres": ["G7"] },
            { "id": "b3", "title": "Paper Harbor", "image": "https://covers.example/b3.jpg",
              "description": "Letters from a port town.", "published": "2011-09-30T00:00:00.000Z",
              "author": "A1", "genres": ["G1", "G7"] },
            { "id": "b4", "title": "Iron Orchard", "image": "https://covers.example/b4.jpg",
              "description": "Frost comes early.", "published": "2019-11-11T00:00:00.000Z",
              "author": "A2", "genres": ["G1"] },
            { "id": "b5", "title": "Salt and Silence", "image": "https://covers.example/b5.jpg",
              "description": "A lighthouse keeper's year.", "published": "2021-03-03T00:00:00.000Z",
              "author": "A1", "genres": ["G1"] }
        ]
    }"#;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn small_state() -> (AppState, NamedTempFile) {
        let file = temp_file(SMALL_CATALOG);
        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        (initialize(&config).unwrap(), file)
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn select_genre(state: &mut AppState, genre: &str) {
        send(state, &[Event::OpenSearch]);
        assert!(state.search_form.genre.select(genre) || genre == "any");
        send(state, &[Event::SubmitSearch]);
    }

    #[test]
    fn forty_books_reveal_in_two_pages() {
        let mut state = initialize(&Config::default()).unwrap();
        assert_eq!(state.catalog.len(), 40);
        assert_eq!(state.catalog.books_per_page(), 36);

        assert_eq!(state.revealed().len(), 36);
        assert_eq!(state.remaining(), 4);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.show_more.label, "Show more (4)");
        assert!(vm.show_more.enabled);

        send(&mut state, &[Event::ShowMore]);
        assert_eq!(state.pagination.visible_slice(&state.matches).len(), 4);
        assert_eq!(state.revealed().len(), 40);
        assert_eq!(state.remaining(), 0);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.show_more.label, "Show more (0)");
        assert!(!vm.show_more.enabled);

        send(&mut state, &[Event::ShowMore]);
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.revealed().len(), 40);
    }

    #[test]
    fn genre_filter_and_no_results_flag() {
        let (mut state, _file) = small_state();

        select_genre(&mut state, "G7");
        let ids: Vec<&str> = state.matches.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b2", "b3"]);
        assert!(!state.no_results);
        assert!(state.compute_viewmodel(24, 80).empty_state.is_none());

        send(&mut state, &[Event::OpenSearch]);
        state.search_form.title = "no such title".to_string();
        send(&mut state, &[Event::SubmitSearch]);
        assert!(state.matches.is_empty());
        assert!(state.no_results);
        assert_eq!(state.remaining(), 0);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(!vm.show_more.enabled);
    }

    #[test]
    fn wildcard_criteria_return_full_catalog() {
        let (mut state, _file) = small_state();
        select_genre(&mut state, "G7");
        assert_eq!(state.matches.len(), 2);

        send(&mut state, &[Event::OpenSearch]);
        state.search_form.title = "   ".to_string();
        assert!(state.search_form.genre.select("any"));
        send(&mut state, &[Event::SubmitSearch]);
        assert_eq!(state.matches, state.catalog.books());
    }

    #[test]
    fn filtering_resets_page_cursor() {
        let (mut state, _file) = small_state();
        send(&mut state, &[Event::ShowMore, Event::ShowMore, Event::MoveDown]);
        assert_eq!(state.pagination.page(), 3);

        send(&mut state, &[Event::OpenSearch, Event::Char('s'), Event::Char('a'), Event::SubmitSearch]);
        assert_eq!(state.pagination.page(), 1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.matches.len(), 2);
        assert_eq!(state.input_mode(), InputMode::List);
    }

    #[test]
    fn dark_preference_selects_night_palette() {
        let config = Config {
            prefers_dark: true,
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name(), ThemeName::Night);
        assert_eq!(state.theme.palette().dark, Rgb(255, 255, 255));
        assert_eq!(state.theme.palette().light, Rgb(10, 10, 20));
    }

    #[test]
    fn unknown_tile_id_keeps_detail_closed() {
        let (mut state, _file) = small_state();
        let (render, actions) =
            handle_event(&mut state, &Event::OpenPreview { id: "b404".to_string() }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.overlays.is_open(OverlayKind::Detail));

        send(&mut state, &[Event::OpenPreview { id: "b3".to_string() }]);
        assert_eq!(state.active_book().map(|b| b.title.as_str()), Some("Paper Harbor"));
    }

    #[test]
    fn unknown_settings_value_is_not_found() {
        let (mut state, _file) = small_state();
        send(&mut state, &[Event::OpenSettings]);
        state.settings_form.set_value("sepia");

        let err = handle_event(&mut state, &Event::SubmitSettings).unwrap_err();
        assert!(matches!(err, BookcaseError::NotFound { kind: "theme", .. }));
        assert_eq!(state.theme.name(), ThemeName::Day);
        assert!(state.overlays.is_open(OverlayKind::Settings));
    }

    #[test]
    fn catalog_without_books_is_fatal() {
        let file = temp_file(r#"{ "authors": {}, "genres": {} }"#);
        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let err = initialize(&config).unwrap_err();
        assert!(matches!(err, BookcaseError::Catalog(ref msg) if msg == "Source required"));
    }

    #[test]
    fn page_size_override_applies() {
        let config = Config {
            page_size: Some(10),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.revealed().len(), 10);
        assert_eq!(state.remaining(), 30);
    }

    #[test]
    fn biography_genre_matches_two_embedded_books() {
        let mut state = initialize(&Config::default()).unwrap();
        select_genre(&mut state, "g7");

        let ids: Vec<&str> = state.matches.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b015", "b038"]);
        assert!(!state.no_results);
        assert_eq!(state.remaining(), 0);
        assert!(state.compute_viewmodel(30, 100).empty_state.is_none());
    }

    #[test]
    fn unknown_genre_id_sets_no_results() {
        let mut state = initialize(&Config::default()).unwrap();
        state.apply_criteria(FilterCriteria::from_form("", "any", "G99"));

        assert!(state.matches.is_empty());
        assert!(state.no_results);
        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.empty_state.is_some());
        assert_eq!(vm.show_more.label, "Show more (0)");
        assert!(!vm.show_more.enabled);
    }

    #[test]
    fn palette_file_with_one_theme_keeps_the_other_builtin() {
        let file = temp_file("[night]\ndark = [200, 200, 200]\nlight = [0, 0, 0]\n");
        let config = Config {
            palette_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let mut state = initialize(&config).unwrap();
        assert_eq!(state.theme.name(), ThemeName::Day);
        assert_eq!(state.theme.palette().dark, Rgb(10, 10, 20));

        send(&mut state, &[Event::OpenSettings]);
        state.settings_form.set_value("night");
        send(&mut state, &[Event::SubmitSettings]);
        assert_eq!(state.theme.name(), ThemeName::Night);
        assert_eq!(state.theme.palette().dark, Rgb(200, 200, 200));
    }
}
