//! Event dispatch and state transitions.
//!
//! Every user action arrives as one [`Event`] and is consumed by
//! [`handle_event`], which mutates [`AppState`] and reports whether a re-render
//! is needed together with the side effects to run.
//!
//! Events that do not apply to the current input mode (typing while no search
//! is open, submitting settings that are not on top, showing more behind an
//! overlay) are accepted and ignored without a render.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event};
//! use bookcase::source::{CatalogSource, EmbeddedSource};
//! use bookcase::ui::theme::Theme;
//!
//! let mut state = AppState::new(EmbeddedSource.load()?, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ShowMore)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use super::modes::InputMode;
use super::overlay::OverlayKind;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// User commands, one per key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the tile selection down (wraps to top).
    MoveDown,
    /// Moves the tile selection up (wraps to bottom).
    MoveUp,
    /// Reveals the next page of results.
    ShowMore,

    /// Opens the search overlay with the title field focused.
    OpenSearch,
    /// Closes the search overlay without filtering.
    CloseSearch,
    /// Filters with the search form's values.
    SubmitSearch,
    /// Types into the focused text field.
    Char(char),
    /// Deletes from the focused text field.
    Backspace,
    /// Focuses the next search field.
    NextField,
    /// Focuses the previous search field.
    PrevField,
    /// Steps the focused choice (search select or settings theme).
    CycleOption {
        /// `true` for the next option, `false` for the previous one.
        forward: bool,
    },

    /// Opens the settings overlay preset to the applied theme.
    OpenSettings,
    /// Closes the settings overlay without applying.
    CloseSettings,
    /// Applies the settings form's theme value.
    SubmitSettings,

    /// Opens the detail overlay for a tile id. Unknown ids are ignored.
    OpenPreview {
        /// Identifier carried by the tile.
        id: String,
    },
    /// Opens the detail overlay for the selected tile.
    OpenSelected,
    /// Closes the detail overlay.
    CloseDetail,

    /// Hides the plugin.
    CloseFocus,
}

/// Processes one event.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`BookcaseError::NotFound`](crate::BookcaseError::NotFound) when the
/// settings form holds an unknown theme value. State is unchanged in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ShowMore => {
            if state.input_mode() != InputMode::List {
                return Ok((false, vec![]));
            }
            state.show_more();
            Ok((true, vec![]))
        }
        Event::OpenSearch => {
            tracing::debug!("opening search");
            state.open_search();
            Ok((true, vec![]))
        }
        Event::CloseSearch => {
            if !receives_input(state, OverlayKind::Search) {
                return Ok((false, vec![]));
            }
            state.overlays.close(OverlayKind::Search);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if !receives_input(state, OverlayKind::Search) {
                return Ok((false, vec![]));
            }
            tracing::debug!(
                title = %state.search_form.title,
                author = %state.search_form.author.value(),
                genre = %state.search_form.genre.value(),
                "submitting search"
            );
            state.submit_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            let changed = state.search_form.push_char(*c);
            tracing::trace!(query = %state.search_form.title, char = %c, "title updated");
            Ok((changed, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            Ok((state.search_form.backspace(), vec![]))
        }
        Event::NextField => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_form.next_field();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_form.prev_field();
            Ok((true, vec![]))
        }
        Event::CycleOption { forward } => match state.input_mode() {
            InputMode::Search(_) => Ok((state.search_form.cycle(*forward), vec![])),
            InputMode::Settings => {
                state.settings_form.cycle(*forward);
                Ok((true, vec![]))
            }
            InputMode::List | InputMode::Detail => Ok((false, vec![])),
        },
        Event::OpenSettings => {
            state.open_settings();
            Ok((true, vec![]))
        }
        Event::CloseSettings => {
            if !receives_input(state, OverlayKind::Settings) {
                return Ok((false, vec![]));
            }
            state.overlays.close(OverlayKind::Settings);
            Ok((true, vec![]))
        }
        Event::SubmitSettings => {
            if !receives_input(state, OverlayKind::Settings) {
                return Ok((false, vec![]));
            }
            state.submit_settings()?;
            tracing::debug!(theme = %state.theme.name(), "settings applied");
            Ok((true, vec![]))
        }
        Event::OpenPreview { id } => Ok((state.open_detail(id), vec![])),
        Event::OpenSelected => {
            let Some(id) = state.selected_book().map(|book| book.id.clone()) else {
                tracing::debug!("no tile selected");
                return Ok((false, vec![]));
            };
            Ok((state.open_detail(&id), vec![]))
        }
        Event::CloseDetail => {
            if !receives_input(state, OverlayKind::Detail) {
                return Ok((false, vec![]));
            }
            state.overlays.close(OverlayKind::Detail);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Whether `kind` is the overlay currently taking input.
fn receives_input(state: &AppState, kind: OverlayKind) -> bool {
    state.overlays.topmost() == Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookRecord, Catalog, CatalogData};
    use crate::ui::theme::{Theme, ThemeName};
    use crate::BookcaseError;
    use std::collections::BTreeMap;

    fn state() -> AppState {
        let books = ["The Salt Road", "Salt and Silence", "Paper Harbor"]
            .iter()
            .enumerate()
            .map(|(i, title)| BookRecord {
                id: format!("b{i}"),
                title: (*title).to_string(),
                image: String::new(),
                description: String::new(),
                published: "1999-09-09T00:00:00Z".to_string(),
                author: "a1".to_string(),
                genres: vec!["g1".to_string()],
            })
            .collect();
        let catalog = Catalog::new(CatalogData {
            books_per_page: 2,
            authors: BTreeMap::from([("a1".to_string(), "Ursula Wren".to_string())]),
            genres: BTreeMap::from([("g1".to_string(), "Fantasy".to_string())]),
            books,
        })
        .unwrap();
        AppState::new(catalog, Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn typed_search_filters_on_submit() {
        let mut state = state();
        send(
            &mut state,
            &[
                Event::OpenSearch,
                Event::Char('s'),
                Event::Char('a'),
                Event::Char('l'),
                Event::Char('t'),
            ],
        );
        assert_eq!(state.input_mode(), InputMode::Search(crate::app::SearchField::Title));
        assert_eq!(state.matches.len(), 3);

        send(&mut state, &[Event::SubmitSearch]);
        assert_eq!(state.matches.len(), 2);
        assert_eq!(state.input_mode(), InputMode::List);
    }

    #[test]
    fn chars_ignored_outside_search() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_form.title.is_empty());
    }

    #[test]
    fn search_form_survives_reopening() {
        let mut state = state();
        send(
            &mut state,
            &[Event::OpenSearch, Event::Char('p'), Event::NextField, Event::CloseSearch],
        );
        send(&mut state, &[Event::OpenSearch]);
        assert_eq!(state.search_form.title, "p");
        assert_eq!(state.input_mode(), InputMode::Search(crate::app::SearchField::Title));
    }

    #[test]
    fn unknown_settings_value_errors() {
        let mut state = state();
        send(&mut state, &[Event::OpenSettings]);
        state.settings_form.set_value("sepia");
        let err = handle_event(&mut state, &Event::SubmitSettings).unwrap_err();
        assert!(matches!(err, BookcaseError::NotFound { kind: "theme", .. }));
        assert_eq!(state.theme.name(), ThemeName::Day);
    }

    #[test]
    fn settings_cycle_and_submit() {
        let mut state = state();
        send(
            &mut state,
            &[
                Event::OpenSettings,
                Event::CycleOption { forward: true },
                Event::SubmitSettings,
            ],
        );
        assert_eq!(state.theme.name(), ThemeName::Night);
        assert!(!state.overlays.is_open(OverlayKind::Settings));
    }

    #[test]
    fn preview_requires_known_id() {
        let mut state = state();
        let (render, _) =
            handle_event(&mut state, &Event::OpenPreview { id: "nope".to_string() }).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode(), InputMode::List);

        send(&mut state, &[Event::MoveDown, Event::OpenSelected]);
        assert_eq!(state.overlays.active_book(), Some("b1"));
        send(&mut state, &[Event::CloseDetail]);
        assert!(state.overlays.active_book().is_none());
    }

    #[test]
    fn overlay_commands_ignored_when_overlay_not_on_top() {
        let mut state = state();
        state.search_form.title = "paper".to_string();
        state.settings_form.set_value("night");

        for event in [
            Event::SubmitSearch,
            Event::CloseSearch,
            Event::SubmitSettings,
            Event::CloseSettings,
            Event::CloseDetail,
        ] {
            let (render, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!render, "{event:?}");
            assert!(actions.is_empty());
        }
        assert_eq!(state.matches.len(), 3);
        assert_eq!(state.theme.name(), ThemeName::Day);

        send(&mut state, &[Event::OpenSearch, Event::OpenSettings]);
        let (render, _) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert!(!render);
        assert!(state.overlays.is_open(OverlayKind::Search));
        assert_eq!(state.matches.len(), 3);
    }

    #[test]
    fn show_more_ignored_behind_overlay() {
        let mut state = state();
        send(&mut state, &[Event::OpenSearch]);
        let (render, _) = handle_event(&mut state, &Event::ShowMore).unwrap();
        assert!(!render);
        assert_eq!(state.pagination.page(), 1);

        send(&mut state, &[Event::CloseSearch, Event::ShowMore]);
        assert_eq!(state.pagination.page(), 2);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
