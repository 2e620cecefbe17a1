//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Bookcase library and the Zellij plugin
//! system: it maps key presses to library [`Event`]s, runs the returned
//! actions and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, load the catalog
//! 2. **Subscribe**: register for `Key` events
//! 3. **Update**: map keys to events, delegate to `handle_event`
//! 4. **Render**: call the library renderer
//!
//! A catalog that fails to load leaves the plugin showing only the startup
//! error; keys are ignored from then on.
//!
//! # Keybindings
//!
//! List:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Show details
//! - `m`/`Space`: Show more
//! - `/`: Search
//! - `s`: Settings
//! - `q`: Close plugin
//!
//! Search:
//! - Characters: Type into the title
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Change field
//! - `Left`/`Right`: Change author or genre
//! - `Enter`: Apply filters
//! - `Esc`: Cancel
//!
//! Settings:
//! - `Left`/`Right`/`j`/`k`: Change theme
//! - `Enter`: Save
//! - `Esc`: Cancel
//!
//! Details:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookcase::{handle_event, Action, AppState, Config, Event, InputMode, Theme};

register_plugin!(State);

/// Plugin state wrapper.
#[derive(Default)]
struct State {
    /// Session state; `None` until load succeeds.
    app: Option<AppState>,

    /// Fatal startup error, rendered in place of the UI.
    startup_error: Option<String>,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookcase::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");

        match bookcase::initialize(&config) {
            Ok(app) => {
                self.app = Some(app);
                tracing::debug!("app state initialized");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to start");
                self.startup_error = Some(e.to_string());
            }
        }

        subscribe(&[EventType::Key]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update_event", key = ?key.bare_key);
        let _guard = span.entered();

        let Some(app) = self.app.as_mut() else {
            return false;
        };
        let Some(our_event) = map_key_event(app.input_mode(), &key) else {
            return false;
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match (&self.app, &self.startup_error) {
            (Some(app), _) => bookcase::ui::render(app, rows, cols),
            (None, Some(message)) => {
                bookcase::ui::render_startup_error(message, &Theme::default(), rows, cols);
            }
            (None, None) => {}
        }
    }
}

/// Maps a key press to a library event for the current input mode.
fn map_key_event(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, mode = ?mode, "key event");

    let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
    let shift = key.has_modifiers(&[KeyModifier::Shift]);

    match mode {
        InputMode::List => match key.bare_key {
            BareKey::Char('n') if ctrl => Some(Event::MoveDown),
            BareKey::Char('p') if ctrl => Some(Event::MoveUp),
            BareKey::Down | BareKey::Char('j') => Some(Event::MoveDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::MoveUp),
            BareKey::Enter => Some(Event::OpenSelected),
            BareKey::Char('m' | ' ') => Some(Event::ShowMore),
            BareKey::Char('/') => Some(Event::OpenSearch),
            BareKey::Char('s') => Some(Event::OpenSettings),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        },
        InputMode::Search(_) => match key.bare_key {
            BareKey::Esc => Some(Event::CloseSearch),
            BareKey::Enter => Some(Event::SubmitSearch),
            BareKey::Tab if shift => Some(Event::PrevField),
            BareKey::Tab | BareKey::Down => Some(Event::NextField),
            BareKey::Up => Some(Event::PrevField),
            BareKey::Left => Some(Event::CycleOption { forward: false }),
            BareKey::Right => Some(Event::CycleOption { forward: true }),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) if !ctrl => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Settings => match key.bare_key {
            BareKey::Esc => Some(Event::CloseSettings),
            BareKey::Enter => Some(Event::SubmitSettings),
            BareKey::Left | BareKey::Up | BareKey::Char('k') => {
                Some(Event::CycleOption { forward: false })
            }
            BareKey::Right | BareKey::Down | BareKey::Char('j') => {
                Some(Event::CycleOption { forward: true })
            }
            _ => None,
        },
        InputMode::Detail => match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
            _ => None,
        },
    }
}

/// Runs an action returned from event handling.
fn execute_action(action: Action) {
    match action {
        Action::CloseFocus => {
            tracing::debug!("closing plugin focus");
            hide_self();
        }
    }
}
