//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain. Data
//! flows one way:
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: title/author/genre predicate over the catalog
//! - [`pagination`]: page cursor and result slicing
//! - [`overlay`]: open/closed state of the search, settings and detail panels
//! - [`forms`]: raw search and settings form values
//! - [`modes`]: input modes derived from the overlay stack
//! - [`state`]: session state and view model computation
//! - [`handler`]: the event dispatcher
//! - [`actions`]: side effects for the runtime

pub mod actions;
pub mod filter;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod overlay;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use filter::{apply_filter, FilterCriteria, Selection};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchField};
pub use state::AppState;
