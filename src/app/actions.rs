//! Side effects requested by the event handler.
//!
//! Everything the handler does to the session is a plain state mutation; the
//! only effect that needs the plugin runtime is hiding the pane.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane (the user pressed `q` in the list).
    CloseFocus,
}
