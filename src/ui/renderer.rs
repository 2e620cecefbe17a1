//! Top-level rendering coordinator.
//!
//! Computes the view model from state, paints the pane background in the
//! active palette, draws the list and then the topmost overlay.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{clear_pane, paint_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    clear_pane(theme, rows, cols);
    components::render_list(vm, theme, cols, rows);

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, cols, rows);
    }
}

/// Renders a fatal startup error as the only content of the pane.
pub fn render_startup_error(message: &str, theme: &Theme, rows: usize, cols: usize) {
    clear_pane(theme, rows, cols);
    paint_line(2, &format!(" {message}"), theme, cols);
}
