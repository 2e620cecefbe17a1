//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar with the result count
//! - [`footer`]: keybinding hints
//! - [`tiles`]: preview tile list and the "show more" control
//! - [`empty`]: "no results" message
//! - [`search`], [`settings`], [`detail`]: overlay panels
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Tiles | No results]
//! [Show more]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! Overlay panels are drawn last, centered over the list.

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod settings;
mod tiles;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayView, UIViewModel};

use detail::render_detail_panel;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_panel;
use settings::render_settings_panel;
use tiles::{render_show_more, render_tiles};

/// Renders a horizontal border line. Returns the next free row.
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bg(theme.palette().light));
    print!("{}", Theme::fg(theme.palette().border()));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the list layout: header, tiles (or the no-results message), the
/// show-more control and the footer.
pub fn render_list(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);

    current_row = match &vm.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_tiles(current_row, &vm.tiles, theme, cols),
    };
    render_show_more(current_row, &vm.show_more, theme, cols);

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Draws the overlay panel, if any, over the list.
pub fn render_overlay(overlay: &OverlayView, theme: &Theme, cols: usize, rows: usize) {
    match overlay {
        OverlayView::Search(panel) => render_search_panel(panel, theme, rows, cols),
        OverlayView::Settings(panel) => render_settings_panel(panel, theme, rows, cols),
        OverlayView::Detail(panel) => render_detail_panel(panel, theme, rows, cols),
    }
}
