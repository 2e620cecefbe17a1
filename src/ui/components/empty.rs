//! "No results" message shown in place of the tile list.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn centered(row: usize, text: &str, style: &str, theme: &Theme, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}{style}", theme.base());
    print!("{}", " ".repeat(padding));
    print!("{}", fit(text, cols.saturating_sub(padding)));
    print!("{}", Theme::reset());
}

/// Renders the message and subtitle, centered, starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    centered(row + 2, &empty.message, Theme::bold(), theme, cols);
    let dim = format!("{}{}", Theme::dim(), Theme::fg(theme.palette().dim()));
    centered(row + 3, &empty.subtitle, &dim, theme, cols);
    row + 4
}
