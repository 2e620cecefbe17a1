//! Footer component renderer.
//!
//! Keybinding hints, centered and drawn in the dimmed text color. Text wider
//! than the pane is cut.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text_len = footer.keybindings.chars().count().min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.palette().dim()));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&footer.keybindings, cols.saturating_sub(padding)));
    print!("{}", Theme::reset());
    row + 1
}
