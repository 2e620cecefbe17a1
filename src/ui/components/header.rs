//! Header component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold title bar. Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}{}", theme.base(), Theme::bold());
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&header.title, cols.saturating_sub(padding)));
    print!("{}", Theme::reset());
    row + 1
}
