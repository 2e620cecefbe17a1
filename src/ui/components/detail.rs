//! Detail overlay renderer.
//!
//! Shows the cover and backdrop references, title, `author (year)` subtitle
//! and a wrapped description. Lines that do not fit the panel are dropped.

use crate::ui::helpers::{wrap, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

/// Renders the detail panel, using most of the pane.
pub fn render_detail_panel(panel: &DetailPanel, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(cols.saturating_sub(8).max(40), rows.saturating_sub(4), rows, cols);
    frame.draw("Details", theme);

    let dim = format!("{}{}", theme.base(), Theme::fg(theme.palette().dim()));
    for (row, line) in reference_lines(panel).iter().enumerate() {
        frame.write(row, line, &dim);
    }

    frame.write(2, &panel.title, &format!("{}{}", theme.base(), Theme::bold()));
    frame.write(3, &panel.subtitle, &dim);

    for (offset, line) in wrap(&panel.description, frame.inner_width()).iter().enumerate() {
        frame.write(5 + offset, line, &theme.base());
    }
}

/// The cover and backdrop lines at the top of the panel.
fn reference_lines(panel: &DetailPanel) -> [String; 2] {
    [
        format!("cover: {}", panel.image),
        format!("backdrop: {}", panel.blur),
    ]
}
