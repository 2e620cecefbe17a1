//! Search overlay renderer.
//!
//! ```text
//! ┌─ Search ──────────────────────────┐
//! │  Title:   salt▏                    │
//! │  Author:  ‹ All Authors ›         │
//! │  Genre:   ‹ Biography ›           │
//! └───────────────────────────────────┘
//! ```

use crate::app::modes::SearchField;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchPanel;

const PANEL_WIDTH: usize = 60;

/// Renders the search panel centered over the list.
pub fn render_search_panel(panel: &SearchPanel, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(PANEL_WIDTH, 7, rows, cols);
    frame.draw("Search", theme);

    let fields = [
        (SearchField::Title, "Title: ", format!("{}▏", panel.title)),
        (SearchField::Author, "Author:", format!("‹ {} ›", panel.author)),
        (SearchField::Genre, "Genre: ", format!("‹ {} ›", panel.genre)),
    ];

    for (line, (field, label, value)) in fields.iter().enumerate() {
        let style = if *field == panel.focus {
            format!("{}{}", theme.inverted(), Theme::bold())
        } else {
            theme.base()
        };
        frame.write(line + 1, &format!("{label}  {value}"), &style);
    }
}
