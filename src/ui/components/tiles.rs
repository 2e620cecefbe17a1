//! Preview tile list renderer.
//!
//! Each tile is one row: a marker, the title, and the author name right-aligned
//! in the last third of the pane. The selected tile is drawn in inverted
//! colors across the full width.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ShowMoreInfo, TileItem};

/// Renders the tile rows starting at `row`. Returns the next free row.
pub fn render_tiles(row: usize, tiles: &[TileItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for tile in tiles {
        current_row = render_tile(current_row, tile, theme, cols);
    }
    current_row
}

fn render_tile(row: usize, tile: &TileItem, theme: &Theme, cols: usize) -> usize {
    let author_width = cols / 3;
    let title_width = cols.saturating_sub(author_width + 2);

    position_cursor(row, 1);
    if tile.is_selected {
        print!("{}▌ ", theme.inverted());
    } else {
        print!("{}  ", theme.base());
    }

    print!("{}", fit(&tile.title, title_width));

    if !tile.is_selected {
        print!("{}", Theme::fg(theme.palette().dim()));
    }
    let author = fit(&tile.author, author_width);
    print!("{:>width$}", author.trim_end(), width = author_width);

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the "show more" control. Dimmed when disabled.
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base());
    if show_more.enabled {
        print!("{}", Theme::bold());
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(theme.palette().dim()));
    }
    print!("{}", fit(&format!("  [ {} ]", show_more.label), cols));
    print!("{}", Theme::reset());
    row + 1
}
