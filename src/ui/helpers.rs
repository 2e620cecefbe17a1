//! Shared rendering utilities.
//!
//! Cursor positioning, line painting and the framed box used by every overlay
//! panel. Widths are counted in `char`s.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads or cuts `text` to exactly `width` characters.
///
/// ```rust
/// use bookcase::ui::helpers::fit;
///
/// assert_eq!(fit("abc", 5), "abc  ");
/// assert_eq!(fit("abcdef", 4), "abc…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{text}{}", " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let kept: String = text.chars().take(width - 1).collect();
        format!("{kept}…")
    }
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars);
        line_len += word_len;
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Paints one full-width line in the palette's base colors.
pub fn paint_line(row: usize, text: &str, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}{}", theme.base(), fit(text, cols), Theme::reset());
}

/// Paints the whole pane background.
pub fn clear_pane(theme: &Theme, rows: usize, cols: usize) {
    for row in 1..=rows {
        paint_line(row, "", theme, cols);
    }
}

/// A framed panel centered in the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Frame {
    /// Centers a panel of `width` × `height` (clamped to the pane).
    #[must_use]
    pub fn centered(width: usize, height: usize, rows: usize, cols: usize) -> Self {
        let width = width.min(cols).max(4);
        let height = height.min(rows).max(3);
        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    /// Characters available on each inner line, borders and padding excluded.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Number of inner lines.
    #[must_use]
    pub const fn inner_height(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// Draws the border and blank interior, with `title` in the top edge.
    pub fn draw(&self, title: &str, theme: &Theme) {
        let span = self.width.saturating_sub(2);
        let border = Theme::fg(theme.palette().border());
        let bg = Theme::bg(theme.palette().light);

        position_cursor(self.top, self.left);
        let label = fit(&format!(" {title} "), span.min(title.chars().count() + 2));
        let rest = span.saturating_sub(label.chars().count() + 1);
        print!(
            "{bg}{border}┌─{}{label}{border}{}┐{}",
            Theme::bold(),
            "─".repeat(rest),
            Theme::reset()
        );

        for line in 1..self.height.saturating_sub(1) {
            position_cursor(self.top + line, self.left);
            print!("{bg}{border}│{}│{}", " ".repeat(span), Theme::reset());
        }

        position_cursor(self.top + self.height.saturating_sub(1), self.left);
        print!("{bg}{border}└{}┘{}", "─".repeat(span), Theme::reset());
    }

    /// Writes `text` on inner line `line` (0-indexed) using `style`.
    pub fn write(&self, line: usize, text: &str, style: &str) {
        if line >= self.inner_height() {
            return;
        }
        position_cursor(self.top + 1 + line, self.left + 2);
        print!("{style}{}{}", fit(text, self.inner_width()), Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("a quiet harbor town keeps its secrets", 12);
        assert_eq!(lines, ["a quiet", "harbor town", "keeps its", "secrets"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn centered_frame_fits_pane() {
        let frame = Frame::centered(60, 10, 24, 40);
        assert_eq!(frame.width, 40);
        assert_eq!(frame.left, 1);
        assert_eq!(frame.top, 8);
        assert_eq!(frame.inner_width(), 36);
        assert_eq!(frame.inner_height(), 8);
    }
}
