//! Settings overlay renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsPanel;

/// Renders the theme choice as a row of radio options.
pub fn render_settings_panel(panel: &SettingsPanel, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(40, 6, rows, cols);
    frame.draw("Settings", theme);

    frame.write(0, "Theme", &theme.base());
    let choices: Vec<String> = panel
        .options
        .iter()
        .map(|(name, chosen)| {
            let mark = if *chosen { '●' } else { '○' };
            format!("{mark} {name}")
        })
        .collect();
    frame.write(2, &choices.join("    "), &format!("{}{}", theme.base(), Theme::bold()));
}
