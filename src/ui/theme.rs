//! Theme selection and ANSI escape sequence generation.
//!
//! Bookcase has two named palettes, `day` and `night`. Each palette is an
//! ordered pair of RGB colors: `dark` (used for text) and `light` (used for the
//! pane background). The palette table is keyed directly by theme name and can
//! be overridden from a TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! [day]
//! dark = [10, 10, 20]
//! light = [255, 255, 255]
//!
//! [night]
//! dark = [255, 255, 255]
//! light = [10, 10, 20]
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::theme::{Palettes, Theme, ThemeName};
//!
//! let theme = Theme::new(Palettes::builtin(), true)?;
//! assert_eq!(theme.name(), ThemeName::Night);
//! print!("{}text{}", Theme::fg(theme.palette().dark), Theme::reset());
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use crate::domain::error::{BookcaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name of one of the two palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Day,
    Night,
}

impl ThemeName {
    /// Both names, in the order the settings form offers them.
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = BookcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(BookcaseError::not_found("theme", other)),
        }
    }
}

/// An RGB triple, written as `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear mix of two colors; `weight` is the share of `other` in `0..=100`.
    #[must_use]
    pub fn blend(self, other: Self, weight: u8) -> Self {
        let weight = u16::from(weight.min(100));
        let mix = |a: u8, b: u8| {
            let value = (u16::from(a) * (100 - weight) + u16::from(b) * weight) / 100;
            u8::try_from(value).unwrap_or(u8::MAX)
        };
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// The (dark, light) color pair applied to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Palette {
    /// Secondary text (footer hints, subtitles).
    #[must_use]
    pub fn dim(&self) -> Rgb {
        self.dark.blend(self.light, 45)
    }

    /// Separator lines and overlay frames.
    #[must_use]
    pub fn border(&self) -> Rgb {
        self.dark.blend(self.light, 70)
    }
}

/// Palette table keyed by theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palettes(BTreeMap<ThemeName, Palette>);

impl Palettes {
    /// The palettes compiled into the plugin.
    ///
    /// # Panics
    ///
    /// Panics if the bundled TOML fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(include_str!("../../themes/palettes.toml"))
            .expect("Built-in palettes should always parse")
    }

    /// Parses a palette table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Theme`] on invalid TOML, unknown theme names or
    /// malformed colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let raw: BTreeMap<String, Palette> = toml::from_str(contents)
            .map_err(|e| BookcaseError::Theme(format!("Failed to parse palette TOML: {e}")))?;

        raw.into_iter()
            .map(|(key, palette)| {
                key.parse::<ThemeName>()
                    .map(|name| (name, palette))
                    .map_err(|_| BookcaseError::Theme(format!("Unknown palette name: {key}")))
            })
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Loads a palette table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookcaseError::Theme(format!("Failed to read palette file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Replaces entries with those defined in `overrides`; themes it leaves
    /// out keep their current palette.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Self) -> Self {
        self.0.extend(overrides.0);
        self
    }

    /// Looks up the palette for a theme.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if the table has no entry for `name`.
    pub fn get(&self, name: ThemeName) -> Result<Palette> {
        self.0
            .get(&name)
            .copied()
            .ok_or_else(|| BookcaseError::not_found("palette", name.as_str()))
    }
}

/// Picks the startup theme from the host's dark-mode preference.
#[must_use]
pub const fn select_initial_theme(prefers_dark: bool) -> ThemeName {
    if prefers_dark {
        ThemeName::Night
    } else {
        ThemeName::Day
    }
}

/// Currently applied theme plus the table it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    palettes: Palettes,
    name: ThemeName,
    palette: Palette,
}

impl Theme {
    /// Selects the initial theme and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if the palette table lacks the
    /// selected theme.
    pub fn new(palettes: Palettes, prefers_dark: bool) -> Result<Self> {
        let name = select_initial_theme(prefers_dark);
        let palette = palettes.get(name)?;
        tracing::debug!(theme = %name, prefers_dark, "initial theme selected");
        Ok(Self {
            palettes,
            name,
            palette,
        })
    }

    /// Re-applies a theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] if the table has no such palette. The
    /// current theme is left untouched on error.
    pub fn apply(&mut self, name: ThemeName) -> Result<Palette> {
        let palette = self.palettes.get(name)?;
        self.name = name;
        self.palette = palette;
        tracing::debug!(theme = %name, dark = %palette.dark, light = %palette.light, "theme applied");
        Ok(palette)
    }

    /// Re-applies a theme from a raw settings-form value (`"day"` / `"night"`).
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::NotFound`] for unknown values.
    pub fn update(&mut self, selection: &str) -> Result<Palette> {
        let name = selection.trim().parse::<ThemeName>()?;
        self.apply(name)
    }

    #[must_use]
    pub const fn name(&self) -> ThemeName {
        self.name
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        format!("\u{001b}[38;2;{};{};{}m", color.0, color.1, color.2)
    }

    /// 24-bit background escape sequence.
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        format!("\u{001b}[48;2;{};{};{}m", color.0, color.1, color.2)
    }

    /// Text and background colors of the palette in one sequence.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}{}", Self::fg(self.palette.dark), Self::bg(self.palette.light))
    }

    /// Inverted colors for the selected tile.
    #[must_use]
    pub fn inverted(&self) -> String {
        format!("{}{}", Self::fg(self.palette.light), Self::bg(self.palette.dark))
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        let palettes = Palettes::builtin();
        let palette = palettes
            .get(ThemeName::Day)
            .unwrap_or(Palette {
                dark: Rgb(10, 10, 20),
                light: Rgb(255, 255, 255),
            });
        Self {
            palettes,
            name: ThemeName::Day,
            palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_preference_selects_night() {
        assert_eq!(select_initial_theme(true), ThemeName::Night);
        assert_eq!(select_initial_theme(false), ThemeName::Day);

        let theme = Theme::new(Palettes::builtin(), true).unwrap();
        assert_eq!(theme.name(), ThemeName::Night);
        assert_eq!(theme.palette().dark, Rgb(255, 255, 255));
        assert_eq!(theme.palette().light, Rgb(10, 10, 20));
    }

    #[test]
    fn day_palette_values() {
        let theme = Theme::new(Palettes::builtin(), false).unwrap();
        assert_eq!(
            theme.palette(),
            Palette {
                dark: Rgb(10, 10, 20),
                light: Rgb(255, 255, 255),
            }
        );
        assert_eq!(theme.palette().dark.to_string(), "10, 10, 20");
    }

    #[test]
    fn update_by_raw_value() {
        let mut theme = Theme::new(Palettes::builtin(), false).unwrap();
        let palette = theme.update("night").unwrap();
        assert_eq!(theme.name(), ThemeName::Night);
        assert_eq!(palette.dark, Rgb(255, 255, 255));
    }

    #[test]
    fn unknown_value_keeps_current_theme() {
        let mut theme = Theme::new(Palettes::builtin(), false).unwrap();
        let err = theme.update("sepia").unwrap_err();
        assert!(matches!(err, BookcaseError::NotFound { kind: "theme", .. }));
        assert_eq!(theme.name(), ThemeName::Day);
    }

    #[test]
    fn partial_table_reports_missing_palette() {
        let palettes = Palettes::from_toml("[day]\ndark = [0, 0, 0]\nlight = [250, 250, 250]\n")
            .unwrap();
        assert!(Theme::new(palettes.clone(), false).is_ok());
        assert!(matches!(
            Theme::new(palettes, true),
            Err(BookcaseError::NotFound { kind: "palette", .. })
        ));
    }

    #[test]
    fn overrides_keep_missing_builtin_entries() {
        let overrides =
            Palettes::from_toml("[night]\ndark = [200, 200, 200]\nlight = [0, 0, 0]\n").unwrap();
        let palettes = Palettes::builtin().with_overrides(overrides);

        assert_eq!(palettes.get(ThemeName::Night).unwrap().dark, Rgb(200, 200, 200));
        assert_eq!(
            palettes.get(ThemeName::Day).unwrap(),
            Palettes::builtin().get(ThemeName::Day).unwrap()
        );
    }

    #[test]
    fn rejects_unknown_theme_keys() {
        let err = Palettes::from_toml("[sepia]\ndark = [0, 0, 0]\nlight = [1, 1, 1]\n")
            .unwrap_err();
        assert!(matches!(err, BookcaseError::Theme(_)));
    }

    #[test]
    fn blend_endpoints() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);
        assert_eq!(black.blend(white, 0), black);
        assert_eq!(black.blend(white, 100), white);
        assert_eq!(black.blend(white, 50), Rgb(127, 127, 127));
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg(Rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(Rgb(1, 2, 3)), "\u{1b}[48;2;1;2;3m");
    }
}
