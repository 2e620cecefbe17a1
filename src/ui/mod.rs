//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable UI state
//! - [`preview`]: tile data for one book
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: component renderers
//! - [`helpers`]: cursor, padding, wrapping and framed panels
//! - [`theme`]: day/night palettes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod preview;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use preview::PreviewHandle;
pub use renderer::{render, render_startup_error};
pub use theme::{Palette, Palettes, Rgb, Theme, ThemeName};
pub use viewmodel::{
    DetailPanel, EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchPanel, SettingsPanel,
    ShowMoreInfo, TileItem, UIViewModel,
};
