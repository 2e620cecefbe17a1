//! Path helpers for the Zellij sandbox, where `~` maps to `/host`.

use std::path::PathBuf;

/// Directory for plugin-owned files (the trace log).
///
/// ```
/// use bookcase::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/bookcase")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookcase")
}

/// Rewrites a leading `~` to the sandbox mount point.
///
/// ```
/// use bookcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books/catalog.json"), "/host/books/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/catalog.json"), "/data/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

/// Removes the `/host` mount prefix for display.
///
/// ```
/// use bookcase::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/books/catalog.json"), "/books/catalog.json");
/// assert_eq!(strip_host_prefix("/data/catalog.json"), "/data/catalog.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}
