//! Path helpers for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// `/host/.local/share/zellij/shoplist`, where the span file is written.
///
/// ```
/// use shoplist::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/shoplist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("shoplist")
}

/// Maps a leading `~` to `/host`.
///
/// ```
/// use shoplist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
