//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavours compiled in from
//! `themes/*.toml`. Custom themes use the same TOML layout:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! entry_border = "#f5c2e7"
//! checked_fg = "#a6e3a1"
//! filter_badge_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use shoplist::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}milk{}", Theme::fg(&theme.colors.checked_fg), Theme::reset());
//! ```

use crate::domain::{Result, ShoplistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints and subtitles.
    pub text_dim: String,

    pub border: String,
    /// Frame around the entry input.
    pub entry_border: String,

    /// Names of checked-off items.
    pub checked_fg: String,
    /// The "hiding completed" badge in the header.
    pub filter_badge_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::Theme`] if the file cannot be read or does
    /// not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ShoplistError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            ShoplistError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Parses `#rrggbb`; anything malformed becomes white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or(255)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Strikethrough, used for checked items.
    #[must_use]
    pub const fn strike() -> &'static str {
        "\u{001b}[9m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme fails to parse.
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should parse")
    }
}
