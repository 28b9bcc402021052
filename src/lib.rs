//! Shoplist: a shopping list with a headless document view, shipped as a
//! Zellij plugin.
//!
//! The list itself is a [`store::Store`] of named, checkable items. A
//! [`app::ViewController`] renders the store into markup inside a
//! [`dom::Document`] and binds four handlers to it: add an item from the
//! entry form, toggle an item, delete an item, and hide completed items.
//! The Zellij host drives that document with key presses and draws it to
//! the terminal.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │ keys → Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - handle_event: Event → UiEvent                    │
//! │  - ViewController: bindings, render                 │
//! │  - AppState: cursor, input mode, view model         │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store         │   │ Document      │   │ UI            │
//! │ (store/)      │   │ (dom/)        │   │ (ui/)         │
//! │ - Items       │   │ - Node arena  │   │ - Markup      │
//! │ - Filter flag │   │ - Selectors   │   │ - Theming     │
//! │ - Id source   │   │ - Delegation  │   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shoplist.wasm" {
//!         items "apples, oranges, [x] milk, bread"
//!         hide_completed "false"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use shoplist::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::ToggleSelected)?;
//! handle_event(&mut state, &Event::ToggleHideCompleted)?;
//!
//! let names: Vec<String> = state.rows().into_iter().map(|r| r.name).collect();
//! assert_eq!(names, ["oranges", "bread"]);
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

pub mod app;
pub mod dom;
pub mod domain;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Binding, Event, InputMode, ViewController};
pub use domain::{Item, ItemId, Result, SeedItem, ShoplistError};
pub use ui::Theme;

use app::ShoppingList;
use dom::Document;
use std::collections::BTreeMap;
use store::{CuidGenerator, Store};

/// Plugin configuration parsed from Zellij's KDL configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Items the list starts with.
    pub items: Vec<SeedItem>,

    /// Initial state of the hide-completed filter.
    pub hide_completed: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme; `~` maps to `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: SeedItem::defaults(),
            hide_completed: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the map Zellij hands to `load`.
    ///
    /// - `items`: comma-separated names; a `[x]` prefix starts the item
    ///   checked. Empty entries are skipped; an absent key keeps the default
    ///   list, an empty value starts with no items.
    /// - `hide_completed`: `true`/`false`; anything else keeps `false`.
    /// - `theme`, `theme_file`, `trace_level`: taken verbatim.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shoplist::{Config, SeedItem};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items".to_string(), "tea, [x] sugar".to_string());
    /// map.insert("hide_completed".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.items, [SeedItem::new("tea", false), SeedItem::new("sugar", true)]);
    /// assert!(config.hide_completed);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let items = config.get("items").map_or_else(SeedItem::defaults, |s| {
            s.split(',').filter_map(SeedItem::parse).collect()
        });

        let hide_completed = config
            .get("hide_completed")
            .and_then(|s| {
                s.trim()
                    .parse::<bool>()
                    .map_err(|e| {
                        tracing::debug!(value = %s, error = %e, "invalid hide_completed, using false");
                    })
                    .ok()
            })
            .unwrap_or(false);

        Self {
            items,
            hide_completed,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the theme: file first, then name, then the default. Failures
    /// fall back to the default and are logged.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the plugin state: seeds the store, creates the page, renders it,
/// and installs the bindings.
///
/// # Errors
///
/// Fails if the page shell lacks an element the bindings need.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(items = config.items.len(), "initializing shoplist plugin");

    let mut store = Store::with_seed(CuidGenerator::new(), &config.items);
    if config.hide_completed {
        store.toggle_hide_completed();
    }

    let document = Document::new(ui::markup::page_shell(config.hide_completed));
    let mut list: ShoppingList = ViewController::new(store, document)?;
    list.init()?;

    Ok(AppState::new(list, config.theme()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn missing_keys_use_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn empty_items_value_means_empty_list() {
        let config = Config::from_zellij(&map(&[("items", "")]));
        assert!(config.items.is_empty());
    }

    #[test]
    fn bad_hide_completed_falls_back_to_false() {
        let config = Config::from_zellij(&map(&[("hide_completed", "yes")]));
        assert!(!config.hide_completed);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(config.theme(), Theme::default());

        let config = Config::from_zellij(&map(&[("theme_file", "/does/not/exist.toml")]));
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn initialize_honours_hide_completed() {
        let config = Config::from_zellij(&map(&[("hide_completed", "true")]));
        let state = initialize(&config).unwrap();

        assert!(state.list.store().hide_completed());
        assert_eq!(state.rows().len(), 3);
        let toggle = state.list.element(ui::markup::HIDE_COMPLETED_TOGGLE).unwrap();
        assert_eq!(state.list.document().attr(toggle, "checked"), Some("checked"));
    }
}
