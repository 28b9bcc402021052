//! View model types representing renderable terminal UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from the
//! rendered document, never from the store directly, so the terminal shows
//! exactly what the document holds. They contain no logic, only display-ready
//! data.
//!
//! # Example
//!
//! ```rust
//! use shoplist::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "apples".to_string(),
//!         checked: false,
//!         is_selected: true,
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Shopping List (1/1) ".to_string(), filter_badge: None },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     entry_bar: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows to display, already windowed around the selection.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Message shown instead of the list when no rows are visible.
    pub empty_state: Option<EmptyState>,

    /// Entry input state (entry mode only).
    pub entry_bar: Option<EntryBarInfo>,
}

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub checked: bool,
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with visible/total counts.
    pub title: String,
    /// Shown while completed items are hidden.
    pub filter_badge: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,
}

/// Empty list message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Entry bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBarInfo {
    /// Text currently in the entry input.
    pub text: String,
}
