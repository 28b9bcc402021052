//! Input mode state for the terminal host.
//!
//! The plugin is either navigating the list or typing a new item name into
//! the entry form.
//!
//! ```rust
//! use shoplist::app::InputMode;
//!
//! assert_eq!(InputMode::default(), InputMode::Normal);
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the entry bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and item commands.
    ///
    /// Available keybindings: j/k (navigate), space/enter/x (check), d (delete),
    /// h (hide completed), a/i (add item), q (quit).
    #[default]
    Normal,

    /// Typing into the entry input.
    ///
    /// Characters go to the input; enter submits the form, esc cancels.
    Entry,
}
