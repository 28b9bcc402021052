//! Actions representing side effects executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` alongside its render flag. Store
//! mutations and rendering happen inside the handler; actions cover only what
//! needs the Zellij host API.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (pressing 'q').
    CloseFocus,
}
