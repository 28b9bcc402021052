//! Application layer: the view controller and the terminal host around it.
//!
//! ```text
//! key press → Event → handle_event → UiEvent → ViewController::dispatch
//!                                                  │
//!                                   Store mutation + render into Document
//! ```
//!
//! # Modules
//!
//! - [`controller`]: Store-to-markup rendering and the four bindings
//! - [`handler`]: Key-level events translated into document events
//! - [`state`]: Host state and view model computation
//! - [`modes`]: Input mode
//! - [`actions`]: Side effects for the plugin runtime

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{Binding, ViewController};
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, RowControl, RowSnapshot, ShoppingList};
