//! Presentation: the page markup and the terminal rendering of it.
//!
//! [`markup`] builds the page shell and list items the view controller puts
//! into the document. Everything else turns the rendered document into
//! ANSI output for the Zellij pane:
//!
//! ```text
//! Document → AppState::compute_viewmodel → UIViewModel → render → ANSI
//! ```

pub mod components;
pub mod helpers;
pub mod markup;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, EntryBarInfo, FooterInfo, HeaderInfo, UIViewModel};
