//! Key-level event handling.
//!
//! The Zellij shim turns key presses into [`Event`]s. [`handle_event`]
//! handles cursor movement and input modes itself and turns everything that
//! touches the list into a [`UiEvent`] on a real document element (a click
//! on the selected row's control, a submit of the entry form) so the
//! controller's bindings do the work exactly as they would for a pointer.
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::{handle_event, Event, InputMode};
//! use shoplist::{initialize, Config};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::StartEntry)?;
//! for c in "eggs".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::SubmitEntry)?;
//!
//! assert_eq!(state.input_mode, InputMode::Normal);
//! assert_eq!(state.list.store().len(), 5);
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState, RowControl};
use crate::dom::UiEvent;
use crate::domain::Result;
use crate::store::IdGenerator;
use crate::ui::markup;

/// Input events delivered by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Clicks the "check" control of the selected row.
    ToggleSelected,
    /// Clicks the "delete" control of the selected row.
    DeleteSelected,
    /// Clicks the hide-completed checkbox.
    ToggleHideCompleted,
    /// Switches to entry mode with an empty input.
    StartEntry,
    /// Types a character into the entry input.
    Char(char),
    /// Erases the last character of the entry input.
    Backspace,
    /// Submits the entry form and returns to normal mode.
    SubmitEntry,
    /// Clears the entry input and returns to normal mode.
    CancelEntry,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event and returns whether to re-render plus the actions to
/// execute.
///
/// # Errors
///
/// Propagates [`crate::ShoplistError::ElementNotFound`] when the page lacks
/// an element an event needs.
pub fn handle_event<G: IdGenerator>(
    state: &mut AppState<G>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleSelected => click_selected(state, RowControl::Toggle),
        Event::DeleteSelected => click_selected(state, RowControl::Delete),
        Event::ToggleHideCompleted => {
            let toggle = state.list.element(markup::HIDE_COMPLETED_TOGGLE)?;
            state.list.dispatch(&mut UiEvent::click(toggle))?;
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::StartEntry => {
            tracing::debug!("entering entry mode");
            set_entry_text(state, "")?;
            state.input_mode = InputMode::Entry;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Entry {
                return Ok((false, vec![]));
            }
            let mut text = state.entry_text();
            text.push(*c);
            tracing::trace!(text = %text, "entry updated");
            set_entry_text(state, &text)?;
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Entry {
                return Ok((false, vec![]));
            }
            let mut text = state.entry_text();
            text.pop();
            set_entry_text(state, &text)?;
            Ok((true, vec![]))
        }
        Event::SubmitEntry => {
            if state.input_mode != InputMode::Entry {
                return Ok((false, vec![]));
            }
            let form = state.list.element(markup::ENTRY_FORM)?;
            let before = state.list.store().len();
            state.list.dispatch(&mut UiEvent::submit(form))?;
            state.input_mode = InputMode::Normal;

            if state.list.store().len() > before {
                // Jump to the new item when it is on screen.
                let added = state.list.store().items().last().map(|i| i.id().to_string());
                if let Some(index) = state
                    .rows()
                    .iter()
                    .position(|row| Some(&row.item_id) == added.as_ref())
                {
                    state.selected_index = index;
                }
            }
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::CancelEntry => {
            tracing::debug!("entry cancelled");
            set_entry_text(state, "")?;
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
    }
}

fn click_selected<G: IdGenerator>(
    state: &mut AppState<G>,
    control: RowControl,
) -> Result<(bool, Vec<Action>)> {
    let Some(target) = state.selected_control(control) else {
        tracing::debug!(control = ?control, "no row selected");
        return Ok((false, vec![]));
    };
    let handled = state.list.dispatch(&mut UiEvent::click(target))?;
    state.clamp_selection();
    Ok((handled, vec![]))
}

fn set_entry_text<G: IdGenerator>(state: &mut AppState<G>, text: &str) -> Result<()> {
    let input = state.list.element(markup::ENTRY_INPUT)?;
    state.list.document_mut().set_value(input, text);
    Ok(())
}
