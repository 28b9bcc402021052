//! Zellij plugin entry point.
//!
//! A thin shim: parse configuration, initialise tracing and the library
//! state, translate key presses into library [`Event`]s, and execute the
//! returned actions.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move the cursor
//! - `Space`/`Enter`/`x`: Check or uncheck the selected item
//! - `d`/`Delete`: Delete the selected item
//! - `h`: Hide or show completed items
//! - `a`/`i`: Add an item
//! - `q`: Close the plugin
//!
//! Entry mode:
//! - Any character: Type into the entry
//! - `Backspace`: Erase
//! - `Enter`: Add the item
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use shoplist::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

#[derive(Default)]
struct State {
    /// `None` until `load` succeeds.
    app: Option<AppState>,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        shoplist::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(items = config.items.len(), theme = ?config.theme_name, "parsed configuration");

        match shoplist::initialize(&config) {
            Ok(app) => self.app = Some(app),
            Err(e) => tracing::error!(error = %e, "failed to initialize shopping list"),
        }

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let Some(app) = self.app.as_mut() else {
            return false;
        };
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let _guard =
            tracing::debug_span!("plugin_update_event", bare_key = ?key.bare_key).entered();

        let Some(our_event) = map_key_event(app.input_mode, &key) else {
            return false;
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match &self.app {
            Some(app) => shoplist::ui::render(app, rows, cols),
            None => print!("shoplist failed to start; see the trace file for details"),
        }
    }
}

fn map_key_event(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyDown);
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyUp);
    }

    Some(match mode {
        InputMode::Normal => match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char(' ' | 'x') | BareKey::Enter => Event::ToggleSelected,
            BareKey::Char('d') | BareKey::Delete => Event::DeleteSelected,
            BareKey::Char('h') => Event::ToggleHideCompleted,
            BareKey::Char('a' | 'i') => Event::StartEntry,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        },
        InputMode::Entry => match key.bare_key {
            BareKey::Enter => Event::SubmitEntry,
            BareKey::Esc => Event::CancelEntry,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        },
    })
}

#[tracing::instrument(level = "debug")]
fn execute_action(action: &Action) {
    match action {
        Action::CloseFocus => {
            tracing::debug!("closing plugin focus");
            hide_self();
        }
    }
}
