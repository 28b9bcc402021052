//! Terminal host state and view model computation.
//!
//! [`AppState`] wraps the view controller with what only the terminal needs:
//! the input mode, a selection cursor over the rendered rows, and the theme.
//! Rows are read back from the document's list container, so the cursor
//! always points at an element that is actually on screen.
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::{AppState, ShoppingList};
//! use shoplist::domain::SeedItem;
//! use shoplist::dom::Document;
//! use shoplist::store::{SequentialIds, Store};
//! use shoplist::ui::{markup, Theme};
//!
//! let store = Store::with_seed(SequentialIds::default(), &SeedItem::defaults());
//! let mut list: ShoppingList<SequentialIds> =
//!     ShoppingList::new(store, Document::new(markup::page_shell(false)))?;
//! list.init()?;
//!
//! let state = AppState::new(list, Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.display_items.len(), 4);
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

use super::controller::{Binding, ViewController};
use super::modes::InputMode;
use crate::dom::{Document, NodeId};
use crate::store::{CuidGenerator, IdGenerator};
use crate::ui::markup;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, EntryBarInfo, FooterInfo, HeaderInfo, UIViewModel,
};

/// The view controller bound to the in-memory document.
pub type ShoppingList<G = CuidGenerator> = ViewController<G, Document<Binding>>;

/// A rendered list row as read back from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    pub element: NodeId,
    pub item_id: String,
    pub name: String,
    pub checked: bool,
}

/// A per-row control the host can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Toggle,
    Delete,
}

/// Central host state container.
#[derive(Debug, Clone)]
pub struct AppState<G = CuidGenerator> {
    /// Store, document, and bindings.
    pub list: ShoppingList<G>,

    pub input_mode: InputMode,

    /// Zero-based index into the rendered rows.
    ///
    /// Clamped after every mutation; wraps during navigation.
    pub selected_index: usize,

    pub theme: Theme,
}

impl<G: IdGenerator> AppState<G> {
    /// Creates host state around an initialised list.
    #[must_use]
    pub const fn new(list: ShoppingList<G>, theme: Theme) -> Self {
        Self {
            list,
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
        }
    }

    /// Row elements currently rendered in the list container, in order.
    fn row_elements(&self) -> Vec<NodeId> {
        let selectors = self.list.selectors();
        let doc = self.list.document();
        doc.query(&selectors.list)
            .map(|container| doc.query_within(container, &selectors.list_item))
            .unwrap_or_default()
    }

    /// Rows currently rendered in the list container, in order.
    #[must_use]
    pub fn rows(&self) -> Vec<RowSnapshot> {
        let name = &self.list.selectors().item_name;
        let doc = self.list.document();
        self.row_elements()
            .into_iter()
            .map(|element| {
                let name_el = doc.query_within(element, name).first().copied();
                RowSnapshot {
                    element,
                    item_id: doc
                        .data(element, markup::ITEM_ID_KEY)
                        .unwrap_or_default()
                        .to_string(),
                    name: name_el.map(|n| doc.text_content(n)).unwrap_or_default(),
                    checked: name_el.is_some_and(|n| doc.has_class(n, markup::CHECKED_CLASS)),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_elements().len()
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Keeps the cursor within the rendered rows.
    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// The given control of the selected row.
    #[must_use]
    pub fn selected_control(&self, control: RowControl) -> Option<NodeId> {
        let row = self.row_elements().into_iter().nth(self.selected_index)?;
        let selectors = self.list.selectors();
        let selector = match control {
            RowControl::Toggle => &selectors.toggle_control,
            RowControl::Delete => &selectors.delete_control,
        };
        self.list
            .document()
            .query_within(row, selector)
            .first()
            .copied()
    }

    /// Text currently typed into the entry input.
    #[must_use]
    pub fn entry_text(&self) -> String {
        self.list
            .element(markup::ENTRY_INPUT)
            .ok()
            .and_then(|input| self.list.document().value(input))
            .unwrap_or_default()
            .to_string()
    }

    /// Computes the view model for a terminal of `rows` x `cols`.
    ///
    /// Rows are windowed so the selection stays near the middle of the
    /// visible range.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let all_rows = self.rows();
        let header = self.compute_header(all_rows.len());
        let footer = self.compute_footer();
        let entry_bar = self.compute_entry_bar();

        if all_rows.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                footer,
                empty_state: Some(self.compute_empty_state()),
                entry_bar,
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(all_rows.len());
        if visible_end - visible_start < available_rows && all_rows.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let name_width = cols.saturating_sub(8).max(4);
        let display_items = all_rows[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, row)| DisplayItem {
                name: truncate(&row.name, name_width),
                checked: row.checked,
                is_selected: visible_start + offset == self.selected_index,
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header,
            footer,
            empty_state: None,
            entry_bar,
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        let store = self.list.store();
        HeaderInfo {
            title: format!(" Shopping List ({visible}/{}) ", store.len()),
            filter_badge: store
                .hide_completed()
                .then(|| "hiding completed".to_string()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                let hide = if self.list.store().hide_completed() {
                    "show"
                } else {
                    "hide"
                };
                format!("j/k: navigate  space: check  d: delete  a: add  h: {hide} completed  q: quit")
            }
            InputMode::Entry => "Enter: add item  ESC: cancel  Type the item name".to_string(),
        };
        FooterInfo { keybindings }
    }

    fn compute_entry_bar(&self) -> Option<EntryBarInfo> {
        (self.input_mode == InputMode::Entry).then(|| EntryBarInfo {
            text: self.entry_text(),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        let store = self.list.store();
        if store.is_empty() {
            EmptyState {
                message: "Nothing on the list".to_string(),
                subtitle: "Press 'a' to add an item".to_string(),
            }
        } else {
            EmptyState {
                message: "Everything is checked off".to_string(),
                subtitle: "Press 'h' to show completed items".to_string(),
            }
        }
    }

    /// Rows left for the list after header, borders, and footer (6 lines),
    /// plus the 3-line entry bar in entry mode.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Entry => total_rows.saturating_sub(9),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
