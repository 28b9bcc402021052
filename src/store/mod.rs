//! The shopping list store.
//!
//! [`Store`] owns the ordered item sequence and the hide-completed flag. It is
//! pure data plus the mutations the view controller performs: add, toggle,
//! delete, and flipping the filter. Insertion order is rendering order, and
//! filtering is a projection computed by [`Store::visible_items`]; it never
//! touches the stored items.
//!
//! Mutations addressed by an id that matches no item are silent no-ops. Ids
//! are derived from rendered markup, and in a single-threaded event loop a
//! rendered id can only go stale when a handler targets content that was
//! already replaced.
//!
//! # Example
//!
//! ```rust
//! use shoplist::store::{SequentialIds, Store};
//!
//! let mut store = Store::new(SequentialIds::default());
//! let eggs = store.add_item("eggs");
//! store.toggle_checked(&eggs);
//! store.toggle_hide_completed();
//! assert!(store.visible_items().is_empty());
//! ```

pub mod ids;

pub use ids::{CuidGenerator, IdGenerator, SequentialIds};

use crate::domain::{Item, ItemId, SeedItem};

/// Item sequence plus display filter.
#[derive(Debug, Clone)]
pub struct Store<G = CuidGenerator> {
    items: Vec<Item>,
    hide_completed: bool,
    ids: G,
}

impl<G: IdGenerator> Store<G> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new(ids: G) -> Self {
        Self {
            items: Vec::new(),
            hide_completed: false,
            ids,
        }
    }

    /// Creates a store pre-populated with `seed`, in order.
    ///
    /// Each seed receives a fresh id from `ids`.
    #[must_use]
    pub fn with_seed(ids: G, seed: &[SeedItem]) -> Self {
        let mut store = Self::new(ids);
        for entry in seed {
            let id = store.add_item(entry.name.clone());
            if entry.checked {
                store.toggle_checked(&id);
            }
        }
        tracing::debug!(item_count = store.items.len(), "store seeded");
        store
    }

    /// Appends a new unchecked item and returns its id.
    ///
    /// The name is stored as given; callers decide whether blank names are
    /// acceptable.
    pub fn add_item(&mut self, name: impl Into<String>) -> ItemId {
        let id = self.ids.next_id();
        let item = Item::new(id.clone(), name);
        tracing::debug!(item_id = %id, item_name = %item.name(), "adding item");
        self.items.push(item);
        id
    }

    /// Flips `checked` on the item with `id`.
    ///
    /// Returns `false` (and changes nothing) if no item matches.
    pub fn toggle_checked(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle();
                tracing::debug!(item_id = %id, checked = item.checked, "toggled item");
                true
            }
            None => {
                tracing::debug!(item_id = %id, "toggle ignored, no such item");
                false
            }
        }
    }

    /// Removes exactly the item with `id`, preserving the order of the rest.
    ///
    /// Returns the removed item, or `None` if no item matches.
    pub fn delete_item(&mut self, id: &ItemId) -> Option<Item> {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            tracing::debug!(item_id = %id, "delete ignored, no such item");
            return None;
        };
        let removed = self.items.remove(index);
        tracing::debug!(item_id = %id, index, "deleted item");
        Some(removed)
    }

    /// Flips the hide-completed filter. Items are untouched.
    pub fn toggle_hide_completed(&mut self) {
        self.hide_completed = !self.hide_completed;
        tracing::debug!(hide_completed = self.hide_completed, "toggled filter");
    }
}

impl<G> Store<G> {
    /// Items to display under the current filter, in insertion order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| !self.hide_completed || !item.checked)
            .collect()
    }

    /// All items in insertion order, regardless of the filter.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub const fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded() -> Store<SequentialIds> {
        Store::with_seed(SequentialIds::default(), &SeedItem::defaults())
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
        items.into_iter().map(Item::name).collect()
    }

    #[test]
    fn seed_preserves_order_and_checked_flags() {
        let store = seeded();
        assert_eq!(names(store.items()), ["apples", "oranges", "milk", "bread"]);
        let checked: Vec<bool> = store.items().iter().map(|i| i.checked).collect();
        assert_eq!(checked, [false, false, true, false]);
        assert!(!store.hide_completed());
    }

    #[test]
    fn add_item_appends_unchecked_at_tail() {
        let mut store = seeded();
        let before = store.len();
        let id = store.add_item("eggs");

        assert_eq!(store.len(), before + 1);
        let last = store.items().last().unwrap();
        assert_eq!(last.id(), &id);
        assert_eq!(last.name(), "eggs");
        assert!(!last.checked);
    }

    #[test]
    fn add_item_accepts_empty_names() {
        let mut store = Store::new(SequentialIds::default());
        store.add_item("");
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].name(), "");
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut store = seeded();
        let target = store.items()[1].id().clone();
        let before = store.items().to_vec();

        assert!(store.toggle_checked(&target));
        for (old, new) in before.iter().zip(store.items()) {
            assert_eq!(old.id(), new.id());
            if old.id() == &target {
                assert_eq!(new.checked, !old.checked);
            } else {
                assert_eq!(new.checked, old.checked);
            }
        }

        assert!(store.toggle_checked(&target));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = seeded();
        let before = store.items().to_vec();
        assert!(!store.toggle_checked(&ItemId::new("missing")));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut store = seeded();
        let oranges = store.items()[1].id().clone();

        let removed = store.delete_item(&oranges).unwrap();
        assert_eq!(removed.name(), "oranges");
        assert_eq!(names(store.items()), ["apples", "milk", "bread"]);
        assert!(store.get(&oranges).is_none());
    }

    #[test]
    fn delete_unknown_id_leaves_items_unchanged() {
        let mut store = seeded();
        let before = store.items().to_vec();
        assert!(store.delete_item(&ItemId::new("missing")).is_none());
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn visible_items_is_a_projection() {
        let mut store = seeded();
        assert_eq!(names(store.visible_items()), names(store.items()));

        store.toggle_hide_completed();
        assert_eq!(names(store.visible_items()), ["apples", "oranges", "bread"]);
        assert_eq!(store.len(), 4);

        store.toggle_hide_completed();
        assert_eq!(store.visible_items().len(), 4);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut store = seeded();
        for round in 0..20 {
            let id = store.add_item(format!("thing {round}"));
            if round % 3 == 0 {
                store.toggle_checked(&id);
            }
            if round % 4 == 0 {
                let first = store.items()[0].id().clone();
                store.delete_item(&first);
            }
        }
        let unique: HashSet<&ItemId> = store.items().iter().map(Item::id).collect();
        assert_eq!(unique.len(), store.len());
    }
}
