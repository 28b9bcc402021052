//! Shopping list item model.
//!
//! An [`Item`] is a named entry with a completion flag. Its [`ItemId`] is
//! assigned once at creation and is the only key used for lookup, mutation,
//! and deletion. Names are immutable after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier of an item.
///
/// Ids are produced by an [`IdGenerator`](crate::store::IdGenerator) and
/// round-trip through the rendered markup as the `data-item-id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a raw id string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A single shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    /// Whether the item has been checked off.
    pub checked: bool,
}

impl Item {
    /// Creates an unchecked item.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoplist::domain::{Item, ItemId};
    ///
    /// let item = Item::new(ItemId::new("c1"), "eggs");
    /// assert_eq!(item.name(), "eggs");
    /// assert!(!item.checked);
    /// ```
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// An item the store is pre-populated with at startup.
///
/// Seeds carry no id; the store assigns one when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl SeedItem {
    /// Marker prefix for seeds that start checked, e.g. `[x] milk`.
    pub const CHECKED_MARKER: &'static str = "[x]";

    #[must_use]
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            checked,
        }
    }

    /// Parses one entry of the `items` configuration value.
    ///
    /// Returns `None` for blank entries.
    ///
    /// ```
    /// use shoplist::domain::SeedItem;
    ///
    /// assert_eq!(SeedItem::parse(" [x] milk "), Some(SeedItem::new("milk", true)));
    /// assert_eq!(SeedItem::parse("bread"), Some(SeedItem::new("bread", false)));
    /// assert_eq!(SeedItem::parse("   "), None);
    /// ```
    #[must_use]
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        let (name, checked) = entry
            .strip_prefix(Self::CHECKED_MARKER)
            .map_or((entry, false), |rest| (rest.trim_start(), true));

        if name.is_empty() {
            None
        } else {
            Some(Self::new(name, checked))
        }
    }

    /// The list every fresh session starts with.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("apples", false),
            Self::new("oranges", false),
            Self::new("milk", true),
            Self::new("bread", false),
        ]
    }
}
