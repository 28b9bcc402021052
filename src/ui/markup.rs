//! Shopping list markup.
//!
//! Produces the page shell the view controller binds to and the per-item
//! fragments it renders into the list container. The selector constants are
//! the contract between this markup and the controller's bindings.
//!
//! Each item renders as:
//!
//! ```html
//! <li data-item-id="{id}">
//!   <span class="shopping-item js-shopping-item [shopping-item__checked]">{name}</span>
//!   <div class="shopping-item-controls">
//!     <button class="shopping-item-toggle js-item-toggle"><span class="button-label">check</span></button>
//!     <button class="shopping-item-delete js-item-delete"><span class="button-label">delete</span></button>
//!   </div>
//! </li>
//! ```

use crate::dom::{Element, Node};
use crate::domain::Item;

pub const ENTRY_FORM: &str = "#js-shopping-list-form";
pub const ENTRY_INPUT: &str = ".js-shopping-list-entry";
pub const HIDE_COMPLETED_TOGGLE: &str = ".js-hide-completed-toggle";
pub const LIST: &str = ".js-shopping-list";
pub const LIST_ITEM: &str = "li";
pub const ITEM_NAME: &str = ".js-shopping-item";
pub const TOGGLE_CONTROL: &str = ".js-item-toggle";
pub const DELETE_CONTROL: &str = ".js-item-delete";

/// `data-*` key holding the item id on each list item.
pub const ITEM_ID_KEY: &str = "item-id";

/// Class marking the name of a checked item.
pub const CHECKED_CLASS: &str = "shopping-item__checked";

fn control(kind: &str, label: &str) -> Element {
    Element::new("button")
        .class(&format!("shopping-item-{kind}"))
        .class(&format!("js-item-{kind}"))
        .child(Element::new("span").class("button-label").text(label))
}

/// Markup for one item.
#[must_use]
pub fn item_element(item: &Item) -> Node {
    let name = Element::new("span")
        .class("shopping-item")
        .class("js-shopping-item")
        .class(if item.checked { CHECKED_CLASS } else { "" })
        .text(item.name());

    Element::new("li")
        .attr(format!("data-{ITEM_ID_KEY}"), item.id().as_str())
        .child(name)
        .child(
            Element::new("div")
                .class("shopping-item-controls")
                .child(control("toggle", "check"))
                .child(control("delete", "delete")),
        )
        .into()
}

/// Markup for a sequence of items, in order.
#[must_use]
pub fn list_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<Node> {
    let nodes: Vec<Node> = items.into_iter().map(item_element).collect();
    tracing::trace!(item_count = nodes.len(), "generated list markup");
    nodes
}

/// The static page the list lives in.
///
/// `hide_completed` sets the initial state of the filter checkbox.
#[must_use]
pub fn page_shell(hide_completed: bool) -> Node {
    let mut hide_toggle = Element::new("input")
        .attr("type", "checkbox")
        .attr("name", "shopping-list-hide-completed")
        .class("js-hide-completed-toggle");
    if hide_completed {
        hide_toggle = hide_toggle.attr("checked", "checked");
    }

    Element::new("main")
        .child(Element::new("h1").text("Shopping List"))
        .child(
            Element::new("form")
                .attr("id", "js-shopping-list-form")
                .child(
                    Element::new("label")
                        .attr("for", "shopping-list-entry")
                        .text("Add an item"),
                )
                .child(
                    Element::new("input")
                        .attr("type", "text")
                        .attr("name", "shopping-list-entry")
                        .attr("placeholder", "e.g., broccoli")
                        .attr("value", "")
                        .class("js-shopping-list-entry"),
                )
                .child(Element::new("button").attr("type", "submit").text("Add item")),
        )
        .child(
            Element::new("label")
                .child(hide_toggle)
                .text(" Hide completed items"),
        )
        .child(Element::new("ul").class("shopping-list").class("js-shopping-list"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn unchecked_item_markup() {
        let item = Item::new(ItemId::new("c1"), "apples");
        assert_eq!(
            item_element(&item).to_string(),
            concat!(
                r#"<li data-item-id="c1">"#,
                r#"<span class="shopping-item js-shopping-item">apples</span>"#,
                r#"<div class="shopping-item-controls">"#,
                r#"<button class="shopping-item-toggle js-item-toggle"><span class="button-label">check</span></button>"#,
                r#"<button class="shopping-item-delete js-item-delete"><span class="button-label">delete</span></button>"#,
                "</div></li>"
            )
        );
    }

    #[test]
    fn checked_item_carries_checked_class() {
        let mut item = Item::new(ItemId::new("c2"), "milk");
        item.toggle();
        let html = item_element(&item).to_string();
        assert!(html.contains(r#"class="shopping-item js-shopping-item shopping-item__checked""#));
    }

    #[test]
    fn names_are_escaped() {
        let item = Item::new(ItemId::new("c3"), "<script>");
        assert!(item_element(&item).to_string().contains("&lt;script&gt;"));
    }

    #[test]
    fn shell_reflects_initial_filter() {
        assert!(page_shell(true).to_string().contains(r#"checked="checked""#));
        assert!(!page_shell(false).to_string().contains("checked="));
    }
}
