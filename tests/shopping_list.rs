//! End-to-end behaviour through the public API: the store on its own, the
//! view controller driven by document events, and the key-level handler.

use shoplist::app::{handle_event, AppState, Event, ShoppingList};
use shoplist::dom::{Document, Selector, UiEvent};
use shoplist::domain::{ItemId, SeedItem};
use shoplist::store::{SequentialIds, Store};
use shoplist::ui::{markup, Theme};

fn seeded_store() -> Store<SequentialIds> {
    Store::with_seed(SequentialIds::default(), &SeedItem::defaults())
}

fn names<'a>(items: impl IntoIterator<Item = &'a shoplist::Item>) -> Vec<&'a str> {
    items.into_iter().map(shoplist::Item::name).collect()
}

#[test]
fn store_scenario() {
    let mut store = seeded_store();
    let milk = store.items()[2].id().clone();
    assert!(store.items()[2].checked);

    let eggs = store.add_item("eggs");
    assert_eq!(store.len(), 5);
    let last = store.items().last().unwrap();
    assert_eq!((last.id(), last.name(), last.checked), (&eggs, "eggs", false));

    store.toggle_hide_completed();
    assert_eq!(
        names(store.visible_items()),
        ["apples", "oranges", "bread", "eggs"]
    );

    store.delete_item(&milk);
    assert_eq!(store.len(), 4);
    assert_eq!(names(store.items()), ["apples", "oranges", "bread", "eggs"]);
}

#[test]
fn stale_ids_are_ignored() {
    let mut store = seeded_store();
    let before: Vec<_> = store.items().to_vec();

    assert!(!store.toggle_checked(&ItemId::from("item-99")));
    assert!(store.delete_item(&ItemId::from("item-99")).is_none());
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn controller_scenario_through_document_events() {
    let mut list: ShoppingList<SequentialIds> =
        ShoppingList::new(seeded_store(), Document::new(markup::page_shell(false))).unwrap();
    list.init().unwrap();

    let input = list.element(markup::ENTRY_INPUT).unwrap();
    list.document_mut().set_value(input, "eggs");
    let form = list.element(markup::ENTRY_FORM).unwrap();
    let mut submit = UiEvent::submit(form);
    assert!(list.dispatch(&mut submit).unwrap());
    assert!(submit.default_prevented());

    let hide = list.element(markup::HIDE_COMPLETED_TOGGLE).unwrap();
    list.dispatch(&mut UiEvent::click(hide)).unwrap();

    let doc = list.document();
    let rendered: Vec<String> = doc
        .query_all(&Selector::parse(markup::ITEM_NAME).unwrap())
        .into_iter()
        .map(|n| doc.text_content(n))
        .collect();
    assert_eq!(rendered, ["apples", "oranges", "bread", "eggs"]);

    let container = list.element(markup::LIST).unwrap();
    let html = list.document().inner_html(container);
    assert!(html.contains(r#"data-item-id="item-5""#));
    assert!(!html.contains("milk"));
}

#[test]
fn keyboard_session() {
    let mut list: ShoppingList<SequentialIds> =
        ShoppingList::new(seeded_store(), Document::new(markup::page_shell(false))).unwrap();
    list.init().unwrap();
    let mut state = AppState::new(list, Theme::default());

    let events = [
        Event::StartEntry,
        Event::Char('e'),
        Event::Char('g'),
        Event::Char('g'),
        Event::Char('s'),
        Event::SubmitEntry,
        Event::ToggleHideCompleted,
        Event::ToggleSelected,
    ];
    for event in &events {
        handle_event(&mut state, event).unwrap();
    }

    // eggs was checked off and is now hidden with milk
    let visible: Vec<String> = state.rows().into_iter().map(|r| r.name).collect();
    assert_eq!(visible, ["apples", "oranges", "bread"]);
    assert_eq!(state.list.store().len(), 5);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.header.title, " Shopping List (3/5) ");
    assert!(vm.display_items[vm.selected_index].is_selected);
}
