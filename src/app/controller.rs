//! The view controller: store in, markup out, events back in.
//!
//! [`ViewController`] owns the [`Store`] and a document environment. Every
//! mutation it performs is followed by a full [`render`](ViewController::render)
//! that replaces the list container's content, so the document always shows
//! the current store snapshot. There is no diffing.
//!
//! Bindings are subscriptions carrying a [`Binding`] value. When the host
//! dispatches a [`UiEvent`], the document reports which bindings match and
//! the controller runs them one after another, each to completion.
//!
//! # Example
//!
//! ```rust
//! use shoplist::app::ViewController;
//! use shoplist::dom::{Document, UiEvent};
//! use shoplist::store::{SequentialIds, Store};
//! use shoplist::ui::markup;
//!
//! let store = Store::new(SequentialIds::default());
//! let document = Document::new(markup::page_shell(false));
//! let mut controller = ViewController::new(store, document)?;
//! controller.init()?;
//!
//! let input = controller.element(markup::ENTRY_INPUT)?;
//! controller.document_mut().set_value(input, "  eggs ");
//! let form = controller.element(markup::ENTRY_FORM)?;
//! controller.dispatch(&mut UiEvent::submit(form))?;
//!
//! assert_eq!(controller.store().items()[0].name(), "eggs");
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

use crate::dom::{DocumentEnv, EventKind, NodeId, Selector, UiEvent};
use crate::domain::{ItemId, Result, ShoplistError};
use crate::store::{IdGenerator, Store};
use crate::ui::markup;

/// The handlers the controller installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Submit on the entry form.
    AddItem,
    /// Click on an item's "check" control.
    ToggleItem,
    /// Click on an item's "delete" control.
    DeleteItem,
    /// Click on the hide-completed checkbox.
    ToggleHideCompleted,
}

/// Markup selectors, parsed once per controller.
#[derive(Debug, Clone)]
pub(crate) struct Selectors {
    pub(crate) form: Selector,
    pub(crate) input: Selector,
    pub(crate) hide_toggle: Selector,
    pub(crate) list: Selector,
    pub(crate) list_item: Selector,
    pub(crate) item_name: Selector,
    pub(crate) toggle_control: Selector,
    pub(crate) delete_control: Selector,
}

impl Selectors {
    fn parse() -> Result<Self> {
        Ok(Self {
            form: Selector::parse(markup::ENTRY_FORM)?,
            input: Selector::parse(markup::ENTRY_INPUT)?,
            hide_toggle: Selector::parse(markup::HIDE_COMPLETED_TOGGLE)?,
            list: Selector::parse(markup::LIST)?,
            list_item: Selector::parse(markup::LIST_ITEM)?,
            item_name: Selector::parse(markup::ITEM_NAME)?,
            toggle_control: Selector::parse(markup::TOGGLE_CONTROL)?,
            delete_control: Selector::parse(markup::DELETE_CONTROL)?,
        })
    }
}

/// Translates store state into markup and user events into store mutations.
#[derive(Debug, Clone)]
pub struct ViewController<G, D> {
    store: Store<G>,
    document: D,
    selectors: Selectors,
    /// Set once `init` has installed the bindings.
    bound: bool,
}

impl<G, D> ViewController<G, D>
where
    G: IdGenerator,
    D: DocumentEnv<Handler = Binding>,
{
    /// Wraps a store and a document. Nothing is rendered or bound yet; call
    /// [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::Selector`] if a markup selector is malformed.
    pub fn new(store: Store<G>, document: D) -> Result<Self> {
        Ok(Self {
            store,
            document,
            selectors: Selectors::parse()?,
            bound: false,
        })
    }

    fn require(&self, selector: &Selector) -> Result<NodeId> {
        self.document
            .select(selector)
            .ok_or_else(|| ShoplistError::ElementNotFound(selector.to_string()))
    }

    /// Looks up a page element by selector string.
    ///
    /// # Errors
    ///
    /// Fails if the selector is malformed or matches nothing.
    pub fn element(&self, selector: &str) -> Result<NodeId> {
        self.require(&Selector::parse(selector)?)
    }

    /// Replaces the list container's content with the visible items.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::ElementNotFound`] if the page has no list
    /// container.
    pub fn render(&mut self) -> Result<()> {
        let visible = self.store.visible_items();
        let _span = tracing::debug_span!(
            "render",
            visible = visible.len(),
            total = self.store.len(),
            hide_completed = self.store.hide_completed()
        )
        .entered();

        let list = self.require(&self.selectors.list)?;
        let nodes = markup::list_items(visible);
        self.document.replace_content(list, nodes);
        Ok(())
    }

    /// Subscribes the add handler to the entry form's submit.
    ///
    /// # Errors
    ///
    /// Fails if the entry form is missing.
    pub fn bind_add_form(&mut self) -> Result<()> {
        let form = self.require(&self.selectors.form)?;
        self.document
            .subscribe(EventKind::Submit, form, None, Binding::AddItem);
        Ok(())
    }

    /// Subscribes the toggle handler, delegated from the list container to
    /// the "check" controls.
    ///
    /// # Errors
    ///
    /// Fails if the list container is missing.
    pub fn bind_toggle_clicks(&mut self) -> Result<()> {
        let list = self.require(&self.selectors.list)?;
        let delegate = self.selectors.toggle_control.clone();
        self.document
            .subscribe(EventKind::Click, list, Some(delegate), Binding::ToggleItem);
        Ok(())
    }

    /// Subscribes the delete handler, delegated from the list container to
    /// the "delete" controls.
    ///
    /// # Errors
    ///
    /// Fails if the list container is missing.
    pub fn bind_delete_clicks(&mut self) -> Result<()> {
        let list = self.require(&self.selectors.list)?;
        let delegate = self.selectors.delete_control.clone();
        self.document
            .subscribe(EventKind::Click, list, Some(delegate), Binding::DeleteItem);
        Ok(())
    }

    /// Subscribes the filter handler to the hide-completed checkbox.
    ///
    /// # Errors
    ///
    /// Fails if the checkbox is missing.
    pub fn bind_hide_filter_toggle(&mut self) -> Result<()> {
        let toggle = self.require(&self.selectors.hide_toggle)?;
        self.document.subscribe(
            EventKind::Click,
            toggle,
            None,
            Binding::ToggleHideCompleted,
        );
        Ok(())
    }

    /// Renders and installs all four bindings.
    ///
    /// Later calls only re-render; the bindings are never installed twice.
    ///
    /// # Errors
    ///
    /// Fails if the page shell lacks any element the bindings need.
    pub fn init(&mut self) -> Result<()> {
        if self.bound {
            tracing::debug!("view controller already initialized, re-rendering");
            return self.render();
        }
        tracing::debug!("initializing view controller");
        self.render()?;
        self.bind_add_form()?;
        self.bind_toggle_clicks()?;
        self.bind_delete_clicks()?;
        self.bind_hide_filter_toggle()?;
        self.bound = true;
        Ok(())
    }

    /// Delivers `event` to every matching binding.
    ///
    /// Returns whether any binding ran. Each binding mutates the store and
    /// re-renders before the next one starts.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn dispatch(&mut self, event: &mut UiEvent) -> Result<bool> {
        let _span = tracing::debug_span!("dispatch", kind = ?event.kind).entered();

        let deliveries = self.document.begin_dispatch(event);
        let handled = !deliveries.is_empty();
        for delivery in deliveries {
            self.run(delivery.handler, delivery.current_target, event)?;
        }
        self.document.end_dispatch(event);

        if !handled {
            tracing::trace!("no binding matched event");
        }
        Ok(handled)
    }

    fn run(&mut self, binding: Binding, current_target: NodeId, event: &mut UiEvent) -> Result<()> {
        tracing::debug!(binding = ?binding, "running binding");
        match binding {
            Binding::AddItem => self.handle_new_item_submit(event),
            Binding::ToggleItem => {
                match self.item_id_for(current_target) {
                    Some(id) => {
                        self.store.toggle_checked(&id);
                    }
                    None => tracing::debug!("toggle control outside any list item"),
                }
                self.render()
            }
            Binding::DeleteItem => {
                match self.item_id_for(current_target) {
                    Some(id) => {
                        self.store.delete_item(&id);
                    }
                    None => tracing::debug!("delete control outside any list item"),
                }
                self.render()
            }
            Binding::ToggleHideCompleted => {
                self.store.toggle_hide_completed();
                self.render()
            }
        }
    }

    fn handle_new_item_submit(&mut self, event: &mut UiEvent) -> Result<()> {
        event.prevent_default();

        let input = self.require(&self.selectors.input)?;
        let raw = self.document.input_value(input);
        self.document.set_input_value(input, "");

        let name = raw.trim();
        if name.is_empty() {
            tracing::debug!("rejected blank item name");
        } else {
            self.store.add_item(name);
        }
        self.render()
    }

    /// Resolves the id of the list item enclosing `element`.
    fn item_id_for(&self, element: NodeId) -> Option<ItemId> {
        let item = self.document.closest(element, &self.selectors.list_item)?;
        self.document
            .data(item, markup::ITEM_ID_KEY)
            .map(ItemId::new)
    }
}

impl<G, D> ViewController<G, D> {
    #[must_use]
    pub const fn store(&self) -> &Store<G> {
        &self.store
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub(crate) const fn selectors(&self) -> &Selectors {
        &self.selectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};
    use crate::domain::SeedItem;
    use crate::store::SequentialIds;

    type TestController = ViewController<SequentialIds, Document<Binding>>;

    fn controller() -> TestController {
        let store = Store::with_seed(SequentialIds::default(), &SeedItem::defaults());
        let document = Document::new(markup::page_shell(false));
        let mut controller = ViewController::new(store, document).unwrap();
        controller.init().unwrap();
        controller
    }

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    fn rendered_names(c: &TestController) -> Vec<String> {
        let doc = c.document();
        doc.query_all(&sel(markup::ITEM_NAME))
            .into_iter()
            .map(|id| doc.text_content(id))
            .collect()
    }

    fn control_of(c: &TestController, item_id: &str, control: &str) -> NodeId {
        let doc = c.document();
        let li = doc
            .query_all(&sel(markup::LIST_ITEM))
            .into_iter()
            .find(|&li| doc.data(li, markup::ITEM_ID_KEY) == Some(item_id))
            .unwrap();
        doc.query_within(li, &sel(control))[0]
    }

    fn submit(c: &mut TestController, text: &str) -> bool {
        let input = c.element(markup::ENTRY_INPUT).unwrap();
        c.document_mut().set_value(input, text);
        let form = c.element(markup::ENTRY_FORM).unwrap();
        let mut event = UiEvent::submit(form);
        let handled = c.dispatch(&mut event).unwrap();
        assert!(event.default_prevented());
        handled
    }

    #[test]
    fn init_renders_every_item_and_installs_bindings() {
        let c = controller();
        assert_eq!(rendered_names(&c), ["apples", "oranges", "milk", "bread"]);
        assert_eq!(c.document().listeners().len(), 4);

        let milk = c
            .document()
            .query(&sel(".shopping-item__checked"))
            .map(|id| c.document().text_content(id));
        assert_eq!(milk.as_deref(), Some("milk"));
    }

    #[test]
    fn second_init_rerenders_without_rebinding() {
        let mut c = controller();
        c.init().unwrap();
        assert_eq!(c.document().listeners().len(), 4);

        let button = control_of(&c, "item-1", markup::TOGGLE_CONTROL);
        c.dispatch(&mut UiEvent::click(button)).unwrap();
        assert!(c.store().items()[0].checked);
        assert_eq!(rendered_names(&c).len(), 4);
    }

    #[test]
    fn failed_init_can_be_retried_after_the_page_is_fixed() {
        let store = Store::new(SequentialIds::default());
        let document: Document<Binding> = Document::new(Element::new("main"));
        let mut c = ViewController::new(store, document).unwrap();
        assert!(c.init().is_err());

        let root = c.document().root();
        c.document_mut().replace_children(root, vec![markup::page_shell(false)]);
        c.init().unwrap();
        assert_eq!(c.document().listeners().len(), 4);
    }

    #[test]
    fn submit_adds_trimmed_item_and_clears_input() {
        let mut c = controller();
        assert!(submit(&mut c, "  eggs  "));

        assert_eq!(c.store().len(), 5);
        assert_eq!(c.store().items()[4].name(), "eggs");
        assert_eq!(rendered_names(&c).last().map(String::as_str), Some("eggs"));
        let input = c.element(markup::ENTRY_INPUT).unwrap();
        assert_eq!(c.document().value(input), Some(""));
    }

    #[test]
    fn blank_submission_is_rejected_but_clears_input() {
        let mut c = controller();
        submit(&mut c, "   ");
        assert_eq!(c.store().len(), 4);
        let input = c.element(markup::ENTRY_INPUT).unwrap();
        assert_eq!(c.document().value(input), Some(""));
    }

    #[test]
    fn clicking_check_label_toggles_that_item() {
        let mut c = controller();
        let button = control_of(&c, "item-1", markup::TOGGLE_CONTROL);
        let label = c.document().children(button)[0];

        assert!(c.dispatch(&mut UiEvent::click(label)).unwrap());
        assert!(c.store().items()[0].checked);
        assert_eq!(c.document().query_all(&sel(".shopping-item__checked")).len(), 2);

        let button = control_of(&c, "item-1", markup::TOGGLE_CONTROL);
        c.dispatch(&mut UiEvent::click(button)).unwrap();
        assert!(!c.store().items()[0].checked);
    }

    #[test]
    fn clicking_delete_removes_that_item() {
        let mut c = controller();
        let button = control_of(&c, "item-2", markup::DELETE_CONTROL);
        c.dispatch(&mut UiEvent::click(button)).unwrap();
        assert_eq!(rendered_names(&c), ["apples", "milk", "bread"]);
    }

    #[test]
    fn stale_control_after_rerender_does_nothing() {
        let mut c = controller();
        let stale = control_of(&c, "item-2", markup::DELETE_CONTROL);
        c.render().unwrap();

        assert!(!c.dispatch(&mut UiEvent::click(stale)).unwrap());
        assert_eq!(c.store().len(), 4);
    }

    #[test]
    fn hide_filter_projects_rendered_list_only() {
        let mut c = controller();
        let toggle = c.element(markup::HIDE_COMPLETED_TOGGLE).unwrap();

        c.dispatch(&mut UiEvent::click(toggle)).unwrap();
        assert!(c.store().hide_completed());
        assert_eq!(rendered_names(&c), ["apples", "oranges", "bread"]);
        assert_eq!(c.store().len(), 4);
        assert_eq!(c.document().attr(toggle, "checked"), Some("checked"));

        c.dispatch(&mut UiEvent::click(toggle)).unwrap();
        assert_eq!(rendered_names(&c).len(), 4);
    }

    #[test]
    fn clicking_an_item_name_runs_nothing() {
        let mut c = controller();
        let name = c.document().query(&sel(markup::ITEM_NAME)).unwrap();
        assert!(!c.dispatch(&mut UiEvent::click(name)).unwrap());
    }

    #[test]
    fn missing_list_container_is_reported() {
        let store = Store::new(SequentialIds::default());
        let document: Document<Binding> = Document::new(Element::new("main"));
        let mut c = ViewController::new(store, document).unwrap();
        assert!(matches!(c.init(), Err(ShoplistError::ElementNotFound(_))));
    }
}
