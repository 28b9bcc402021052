//! Document environment for the view controller.
//!
//! The view controller never talks to a concrete display. It needs a
//! document that can find elements, swap a container's content, read and
//! clear an input, round-trip `data-*` attributes, and route events to
//! subscribed handlers. [`DocumentEnv`] names exactly that capability;
//! [`Document`] is the in-memory implementation used by the Zellij host and
//! by tests.
//!
//! # Modules
//!
//! - [`node`]: Markup values and HTML serialisation
//! - [`selector`]: `#id` / `.class` / `tag` selectors
//! - [`document`]: Arena-backed live tree with listeners
//! - [`events`]: Event kinds, events, and deliveries
//!
//! # Example
//!
//! ```rust
//! use shoplist::dom::{Document, DocumentEnv, Element, EventKind, Selector, UiEvent};
//!
//! let mut doc: Document<&str> = Document::new(Element::new("ul").class("list"));
//! let list = doc.select(&Selector::parse(".list")?).unwrap();
//! doc.subscribe(EventKind::Click, list, None, "clicked");
//!
//! let event = UiEvent::click(list);
//! let fired: Vec<_> = doc.begin_dispatch(&event).into_iter().map(|d| d.handler).collect();
//! assert_eq!(fired, ["clicked"]);
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

pub mod document;
pub mod events;
pub mod node;
pub mod selector;

pub use document::{Document, NodeId};
pub use events::{Delivery, EventKind, Listener, UiEvent};
pub use node::{Element, Node};
pub use selector::Selector;

/// What the view controller requires from its display environment.
pub trait DocumentEnv {
    /// Value carried by subscriptions and handed back on dispatch.
    type Handler;

    /// First element matching `selector`.
    fn select(&self, selector: &Selector) -> Option<NodeId>;

    /// Replaces the entire content of `container`.
    fn replace_content(&mut self, container: NodeId, nodes: Vec<Node>);

    /// Current text of an input; empty when unset.
    fn input_value(&self, input: NodeId) -> String;

    fn set_input_value(&mut self, input: NodeId, value: &str);

    /// `from` or its nearest ancestor matching `selector`.
    fn closest(&self, from: NodeId, selector: &Selector) -> Option<NodeId>;

    /// A `data-*` attribute of `element`.
    fn data(&self, element: NodeId, key: &str) -> Option<String>;

    /// Subscribes `handler` to `kind` events on `scope`, optionally
    /// delegated to descendants matching `delegate`.
    fn subscribe(
        &mut self,
        kind: EventKind,
        scope: NodeId,
        delegate: Option<Selector>,
        handler: Self::Handler,
    );

    /// Starts dispatching `event`: runs pre-handler default behavior and
    /// returns the handlers to run, in order.
    fn begin_dispatch(&mut self, event: &UiEvent) -> Vec<Delivery<Self::Handler>>;

    /// Finishes dispatching `event` after its handlers ran.
    fn end_dispatch(&mut self, event: &UiEvent);
}

impl<H: Clone> DocumentEnv for Document<H> {
    type Handler = H;

    fn select(&self, selector: &Selector) -> Option<NodeId> {
        self.query(selector)
    }

    fn replace_content(&mut self, container: NodeId, nodes: Vec<Node>) {
        self.replace_children(container, nodes);
    }

    fn input_value(&self, input: NodeId) -> String {
        self.value(input).unwrap_or_default().to_string()
    }

    fn set_input_value(&mut self, input: NodeId, value: &str) {
        self.set_value(input, value);
    }

    fn closest(&self, from: NodeId, selector: &Selector) -> Option<NodeId> {
        Self::closest(self, from, selector)
    }

    fn data(&self, element: NodeId, key: &str) -> Option<String> {
        Self::data(self, element, key).map(String::from)
    }

    fn subscribe(
        &mut self,
        kind: EventKind,
        scope: NodeId,
        delegate: Option<Selector>,
        handler: H,
    ) {
        self.listen(kind, scope, delegate, handler);
    }

    fn begin_dispatch(&mut self, event: &UiEvent) -> Vec<Delivery<H>> {
        let deliveries = self.deliveries(event);
        self.begin_default_action(event);
        deliveries
    }

    fn end_dispatch(&mut self, event: &UiEvent) {
        self.finish_default_action(event);
    }
}
