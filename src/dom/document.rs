//! Arena-backed in-memory document.
//!
//! Nodes live in a [`SlotMap`] keyed by [`NodeId`]. Keys are generational:
//! freed slots are reused, but a handle to replaced content never resolves
//! again. Events aimed at such a handle deliver nothing.

use slotmap::SlotMap;

use super::events::{Delivery, EventKind, Listener, UiEvent};
use super::node::{set_attr, Element, Node};
use super::Selector;

slotmap::new_key_type! {
    /// Handle to a node in a [`Document`].
    pub struct NodeId;
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Slot {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A live document tree plus its event listeners.
///
/// `H` is the handler value listeners carry; see [`super::events`].
#[derive(Debug, Clone)]
pub struct Document<H> {
    slots: SlotMap<NodeId, Slot>,
    root: NodeId,
    listeners: Vec<Listener<H>>,
}

impl<H> Document<H> {
    /// Mounts `root` as the whole document.
    #[must_use]
    pub fn new(root: impl Into<Node>) -> Self {
        let mut doc = Self {
            slots: SlotMap::with_key(),
            root: NodeId::default(),
            listeners: Vec::new(),
        };
        doc.root = doc.mount(root.into(), None);
        doc
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `id` still refers to a mounted node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of mounted nodes, text nodes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id)
    }

    fn mount(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let (data, children) = match node {
            Node::Text(text) => (NodeData::Text(text), Vec::new()),
            Node::Element(Element {
                tag,
                attrs,
                children,
            }) => (NodeData::Element { tag, attrs }, children),
        };
        let id = self.slots.insert(Slot {
            data,
            parent,
            children: Vec::new(),
        });

        let child_ids: Vec<NodeId> = children
            .into_iter()
            .map(|child| self.mount(child, Some(id)))
            .collect();
        if let Some(slot) = self.slots.get_mut(id) {
            slot.children = child_ids;
        }
        id
    }

    fn release(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.remove(id) {
            for child in slot.children {
                self.release(child);
            }
        }
    }

    /// Element children and text nodes of `id`, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map_or(&[], |slot| slot.children.as_slice())
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Tag name, or `None` for text nodes and stale handles.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.slot(id)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    fn attrs(&self, id: NodeId) -> Option<(&str, &[(String, String)])> {
        match &self.slot(id)?.data {
            NodeData::Element { tag, attrs } => Some((tag.as_str(), attrs.as_slice())),
            NodeData::Text(_) => None,
        }
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        let (_, attrs) = self.attrs(id)?;
        attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute on an element. Returns `false` for text nodes and
    /// stale handles.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.slots.get_mut(id) {
            Some(Slot {
                data: NodeData::Element { attrs, .. },
                ..
            }) => {
                set_attr(attrs, name.to_string(), value.into());
                true
            }
            _ => false,
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(Slot {
            data: NodeData::Element { attrs, .. },
            ..
        }) = self.slots.get_mut(id)
        {
            attrs.retain(|(key, _)| key != name);
        }
    }

    /// Reads a `data-*` attribute, e.g. `data(li, "item-id")`.
    #[must_use]
    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attr(id, &format!("data-{key}"))
    }

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.attrs(id)
            .is_some_and(|(tag, attrs)| selector.matches(tag, attrs))
    }

    /// The current value of a form control.
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "value")
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) -> bool {
        self.set_attr(id, "value", value)
    }

    fn descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            out.push(child);
            self.descendants(child, out);
        }
    }

    /// All elements under `scope` (exclusive) matching `selector`, in
    /// document order.
    #[must_use]
    pub fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(scope, &mut all);
        all.retain(|&id| self.matches(id, selector));
        all
    }

    /// All matching elements in the document, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut found = self.query_within(self.root, selector);
        if self.matches(self.root, selector) {
            found.insert(0, self.root);
        }
        found
    }

    /// First matching element in document order.
    #[must_use]
    pub fn query(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// `id` itself or its nearest ancestor matching `selector`.
    #[must_use]
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut cursor = Some(id).filter(|&id| self.contains(id));
        while let Some(current) = cursor {
            if self.matches(current, selector) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Whether `id` is `ancestor` or lies beneath it.
    #[must_use]
    pub fn is_inclusive_descendant(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(id).filter(|&id| self.contains(id));
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Concatenated text of `id` and all its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(slot) = self.slot(id) else {
            return;
        };
        if let NodeData::Text(text) = &slot.data {
            out.push_str(text);
        }
        for &child in &slot.children {
            self.collect_text(child, out);
        }
    }

    /// Replaces every child of `id` with freshly mounted `nodes`.
    ///
    /// Returns the ids of the new top-level children. The old subtree is
    /// released; its handles become stale.
    pub fn replace_children(&mut self, id: NodeId, nodes: Vec<Node>) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let old = self
            .slots
            .get_mut(id)
            .map(|slot| std::mem::take(&mut slot.children))
            .unwrap_or_default();
        for child in old {
            self.release(child);
        }

        let mounted: Vec<NodeId> = nodes
            .into_iter()
            .map(|node| self.mount(node, Some(id)))
            .collect();
        if let Some(slot) = self.slots.get_mut(id) {
            slot.children.clone_from(&mounted);
        }
        mounted
    }

    /// Rebuilds the value form of the subtree rooted at `id`.
    #[must_use]
    pub fn to_node(&self, id: NodeId) -> Option<Node> {
        let slot = self.slot(id)?;
        Some(match &slot.data {
            NodeData::Text(text) => Node::Text(text.clone()),
            NodeData::Element { tag, attrs } => Node::Element(Element {
                tag: tag.clone(),
                attrs: attrs.clone(),
                children: slot
                    .children
                    .iter()
                    .filter_map(|&child| self.to_node(child))
                    .collect(),
            }),
        })
    }

    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        self.to_node(id).map(|node| node.to_string()).unwrap_or_default()
    }

    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .map(|&child| self.outer_html(child))
            .collect()
    }

    /// Registers a listener on `element`.
    pub fn listen(
        &mut self,
        kind: EventKind,
        element: NodeId,
        delegate: Option<Selector>,
        handler: H,
    ) {
        self.listeners.push(Listener {
            kind,
            element,
            delegate,
            handler,
        });
    }

    #[must_use]
    pub fn listeners(&self) -> &[Listener<H>] {
        &self.listeners
    }

    /// Performs the built-in behavior for `event`.
    ///
    /// Checkbox clicks flip `checked` before handlers run, as browsers do.
    /// Call [`Document::finish_default_action`] after handlers for the rest.
    pub fn begin_default_action(&mut self, event: &UiEvent) {
        if event.kind != EventKind::Click {
            return;
        }
        let is_checkbox = self.tag(event.target) == Some("input")
            && self.attr(event.target, "type") == Some("checkbox");
        if is_checkbox {
            if self.attr(event.target, "checked").is_some() {
                self.remove_attr(event.target, "checked");
            } else {
                self.set_attr(event.target, "checked", "checked");
            }
        }
    }

    /// Completes the built-in behavior for `event` unless it was prevented.
    ///
    /// An unprevented submit clears the form's inputs, standing in for the
    /// page navigation a browser would perform.
    pub fn finish_default_action(&mut self, event: &UiEvent) {
        if event.kind != EventKind::Submit || event.default_prevented() {
            return;
        }
        let mut fields = Vec::new();
        self.descendants(event.target, &mut fields);
        for field in fields {
            if self.tag(field) == Some("input") && self.attr(field, "type") != Some("checkbox") {
                self.set_value(field, "");
            }
        }
    }
}

impl<H: Clone> Document<H> {
    /// Resolves which listeners fire for `event`, in registration order.
    ///
    /// A delegated listener fires when some node between the event target
    /// (inclusive) and the listening element (exclusive) matches its
    /// delegate; the nearest such node becomes the current target. A direct
    /// listener fires when the target lies within the listening element.
    #[must_use]
    pub fn deliveries(&self, event: &UiEvent) -> Vec<Delivery<H>> {
        if !self.contains(event.target) {
            return Vec::new();
        }

        self.listeners
            .iter()
            .filter(|listener| listener.kind == event.kind)
            .filter(|listener| self.is_inclusive_descendant(event.target, listener.element))
            .filter_map(|listener| {
                let current_target = match &listener.delegate {
                    None => listener.element,
                    Some(selector) => self.delegate_target(event.target, listener.element, selector)?,
                };
                Some(Delivery {
                    handler: listener.handler.clone(),
                    current_target,
                })
            })
            .collect()
    }

    fn delegate_target(&self, target: NodeId, root: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut cursor = Some(target);
        while let Some(current) = cursor {
            if current == root {
                return None;
            }
            if self.matches(current, selector) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    fn list_item(id: &str, name: &str) -> Node {
        Element::new("li")
            .attr("data-item-id", id)
            .child(Element::new("span").class("name").text(name))
            .child(Element::new("button").class("js-toggle").child(Element::new("span").text("check")))
            .into()
    }

    fn page() -> Document<&'static str> {
        Document::new(
            Element::new("main")
                .child(
                    Element::new("form")
                        .attr("id", "entry")
                        .child(Element::new("input").attr("type", "text").class("entry").attr("value", "")),
                )
                .child(Element::new("input").attr("type", "checkbox").class("hide"))
                .child(Element::new("ul").class("list")),
        )
    }

    #[test]
    fn query_finds_elements_in_document_order() {
        let doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        assert_eq!(doc.tag(list), Some("ul"));
        assert_eq!(doc.query_all(&sel("input")).len(), 2);
        assert_eq!(doc.query(&sel("main")), Some(doc.root()));
        assert!(doc.query(&sel(".missing")).is_none());
    }

    #[test]
    fn replace_children_invalidates_old_handles() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        let first = doc.replace_children(list, vec![list_item("a", "apples")]);
        let old_button = doc.query(&sel(".js-toggle")).unwrap();

        let second = doc.replace_children(list, vec![list_item("b", "bread"), list_item("c", "cheese")]);

        assert!(!doc.contains(first[0]));
        assert!(!doc.contains(old_button));
        assert_eq!(second.len(), 2);
        assert!(second.iter().all(|id| doc.contains(*id) && *id != first[0]));
        assert_eq!(doc.text_content(list), "breadcheckcheesecheck");
    }

    #[test]
    fn repeated_renders_keep_the_arena_sized_to_the_live_tree() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        doc.replace_children(list, vec![list_item("a", "apples")]);
        let live = doc.len();

        for _ in 0..1_000 {
            doc.replace_children(list, vec![list_item("a", "apples")]);
        }
        assert_eq!(doc.len(), live);

        doc.replace_children(list, Vec::new());
        assert_eq!(doc.len(), page().len());
    }

    #[test]
    fn closest_walks_up_and_reads_data() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        doc.replace_children(list, vec![list_item("c42", "milk")]);
        let label = doc.query(&sel(".js-toggle")).map(|b| doc.children(b)[0]).unwrap();

        let li = doc.closest(label, &sel("li")).unwrap();
        assert_eq!(doc.data(li, "item-id"), Some("c42"));
        assert!(doc.closest(label, &sel("form")).is_none());
    }

    #[test]
    fn inner_html_round_trips_markup() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        let item = list_item("x", "a < b");
        doc.replace_children(list, vec![item.clone()]);
        assert_eq!(doc.inner_html(list), item.to_string());
    }

    #[test]
    fn delegated_listener_resolves_matching_ancestor() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        doc.listen(EventKind::Click, list, Some(sel(".js-toggle")), "toggle");
        doc.replace_children(list, vec![list_item("a", "apples")]);

        let button = doc.query(&sel(".js-toggle")).unwrap();
        let label = doc.children(button)[0];
        let deliveries = doc.deliveries(&UiEvent::click(label));
        assert_eq!(deliveries, vec![Delivery { handler: "toggle", current_target: button }]);

        let name = doc.query(&sel(".name")).unwrap();
        assert!(doc.deliveries(&UiEvent::click(name)).is_empty());
        assert!(doc.deliveries(&UiEvent::submit(label)).is_empty());
    }

    #[test]
    fn delegate_never_matches_the_listening_element_itself() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        doc.listen(EventKind::Click, list, Some(sel(".list")), "self");
        assert!(doc.deliveries(&UiEvent::click(list)).is_empty());
    }

    #[test]
    fn direct_listener_fires_for_descendants_in_registration_order() {
        let mut doc = page();
        let form = doc.query(&sel("#entry")).unwrap();
        doc.listen(EventKind::Submit, form, None, "first");
        doc.listen(EventKind::Submit, form, None, "second");

        let handlers: Vec<&str> = doc
            .deliveries(&UiEvent::submit(form))
            .into_iter()
            .map(|d| d.handler)
            .collect();
        assert_eq!(handlers, ["first", "second"]);
    }

    #[test]
    fn stale_targets_deliver_nothing() {
        let mut doc = page();
        let list = doc.query(&sel(".list")).unwrap();
        doc.listen(EventKind::Click, list, Some(sel(".js-toggle")), "toggle");
        doc.replace_children(list, vec![list_item("a", "apples")]);
        let button = doc.query(&sel(".js-toggle")).unwrap();
        doc.replace_children(list, vec![list_item("a", "apples")]);

        assert!(doc.deliveries(&UiEvent::click(button)).is_empty());
    }

    #[test]
    fn default_actions_toggle_checkbox_and_reset_forms() {
        let mut doc = page();
        let hide = doc.query(&sel(".hide")).unwrap();
        doc.begin_default_action(&UiEvent::click(hide));
        assert_eq!(doc.attr(hide, "checked"), Some("checked"));
        doc.begin_default_action(&UiEvent::click(hide));
        assert_eq!(doc.attr(hide, "checked"), None);

        let form = doc.query(&sel("#entry")).unwrap();
        let input = doc.query(&sel(".entry")).unwrap();
        doc.set_value(input, "typed");

        let mut prevented = UiEvent::submit(form);
        prevented.prevent_default();
        doc.finish_default_action(&prevented);
        assert_eq!(doc.value(input), Some("typed"));

        doc.finish_default_action(&UiEvent::submit(form));
        assert_eq!(doc.value(input), Some(""));
    }
}
