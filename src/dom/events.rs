//! UI events and listener registrations.
//!
//! Events are plain values: a kind and a target node. Listeners carry an
//! opaque handler value of type `H` instead of a callback, so dispatch only
//! answers "which handlers fire, and with which current target". The caller
//! (the view controller) runs them. This keeps the document free of borrowed
//! application state and makes dispatch testable headlessly.

use super::{NodeId, Selector};

/// The event kinds the shopping list listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    Click,
}

/// A user interaction aimed at one node of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: NodeId,
    default_prevented: bool,
}

impl UiEvent {
    #[must_use]
    pub const fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    #[must_use]
    pub const fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target)
    }

    #[must_use]
    pub const fn submit(target: NodeId) -> Self {
        Self::new(EventKind::Submit, target)
    }

    /// Suppresses the document's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A registered subscription.
///
/// `delegate` selects descendants of `element` that the listener reacts to;
/// `None` means the element itself.
#[derive(Debug, Clone)]
pub struct Listener<H> {
    pub kind: EventKind,
    pub element: NodeId,
    pub delegate: Option<Selector>,
    pub handler: H,
}

/// One handler to run for a dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<H> {
    pub handler: H,
    /// The node the listener matched: the delegate match, or the listening
    /// element for direct listeners.
    pub current_target: NodeId,
}
