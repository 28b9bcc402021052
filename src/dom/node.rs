//! Markup node tree.
//!
//! [`Node`] is the value form of markup: what renderers produce and what the
//! [`Document`](super::Document) mounts. It serialises to HTML via `Display`.
//!
//! ```rust
//! use shoplist::dom::{Element, Node};
//!
//! let node: Node = Element::new("li")
//!     .attr("data-item-id", "c1")
//!     .child(Element::new("span").class("shopping-item").text("milk & eggs"))
//!     .into();
//! assert_eq!(
//!     node.to_string(),
//!     r#"<li data-item-id="c1"><span class="shopping-item">milk &amp; eggs</span></li>"#
//! );
//! ```

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// A markup node: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an existing value of the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_attr(&mut self.attrs, name.into(), value.into());
        self
    }

    /// Appends a class to the `class` attribute. Blank names are skipped.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if class.trim().is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) if !value.is_empty() => {
                value.push(' ');
                value.push_str(class);
            }
            Some((_, value)) => value.push_str(class),
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub(crate) fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

pub(crate) fn set_attr(attrs: &mut Vec<(String, String)>, name: String, value: String) {
    match attrs.iter_mut().find(|(existing, _)| *existing == name) {
        Some((_, slot)) => *slot = value,
        None => attrs.push((name, value)),
    }
}

/// Escapes text for HTML content and double-quoted attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(&escape(text)),
            Self::Element(element) => element.fmt(f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        f.write_str(">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_appends_and_skips_blank() {
        let el = Element::new("span").class("a").class("").class("b");
        assert_eq!(el.to_string(), r#"<span class="a b"></span>"#);
    }

    #[test]
    fn attr_replaces_existing_value() {
        let el = Element::new("input").attr("value", "x").attr("value", "y");
        assert_eq!(el.to_string(), r#"<input value="y">"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("li")
            .attr("title", r#"say "hi""#)
            .text("<b>bold</b>");
        assert_eq!(
            el.to_string(),
            r#"<li title="say &quot;hi&quot;">&lt;b&gt;bold&lt;/b&gt;</li>"#
        );
    }
}
