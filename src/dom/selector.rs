//! Minimal CSS selectors.
//!
//! Supports the forms the shopping list needs: `#id`, `.class`, `tag`, and a
//! tag with classes (`li.done`, `.a.b`).

use crate::domain::{Result, ShoplistError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    source: String,
}

impl Selector {
    /// Parses a selector string.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::Selector`] for empty input, whitespace
    /// (descendant combinators are not supported), or empty name segments.
    ///
    /// ```rust
    /// use shoplist::dom::Selector;
    ///
    /// let sel = Selector::parse("li.js-item")?;
    /// assert!(sel.matches("li", &[("class".into(), "js-item done".into())]));
    /// assert!(Selector::parse("ul li").is_err());
    /// # Ok::<(), shoplist::ShoplistError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = || ShoplistError::Selector(source.to_string());
        let trimmed = source.trim();
        if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let mut selector = Self {
            tag: None,
            id: None,
            classes: Vec::new(),
            source: trimmed.to_string(),
        };

        let mut rest = trimmed;
        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return Err(invalid());
            }
            match marker {
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                _ => return Err(invalid()),
            }
            rest = &body[end..];
        }

        Ok(selector)
    }

    /// Tests an element described by its tag and attributes.
    #[must_use]
    pub fn matches(&self, tag: &str, attrs: &[(String, String)]) -> bool {
        let attr = |name: &str| {
            attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        if self.tag.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        if let Some(id) = &self.id {
            if attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        let class_list = attr("class").unwrap_or_default();
        self.classes
            .iter()
            .all(|wanted| class_list.split_whitespace().any(|c| c == wanted))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = ShoplistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_each_form() {
        let by_id = Selector::parse("#js-shopping-list-form").unwrap();
        assert!(by_id.matches("form", &attrs(&[("id", "js-shopping-list-form")])));
        assert!(!by_id.matches("form", &attrs(&[("id", "other")])));

        let by_class = Selector::parse(".js-item-toggle").unwrap();
        assert!(by_class.matches(
            "button",
            &attrs(&[("class", "shopping-item-toggle js-item-toggle")])
        ));
        assert!(!by_class.matches("button", &attrs(&[("class", "js-item-toggle-x")])));

        let by_tag = Selector::parse("LI").unwrap();
        assert!(by_tag.matches("li", &[]));
        assert!(!by_tag.matches("ul", &[]));
    }

    #[test]
    fn compound_requires_every_part() {
        let sel = Selector::parse("span.a.b").unwrap();
        assert!(sel.matches("span", &attrs(&[("class", "b c a")])));
        assert!(!sel.matches("span", &attrs(&[("class", "a")])));
        assert!(!sel.matches("div", &attrs(&[("class", "a b")])));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "   ", "ul li", ".", "li.", "#a#b", "a..b"] {
            assert!(Selector::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }
}
