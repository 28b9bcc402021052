//! Error types for the shopping list plugin.
//!
//! This module defines the centralized error type [`ShoplistError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Note that lookup misses (mutating an item id that no longer exists) are not
//! errors: the store treats them as silent no-ops. Bad configuration values are
//! not errors either; they fall back to defaults and are logged.

use thiserror::Error;

/// The main error type for shopping list operations.
///
/// # Examples
///
/// ```
/// use shoplist::ShoplistError;
///
/// let err = ShoplistError::ElementNotFound(".js-shopping-list".to_string());
/// assert_eq!(err.to_string(), "Element not found: .js-shopping-list");
/// ```
#[derive(Debug, Error)]
pub enum ShoplistError {
    /// A selector matched no element in the document.
    ///
    /// The page shell is missing a node the view controller needs (the list
    /// container, the entry form, or the filter toggle). This indicates a
    /// broken page, not a user error.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A selector string could not be parsed.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

}

/// A specialized `Result` type for shopping list operations.
pub type Result<T> = std::result::Result<T, ShoplistError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    #[test]
    fn selector_parse_failures_surface_as_selector_errors() {
        let err = Selector::parse("ul > li").unwrap_err();
        assert!(matches!(err, ShoplistError::Selector(_)));
        assert!(err.to_string().starts_with("Invalid selector: "));
    }

    #[test]
    fn theme_errors_carry_their_message() {
        let err = ShoplistError::Theme("failed to read x.toml".to_string());
        assert_eq!(err.to_string(), "Theme error: failed to read x.toml");
    }
}
