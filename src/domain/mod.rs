//! Domain layer for the shopping list.
//!
//! Core types independent of the Zellij host and of the document environment.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item, item id, and seed models

pub mod error;
pub mod item;

pub use error::{Result, ShoplistError};
pub use item::{Item, ItemId, SeedItem};
