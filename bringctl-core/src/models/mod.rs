//! Domain models for `bringctl`.
//!
//! This module contains the data structures exchanged with the Bring!
//! service and cached by the list handle.
//!
//! ## Submodules
//!
//! - [`item`] - Shopping list items
//! - [`list`] - List summary and detail payloads

mod item;
mod list;

// Re-export everything at the models level
pub use item::Item;
pub use list::{ListDetail, ListSummary};
