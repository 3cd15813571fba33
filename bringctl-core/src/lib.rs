// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `bringctl` Core
//!
//! Core types, models, and traits shared across the `bringctl` crates.
//!
//! This crate provides:
//!
//! - Domain models (items, list summaries, list detail payloads)
//! - The error type for all remote operations
//! - The [`ListService`] trait that the cached list handle is written
//!   against, so tests can substitute a fake service
//!
//! ## Key Types
//!
//! - [`Item`] - One entry on a shopping list (name + optional specification)
//! - [`ListSummary`] - Name/uuid pair from the list-of-lists endpoint
//! - [`ListDetail`] - Full contents of one list (purchase + recently)
//! - [`BringError`] - Authentication vs. remote failure
//! - [`ListService`] - Per-list remote operations

pub mod error;
pub mod models;
pub mod traits;

// Re-export error type
pub use error::BringError;

// Re-export all model types
pub use models::{Item, ListDetail, ListSummary};

// Re-export traits
pub use traits::ListService;
