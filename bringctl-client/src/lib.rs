// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `bringctl` Client
//!
//! HTTP session and cached list handle for the Bring! shopping list
//! service.
//!
//! This crate performs all remote communication:
//!
//! - [`Config`] - Endpoint base URL, client-identification headers, and
//!   cache TTL, overridable for tests
//! - [`Session`] - Authenticated identity plus the raw blocking HTTP
//!   operations (no caching, no retries)
//! - [`ShoppingList`] - One list's possibly-cached view; routes mutations
//!   through the session and refreshes its cache time-based
//!
//! ## Example
//!
//! ```ignore
//! use bringctl_client::{Config, Session};
//!
//! let session = Session::authenticate(Config::default(), "me@example.com", "secret")?;
//! for mut list in session.lists()? {
//!     println!("{}", list.summary()?);
//! }
//! ```

pub mod config;
pub mod list;
pub mod session;

// Re-export key types at crate root
pub use config::Config;
pub use list::ShoppingList;
pub use session::Session;
