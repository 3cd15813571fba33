//! Trait definitions for `bringctl`.
//!
//! This module defines the seam between the cached list handle and the
//! remote service, so the handle's refresh logic can be tested against a
//! fake implementation.

use std::time::Duration;

use crate::error::BringError;
use crate::models::ListDetail;

/// Per-list remote operations.
///
/// Implementors are responsible for:
/// - Addressing the list by its remote uuid
/// - Attaching the client-identification and authorization headers
/// - Mapping transport and status failures to [`BringError`]
///
/// The list handle keeps a non-owning reference to a `ListService` and
/// routes every remote round trip through it. Operations are synchronous
/// blocking calls; nothing here is designed for concurrent invocation.
pub trait ListService {
    /// Fetches the full contents of one list.
    fn fetch_list(&self, list_uuid: &str) -> Result<ListDetail, BringError>;

    /// Appends an item to the list's purchase collection.
    ///
    /// Side effect only; the response body carries no fresh list state.
    fn add_item(
        &self,
        list_uuid: &str,
        name: &str,
        specification: &str,
    ) -> Result<(), BringError>;

    /// Moves an item from the purchase collection into recently used.
    ///
    /// The name is passed through unvalidated; the remote service is
    /// authoritative about whether the item exists.
    fn mark_purchased(&self, list_uuid: &str, name: &str) -> Result<(), BringError>;

    /// Maximum age before cached list data must be re-fetched.
    fn cache_ttl(&self) -> Duration;
}
