//! Cached handle for one shopping list.

use chrono::{DateTime, Utc};
use tracing::debug;

use bringctl_core::{BringError, Item, ListService, ListSummary};

/// One shopping list with a possibly-cached view of its contents.
///
/// The handle owns two cached collections (pending purchase, recently
/// completed) and a staleness timestamp. Reads serve the cache while it is
/// younger than the service's TTL and refresh synchronously otherwise;
/// mutations write through to the service and then refresh unconditionally,
/// since mutation responses carry no fresh list state.
///
/// The service reference is non-owning: the session's lifetime is
/// controlled by the caller, not by the lists it serves. The check-then-
/// refresh sequence is not atomic, the handle assumes a single logical
/// caller.
#[derive(Debug)]
pub struct ShoppingList<'a, S: ListService> {
    name: String,
    uuid: String,
    service: &'a S,
    pending: Vec<Item>,
    recently: Vec<Item>,
    last_refreshed_at: Option<DateTime<Utc>>,
}

impl<'a, S: ListService> ShoppingList<'a, S> {
    /// Creates a never-fetched handle from a list-of-lists entry.
    pub fn new(summary: ListSummary, service: &'a S) -> Self {
        Self {
            name: summary.name,
            uuid: summary.uuid,
            service,
            pending: Vec::new(),
            recently: Vec::new(),
            last_refreshed_at: None,
        }
    }

    /// Display name of the list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote uuid of the list.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Adds an item to the purchase collection, then refreshes the cache.
    ///
    /// # Errors
    ///
    /// Propagates the service's failure; the cache is left untouched when
    /// the write fails.
    pub fn add(&mut self, name: &str, specification: &str) -> Result<(), BringError> {
        self.service.add_item(&self.uuid, name, specification)?;
        self.refresh()
    }

    /// Marks an item purchased (moves it to recently used), then refreshes.
    ///
    /// A name absent from the cached pending collection is still passed
    /// through; the remote service's answer is authoritative.
    ///
    /// # Errors
    ///
    /// Propagates the service's failure.
    pub fn purchase(&mut self, name: &str) -> Result<(), BringError> {
        self.service.mark_purchased(&self.uuid, name)?;
        self.refresh()
    }

    /// Items still to buy, refreshing first iff the cache is stale.
    ///
    /// # Errors
    ///
    /// Propagates a failed refresh.
    pub fn pending_items(&mut self) -> Result<&[Item], BringError> {
        self.refresh_if_stale()?;
        Ok(&self.pending)
    }

    /// Recently purchased items, refreshing first iff the cache is stale.
    ///
    /// # Errors
    ///
    /// Propagates a failed refresh.
    pub fn recently_items(&mut self) -> Result<&[Item], BringError> {
        self.refresh_if_stale()?;
        Ok(&self.recently)
    }

    /// One-line summary, refreshing first iff the cache is stale.
    ///
    /// # Errors
    ///
    /// Propagates a failed refresh.
    pub fn summary(&mut self) -> Result<String, BringError> {
        self.refresh_if_stale()?;
        Ok(format!(
            "{} (Purchase: {}, Recently: {})",
            self.name,
            self.pending.len(),
            self.recently.len()
        ))
    }

    /// Refreshes when the cache has never been filled or has outlived the
    /// service's TTL.
    fn refresh_if_stale(&mut self) -> Result<(), BringError> {
        if self.is_stale() {
            self.refresh()?;
        }
        Ok(())
    }

    fn is_stale(&self) -> bool {
        match self.last_refreshed_at {
            Some(at) => {
                let age = Utc::now().signed_duration_since(at);
                age >= chrono::Duration::from_std(self.service.cache_ttl())
                    .unwrap_or(chrono::Duration::MAX)
            }
            None => true, // Never fetched = stale
        }
    }

    /// Replaces both cached collections from the remote, order preserved.
    fn refresh(&mut self) -> Result<(), BringError> {
        debug!(list = %self.name, uuid = %self.uuid, "Refreshing list cache");
        let detail = self.service.fetch_list(&self.uuid)?;
        self.pending = detail.purchase;
        self.recently = detail.recently;
        self.last_refreshed_at = Some(Utc::now());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bringctl_core::ListDetail;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    /// In-memory service with call counting.
    struct FakeService {
        detail: RefCell<ListDetail>,
        ttl: Duration,
        fetch_calls: Cell<usize>,
        mark_calls: Cell<usize>,
        fail_mutations: bool,
    }

    impl FakeService {
        fn with_items(pending: Vec<Item>, recently: Vec<Item>, ttl: Duration) -> Self {
            Self {
                detail: RefCell::new(ListDetail {
                    status: "REGISTERED".to_string(),
                    purchase: pending,
                    recently,
                }),
                ttl,
                fetch_calls: Cell::new(0),
                mark_calls: Cell::new(0),
                fail_mutations: false,
            }
        }

        fn empty(ttl: Duration) -> Self {
            Self::with_items(Vec::new(), Vec::new(), ttl)
        }
    }

    impl ListService for FakeService {
        fn fetch_list(&self, _list_uuid: &str) -> Result<ListDetail, BringError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            Ok(self.detail.borrow().clone())
        }

        fn add_item(
            &self,
            _list_uuid: &str,
            name: &str,
            specification: &str,
        ) -> Result<(), BringError> {
            if self.fail_mutations {
                return Err(BringError::Remote("HTTP 500 Internal Server Error".into()));
            }
            self.detail
                .borrow_mut()
                .purchase
                .push(Item::new(name, specification));
            Ok(())
        }

        fn mark_purchased(&self, _list_uuid: &str, name: &str) -> Result<(), BringError> {
            self.mark_calls.set(self.mark_calls.get() + 1);
            if self.fail_mutations {
                return Err(BringError::Remote("HTTP 500 Internal Server Error".into()));
            }
            let mut detail = self.detail.borrow_mut();
            if let Some(pos) = detail.purchase.iter().position(|i| i.name == name) {
                let item = detail.purchase.remove(pos);
                detail.recently.insert(0, item);
            }
            Ok(())
        }

        fn cache_ttl(&self) -> Duration {
            self.ttl
        }
    }

    fn handle(service: &FakeService) -> ShoppingList<'_, FakeService> {
        ShoppingList::new(
            ListSummary {
                name: "Home".to_string(),
                uuid: "list-1".to_string(),
            },
            service,
        )
    }

    const FRESH: Duration = Duration::from_secs(600);

    #[test]
    fn first_read_always_fetches() {
        let service = FakeService::empty(FRESH);
        let mut list = handle(&service);

        assert!(list.pending_items().unwrap().is_empty());
        assert_eq!(service.fetch_calls.get(), 1);
    }

    #[test]
    fn fresh_cache_is_served_without_refetch() {
        let service =
            FakeService::with_items(vec![Item::new("Milk", "")], Vec::new(), FRESH);
        let mut list = handle(&service);

        list.pending_items().unwrap();
        list.recently_items().unwrap();
        list.summary().unwrap();
        assert_eq!(service.fetch_calls.get(), 1);
    }

    #[test]
    fn expired_cache_refetches_on_each_read() {
        let service = FakeService::empty(Duration::ZERO);
        let mut list = handle(&service);

        list.pending_items().unwrap();
        list.pending_items().unwrap();
        assert_eq!(service.fetch_calls.get(), 2);
    }

    #[test]
    fn add_without_specification_appears_pending() {
        let service = FakeService::empty(FRESH);
        let mut list = handle(&service);

        list.add("Bread", "").unwrap();
        let pending = list.pending_items().unwrap();
        assert_eq!(pending, [Item::new("Bread", "")]);
        assert!(pending[0].is_unspecified());
    }

    #[test]
    fn add_with_specification_keeps_it() {
        let service = FakeService::empty(FRESH);
        let mut list = handle(&service);

        list.add("Milk", "2").unwrap();
        assert_eq!(list.pending_items().unwrap(), [Item::new("Milk", "2")]);
    }

    #[test]
    fn purchase_moves_item_to_recently() {
        let service =
            FakeService::with_items(vec![Item::new("Milk", "2")], Vec::new(), FRESH);
        let mut list = handle(&service);

        list.purchase("Milk").unwrap();
        assert!(list.pending_items().unwrap().is_empty());
        assert_eq!(list.recently_items().unwrap(), [Item::new("Milk", "2")]);
    }

    #[test]
    fn mutation_refreshes_even_when_cache_is_fresh() {
        let service = FakeService::empty(FRESH);
        let mut list = handle(&service);

        list.pending_items().unwrap();
        assert_eq!(service.fetch_calls.get(), 1);

        list.add("Butter", "").unwrap();
        assert_eq!(service.fetch_calls.get(), 2);
    }

    #[test]
    fn summary_reports_cached_counts() {
        let service = FakeService::with_items(
            vec![Item::new("Milk", "")],
            Vec::new(),
            FRESH,
        );
        let mut list = handle(&service);

        assert_eq!(list.summary().unwrap(), "Home (Purchase: 1, Recently: 0)");
    }

    #[test]
    fn unknown_purchase_is_passed_through() {
        let service = FakeService::empty(FRESH);
        let mut list = handle(&service);

        // No local pre-validation: the remote decides.
        list.purchase("Nonexistent").unwrap();
        assert_eq!(service.mark_calls.get(), 1);
    }

    #[test]
    fn failed_mutation_propagates_and_skips_refresh() {
        let mut service = FakeService::empty(FRESH);
        service.fail_mutations = true;
        let mut list = handle(&service);

        let err = list.add("Milk", "").unwrap_err();
        assert!(matches!(err, BringError::Remote(_)));
        assert_eq!(service.fetch_calls.get(), 0);
    }
}
