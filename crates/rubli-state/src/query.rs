//! Per-key query cache.
//!
//! Every query key owns one entry with an explicit status
//! (`idle | loading | success | error`) and a last-good value slot that
//! survives later failures and refetches.
//!
//! Each fetch takes a generation number when it starts. Its result is only
//! written if that generation is still the newest one for the key, so a slow
//! response to a superseded request can never overwrite a newer one.
//! Invalidation bumps the generation too, which orphans whatever is in
//! flight and forces the next read to refetch.
//!
//! The lock is only taken in short synchronous sections and never held
//! across an `.await`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rubli_core::enums::EntityType;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// First segment of every query key. Mutations invalidate by collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Stats,
    Contracts,
    Vendors,
    Institutions,
    Sectors,
    Analysis,
    Categories,
    Network,
    Hypotheses,
    Cases,
    Watchlist,
    Dossiers,
    Feedback,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Contracts => "contracts",
            Self::Vendors => "vendors",
            Self::Institutions => "institutions",
            Self::Sectors => "sectors",
            Self::Analysis => "analysis",
            Self::Categories => "categories",
            Self::Network => "network",
            Self::Hypotheses => "hypotheses",
            Self::Cases => "cases",
            Self::Watchlist => "watchlist",
            Self::Dossiers => "dossiers",
            Self::Feedback => "feedback",
        }
    }

    /// Collection holding lists and details of an entity type.
    #[must_use]
    pub const fn for_entity(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Institution => Self::Institutions,
            EntityType::Vendor => Self::Vendors,
            EntityType::Sector => Self::Sectors,
            EntityType::Contract => Self::Contracts,
            EntityType::Category => Self::Categories,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QueryKey
// ---------------------------------------------------------------------------

/// Ordered key segments; the first is always the collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            segments: vec![collection.as_str().to_string()],
        }
    }

    #[must_use]
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn has_prefix(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.segments.len()
            && prefix
                .iter()
                .zip(&self.segments)
                .all(|(want, have)| *want == have)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

// ---------------------------------------------------------------------------
// QueryStatus / QuerySnapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl QueryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of one cache entry.
#[derive(Debug, Clone)]
pub struct QuerySnapshot<T> {
    pub status: QueryStatus,
    /// Last successfully fetched value, kept through later errors.
    pub data: Option<Arc<T>>,
    pub error: Option<String>,
    /// Set by invalidation until the next successful fetch.
    pub stale: bool,
}

// ---------------------------------------------------------------------------
// QueryCache
// ---------------------------------------------------------------------------

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: QueryKey,
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

type Value = Arc<dyn Any + Send + Sync>;

struct Entry {
    status: QueryStatus,
    data: Option<Value>,
    error: Option<String>,
    generation: u64,
    stale: bool,
}

impl Entry {
    const fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            generation: 0,
            stale: false,
        }
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    next_generation: u64,
}

impl Inner {
    const fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

#[derive(Default)]
pub struct QueryCache {
    inner: Mutex<Inner>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark `key` as loading and issue a ticket that supersedes every
    /// earlier ticket for the same key.
    pub fn begin(&self, key: &QueryKey) -> Ticket {
        let mut inner = self.lock();
        let generation = inner.bump();
        let entry = inner.entries.entry(key.clone()).or_insert_with(Entry::idle);
        entry.generation = generation;
        entry.status = QueryStatus::Loading;
        entry.error = None;
        tracing::debug!(key = %key, generation, "query started");
        Ticket {
            key: key.clone(),
            generation,
        }
    }

    /// Record the outcome of a fetch. Returns `false` (and writes nothing)
    /// when the ticket has been superseded or invalidated.
    pub fn complete<T: Send + Sync + 'static>(
        &self,
        ticket: &Ticket,
        result: Result<Arc<T>, String>,
    ) -> bool {
        let mut inner = self.lock();
        let Some(entry) = inner.entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.generation != ticket.generation {
            tracing::debug!(
                key = %ticket.key,
                generation = ticket.generation,
                current = entry.generation,
                "dropping superseded response"
            );
            return false;
        }
        match result {
            Ok(value) => {
                entry.status = QueryStatus::Success;
                entry.data = Some(value);
                entry.error = None;
                entry.stale = false;
            }
            Err(message) => {
                entry.status = QueryStatus::Error;
                entry.error = Some(message);
            }
        }
        true
    }

    /// Run `fetcher` for `key`, recording its outcome if it is still the
    /// newest request when it resolves. The caller gets the outcome either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetcher` produced.
    pub async fn fetch<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        E: fmt::Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let ticket = self.begin(key);
        match fetcher().await {
            Ok(value) => {
                let value = Arc::new(value);
                self.complete(&ticket, Ok(Arc::clone(&value)));
                Ok(value)
            }
            Err(error) => {
                self.complete::<T>(&ticket, Err(error.to_string()));
                Err(error)
            }
        }
    }

    /// Cached value if it is fresh, otherwise [`Self::fetch`].
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetcher` produced.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        E: fmt::Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.needs_fetch(key) {
            if let Some(data) = self.snapshot::<T>(key).data {
                return Ok(data);
            }
        }
        self.fetch(key, fetcher).await
    }

    #[must_use]
    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        self.lock()
            .entries
            .get(key)
            .map_or(QueryStatus::Idle, |entry| entry.status)
    }

    /// Snapshot of `key`. A value stored under a different type reads as
    /// absent.
    #[must_use]
    pub fn snapshot<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QuerySnapshot<T> {
        let inner = self.lock();
        let Some(entry) = inner.entries.get(key) else {
            return QuerySnapshot {
                status: QueryStatus::Idle,
                data: None,
                error: None,
                stale: false,
            };
        };
        QuerySnapshot {
            status: entry.status,
            data: entry
                .data
                .as_ref()
                .and_then(|value| Arc::clone(value).downcast::<T>().ok()),
            error: entry.error.clone(),
            stale: entry.stale,
        }
    }

    /// Whether a read of `key` should go to the network.
    #[must_use]
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        self.lock().entries.get(key).is_none_or(|entry| {
            entry.stale || matches!(entry.status, QueryStatus::Idle | QueryStatus::Error)
        })
    }

    /// Invalidate every key in `collection`.
    pub fn invalidate(&self, collection: Collection) -> usize {
        self.invalidate_prefix(&[collection.as_str()])
    }

    /// Mark every key starting with `prefix` stale and orphan its in-flight
    /// request. Cached values stay readable until replaced. Returns the
    /// number of entries touched.
    pub fn invalidate_prefix(&self, prefix: &[&str]) -> usize {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let mut touched = 0;
        for (key, entry) in &mut inner.entries {
            if !key.has_prefix(prefix) {
                continue;
            }
            inner.next_generation += 1;
            entry.generation = inner.next_generation;
            entry.stale = true;
            if entry.status == QueryStatus::Loading {
                entry.status = QueryStatus::Idle;
            }
            touched += 1;
        }
        tracing::debug!(prefix = %prefix.join("/"), touched, "invalidated queries");
        touched
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(page: u32) -> QueryKey {
        QueryKey::new(Collection::Contracts)
            .with("list")
            .with(page.to_string())
    }

    #[test]
    fn key_prefix_matching() {
        let k = key(1);
        assert!(k.has_prefix(&["contracts"]));
        assert!(k.has_prefix(&["contracts", "list"]));
        assert!(!k.has_prefix(&["contracts", "detail"]));
        assert!(!k.has_prefix(&["vendors"]));
        assert_eq!(k.collection(), "contracts");
        assert_eq!(k.to_string(), "contracts/list/1");
    }

    #[test]
    fn missing_key_reads_idle() {
        let cache = QueryCache::new();
        assert_eq!(cache.status(&key(1)), QueryStatus::Idle);
        assert!(cache.needs_fetch(&key(1)));
        assert!(cache.snapshot::<u32>(&key(1)).data.is_none());
    }

    #[test]
    fn older_response_never_overwrites_newer() {
        let cache = QueryCache::new();
        let first = cache.begin(&key(1));
        let second = cache.begin(&key(1));

        assert!(cache.complete(&second, Ok(Arc::new(2_u32))));
        assert!(!cache.complete(&first, Ok(Arc::new(1_u32))));

        let snap = cache.snapshot::<u32>(&key(1));
        assert_eq!(snap.status, QueryStatus::Success);
        assert_eq!(snap.data.as_deref(), Some(&2));
    }

    #[test]
    fn older_response_arriving_first_is_still_dropped() {
        let cache = QueryCache::new();
        let first = cache.begin(&key(1));
        let second = cache.begin(&key(1));

        assert!(!cache.complete(&first, Ok(Arc::new(1_u32))));
        assert_eq!(cache.status(&key(1)), QueryStatus::Loading);
        assert!(cache.complete(&second, Ok(Arc::new(2_u32))));
    }

    #[test]
    fn error_keeps_last_good_value() {
        let cache = QueryCache::new();
        let t = cache.begin(&key(1));
        cache.complete(&t, Ok(Arc::new(7_u32)));
        let t = cache.begin(&key(1));
        cache.complete::<u32>(&t, Err("503".into()));

        let snap = cache.snapshot::<u32>(&key(1));
        assert_eq!(snap.status, QueryStatus::Error);
        assert_eq!(snap.data.as_deref(), Some(&7));
        assert_eq!(snap.error.as_deref(), Some("503"));
        assert!(cache.needs_fetch(&key(1)));
    }

    #[test]
    fn invalidation_orphans_in_flight_request() {
        let cache = QueryCache::new();
        let t = cache.begin(&key(1));
        assert_eq!(cache.invalidate(Collection::Contracts), 1);
        assert!(!cache.complete(&t, Ok(Arc::new(1_u32))));
        assert_eq!(cache.status(&key(1)), QueryStatus::Idle);
        assert!(cache.needs_fetch(&key(1)));
    }

    #[test]
    fn invalidation_is_scoped_to_prefix() {
        let cache = QueryCache::new();
        let contracts = cache.begin(&key(1));
        cache.complete(&contracts, Ok(Arc::new(1_u32)));
        let vendors_key = QueryKey::new(Collection::Vendors).with("list");
        let vendors = cache.begin(&vendors_key);
        cache.complete(&vendors, Ok(Arc::new(2_u32)));

        assert_eq!(cache.invalidate(Collection::Contracts), 1);

        let snap = cache.snapshot::<u32>(&key(1));
        assert!(snap.stale);
        assert_eq!(snap.data.as_deref(), Some(&1));
        assert!(cache.needs_fetch(&key(1)));
        assert!(!cache.needs_fetch(&vendors_key));
    }

    #[test]
    fn wrong_type_reads_as_absent() {
        let cache = QueryCache::new();
        let t = cache.begin(&key(1));
        cache.complete(&t, Ok(Arc::new(String::from("x"))));
        assert!(cache.snapshot::<u32>(&key(1)).data.is_none());
    }

    #[tokio::test]
    async fn fetch_records_success_and_returns_value() {
        let cache = QueryCache::new();
        let value = cache
            .fetch(&key(1), || async { Ok::<_, String>(vec![1, 2, 3]) })
            .await
            .unwrap();
        assert_eq!(*value, vec![1, 2, 3]);
        assert_eq!(cache.status(&key(1)), QueryStatus::Success);
        assert!(!cache.needs_fetch(&key(1)));
    }

    #[tokio::test]
    async fn get_or_fetch_serves_fresh_entries_from_cache() {
        let cache = QueryCache::new();
        cache
            .fetch(&key(1), || async { Ok::<_, String>(1_u32) })
            .await
            .unwrap();
        let cached = cache
            .get_or_fetch(&key(1), || async { Err::<u32, _>("should not run".to_string()) })
            .await
            .unwrap();
        assert_eq!(*cached, 1);

        cache.invalidate(Collection::Contracts);
        let refetched = cache
            .get_or_fetch(&key(1), || async { Ok::<_, String>(2_u32) })
            .await
            .unwrap();
        assert_eq!(*refetched, 2);
        assert!(!cache.snapshot::<u32>(&key(1)).stale);
    }

    #[tokio::test]
    async fn concurrent_fetches_on_one_key_keep_the_newest() {
        let cache = QueryCache::new();
        let (tx_old, rx_old) = tokio::sync::oneshot::channel::<u32>();
        let (tx_new, rx_new) = tokio::sync::oneshot::channel::<u32>();

        let k = key(1);
        let old = cache.fetch(&k, move || async move { rx_old.await.map_err(|e| e.to_string()) });
        let new = cache.fetch(&k, move || async move { rx_new.await.map_err(|e| e.to_string()) });
        let driver = async {
            tx_new.send(2).unwrap();
            tokio::task::yield_now().await;
            tx_old.send(1).unwrap();
        };
        let (old, new, ()) = tokio::join!(old, new, driver);

        assert_eq!(*old.unwrap(), 1);
        assert_eq!(*new.unwrap(), 2);
        assert_eq!(cache.snapshot::<u32>(&k).data.as_deref(), Some(&2));
    }
}
