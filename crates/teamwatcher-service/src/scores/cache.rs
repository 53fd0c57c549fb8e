//! Fixed capacity cache with a time to live.

use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

/// Source of monotonic time for expiry checks.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset_ms: AtomicU64,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            base: Instant::now(),
            offset_ms: AtomicU64::new(0),
        }
    }
}

impl ManualClock {
    /// Moves the clock forward. Stops at the last representable instant.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let moved = self
            .offset_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                let next = current.saturating_add(ms);
                self.base
                    .checked_add(Duration::from_millis(next))
                    .map(|_| next)
            });
        if moved.is_err() {
            tracing::debug!(?by, "Manual clock cannot advance that far");
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = Duration::from_millis(self.offset_ms.load(Ordering::SeqCst));
        self.base.checked_add(offset).unwrap_or(self.base)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// `None` when the TTL reaches past the last representable instant.
    expires_at: Option<Instant>,
}

/// LRU cache whose entries expire `ttl` after insertion.
///
/// Expired entries are dropped lazily on read. A TTL too large to add to the
/// current instant means the entry never expires.
#[derive(Debug)]
pub struct TtlCache<V> {
    store: Mutex<LruCache<String, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    /// A zero `capacity` is raised to one.
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            ttl,
            clock,
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut store = self.store.lock().await;

        let expired = match store.get(key) {
            Some(entry) if entry.expires_at.is_none_or(|at| at > now) => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            store.pop(key);
        }
        None
    }

    pub async fn insert(&self, key: impl Into<String>, value: V) {
        let expires_at = self.clock.now().checked_add(self.ttl);
        self.store
            .lock()
            .await
            .put(key.into(), CacheEntry { value, expires_at });
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
