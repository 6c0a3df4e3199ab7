//! Memoization cache service for Lectern.
//!
//! Pure derived values (locale lookups, localized UI strings, sidebar
//! skeletons) are computed once per argument list and reused. The cache is
//! an explicit service owned by whoever builds a site, not ambient global
//! state, so two sites built in one process never see each other's entries.
//!
//! Two types form the API:
//!
//! - [`MemoCache`]: Factory for named, typed buckets with a shared lifecycle
//! - [`MemoBucket`]: Get-or-compute store keyed by stringified arguments
//!
//! # Example
//!
//! ```
//! use lectern_cache::MemoCache;
//!
//! let cache = MemoCache::new();
//! let lengths = cache.bucket::<usize>("lengths");
//!
//! assert_eq!(lengths.get_or_compute(&["guide"], || "guide".len()), 5);
//! // Served from the bucket, the closure is not called again.
//! assert_eq!(lengths.get_or_compute(&["guide"], || unreachable!()), 5);
//!
//! cache.clear();
//! assert!(lengths.is_empty());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

/// Separator used to join memo arguments into a single key.
const KEY_SEPARATOR: &str = "\0";

/// Join memo arguments into a bucket key.
///
/// `None`-like arguments should be passed as empty strings, so `[""]` and
/// `[]` address different entries only through their separator count.
#[must_use]
pub fn memo_key(args: &[&str]) -> String {
    args.join(KEY_SEPARATOR)
}

/// Type-erased handle that lets [`MemoCache`] clear buckets of any value type.
trait ClearEntries: Send + Sync {
    fn clear_entries(&self);
}

/// A named memo store for one derived value type.
///
/// Obtained from [`MemoCache::bucket`]. Entries live until the owning cache
/// (or the bucket itself) is cleared.
pub struct MemoBucket<T> {
    name: &'static str,
    entries: RwLock<HashMap<String, T>>,
}

impl<T: Clone + Send + Sync> MemoBucket<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Bucket name, as passed to [`MemoCache::bucket`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the memoized value for `args`, computing it on a miss.
    ///
    /// `compute` runs without any lock held, so it may itself consult this
    /// bucket. If two threads miss the same key concurrently both compute,
    /// and the first stored value wins.
    pub fn get_or_compute<F>(&self, args: &[&str], compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        let key = memo_key(args);

        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit.clone();
        }

        let value = compute();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
            .clone()
    }

    /// Number of memoized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the bucket holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry in this bucket.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: Clone + Send + Sync> ClearEntries for MemoBucket<T> {
    fn clear_entries(&self) {
        self.clear();
    }
}

/// Factory and lifecycle owner for [`MemoBucket`]s.
///
/// Buckets are tracked weakly: dropping every `Arc` to a bucket releases its
/// memory, and the next [`clear`](MemoCache::clear) prunes the dead handle.
#[derive(Default)]
pub struct MemoCache {
    buckets: Mutex<Vec<Weak<dyn ClearEntries>>>,
}

impl MemoCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new bucket registered with this cache.
    ///
    /// Each call returns an independent bucket, so callers keep the returned
    /// `Arc` rather than asking for the same name twice.
    pub fn bucket<T>(&self, name: &'static str) -> Arc<MemoBucket<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let bucket = Arc::new(MemoBucket::new(name));
        let handle: Weak<dyn ClearEntries> = Arc::<MemoBucket<T>>::downgrade(&bucket);
        self.buckets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
        bucket
    }

    /// Clear every live bucket created by this cache.
    ///
    /// Needed when a process builds more than one site with different
    /// configuration; otherwise entries computed for the previous build leak
    /// into the next one.
    pub fn clear(&self) {
        let mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        buckets.retain(|handle| match handle.upgrade() {
            Some(bucket) => {
                bucket.clear_entries();
                true
            }
            None => false,
        });

        tracing::debug!(buckets = buckets.len(), "Cleared memoization cache");
    }

    /// Number of buckets still alive.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }
}
