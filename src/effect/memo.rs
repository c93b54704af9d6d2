//! Bounded memoization keyed by argument.
//!
//! [`memoize`] wraps a function in a least-recently-used cache holding at most
//! `max_size` results. It is a separate layer from the single memo cell of a
//! [`Task`](super::Task): a task caches one value, a [`Memoized`] caches one
//! value per distinct argument and evicts the entry used least recently when
//! it is full.
//!
//! The cache lock is not held while the function runs, so the function may
//! call back into the same `Memoized`. Two threads missing on the same key at
//! the same time may both compute it; the later result replaces the earlier.
//!
//! # Examples
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use effectual::effect::memoize;
//!
//! let square = memoize(NonZeroUsize::new(2).unwrap(), |n: &u64| n * n);
//!
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.stats().hits, 1);
//!
//! square.call(4);
//! square.call(5);
//! assert!(!square.contains(&3));
//! ```

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

/// Hit, miss and eviction counters of a [`Memoized`] cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that ran the function.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
}

struct CacheState<K, V> {
    entries: LruCache<K, V>,
    stats: CacheStats,
}

/// A function whose results are cached per argument with LRU eviction.
pub struct Memoized<K, V> {
    function: Box<dyn Fn(&K) -> V + Send + Sync>,
    state: Mutex<CacheState<K, V>>,
}

/// Caches the results of `function` for up to `max_size` distinct arguments.
pub fn memoize<K, V, F>(max_size: NonZeroUsize, function: F) -> Memoized<K, V>
where
    K: Hash + Eq,
    F: Fn(&K) -> V + Send + Sync + 'static,
{
    Memoized {
        function: Box::new(function),
        state: Mutex::new(CacheState {
            entries: LruCache::new(max_size),
            stats: CacheStats::default(),
        }),
    }
}

impl<K, V> Memoized<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Returns the cached result for `key`, computing and caching it on a miss.
    pub fn call(&self, key: K) -> V {
        {
            let mut state = self.state.lock();
            if let Some(value) = state.entries.get(&key).cloned() {
                state.stats.hits += 1;
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "effectual::memo", "cache hit");
                return value;
            }
            state.stats.misses += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "effectual::memo", "cache miss");

        let value = (self.function)(&key);

        let mut state = self.state.lock();
        let evicting = !state.entries.contains(&key) && state.entries.len() == state.entries.cap().get();
        if evicting {
            state.stats.evictions += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "effectual::memo", "evicting least recently used entry");
        }
        state.entries.put(key, value.clone());
        value
    }

    /// The cached result for `key`, without computing it or refreshing its
    /// recency.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.state.lock().entries.peek(key).cloned()
    }
}

impl<K, V> Memoized<K, V>
where
    K: Hash + Eq,
{
    /// Returns `true` if a result for `key` is cached.
    pub fn contains(&self, key: &K) -> bool {
        self.state.lock().entries.contains(key)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached results.
    pub fn capacity(&self) -> NonZeroUsize {
        self.state.lock().entries.cap()
    }

    /// Counters since creation or the last [`Memoized::clear`].
    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats
    }

    /// Drops every cached result and resets the counters.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.stats = CacheStats::default();
    }
}

impl<K, V> fmt::Debug for Memoized<K, V>
where
    K: Hash + Eq,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("Memoized")
            .field("len", &state.entries.len())
            .field("capacity", &state.entries.cap())
            .field("stats", &state.stats)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Memoized<String, u64>: Send, Sync);
