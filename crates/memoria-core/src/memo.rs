//! The memo engine.
//!
//! `Memo` owns a cache table and a computation function shaped
//! `f(key, &Memo) -> V`. Calling [`Memo::get`] looks the key up under a read
//! lock and, on a miss, runs the computation on the caller's thread with the
//! engine itself as the self handle, then stores the result under a write
//! lock. No lock is held while the computation runs, so the computation may
//! call back into the engine freely.
//!
//! Two threads missing on the same key at the same time will both run the
//! computation. Each returns its own result and the later insert wins in the
//! table. Computations are expected to be pure functions of the key, so the
//! overwrite is harmless. There is no per-key in-flight marker.
//!
//! The fallible variant is the same engine over `Result<T, E>`: an error is
//! an ordinary cached result and is replayed on every later lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use memoria_types::Key;

type Computation<V> = dyn Fn(Key, &Memo<V>) -> V + Send + Sync;

/// A memoized, self-referential function of an integer key.
///
/// The cache only grows. Entries live until the engine is dropped, and two
/// engines never share entries even when built from the same computation.
pub struct Memo<V> {
    compute: Box<Computation<V>>,
    cache: RwLock<HashMap<Key, V>>,
}

/// Memo engine whose computation can fail. Errors are cached like values.
pub type TryMemo<T, E> = Memo<Result<T, E>>;

impl<V: Clone> Memo<V> {
    /// Create an engine around `compute`. Nothing is evaluated until the
    /// first [`get`](Self::get).
    ///
    /// `compute` receives the key and the engine itself; recursive calls
    /// must go through that handle to be memoized.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(Key, &Memo<V>) -> V + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the result for `key`, computing and caching it on first use.
    ///
    /// Stored results are returned as clones; the engine never mutates a
    /// result after storing it.
    pub fn get(&self, key: Key) -> V {
        if let Some(cached) = self.peek(key) {
            return cached;
        }

        let value = (self.compute)(key, self);

        self.cache
            .write()
            .expect("memo cache lock poisoned")
            .insert(key, value.clone());
        value
    }

    /// Cached result for `key`, without computing anything.
    pub fn peek(&self, key: Key) -> Option<V> {
        self.cache
            .read()
            .expect("memo cache lock poisoned")
            .get(&key)
            .cloned()
    }

    /// All cached entries, sorted by key.
    pub fn snapshot(&self) -> Vec<(Key, V)> {
        let mut entries: Vec<(Key, V)> = self
            .cache
            .read()
            .expect("memo cache lock poisoned")
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }
}

impl<V> Memo<V> {
    /// Whether `key` has a cached result.
    pub fn contains(&self, key: Key) -> bool {
        self.cache
            .read()
            .expect("memo cache lock poisoned")
            .contains_key(&key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().expect("memo cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> fmt::Debug for Memo<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
