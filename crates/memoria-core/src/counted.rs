//! Invocation counting around a [`Memo`].
//!
//! `Counted` builds an engine whose computation bumps a shared counter on
//! every run, so callers can see how much work a lookup actually caused.

use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use memoria_types::Key;

use crate::memo::Memo;

/// A [`Memo`] paired with a count of how many times its computation ran.
///
/// Derefs to the inner engine, so `counted.get(k)` works directly.
pub struct Counted<V> {
    memo: Memo<V>,
    invocations: Arc<AtomicUsize>,
}

impl<V: Clone + 'static> Counted<V> {
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(Key, &Memo<V>) -> V + Send + Sync + 'static,
    {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invocations);
        let memo = Memo::new(move |key, memo: &Memo<V>| {
            counter.fetch_add(1, Ordering::Relaxed);
            compute(key, memo)
        });
        Self { memo, invocations }
    }
}

impl<V> Counted<V> {
    /// Total computation runs so far, across every thread.
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> Memo<V> {
        self.memo
    }
}

impl<V> Deref for Counted<V> {
    type Target = Memo<V>;

    fn deref(&self) -> &Memo<V> {
        &self.memo
    }
}

impl<V> std::fmt::Debug for Counted<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counted")
            .field("memo", &self.memo)
            .field("invocations", &self.invocations())
            .finish()
    }
}
