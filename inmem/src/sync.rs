//! Thread-safe wrappers around [`Graph`] and [`TripleStore`].
//!
//! Lookups take a read lock, mutations take the write lock;
//! the lock is held for the duration of the closure passed to
//! [`read`](ThreadSafe::read) or [`write`](ThreadSafe::write).
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use trigon_term::{Quad, Triple};

use crate::collection::TripleCollection;
use crate::graph::Graph;
use crate::store::TripleStore;
use crate::CollectionError;

/// A value shared between threads behind a [`RwLock`].
///
/// A panic in another thread while holding the lock does not make the value unusable:
/// every operation of the wrapped types leaves them consistent between calls.
#[derive(Debug, Default)]
pub struct ThreadSafe<T> {
    inner: RwLock<T>,
}

/// A [`Graph`] that can be shared between threads.
pub type ThreadSafeGraph = ThreadSafe<Graph>;

/// A [`TripleStore`] that can be shared between threads.
pub type ThreadSafeTripleStore = ThreadSafe<TripleStore>;

impl<T> ThreadSafe<T> {
    /// Wrap `inner`.
    pub fn new(inner: T) -> Self {
        ThreadSafe {
            inner: RwLock::new(inner),
        }
    }

    /// Run `f` with shared access to the wrapped value.
    pub fn read<R, F: FnOnce(&T) -> R>(&self, f: F) -> R {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access to the wrapped value.
    pub fn write<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        f(&mut self.write_guard())
    }

    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ThreadSafe<Graph> {
    /// Assert `triple` in the wrapped graph.
    pub fn assert(&self, triple: Triple) -> Result<bool, CollectionError> {
        self.write(|g| g.assert(triple))
    }

    /// Retract `triple` from the wrapped graph.
    pub fn retract(&self, triple: &Triple) -> bool {
        self.write(|g| g.retract(triple))
    }

    /// Whether `triple` is asserted in the wrapped graph.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.read(|g| g.contains(triple))
    }

    /// The number of asserted triples in the wrapped graph.
    pub fn len(&self) -> usize {
        self.read(|g| g.len())
    }

    /// Whether the wrapped graph is empty.
    pub fn is_empty(&self) -> bool {
        self.read(|g| g.is_empty())
    }
}

impl ThreadSafe<TripleStore> {
    /// Add `quad` to the wrapped store.
    pub fn add_quad(&self, quad: Quad) -> Result<bool, CollectionError> {
        self.write(|s| s.add_quad(quad))
    }

    /// Remove `quad` from the wrapped store.
    pub fn delete_quad(&self, quad: &Quad) -> bool {
        self.write(|s| s.delete_quad(quad))
    }

    /// Whether `quad` is in the wrapped store.
    pub fn contains_quad(&self, quad: &Quad) -> bool {
        self.read(|s| s.contains_quad(quad))
    }

    /// The total number of asserted triples in the wrapped store.
    pub fn triple_count(&self) -> usize {
        self.read(|s| s.triple_count())
    }
}

impl From<Graph> for ThreadSafeGraph {
    fn from(other: Graph) -> Self {
        Self::new(other)
    }
}

impl From<TripleStore> for ThreadSafeTripleStore {
    fn from(other: TripleStore) -> Self {
        Self::new(other)
    }
}
