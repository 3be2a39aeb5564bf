//! A [`TermIndex`] is a bidirectional association of [nodes](`Node`) with short numeric [indices](`Index`).
use crate::CollectionError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use trigon_term::{LiteralEqualityMode, Node};

/// Abstraction of the short numeric indices representing [nodes](`Node`) in a [`TermIndex`].
pub trait Index: Copy + std::fmt::Debug + std::hash::Hash + Ord {
    /// The smallest index.
    const ZERO: Self;
    /// The greatest index.
    const MAX: Self;
    /// Convert `other` into an index, if it fits.
    fn try_from_usize(other: usize) -> Option<Self>;
    /// Convert this index into a `usize`.
    fn into_usize(self) -> usize;
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn try_from_usize(other: usize) -> Option<Self> {
        other.try_into().ok()
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Index for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    fn try_from_usize(other: usize) -> Option<Self> {
        other.try_into().ok()
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

/// A bidirectional association of [nodes](`Node`) with short numeric [indices](`Index`).
///
/// Nodes are keyed by their canonical form under the index's [`LiteralEqualityMode`],
/// so nodes that are equal under that mode share the same index.
/// The node returned for an index is the first one that was added.
///
/// Each index has a use count, maintained with [`retain`](TermIndex::retain)
/// and [`release`](TermIndex::release).
/// When the count of an index drops to zero, its node is dropped
/// and the index is reused by the next new node.
#[derive(Clone, Debug)]
pub struct TermIndex<I: Index> {
    mode: LiteralEqualityMode,
    t2i: HashMap<Node, I>,
    i2t: Vec<Option<Node>>,
    uses: Vec<usize>,
    free: Vec<I>,
}

impl<I: Index> TermIndex<I> {
    /// A new empty term index.
    pub fn new(mode: LiteralEqualityMode) -> Self {
        TermIndex {
            mode,
            t2i: HashMap::new(),
            i2t: vec![],
            uses: vec![],
            free: vec![],
        }
    }

    /// The equality mode of this term index.
    pub fn mode(&self) -> LiteralEqualityMode {
        self.mode
    }

    /// The number of distinct nodes in this term index.
    pub fn len(&self) -> usize {
        self.t2i.len()
    }

    /// Whether this term index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to node `t`, if it exists.
    pub fn get_index(&self, t: &Node) -> Option<I> {
        self.t2i.get(t.canonical(self.mode).as_ref()).copied()
    }

    /// Get the index corresponding to node `t`, adding it in the term index if necessary.
    ///
    /// A new index starts with a use count of zero.
    /// Returns an error if the term index is full.
    pub fn ensure_index(&mut self, t: &Node) -> Result<I, CollectionError> {
        let key = t.canonical(self.mode).into_owned();
        match self.t2i.entry(key) {
            Entry::Vacant(e) => {
                let i = match self.free.pop() {
                    Some(i) => {
                        self.i2t[i.into_usize()] = Some(t.clone());
                        i
                    }
                    None => {
                        let i = I::try_from_usize(self.i2t.len())
                            .ok_or(CollectionError::TermIndexFull(self.i2t.len()))?;
                        self.i2t.push(Some(t.clone()));
                        self.uses.push(0);
                        i
                    }
                };
                e.insert(i);
                Ok(i)
            }
            Entry::Occupied(e) => Ok(*e.get()),
        }
    }

    /// Get the node corresponding to index `i`, if `i` is in use.
    pub fn get_node(&self, i: I) -> Option<&Node> {
        self.i2t.get(i.into_usize())?.as_ref()
    }

    /// Increment the use count of index `i`.
    pub fn retain(&mut self, i: I) {
        if let Some(n) = self.uses.get_mut(i.into_usize()) {
            *n += 1;
        }
    }

    /// Decrement the use count of index `i`, freeing it when it reaches zero.
    pub fn release(&mut self, i: I) {
        let Some(n) = self.uses.get_mut(i.into_usize()) else {
            return;
        };
        debug_assert!(*n > 0);
        *n = n.saturating_sub(1);
        if *n == 0 {
            self.free_index(i);
        }
    }

    /// Free every index whose use count is zero.
    ///
    /// Indices created by [`ensure_index`](TermIndex::ensure_index) and never retained
    /// are only freed by this method.
    pub fn purge_unused(&mut self) {
        for i in 0..self.uses.len() {
            if self.uses[i] == 0 && self.i2t[i].is_some() {
                if let Some(i) = I::try_from_usize(i) {
                    self.free_index(i);
                }
            }
        }
    }

    fn free_index(&mut self, i: I) {
        if let Some(node) = self.i2t[i.into_usize()].take() {
            self.t2i.remove(node.canonical(self.mode).as_ref());
            self.free.push(i);
        }
    }

    /// Remove all nodes from this term index.
    pub fn clear(&mut self) {
        self.t2i.clear();
        self.i2t.clear();
        self.uses.clear();
        self.free.clear();
    }
}
