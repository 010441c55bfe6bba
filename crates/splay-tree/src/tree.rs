//! The splay tree proper.
//!
//! [`SplayTree`] holds a root handle and a comparator, nothing else. Node
//! storage belongs to the caller and is passed into every operation as a
//! slice; the tree rewrites child links inside that slice but never moves,
//! creates or drops a node.
//!
//! Every operation that looks up a key splays, including lookups that miss
//! and inserts that are rejected, so all of them take `&mut self`. The
//! algorithms themselves live in [`crate::ops`].

use std::fmt;
use std::marker::PhantomData;

use crate::ops;
use crate::types::{default_comparator, Node};

/// Intrusive splay tree over caller-owned nodes.
pub struct SplayTree<N, C = fn(&N, &N) -> i32>
where
    C: Fn(&N, &N) -> i32,
{
    root: Option<u32>,
    comparator: C,
    _nodes: PhantomData<fn(&N)>,
}

impl<N> SplayTree<N, fn(&N, &N) -> i32>
where
    N: Node + PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<N>)
    }
}

impl<N> Default for SplayTree<N, fn(&N, &N) -> i32>
where
    N: Node + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> fmt::Debug for SplayTree<N, C>
where
    C: Fn(&N, &N) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplayTree").field("root", &self.root).finish()
    }
}

impl<N, C> SplayTree<N, C>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            _nodes: PhantomData,
        }
    }

    /// Current root handle.
    #[inline]
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Forgets every node. Node storage and the nodes' links are untouched.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Links the node at handle `node` into the tree.
    ///
    /// Stale links on the node are overwritten. Returns `false` if a node
    /// with an equal key is present (the node itself included, when it is
    /// already linked); that node is splayed to the root and nothing else
    /// changes. On success the new node is the root.
    pub fn insert(&mut self, arena: &mut [N], node: u32) -> bool {
        ops::insert(arena, &mut self.root, node, &self.comparator)
    }

    /// Finds the node equal to `query` and splays it to the root.
    ///
    /// On a miss the closest node visited is splayed to the root instead.
    pub fn search(&mut self, arena: &mut [N], query: &N) -> Option<u32> {
        ops::search(arena, &mut self.root, query, &self.comparator)
    }

    /// Smallest node strictly greater than `query`.
    pub fn lower_bound(&mut self, arena: &mut [N], query: &N) -> Option<u32> {
        ops::lower_bound(arena, &mut self.root, query, &self.comparator)
    }

    /// Unlinks the node equal to `query`. Returns `false` if absent.
    ///
    /// The removed node's links are left as they were; use [`Self::remove`]
    /// to get the handle back with its links cleared.
    pub fn delete(&mut self, arena: &mut [N], query: &N) -> bool {
        ops::delete(arena, &mut self.root, query, &self.comparator).is_some()
    }

    /// Like [`Self::delete`], but returns the unlinked handle and resets its
    /// links so the slot can be inserted again or recycled.
    pub fn remove(&mut self, arena: &mut [N], query: &N) -> Option<u32> {
        ops::remove(arena, &mut self.root, query, &self.comparator)
    }

    /// Smallest node. Does not splay.
    pub fn first(&self, arena: &[N]) -> Option<u32> {
        ops::first(arena, self.root)
    }

    /// Largest node. Does not splay.
    pub fn last(&self, arena: &[N]) -> Option<u32> {
        ops::last(arena, self.root)
    }

    /// Number of nodes reachable from the root, counted by traversal.
    pub fn len(&self, arena: &[N]) -> usize {
        self.iter(arena).count()
    }
}
