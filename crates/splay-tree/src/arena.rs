//! Slab of nodes addressed by `u32` handles, with a free list.
//!
//! [`SplayTree`](crate::SplayTree) works on any `[N]`; this arena is for
//! callers that insert and remove nodes over time and want handles to be
//! recycled instead of growing the storage forever.

use tracing::{trace, warn};

use crate::error::ArenaError;

#[derive(Debug, Clone)]
pub struct NodeArena<N> {
    nodes: Vec<N>,
    occupied: Vec<bool>,
    free: Vec<u32>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            occupied: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            occupied: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its handle, reusing a released slot first.
    pub fn alloc(&mut self, node: N) -> Result<u32, ArenaError> {
        if let Some(handle) = self.free.pop() {
            trace!(target: "splay_tree::arena", handle, "reusing released slot");
            self.nodes[handle as usize] = node;
            self.occupied[handle as usize] = true;
            return Ok(handle);
        }
        let Ok(handle) = u32::try_from(self.nodes.len()) else {
            warn!(target: "splay_tree::arena", slots = self.nodes.len(), "handle space exhausted");
            return Err(ArenaError::Exhausted);
        };
        self.nodes.push(node);
        self.occupied.push(true);
        Ok(handle)
    }

    /// Marks the slot free. Its value stays in place until the slot is
    /// reused, so a node still linked into a tree must be unlinked first.
    pub fn release(&mut self, handle: u32) -> Result<(), ArenaError> {
        match self.occupied.get_mut(handle as usize) {
            None => Err(ArenaError::InvalidHandle(handle)),
            Some(false) => Err(ArenaError::DoubleFree(handle)),
            Some(slot) => {
                *slot = false;
                self.free.push(handle);
                Ok(())
            }
        }
    }

    pub fn is_live(&self, handle: u32) -> bool {
        self.occupied.get(handle as usize).copied().unwrap_or(false)
    }

    pub fn get(&self, handle: u32) -> Option<&N> {
        if self.is_live(handle) {
            self.nodes.get(handle as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: u32) -> Option<&mut N> {
        if self.is_live(handle) {
            self.nodes.get_mut(handle as usize)
        } else {
            None
        }
    }

    /// Live node count.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots ever allocated, live or released.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node and forgets all handles.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.occupied.clear();
        self.free.clear();
    }

    /// Storage view for tree operations.
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn as_mut_slice(&mut self) -> &mut [N] {
        &mut self.nodes
    }
}
