//! In-order traversal that leaves the tree shape alone.

use crate::tree::SplayTree;
use crate::types::{get_l, get_r, Node};

/// Yields node handles in ascending order.
///
/// Nodes carry no parent links, so the pending ancestors live on an explicit
/// stack; its depth is bounded by the tree height.
pub struct Iter<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: Node> Iter<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(idx) = curr {
            self.stack.push(idx);
            curr = get_l(self.arena, idx);
        }
    }
}

impl<N: Node> Iterator for Iter<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let idx = self.stack.pop()?;
        self.push_left(get_r(self.arena, idx));
        Some(idx)
    }
}

impl<N, C> SplayTree<N, C>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    /// Handles in ascending key order. Does not splay.
    pub fn iter<'a>(&self, arena: &'a [N]) -> Iter<'a, N> {
        Iter::new(arena, self.root())
    }
}
