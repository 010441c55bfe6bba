//! Structural invariant checks.

use crate::error::TreeError;
use crate::tree::SplayTree;
use crate::types::Node;

impl<N, C> SplayTree<N, C>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    /// Walks the whole tree and checks that it is a binary search tree under
    /// the tree's comparator with every node reachable exactly once.
    ///
    /// Returns the node count. Does not splay.
    pub fn validate(&self, arena: &[N]) -> Result<usize, TreeError> {
        let Some(root) = self.root() else {
            return Ok(0);
        };

        let cmp = self.comparator();
        let mut seen = vec![false; arena.len()];
        let mut count = 0;
        // (node, nearest ancestor it must exceed, nearest ancestor it must precede)
        let mut stack: Vec<(u32, Option<u32>, Option<u32>)> = vec![(root, None, None)];

        while let Some((idx, lower, upper)) = stack.pop() {
            let node = arena
                .get(idx as usize)
                .ok_or(TreeError::HandleOutOfBounds(idx))?;
            if std::mem::replace(&mut seen[idx as usize], true) {
                return Err(TreeError::Cycle(idx));
            }
            if let Some(lo) = lower {
                if cmp(&arena[lo as usize], node) >= 0 {
                    return Err(TreeError::OrderViolation {
                        ancestor: lo,
                        child: idx,
                    });
                }
            }
            if let Some(hi) = upper {
                if cmp(&arena[hi as usize], node) <= 0 {
                    return Err(TreeError::OrderViolation {
                        ancestor: hi,
                        child: idx,
                    });
                }
            }
            count += 1;

            if let Some(l) = node.l() {
                stack.push((l, lower, Some(idx)));
            }
            if let Some(r) = node.r() {
                stack.push((r, Some(idx), upper));
            }
        }

        Ok(count)
    }
}
