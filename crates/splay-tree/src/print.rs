//! Human-readable tree dumps for debugging and test failure messages.

use crate::tree::SplayTree;
use crate::types::{get_l, get_r, Node};

impl<N, C> SplayTree<N, C>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    /// Renders the tree top-down, one node per line, left child (`←`)
    /// before right child (`→`). `label` formats a single node.
    pub fn print<F>(&self, arena: &[N], tab: &str, label: F) -> String
    where
        F: Fn(&N) -> String,
    {
        let Some(root) = self.root() else {
            return "SplayTree ∅".to_string();
        };

        let mut out = String::from("SplayTree");
        let mut stack = vec![(root, tab.to_string(), "└─")];
        while let Some((idx, indent, side)) = stack.pop() {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(side);
            out.push(' ');
            out.push_str(&label(&arena[idx as usize]));

            let child_indent = format!("{indent}  ");
            if let Some(r) = get_r(arena, idx) {
                stack.push((r, child_indent.clone(), "→"));
            }
            if let Some(l) = get_l(arena, idx) {
                stack.push((l, child_indent, "←"));
            }
        }
        out
    }
}
