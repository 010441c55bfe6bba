//! Rotations and the top-down splay primitive.
//!
//! All functions take the caller's node slice and `u32` handles. Nothing here
//! recurses: the splay walk keeps its two side chains as explicit
//! `(head, tail)` handle pairs instead of hanging them off a sentinel node.

use crate::types::{get_l, get_r, set_l, set_r, Node};

/// What a splay walk is looking for.
///
/// A query is either a node outside the arena (a probe built only to carry a
/// key) or a handle of a node that already lives in the arena, which is how
/// insertion splays on the key of the node it is about to link.
pub enum Probe<'q, N> {
    Node(&'q N),
    Handle(u32),
}

impl<N> Clone for Probe<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Probe<'_, N> {}

/// `comparator(arena[idx], query)`.
#[inline]
fn compare<N, C>(arena: &[N], idx: u32, query: Probe<'_, N>, comparator: &C) -> i32
where
    C: Fn(&N, &N) -> i32,
{
    let q = match query {
        Probe::Node(node) => node,
        Probe::Handle(h) => &arena[h as usize],
    };
    comparator(&arena[idx as usize], q)
}

// ── single rotations ──────────────────────────────────────────────────────

/// Right rotation: promote `y` (left child of `x`) over `x`.
///
/// ```text
///     x          y
///    /            \
///   y      →       x
///    \            /
///     b          b
/// ```
///
/// Returns `y`, the new subtree root.
pub fn rotate_right<N: Node>(arena: &mut [N], x: u32, y: u32) -> u32 {
    debug_assert_eq!(get_l(arena, x), Some(y));
    let b = get_r(arena, y);
    set_l(arena, x, b);
    set_r(arena, y, Some(x));
    y
}

/// Left rotation: promote `y` (right child of `x`) over `x`.
///
/// Returns `y`, the new subtree root.
pub fn rotate_left<N: Node>(arena: &mut [N], x: u32, y: u32) -> u32 {
    debug_assert_eq!(get_r(arena, x), Some(y));
    let b = get_l(arena, y);
    set_r(arena, x, b);
    set_l(arena, y, Some(x));
    y
}

// ── top-down splay ────────────────────────────────────────────────────────

/// Appends `node` to a side chain, linking it through `link` on the old tail.
#[inline]
fn push_chain<N: Node>(
    arena: &mut [N],
    chain: &mut (Option<u32>, Option<u32>),
    node: u32,
    link: fn(&mut [N], u32, Option<u32>),
) {
    match chain.1 {
        Some(tail) => link(arena, tail, Some(node)),
        None => chain.0 = Some(node),
    }
    chain.1 = Some(node);
}

/// Splays the tree rooted at `root` around `query`.
///
/// Afterwards the node equal to `query` is the root, or, when no such node
/// exists, the last node visited by the walk (an in-order neighbour of the
/// query). Returns the new root together with `comparator(root, query)`:
/// zero when found, positive when the root orders after the query, negative
/// when it orders before. Returns `None` for an empty tree.
pub fn splay<N, C>(
    arena: &mut [N],
    root: Option<u32>,
    query: Probe<'_, N>,
    comparator: &C,
) -> Option<(u32, i32)>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let mut root = root?;
    // Nodes smaller than the query, chained through right links.
    let mut lesser: (Option<u32>, Option<u32>) = (None, None);
    // Nodes greater than the query, chained through left links.
    let mut greater: (Option<u32>, Option<u32>) = (None, None);

    let mut cmp;
    loop {
        cmp = compare(arena, root, query, comparator);
        if cmp == 0 {
            break;
        }

        if cmp > 0 {
            let Some(mut next) = get_l(arena, root) else {
                break;
            };
            let cmp_next = compare(arena, next, query, comparator);
            if cmp_next > 0 {
                // zig-zig
                root = rotate_right(arena, root, next);
                cmp = cmp_next;
                match get_l(arena, root) {
                    Some(l) => next = l,
                    None => break,
                }
            }
            push_chain(arena, &mut greater, root, set_l::<N>);
            root = next;
        } else {
            let Some(mut next) = get_r(arena, root) else {
                break;
            };
            let cmp_next = compare(arena, next, query, comparator);
            if cmp_next < 0 {
                // zig-zig
                root = rotate_left(arena, root, next);
                cmp = cmp_next;
                match get_r(arena, root) {
                    Some(r) => next = r,
                    None => break,
                }
            }
            push_chain(arena, &mut lesser, root, set_r::<N>);
            root = next;
        }
    }

    // Reassemble: chains become the root's subtrees, the root's old
    // subtrees fill the innermost slots of the chains.
    let l = get_l(arena, root);
    let r = get_r(arena, root);
    if let Some(tail) = lesser.1 {
        set_r(arena, tail, l);
    }
    if let Some(tail) = greater.1 {
        set_l(arena, tail, r);
    }
    set_l(arena, root, lesser.0.or(l));
    set_r(arena, root, greater.0.or(r));

    Some((root, cmp))
}
