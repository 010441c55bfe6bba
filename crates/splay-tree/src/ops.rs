//! Key-based tree operations on a bare root handle.
//!
//! These are the algorithms behind [`SplayTree`](crate::SplayTree), exposed
//! as free functions over `(arena, root, comparator)` so that other
//! containers can keep the root and comparator in their own fields.
//!
//! Every function that looks up a key splays, including lookups that miss
//! and inserts that are rejected; `root` is updated in place.

use tracing::trace;

use crate::splay::{splay, Probe};
use crate::types::{get_l, get_r, set_l, set_r, Node};

fn splay_on<N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    query: Probe<'_, N>,
    comparator: &C,
) -> Option<i32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let (new_root, cmp) = splay(arena, *root, query, comparator)?;
    *root = Some(new_root);
    Some(cmp)
}

/// Links the node at handle `node` into the tree.
///
/// Stale links left on the node from an earlier membership are overwritten.
/// Returns `false` if a node with an equal key is present, in which case that
/// node has been splayed to the root and no links were cut. This includes
/// passing a node that is already linked. On success the new node is the
/// root.
pub fn insert<N, C>(arena: &mut [N], root: &mut Option<u32>, node: u32, comparator: &C) -> bool
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let Some(cmp) = splay_on(arena, root, Probe::Handle(node), comparator) else {
        set_l(arena, node, None);
        set_r(arena, node, None);
        *root = Some(node);
        return true;
    };
    if cmp == 0 {
        trace!(target: "splay_tree::tree", node, "insert rejected: duplicate key");
        return false;
    }
    let Some(old) = *root else {
        return false;
    };

    if cmp > 0 {
        let l = get_l(arena, old);
        set_l(arena, node, l);
        set_r(arena, node, Some(old));
        set_l(arena, old, None);
    } else {
        let r = get_r(arena, old);
        set_r(arena, node, r);
        set_l(arena, node, Some(old));
        set_r(arena, old, None);
    }
    *root = Some(node);
    true
}

/// Finds the node equal to `query` and splays it to the root.
///
/// On a miss the closest node visited is splayed to the root instead.
pub fn search<N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    query: &N,
    comparator: &C,
) -> Option<u32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    match splay_on(arena, root, Probe::Node(query), comparator) {
        Some(0) => *root,
        _ => None,
    }
}

/// Smallest node strictly greater than `query`.
pub fn lower_bound<N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    query: &N,
    comparator: &C,
) -> Option<u32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let cmp = splay_on(arena, root, Probe::Node(query), comparator)?;
    let top = (*root)?;
    if cmp > 0 {
        // The walk stopped at the tightest greater node; everything in its
        // left subtree is below the query.
        return Some(top);
    }
    let mut p = get_r(arena, top)?;
    while let Some(l) = get_l(arena, p) {
        p = l;
    }
    Some(p)
}

/// Unlinks the node equal to `query` and returns its handle.
///
/// The removed node's own links are left as they were.
pub fn delete<N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    query: &N,
    comparator: &C,
) -> Option<u32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let cmp = splay_on(arena, root, Probe::Node(query), comparator)?;
    let top = (*root)?;
    if cmp != 0 {
        trace!(target: "splay_tree::tree", root = top, "delete: key not found");
        return None;
    }

    let Some(l) = get_l(arena, top) else {
        *root = get_r(arena, top);
        trace!(target: "splay_tree::tree", node = top, "deleted root without left subtree");
        return Some(top);
    };

    // Join the two subtrees through the maximum of the left one.
    let mut parent = None;
    let mut max = l;
    while let Some(r) = get_r(arena, max) {
        parent = Some(max);
        max = r;
    }
    if let Some(parent) = parent {
        let inner = get_l(arena, max);
        set_r(arena, parent, inner);
        set_l(arena, max, Some(l));
    }
    let r = get_r(arena, top);
    set_r(arena, max, r);
    *root = Some(max);

    trace!(
        target: "splay_tree::tree",
        node = top,
        predecessor = max,
        "deleted root, predecessor promoted"
    );
    Some(top)
}

/// Like [`delete`], but also resets the unlinked node's links so the slot can
/// be inserted again or recycled.
pub fn remove<N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    query: &N,
    comparator: &C,
) -> Option<u32>
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let node = delete(arena, root, query, comparator)?;
    set_l(arena, node, None);
    set_r(arena, node, None);
    Some(node)
}

/// Leftmost node. Does not splay.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node. Does not splay.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}
