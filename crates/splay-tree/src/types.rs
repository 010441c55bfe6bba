//! Node trait and comparator helpers.
//!
//! Nodes are records owned by the caller. The tree only reads and writes the
//! two child links exposed through [`Node`]; every "pointer" is an
//! `Option<u32>` index into a caller-owned slice (the arena). Parent links are
//! not stored, the shape is implicit in the child links.

use std::cmp::Ordering;

/// Child links of a node embedded in a caller record.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Maps `PartialOrd` onto the `-1 / 0 / 1` comparator convention.
///
/// Incomparable values (e.g. `NaN`) order after everything else.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Maps a total `Ord` onto the comparator convention.
pub fn ord_comparator<T: Ord>(a: &T, b: &T) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// ── link helpers ──────────────────────────────────────────────────────────

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}
