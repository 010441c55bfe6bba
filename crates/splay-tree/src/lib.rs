//! Intrusive, comparator-generic splay tree.
//!
//! The tree stores no keys and no payload, only a root handle and a
//! comparator. Nodes are caller records implementing [`Node`] (two child
//! links) kept in caller-owned storage; every "pointer" is an `Option<u32>`
//! index into that storage, which is passed as a slice into each operation.
//!
//! Every access splays: the node that was looked up, or the nearest node on
//! the search path when the key is absent, ends up at the root. That gives
//! amortized O(log n) operations and keeps hot keys near the top.
//!
//! # Example
//!
//! ```
//! use splay_tree::{ord_comparator, Node, SplayTree};
//!
//! #[derive(Default)]
//! struct Record {
//!     key: i32,
//!     l: Option<u32>,
//!     r: Option<u32>,
//! }
//!
//! impl Node for Record {
//!     fn l(&self) -> Option<u32> { self.l }
//!     fn r(&self) -> Option<u32> { self.r }
//!     fn set_l(&mut self, v: Option<u32>) { self.l = v; }
//!     fn set_r(&mut self, v: Option<u32>) { self.r = v; }
//! }
//!
//! let mut arena: Vec<Record> = [1, 3, 5, 7, 9]
//!     .into_iter()
//!     .map(|key| Record { key, ..Default::default() })
//!     .collect();
//! let mut tree = SplayTree::with_comparator(|a: &Record, b: &Record| ord_comparator(&a.key, &b.key));
//! for handle in 0..5 {
//!     assert!(tree.insert(&mut arena, handle));
//! }
//!
//! let query = Record { key: 4, ..Default::default() };
//! let bound = tree.lower_bound(&mut arena, &query).unwrap();
//! assert_eq!(arena[bound as usize].key, 5);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] trait and comparator helpers |
//! | [`splay`] | rotations and the top-down splay primitive |
//! | [`ops`] | insert / search / lower bound / delete on a bare root |
//! | [`tree`] | [`SplayTree`]: root + comparator wrapper over [`ops`] |
//! | [`arena`] | [`NodeArena`]: handle slab with a free list |
//! | [`map`] | [`SplayMap`]: owning ordered map |
//!
//! The tree is single-threaded: searches mutate it, so every lookup takes
//! `&mut self`. Wrap it in a lock to share it.

pub mod arena;
pub mod error;
pub mod iter;
pub mod map;
pub mod ops;
pub mod print;
pub mod splay;
pub mod tree;
pub mod types;
pub mod validate;

pub use arena::NodeArena;
pub use error::{ArenaError, TreeError};
pub use iter::Iter;
pub use map::{MapNode, SplayMap};
pub use splay::{rotate_left, rotate_right, splay, Probe};
pub use tree::SplayTree;
pub use types::{default_comparator, ord_comparator, Node};
