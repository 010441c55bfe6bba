use thiserror::Error;

/// Failures of the handle allocator in [`crate::NodeArena`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("arena exhausted: no more u32 handles available")]
    Exhausted,
    #[error("invalid handle {0}")]
    InvalidHandle(u32),
    #[error("handle {0} released twice")]
    DoubleFree(u32),
}

/// Structural problems reported by [`crate::SplayTree::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("handle {0} is out of bounds")]
    HandleOutOfBounds(u32),
    #[error("node {0} is reachable more than once")]
    Cycle(u32),
    #[error("node {child} is misplaced under {ancestor}")]
    OrderViolation { ancestor: u32, child: u32 },
}
