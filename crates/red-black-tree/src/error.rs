use thiserror::Error;

use crate::types::Direction;

/// Rejected tree operation.
///
/// Every variant except [`TreeError::Structural`] is a precondition violation
/// detected before the tree is touched, so the tree is unchanged when one is
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot insert or delete a sentinel")]
    Sentinel,
    #[error("tree already has a root")]
    RootOccupied,
    #[error("target parent direction must be provided")]
    MissingDirection,
    #[error("target parent already has {0} child")]
    SlotOccupied(Direction),
    #[error("node does not belong to this tree")]
    ForeignNode,
    #[error("node is no longer resident in this tree")]
    StaleNode,
    #[error("tree cannot address more nodes")]
    CapacityExceeded,
    /// Internal invariant failure. Signals a bug in the balancing code, not bad input.
    #[error("structural error: {0}")]
    Structural(&'static str),
}

/// Red-black invariant broken, as reported by [`RbTree::validate`](crate::RbTree::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root has a parent")]
    RootHasParent,
    #[error("root is not black")]
    RedRoot,
    #[error("broken parent link on {0} child of node {1}")]
    BrokenParentLink(Direction, u32),
    #[error("red node {0} has a red {1} child")]
    RedRed(u32, Direction),
    #[error("black height mismatch under node {0}: left {1}, right {2}")]
    BlackHeight(u32, usize, usize),
    #[error("node order violated at node {0}")]
    Order(u32),
    #[error("size is {expected} but {actual} nodes are reachable")]
    Size { expected: usize, actual: usize },
    #[error("cached leftmost node is {cached:?}, actual leftmost is {actual:?}")]
    Leftmost {
        cached: Option<u32>,
        actual: Option<u32>,
    },
}
