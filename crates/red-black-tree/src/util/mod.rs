//! Tree-shape helpers that need only the arena.
//!
//! - [`first`] / [`next`]: in-order navigation along parent links.
//! - [`validate`]: the invariant checker behind `RbTree::validate`.
//! - [`print`]: debug rendering of the tree shape.

pub(crate) mod print;
pub(crate) mod validate;

use crate::arena::Arena;
use crate::types::{Direction, Slot};

/// Leftmost node under `root`.
pub(crate) fn first<T>(arena: &Arena<T>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Slot::Node(l) = arena.child(curr, Direction::Left) {
        curr = l;
    }
    Some(curr)
}

/// In-order successor of `curr`.
pub(crate) fn next<T>(arena: &Arena<T>, mut curr: u32) -> Option<u32> {
    if let Slot::Node(r) = arena.child(curr, Direction::Right) {
        return first(arena, Some(r));
    }
    let mut p = arena.parent(curr);
    while let Some(pi) = p {
        if arena.child(pi, Direction::Right) == Slot::Node(curr) {
            curr = pi;
            p = arena.parent(pi);
        } else {
            return Some(pi);
        }
    }
    None
}
