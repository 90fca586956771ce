//! Core value types shared by every module.
//!
//! - [`Color`] / [`Direction`]: the two binary attributes of a tree position.
//! - [`Slot`]: a child slot: either a [`Slot::Sentinel`] or an occupied node.
//! - [`NodeId`]: a generational handle to a node resident in a particular tree.

use std::fmt;

/// Node colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Child side relative to a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Handle to a node resident in an [`RbTree`](crate::RbTree).
///
/// A handle is bound to the tree that issued it and to the generation of the
/// arena slot it points at, so handles from another tree or to a node that
/// has since been deleted are rejected rather than silently resolving to an
/// unrelated node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: u32,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Arena index of the node inside its tree.
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// A child slot.
///
/// Every resident node has exactly two slots and each one is either a
/// sentinel (always black, carries no data) or another node. Two sentinels
/// compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot<I = NodeId> {
    Sentinel,
    Node(I),
}

impl<I> Slot<I> {
    /// `true` iff this slot is a sentinel (the "leaf" in red-black terms).
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Slot::Sentinel)
    }

    /// `true` iff this slot holds a node.
    pub fn is_node(&self) -> bool {
        matches!(self, Slot::Node(_))
    }

    pub fn node(self) -> Option<I> {
        match self {
            Slot::Sentinel => None,
            Slot::Node(i) => Some(i),
        }
    }

    pub fn as_ref(&self) -> Slot<&I> {
        match self {
            Slot::Sentinel => Slot::Sentinel,
            Slot::Node(i) => Slot::Node(i),
        }
    }

    pub fn map<J, F: FnOnce(I) -> J>(self, f: F) -> Slot<J> {
        match self {
            Slot::Sentinel => Slot::Sentinel,
            Slot::Node(i) => Slot::Node(f(i)),
        }
    }
}

impl<I> From<I> for Slot<I> {
    fn from(value: I) -> Self {
        Slot::Node(value)
    }
}
