//! Nodes, in their three guises.
//!
//! - [`Node`] is the detached form a caller builds and gets back from a
//!   deletion. It owns the data and nothing else: no colour, no links.
//! - `RbNode` is the arena-resident form the balancing code works on.
//! - [`NodeRef`] is a borrowed, read-only view of a resident node.
//!
//! The relationship queries (`position`, `sibling`, `close_nephew`,
//! `distant_nephew`) are the whole vocabulary of the deletion fix-up. They
//! are computed from the links on every call because rotations change the
//! shape between uses.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::arena::Arena;
use crate::error::TreeError;
use crate::types::{Color, Direction, NodeId, Slot};

/// A node outside any tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    data: T,
}

impl<T> Node<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> From<T> for Node<T> {
    fn from(data: T) -> Self {
        Node::new(data)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RbNode<T> {
    pub(crate) data: T,
    pub(crate) color: Color,
    pub(crate) parent: Option<u32>,
    pub(crate) children: [Slot<u32>; 2],
}

impl<T> RbNode<T> {
    /// A freshly placed node: red, unparented, two sentinel children.
    pub(crate) fn resident(data: T) -> Self {
        Self {
            data,
            color: Color::Red,
            parent: None,
            children: [Slot::Sentinel, Slot::Sentinel],
        }
    }

    /// Converts an unlinked arena node back into a caller-owned [`Node`].
    pub(crate) fn detach(self) -> Result<Node<T>, TreeError> {
        if self.parent.is_some() {
            return Err(TreeError::Structural("node is still chained to a parent"));
        }
        if self.children[0].is_node() {
            return Err(TreeError::Structural("node is still chained to a left child"));
        }
        if self.children[1].is_node() {
            return Err(TreeError::Structural("node is still chained to a right child"));
        }
        Ok(Node::new(self.data))
    }
}

impl<T> Index<Direction> for RbNode<T> {
    type Output = Slot<u32>;

    fn index(&self, dir: Direction) -> &Slot<u32> {
        match dir {
            Direction::Left => &self.children[0],
            Direction::Right => &self.children[1],
        }
    }
}

impl<T> IndexMut<Direction> for RbNode<T> {
    fn index_mut(&mut self, dir: Direction) -> &mut Slot<u32> {
        match dir {
            Direction::Left => &mut self.children[0],
            Direction::Right => &mut self.children[1],
        }
    }
}

impl<T> Arena<T> {
    /// Which child slot `n` occupies in its parent; `None` for a parentless node.
    pub(crate) fn position(&self, n: u32) -> Result<Option<Direction>, TreeError> {
        let Some(p) = self.parent(n) else {
            return Ok(None);
        };
        let slot = Slot::Node(n);
        if self.child(p, Direction::Left) == slot {
            Ok(Some(Direction::Left))
        } else if self.child(p, Direction::Right) == slot {
            Ok(Some(Direction::Right))
        } else {
            Err(TreeError::Structural("disowned by parent"))
        }
    }

    /// The parent's other child slot.
    pub(crate) fn sibling(&self, n: u32) -> Result<Option<Slot<u32>>, TreeError> {
        let Some(pos) = self.position(n)? else {
            return Ok(None);
        };
        let p = self.parent(n).ok_or(TreeError::Structural("positioned node has no parent"))?;
        Ok(Some(self.child(p, pos.opposite())))
    }

    /// Sibling's child on the same side as `n`. `None` when there is no sibling node.
    pub(crate) fn close_nephew(&self, n: u32) -> Result<Option<Slot<u32>>, TreeError> {
        self.nephew(n, false)
    }

    /// Sibling's child on the side opposite `n`. `None` when there is no sibling node.
    pub(crate) fn distant_nephew(&self, n: u32) -> Result<Option<Slot<u32>>, TreeError> {
        self.nephew(n, true)
    }

    fn nephew(&self, n: u32, distant: bool) -> Result<Option<Slot<u32>>, TreeError> {
        let (Some(pos), Some(Slot::Node(s))) = (self.position(n)?, self.sibling(n)?) else {
            return Ok(None);
        };
        let side = if distant { pos.opposite() } else { pos };
        Ok(Some(self.child(s, side)))
    }
}

/// Borrowed view of a node resident in a tree.
pub struct NodeRef<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) tree: u32,
    pub(crate) index: u32,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, tree: u32, index: u32) -> Self {
        Self { arena, tree, index }
    }

    fn at(&self, index: u32) -> NodeRef<'a, T> {
        NodeRef::new(self.arena, self.tree, index)
    }

    fn slot(&self, slot: Slot<u32>) -> Slot<NodeRef<'a, T>> {
        slot.map(|i| self.at(i))
    }

    pub fn id(&self) -> NodeId {
        NodeId {
            tree: self.tree,
            index: self.index,
            generation: self.arena.generation(self.index),
        }
    }

    pub fn data(&self) -> &'a T {
        &self.arena[self.index].data
    }

    pub fn color(&self) -> Color {
        self.arena[self.index].color
    }

    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color().is_black()
    }

    /// Parent node; `None` only for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.arena.parent(self.index).map(|p| self.at(p))
    }

    pub fn child(&self, dir: Direction) -> Slot<NodeRef<'a, T>> {
        self.slot(self.arena.child(self.index, dir))
    }

    pub fn left(&self) -> Slot<NodeRef<'a, T>> {
        self.child(Direction::Left)
    }

    pub fn right(&self) -> Slot<NodeRef<'a, T>> {
        self.child(Direction::Right)
    }

    /// Which slot of its parent this node occupies; `Ok(None)` for the root.
    pub fn position(&self) -> Result<Option<Direction>, TreeError> {
        self.arena.position(self.index)
    }

    pub fn sibling(&self) -> Result<Option<Slot<NodeRef<'a, T>>>, TreeError> {
        Ok(self.arena.sibling(self.index)?.map(|s| self.slot(s)))
    }

    pub fn close_nephew(&self) -> Result<Option<Slot<NodeRef<'a, T>>>, TreeError> {
        Ok(self.arena.close_nephew(self.index)?.map(|s| self.slot(s)))
    }

    pub fn distant_nephew(&self) -> Result<Option<Slot<NodeRef<'a, T>>>, TreeError> {
        Ok(self.arena.distant_nephew(self.index)?.map(|s| self.slot(s)))
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.index == other.index
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("color", &self.color())
            .field("data", self.data())
            .finish()
    }
}

impl<'a, T> Slot<NodeRef<'a, T>> {
    /// Handle form of a borrowed slot, suitable for passing to
    /// [`RbTree::delete`](crate::RbTree::delete) once the borrow ends.
    pub fn id(&self) -> Slot<NodeId> {
        self.as_ref().map(NodeRef::id)
    }

    /// Slot colour; sentinels are black.
    pub fn color(&self) -> Color {
        match self {
            Slot::Sentinel => Color::Black,
            Slot::Node(n) => n.color(),
        }
    }

    pub fn data(&self) -> Option<&'a T> {
        self.as_ref().node().map(NodeRef::data)
    }
}
