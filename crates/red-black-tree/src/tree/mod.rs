//! The tree controller.
//!
//! [`RbTree`] owns the node arena, the root index, the element count and the
//! cached leftmost node, and composes the balancing engines:
//!
//! | Module | Contents |
//! |--------|----------|
//! | `rotate` | the single subtree rotation shared by both fix-ups |
//! | `insert` | placement and the red-red fix-up loop |
//! | `remove` | structural case dispatch and the double-black fix-up loop |
//! | `traverse` | pre/in/post/level-order visits |

mod insert;
mod remove;
mod rotate;
mod traverse;

use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace, warn};

use crate::arena::Arena;
use crate::error::{InvariantViolation, TreeError};
use crate::node::{Node, NodeRef, RbNode};
use crate::types::{Direction, NodeId, Slot};
use crate::util;

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(0);

fn next_tree_id() -> u32 {
    NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed)
}

fn default_comparator<T: Ord>(a: &T, b: &T) -> i32 {
    match a.cmp(b) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Red-black tree over caller-supplied nodes.
///
/// Ordering comes from a three-way comparator `C` (negative, zero or
/// positive, like `Ord::cmp`). Equal data is placed to the right of what is
/// already there, so insertion order is kept among ties.
///
/// ```
/// use red_black_tree::{Node, RbTree};
///
/// let mut tree = RbTree::new();
/// for v in [10, 5, 15, 1, 9] {
///     tree.insert(Node::new(v)).unwrap();
/// }
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.min().map(|n| *n.data()), Some(1));
///
/// let five = tree.search(&5).unwrap().id();
/// let removed = tree.delete(five).unwrap();
/// assert_eq!(removed.into_data(), 5);
/// assert!(!tree.contains(&5));
/// tree.validate().unwrap();
/// ```
pub struct RbTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    id: u32,
    arena: Arena<T>,
    root: Option<u32>,
    leftmost: Option<u32>,
    len: usize,
    comparator: C,
}

impl<T: Ord> RbTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<T>)
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            id: next_tree_id(),
            arena: Arena::with_capacity(capacity),
            root: None,
            leftmost: None,
            len: 0,
            comparator,
        }
    }

    /// Number of nodes in the tree. Sentinels are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` iff the tree holds at least one node.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|i| self.view(i))
    }

    /// The leftmost (smallest) node, read from the cache.
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.leftmost.map(|i| self.view(i))
    }

    /// Looks up a handle issued by this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.resolve(id).ok().map(|i| self.view(i))
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(|n| n.data())
    }

    /// Inserts `node` where the comparator places it: descend right on
    /// equal-or-greater, left on lesser, and take the first sentinel slot.
    pub fn insert(&mut self, node: Node<T>) -> Result<NodeId, TreeError> {
        let at = self.insertion_point(node.data());
        self.attach(node, at)
    }

    /// Inserts `node` as `parent`'s `direction` child, or as the root when
    /// `parent` is `None` and the tree is empty.
    ///
    /// The caller is responsible for keeping the result ordered; no
    /// comparison is made against `parent`.
    pub fn insert_at(
        &mut self,
        node: Node<T>,
        parent: Option<NodeId>,
        direction: Option<Direction>,
    ) -> Result<NodeId, TreeError> {
        let at = match (parent, direction) {
            (None, _) => {
                if self.root.is_some() {
                    warn!(tree = self.id, "insert_at without parent on non-empty tree");
                    return Err(TreeError::RootOccupied);
                }
                None
            }
            (Some(_), None) => {
                warn!(tree = self.id, "insert_at with parent but no direction");
                return Err(TreeError::MissingDirection);
            }
            (Some(parent), Some(dir)) => {
                let p = self.resolve(parent)?;
                if self.arena.child(p, dir).is_node() {
                    warn!(tree = self.id, parent = p, %dir, "insert_at into occupied slot");
                    return Err(TreeError::SlotOccupied(dir));
                }
                Some((p, dir))
            }
        };
        self.attach(node, at)
    }

    /// Removes the node behind `target` and hands it back detached.
    pub fn delete(&mut self, target: impl Into<Slot>) -> Result<Node<T>, TreeError> {
        let Slot::Node(id) = target.into() else {
            warn!(tree = self.id, "delete of a sentinel");
            return Err(TreeError::Sentinel);
        };
        let n = self.resolve(id)?;
        self.unlink(n)
    }

    /// Removes and returns the leftmost node.
    pub fn shift(&mut self) -> Result<Option<Node<T>>, TreeError> {
        match self.leftmost {
            Some(n) => self.unlink(n).map(Some),
            None => Ok(None),
        }
    }

    /// Removes every node. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.leftmost = None;
        self.len = 0;
        debug!(tree = self.id, "cleared");
    }

    /// First node whose data compares equal (comparator result zero) to `data`.
    pub fn search(&self, data: &T) -> Option<NodeRef<'_, T>> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(data, &self.arena[i].data);
            if cmp == 0 {
                return Some(self.view(i));
            }
            let dir = if cmp < 0 {
                Direction::Left
            } else {
                Direction::Right
            };
            curr = self.arena.child(i, dir).node();
        }
        None
    }

    /// First node, in order, matching `predicate`. Scans the whole tree.
    pub fn search_by<'a, P>(&'a self, mut predicate: P) -> Option<NodeRef<'a, T>>
    where
        P: FnMut(NodeRef<'a, T>) -> bool,
    {
        self.iter().find(|n| predicate(*n))
    }

    /// Every node matching `predicate`, in ascending order.
    pub fn select<'a, P>(&'a self, mut predicate: P) -> Vec<NodeRef<'a, T>>
    where
        P: FnMut(NodeRef<'a, T>) -> bool,
    {
        self.iter().filter(|n| predicate(*n)).collect()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.search(data).is_some()
    }

    /// In-order iterator over the nodes.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            tree: self.id,
            next: self.leftmost,
            remaining: self.len,
        }
    }

    /// Checks the red-black, ordering and bookkeeping invariants.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        util::validate::check(
            &self.arena,
            self.root,
            self.leftmost,
            self.len,
            &self.comparator,
        )
    }

    fn insertion_point(&self, data: &T) -> Option<(u32, Direction)> {
        let mut curr = self.root?;
        loop {
            let dir = if (self.comparator)(data, &self.arena[curr].data) >= 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            match self.arena.child(curr, dir) {
                Slot::Node(next) => curr = next,
                Slot::Sentinel => return Some((curr, dir)),
            }
        }
    }

    fn attach(&mut self, node: Node<T>, at: Option<(u32, Direction)>) -> Result<NodeId, TreeError> {
        let n = self.arena.alloc(RbNode::resident(node.into_data()))?;
        insert::place(&mut self.arena, &mut self.root, n, at)?;
        self.len += 1;
        self.refresh_leftmost();
        debug!(tree = self.id, index = n, len = self.len, "inserted");
        Ok(self.handle(n))
    }

    fn unlink(&mut self, n: u32) -> Result<Node<T>, TreeError> {
        let cases = remove::remove(&mut self.arena, &mut self.root, n)?;
        trace!(tree = self.id, index = n, ?cases, "remove fix-up finished");
        let node = self
            .arena
            .release(n)
            .ok_or(TreeError::Structural("removed node is missing from the arena"))?
            .detach()?;
        self.len -= 1;
        self.refresh_leftmost();
        debug!(tree = self.id, index = n, len = self.len, "deleted");
        Ok(node)
    }

    fn refresh_leftmost(&mut self) {
        self.leftmost = util::first(&self.arena, self.root);
    }

    fn resolve(&self, id: NodeId) -> Result<u32, TreeError> {
        if id.tree != self.id {
            return Err(TreeError::ForeignNode);
        }
        self.arena
            .resolve(id.index, id.generation)
            .ok_or(TreeError::StaleNode)
    }

    fn handle(&self, i: u32) -> NodeId {
        NodeId {
            tree: self.id,
            index: i,
            generation: self.arena.generation(i),
        }
    }

    fn view(&self, i: u32) -> NodeRef<'_, T> {
        NodeRef::new(&self.arena, self.id, i)
    }
}

impl<T: fmt::Debug, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Multi-line rendering of the tree shape, colours and data.
    pub fn print(&self) -> String {
        util::print::print(&self.arena, self.root.map_or(Slot::Sentinel, Slot::Node), "")
    }
}

impl<T: Clone, C> Clone for RbTree<T, C>
where
    C: Fn(&T, &T) -> i32 + Clone,
{
    /// The clone is a distinct tree: handles from `self` are foreign to it.
    fn clone(&self) -> Self {
        Self {
            id: next_tree_id(),
            arena: self.arena.clone(),
            root: self.root,
            leftmost: self.leftmost,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|n| n.data())).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = NodeRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// In-order iterator over an [`RbTree`], produced by [`RbTree::iter`].
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    tree: u32,
    next: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<NodeRef<'a, T>> {
        let i = self.next?;
        self.next = util::next(self.arena, i);
        self.remaining = self.remaining.saturating_sub(1);
        Some(NodeRef::new(self.arena, self.tree, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
