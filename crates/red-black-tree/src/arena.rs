//! Generational node arena.
//!
//! Nodes never hold references to each other. Every parent/child "pointer"
//! is a `u32` index into this arena, and child slots are [`Slot<u32>`] so a
//! missing child is an explicit sentinel rather than an absent index.
//!
//! Vacated entries go on a free list and their generation is bumped, which is
//! what lets the tree reject a [`NodeId`](crate::NodeId) whose node is gone.

use std::ops::{Index, IndexMut};

use crate::error::TreeError;
use crate::node::RbNode;
use crate::types::{Color, Direction, Slot};

#[derive(Clone, Debug)]
struct Entry<T> {
    generation: u32,
    node: Option<RbNode<T>>,
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its index.
    pub(crate) fn alloc(&mut self, node: RbNode<T>) -> Result<u32, TreeError> {
        if let Some(i) = self.free.pop() {
            self.entries[i as usize].node = Some(node);
            return Ok(i);
        }
        let i = u32::try_from(self.entries.len()).map_err(|_| TreeError::CapacityExceeded)?;
        self.entries.push(Entry {
            generation: 0,
            node: Some(node),
        });
        Ok(i)
    }

    /// Vacates entry `i` and returns the node it held.
    pub(crate) fn release(&mut self, i: u32) -> Option<RbNode<T>> {
        let entry = self.entries.get_mut(i as usize)?;
        let node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(i);
        Some(node)
    }

    /// Vacates every entry. Indices are kept so outstanding handles go stale
    /// instead of aliasing nodes inserted later.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (i, entry) in self.entries.iter_mut().enumerate().rev() {
            if entry.node.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
            }
            self.free.push(i as u32);
        }
    }

    /// Index of a live node with the given generation.
    pub(crate) fn resolve(&self, index: u32, generation: u32) -> Option<u32> {
        let entry = self.entries.get(index as usize)?;
        (entry.generation == generation && entry.node.is_some()).then_some(index)
    }

    pub(crate) fn generation(&self, i: u32) -> u32 {
        self.entries[i as usize].generation
    }

    #[inline]
    pub(crate) fn parent(&self, i: u32) -> Option<u32> {
        self[i].parent
    }

    #[inline]
    pub(crate) fn child(&self, i: u32, dir: Direction) -> Slot<u32> {
        self[i][dir]
    }

    /// Colour of a slot; sentinels are always black.
    #[inline]
    pub(crate) fn color_of(&self, slot: Slot<u32>) -> Color {
        match slot {
            Slot::Sentinel => Color::Black,
            Slot::Node(i) => self[i].color,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, slot: Slot<u32>) -> bool {
        self.color_of(slot).is_red()
    }

    #[inline]
    pub(crate) fn set_color(&mut self, i: u32, color: Color) {
        self[i].color = color;
    }

    /// Puts `slot` into `parent`'s `dir` child slot and points its back-reference at `parent`.
    #[inline]
    pub(crate) fn link(&mut self, parent: u32, dir: Direction, slot: Slot<u32>) {
        self[parent][dir] = slot;
        if let Slot::Node(c) = slot {
            self[c].parent = Some(parent);
        }
    }
}

impl<T> Index<u32> for Arena<T> {
    type Output = RbNode<T>;

    fn index(&self, i: u32) -> &RbNode<T> {
        self.entries[i as usize]
            .node
            .as_ref()
            .expect("linked index refers to a live node")
    }
}

impl<T> IndexMut<u32> for Arena<T> {
    fn index_mut(&mut self, i: u32) -> &mut RbNode<T> {
        self.entries[i as usize]
            .node
            .as_mut()
            .expect("linked index refers to a live node")
    }
}
