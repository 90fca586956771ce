use std::collections::VecDeque;

use super::RbTree;
use crate::arena::Arena;
use crate::node::NodeRef;
use crate::types::{Direction, Slot};

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Visits node, left subtree, right subtree.
    pub fn traverse_pre_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        visit(&self.arena, self.id, self.root_slot(), Order::Pre, &mut f);
    }

    /// Visits left subtree, node, right subtree; ascending order.
    pub fn traverse_in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        visit(&self.arena, self.id, self.root_slot(), Order::In, &mut f);
    }

    /// Visits left subtree, right subtree, node.
    pub fn traverse_post_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        visit(&self.arena, self.id, self.root_slot(), Order::Post, &mut f);
    }

    /// Breadth-first visit, top level first, left to right within a level.
    pub fn traverse_level_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(NodeRef<'a, T>),
    {
        let mut queue: VecDeque<u32> = self.root.into_iter().collect();
        while let Some(i) = queue.pop_front() {
            f(NodeRef::new(&self.arena, self.id, i));
            for dir in [Direction::Left, Direction::Right] {
                if let Slot::Node(c) = self.arena.child(i, dir) {
                    queue.push_back(c);
                }
            }
        }
    }

    fn root_slot(&self) -> Slot<u32> {
        self.root.map_or(Slot::Sentinel, Slot::Node)
    }
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

fn visit<'a, T, F>(arena: &'a Arena<T>, tree: u32, slot: Slot<u32>, order: Order, f: &mut F)
where
    F: FnMut(NodeRef<'a, T>),
{
    let Slot::Node(i) = slot else {
        return;
    };
    let node = NodeRef::new(arena, tree, i);
    if let Order::Pre = order {
        f(node);
    }
    visit(arena, tree, arena.child(i, Direction::Left), order, f);
    if let Order::In = order {
        f(node);
    }
    visit(arena, tree, arena.child(i, Direction::Right), order, f);
    if let Order::Post = order {
        f(node);
    }
}
