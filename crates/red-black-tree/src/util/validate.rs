use crate::arena::Arena;
use crate::error::InvariantViolation;
use crate::types::{Direction, Slot};

use super::{first, next};

/// Checks every red-black, ordering and bookkeeping invariant of a tree.
pub(crate) fn check<T, C>(
    arena: &Arena<T>,
    root: Option<u32>,
    leftmost: Option<u32>,
    len: usize,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    C: Fn(&T, &T) -> i32,
{
    if let Some(root) = root {
        if arena.parent(root).is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if arena[root].color.is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        black_height(arena, Slot::Node(root))?;
    }

    let mut count = 0;
    let mut prev: Option<u32> = None;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(&arena[prev].data, &arena[i].data) > 0 {
                return Err(InvariantViolation::Order(i));
            }
        }
        count += 1;
        prev = Some(i);
        curr = next(arena, i);
    }
    if count != len {
        return Err(InvariantViolation::Size {
            expected: len,
            actual: count,
        });
    }

    let actual = first(arena, root);
    if actual != leftmost {
        return Err(InvariantViolation::Leftmost {
            cached: leftmost,
            actual,
        });
    }
    Ok(())
}

fn black_height<T>(arena: &Arena<T>, slot: Slot<u32>) -> Result<usize, InvariantViolation> {
    let Slot::Node(node) = slot else {
        return Ok(1);
    };

    let mut heights = [0; 2];
    for (i, dir) in [Direction::Left, Direction::Right].into_iter().enumerate() {
        let child = arena.child(node, dir);
        if let Slot::Node(c) = child {
            if arena.parent(c) != Some(node) {
                return Err(InvariantViolation::BrokenParentLink(dir, node));
            }
            if arena[node].color.is_red() && arena[c].color.is_red() {
                return Err(InvariantViolation::RedRed(node, dir));
            }
        }
        heights[i] = black_height(arena, child)?;
    }
    if heights[0] != heights[1] {
        return Err(InvariantViolation::BlackHeight(node, heights[0], heights[1]));
    }

    Ok(heights[0] + usize::from(arena[node].color.is_black()))
}
