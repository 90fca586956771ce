use tracing::trace;

use super::rotate::rotate;
use crate::arena::Arena;
use crate::error::TreeError;
use crate::types::{Color, Direction, Slot};

/// How often each double-black case ran during one removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FixupCases {
    pub(crate) red_sibling: u32,
    pub(crate) distant_nephew: u32,
    pub(crate) close_nephew: u32,
    pub(crate) red_parent: u32,
    pub(crate) propagated: u32,
}

/// Unlinks `n` from the tree rooted at `root`, leaving it parentless with two
/// sentinel children.
///
/// A node with two children trades places with its in-order predecessor, a
/// node with one child trades places with that child, and the removal then
/// happens at a node with two sentinel children. Trading places also trades
/// colours, so the tree ends up exactly as if only the data had moved, while
/// every node keeps its own data.
pub(crate) fn remove<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
) -> Result<FixupCases, TreeError> {
    let mut cases = FixupCases::default();
    loop {
        match (arena.child(n, Direction::Left), arena.child(n, Direction::Right)) {
            (Slot::Node(l), Slot::Node(_)) => {
                let mut pred = l;
                while let Slot::Node(next) = arena.child(pred, Direction::Right) {
                    pred = next;
                }
                trace!(node = n, predecessor = pred, "remove: two children");
                exchange(arena, root, n, pred)?;
            }
            (Slot::Node(c), Slot::Sentinel) | (Slot::Sentinel, Slot::Node(c)) => {
                trace!(node = n, child = c, "remove: single child");
                exchange(arena, root, n, c)?;
                arena.set_color(c, Color::Black);
            }
            (Slot::Sentinel, Slot::Sentinel) => {
                remove_leaf(arena, root, n, &mut cases)?;
                return Ok(cases);
            }
        }
    }
}

fn remove_leaf<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
    cases: &mut FixupCases,
) -> Result<(), TreeError> {
    if arena.parent(n).is_none() {
        trace!(node = n, "remove: last node");
        *root = None;
        return Ok(());
    }
    if arena[n].color.is_black() {
        fix_double_black(arena, root, n, cases)?;
    }
    let p = arena
        .parent(n)
        .ok_or(TreeError::Structural("removed leaf lost its parent"))?;
    let pos = arena
        .position(n)?
        .ok_or(TreeError::Structural("removed leaf has no position"))?;
    arena[p][pos] = Slot::Sentinel;
    arena[n].parent = None;
    Ok(())
}

/// Resolves the missing black unit left by removing the black leaf `n`.
///
/// Cases are tested in a fixed order on every pass; a red sibling rotation
/// changes the sibling and nephews the later tests look at.
fn fix_double_black<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
    cases: &mut FixupCases,
) -> Result<(), TreeError> {
    let mut cur = n;
    while let Some(p) = arena.parent(cur) {
        let dir = arena
            .position(cur)?
            .ok_or(TreeError::Structural("double-black node has no position"))?;
        let opp = dir.opposite();
        let Slot::Node(s) = arena.child(p, opp) else {
            return Err(TreeError::Structural("double-black node has no sibling"));
        };

        if arena[s].color.is_red() {
            trace!(node = cur, sibling = s, "remove fix-up: red sibling");
            cases.red_sibling += 1;
            arena.set_color(p, Color::Red);
            arena.set_color(s, Color::Black);
            rotate(arena, root, p, dir)?;
            continue;
        }

        if let Slot::Node(d) = arena.child(s, opp) {
            if arena[d].color.is_red() {
                trace!(node = cur, nephew = d, "remove fix-up: red distant nephew");
                cases.distant_nephew += 1;
                let parent_color = arena[p].color;
                arena.set_color(s, parent_color);
                arena.set_color(p, Color::Black);
                arena.set_color(d, Color::Black);
                rotate(arena, root, p, dir)?;
                return Ok(());
            }
        }

        if let Slot::Node(c) = arena.child(s, dir) {
            if arena[c].color.is_red() {
                trace!(node = cur, nephew = c, "remove fix-up: red close nephew");
                cases.close_nephew += 1;
                arena.set_color(s, Color::Red);
                arena.set_color(c, Color::Black);
                rotate(arena, root, s, opp)?;
                continue;
            }
        }

        if arena[p].color.is_red() {
            trace!(node = cur, parent = p, "remove fix-up: red parent");
            cases.red_parent += 1;
            arena.set_color(s, Color::Red);
            arena.set_color(p, Color::Black);
            return Ok(());
        }

        trace!(node = cur, parent = p, "remove fix-up: propagate to parent");
        cases.propagated += 1;
        arena.set_color(s, Color::Red);
        cur = p;
    }
    Ok(())
}

/// Exchanges the tree positions and colours of `x` and `y`.
fn exchange<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    x: u32,
    y: u32,
) -> Result<(), TreeError> {
    if x == y {
        return Ok(());
    }

    let x_pos = arena.position(x)?;
    let y_pos = arena.position(y)?;
    let xp = arena.parent(x);
    let yp = arena.parent(y);
    let x_children = arena[x].children;
    let y_children = arena[y].children;

    for (i, dir) in [Direction::Left, Direction::Right].into_iter().enumerate() {
        let from_y = y_children[i];
        let from_x = x_children[i];
        arena.link(x, dir, if from_y == Slot::Node(x) { Slot::Node(y) } else { from_y });
        arena.link(y, dir, if from_x == Slot::Node(y) { Slot::Node(x) } else { from_x });
    }

    match (xp, x_pos) {
        (Some(p), _) if p == y => {}
        (Some(p), Some(pos)) => arena.link(p, pos, Slot::Node(y)),
        (None, _) => {
            arena[y].parent = None;
            *root = Some(y);
        }
        (Some(_), None) => return Err(TreeError::Structural("exchanged node has no position")),
    }
    match (yp, y_pos) {
        (Some(p), _) if p == x => {}
        (Some(p), Some(pos)) => arena.link(p, pos, Slot::Node(x)),
        (None, _) => {
            arena[x].parent = None;
            *root = Some(x);
        }
        (Some(_), None) => return Err(TreeError::Structural("exchanged node has no position")),
    }

    let x_color = arena[x].color;
    let y_color = arena[y].color;
    arena.set_color(x, y_color);
    arena.set_color(y, x_color);
    Ok(())
}
