use tracing::trace;

use super::rotate::rotate;
use crate::arena::Arena;
use crate::error::TreeError;
use crate::types::{Color, Direction, Slot};

/// Hangs the resident node `n` under `at` (or installs it as the root) and
/// restores the red-black invariants.
///
/// `n` must be unlinked with two sentinel children, and the target slot must
/// hold a sentinel; the tree controller checks both before calling.
pub(crate) fn place<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
    at: Option<(u32, Direction)>,
) -> Result<(), TreeError> {
    let Some((p, dir)) = at else {
        arena[n].parent = None;
        arena.set_color(n, Color::Black);
        *root = Some(n);
        return Ok(());
    };
    arena.link(p, dir, Slot::Node(n));
    arena.set_color(n, Color::Red);
    fix_red_red(arena, root, n)
}

fn fix_red_red<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
) -> Result<(), TreeError> {
    let mut cur = n;
    while let Some(p) = arena.parent(cur) {
        if !arena.is_red(Slot::Node(p)) {
            break;
        }
        // A red parent is never the root once the root is re-blackened below.
        let Some(g) = arena.parent(p) else {
            break;
        };
        let side = arena
            .position(p)?
            .ok_or(TreeError::Structural("parent with grandparent has no position"))?;
        let uncle = arena.child(g, side.opposite());

        if arena.is_red(uncle) {
            trace!(node = cur, parent = p, grandparent = g, "insert fix-up: red uncle");
            arena.set_color(p, Color::Black);
            if let Slot::Node(u) = uncle {
                arena.set_color(u, Color::Black);
            }
            arena.set_color(g, Color::Red);
            cur = g;
        } else {
            let mut top = p;
            if arena.position(cur)? != Some(side) {
                trace!(node = cur, parent = p, "insert fix-up: straighten zig-zag");
                rotate(arena, root, p, side)?;
                top = cur;
                cur = p;
            }
            trace!(node = cur, grandparent = g, "insert fix-up: rotate grandparent");
            rotate(arena, root, g, side.opposite())?;
            arena.set_color(top, Color::Black);
            arena.set_color(g, Color::Red);
            break;
        }
        blacken_root(arena, *root);
    }
    blacken_root(arena, *root);
    Ok(())
}

#[inline]
fn blacken_root<T>(arena: &mut Arena<T>, root: Option<u32>) {
    if let Some(r) = root {
        arena.set_color(r, Color::Black);
    }
}
