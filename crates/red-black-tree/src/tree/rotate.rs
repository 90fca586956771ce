use tracing::trace;

use crate::arena::Arena;
use crate::error::TreeError;
use crate::types::{Direction, Slot};

/// Rotates the subtree rooted at `n` in direction `dir`.
///
/// The pivot is `n`'s child opposite `dir`. It takes `n`'s place (becoming the
/// root when `n` had no parent), `n` becomes the pivot's `dir` child, and the
/// pivot's former inner child moves across to `n`. A sentinel pivot makes this
/// a no-op. Returns the new subtree root.
pub(crate) fn rotate<T>(
    arena: &mut Arena<T>,
    root: &mut Option<u32>,
    n: u32,
    dir: Direction,
) -> Result<u32, TreeError> {
    let opp = dir.opposite();
    let Slot::Node(pivot) = arena.child(n, opp) else {
        return Ok(n);
    };
    let position = arena.position(n)?;
    let parent = arena.parent(n);
    trace!(node = n, pivot, ?dir, "rotate");

    let inner = arena.child(pivot, dir);
    arena.link(n, opp, inner);

    arena[pivot].parent = parent;
    match (parent, position) {
        (Some(p), Some(pos)) => arena[p][pos] = Slot::Node(pivot),
        (None, _) => *root = Some(pivot),
        (Some(_), None) => return Err(TreeError::Structural("rotated node lost its position")),
    }

    arena.link(pivot, dir, Slot::Node(n));
    Ok(pivot)
}
