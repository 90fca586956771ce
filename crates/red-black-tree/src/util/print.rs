use std::fmt::Debug;

use crate::arena::Arena;
use crate::types::{Direction, Slot};

/// Debug printer for the subtree in `slot`. Sentinels render as `∅`.
pub(crate) fn print<T: Debug>(arena: &Arena<T>, slot: Slot<u32>, tab: &str) -> String {
    match slot {
        Slot::Sentinel => "∅".to_string(),
        Slot::Node(i) => {
            let n = &arena[i];
            let left = print(arena, arena.child(i, Direction::Left), &format!("{tab}  "));
            let right = print(arena, arena.child(i, Direction::Right), &format!("{tab}  "));
            format!(
                "Node[{i}] {} {:?}\n{tab}L={left}\n{tab}R={right}",
                n.color, n.data
            )
        }
    }
}
