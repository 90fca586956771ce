//! Generic red-black tree with sentinel child slots.
//!
//! The tree keeps caller-supplied data in sorted order under a three-way
//! comparator and stays balanced through every insertion and deletion.
//! It is meant as a building block for ordered structures such as priority
//! queues or key-ordered schedulers, where [`RbTree::shift`] pops the minimum.
//!
//! Instead of heap nodes pointing at each other, all nodes live in an arena
//! owned by the tree and refer to each other by `u32` index. Every resident
//! node has exactly two child [`Slot`]s, each either a [`Slot::Sentinel`]
//! (always black, no data) or another node, so the balancing code never
//! deals with an absent child.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Color`], [`Direction`], [`Slot`], [`NodeId`] |
//! | [`error`] | [`TreeError`], [`InvariantViolation`] |
//! | [`node`] | detached [`Node`], borrowed [`NodeRef`], relationship queries |
//! | `tree` | [`RbTree`]: rotation, insertion and deletion engines, traversal |
//! | `arena` | generational node storage |
//! | `util` | in-order navigation, invariant checker, debug printer |
//!
//! # Example
//!
//! ```
//! use red_black_tree::{Direction, Node, RbTree, TreeError};
//!
//! let mut tree = RbTree::new();
//! let ten = tree.insert(Node::new(10)).unwrap();
//! tree.insert(Node::new(5)).unwrap();
//!
//! // Explicit placement is checked against the current shape.
//! let err = tree.insert_at(Node::new(1), Some(ten), Some(Direction::Left));
//! assert_eq!(err, Err(TreeError::SlotOccupied(Direction::Left)));
//!
//! let mut drained = Vec::new();
//! while let Some(node) = tree.shift().unwrap() {
//!     drained.push(node.into_data());
//! }
//! assert_eq!(drained, vec![5, 10]);
//! assert!(tree.is_empty());
//! ```

mod arena;
pub mod error;
pub mod node;
mod tree;
pub mod types;
mod util;

pub use error::{InvariantViolation, TreeError};
pub use node::{Node, NodeRef};
pub use tree::{Iter, RbTree};
pub use types::{Color, Direction, NodeId, Slot};
