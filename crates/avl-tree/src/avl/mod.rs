//! AVL tree over a `Vec` arena.

pub mod avl_tree;
pub mod balance;
pub mod iter;
pub mod node_ref;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use balance::{Balance, Side};
pub use iter::Iter;
pub use node_ref::NodeRef;
pub use types::{AvlNode, NodeId};
pub use util::{assert_avl_tree, insert, print, remove, rotate_clockwise, rotate_counter_clockwise};
