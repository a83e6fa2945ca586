//! Arena-backed AVL tree for possibly-duplicate, totally ordered elements.
//!
//! Supports ordered insertion, deletion of one exact stored occurrence,
//! nearest-match search (`get_not_smaller` / `get_not_larger`) and in-order
//! traversal in both directions from any node.
//!
//! Nodes are kept in a caller-invisible `Vec` and link to each other with
//! `Option<u32>` indices, including the parent back-link. Rotations relink
//! nodes rather than moving elements, so a [`NodeId`] keeps naming the same
//! element until that element is deleted.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait |
//! [`util`] | `first`, `last`, `next`, `prev`, `size`, `height` over any [`Node`] arena |
//! [`avl::balance`] | [`Balance`] tags and the rebalancing transition tables |
//! [`avl::util`] | rotations, insert / remove with rebalancing, validation |
//! [`avl::avl_tree`] | [`AvlTree`] |
//! [`avl::node_ref`] | [`NodeRef`] handle: element, next, previous |
//! [`occurrence`] | [`Occurrence`]: what counts as the same stored element |
//! [`error`] | [`InvariantError`] reported by [`AvlTree::assert_valid`] |

pub mod avl;
pub mod error;
pub mod occurrence;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTree, Balance, Iter, NodeId, NodeRef, Side};
pub use error::InvariantError;
pub use occurrence::Occurrence;
pub use types::Node;
