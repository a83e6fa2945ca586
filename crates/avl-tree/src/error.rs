use thiserror::Error;

use crate::avl::Balance;

/// Structural defect found by [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).
///
/// None of these can be produced through the public API; they exist so tests
/// can pinpoint which invariant a broken mutation violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {node} has a parent")]
    RootHasParent { node: u32 },
    #[error("node {child} does not link back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("vacant slot {node} is linked into the tree")]
    VacantNodeLinked { node: u32 },
    #[error("node {node} is out of balance: subtree heights differ by {diff}")]
    Unbalanced { node: u32, diff: i64 },
    #[error("node {node} is tagged {recorded:?} but its subtree heights differ by {diff}")]
    BalanceMismatch { node: u32, recorded: Balance, diff: i64 },
    #[error("node {node} is smaller than its in-order predecessor")]
    OrderViolated { node: u32 },
    #[error("tree counts {counted} elements but {linked} nodes are linked")]
    LengthMismatch { counted: usize, linked: usize },
}
