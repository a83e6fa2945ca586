//! Node link trait.
//!
//! Every "pointer" between nodes is an `Option<u32>` index into a
//! [`Vec`]-backed arena owned by the tree. Child links own their subtree;
//! the parent link is a plain back-reference and never owns anything.

/// Parent / child links (`p`, `l`, `r`) of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

