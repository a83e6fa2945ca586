use std::fmt::{self, Debug};

use crate::util::{first, get_l, get_p, get_r, last, next, prev, size};

use super::avl_tree::AvlTree;
use super::balance::Balance;
use super::types::NodeId;
use super::util::element;

/// Borrowed view of one node of an [`AvlTree`].
///
/// A `NodeRef` cannot outlive a mutation of its tree. Keep its [`id`]
/// instead and resolve it again with [`AvlTree::node`].
///
/// [`id`]: NodeRef::id
pub struct NodeRef<'a, T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    tree: &'a AvlTree<T, C>,
    index: u32,
}

impl<T, C> Clone for NodeRef<'_, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for NodeRef<'_, T, C> where C: Fn(&T, &T) -> i32 {}

impl<'a, T, C> NodeRef<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<T, C>, index: u32) -> Self {
        Self { tree, index }
    }

    fn at(&self, index: Option<u32>) -> Option<Self> {
        index.map(|i| Self::new(self.tree, i))
    }

    pub fn id(&self) -> NodeId {
        self.tree.id_of(self.index)
    }

    pub fn element(&self) -> &'a T {
        let tree: &'a AvlTree<T, C> = self.tree;
        element(tree.arena(), self.index)
    }

    pub fn balance(&self) -> Balance {
        self.tree.arena()[self.index as usize].balance
    }

    /// Node holding the next larger or equal element.
    pub fn next(&self) -> Option<Self> {
        self.at(next(self.tree.arena(), self.index))
    }

    /// Node holding the next smaller or equal element.
    pub fn previous(&self) -> Option<Self> {
        self.at(prev(self.tree.arena(), self.index))
    }

    pub fn parent(&self) -> Option<Self> {
        self.at(get_p(self.tree.arena(), self.index))
    }

    pub fn left(&self) -> Option<Self> {
        self.at(get_l(self.tree.arena(), self.index))
    }

    pub fn right(&self) -> Option<Self> {
        self.at(get_r(self.tree.arena(), self.index))
    }

    /// Smallest node of the subtree rooted here.
    pub fn smallest(&self) -> Self {
        self.at(first(self.tree.arena(), Some(self.index))).unwrap_or(*self)
    }

    /// Largest node of the subtree rooted here.
    pub fn largest(&self) -> Self {
        self.at(last(self.tree.arena(), Some(self.index))).unwrap_or(*self)
    }

    /// Number of nodes in the subtree rooted here. O(n).
    pub fn size(&self) -> usize {
        size(self.tree.arena(), Some(self.index))
    }
}

impl<T, C> PartialEq for NodeRef<'_, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl<T, C> Eq for NodeRef<'_, T, C> where C: Fn(&T, &T) -> i32 {}

impl<T, C> Debug for NodeRef<'_, T, C>
where
    T: Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("element", self.element())
            .field("balance", &self.balance())
            .finish()
    }
}
