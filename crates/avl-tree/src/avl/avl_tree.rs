use std::fmt::{self, Debug};

use log::debug;

use crate::error::InvariantError;
use crate::occurrence::Occurrence;
use crate::print::{print_tree, PrintChild};
use crate::util::{first, height, last, next, size};

use super::iter::Iter;
use super::node_ref::NodeRef;
use super::types::{AvlNode, NodeId};
use super::util::{assert_avl_tree, element, find_not_larger, find_not_smaller, insert, print, remove};

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Sorted container allowing duplicate elements.
///
/// Nodes live in a `Vec` arena and link to each other by index, parent links
/// included. Equal elements are kept in insertion order. Every insertion
/// returns a [`NodeId`] naming that exact occurrence; it stays valid across
/// any mutation of other elements and goes stale once its own element is
/// removed.
///
/// The tree does no internal synchronization. Share it across threads only
/// behind an external lock.
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for v in [5, 1, 5, 3] {
///     tree.insert(v);
/// }
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 5]);
///
/// let node = tree.get_not_smaller(&4).unwrap();
/// assert_eq!(*node.element(), 5);
/// assert_eq!(node.previous().map(|n| *n.element()), Some(3));
/// assert!(tree.delete(&3));
/// assert_eq!(tree.size(), 3);
/// ```
#[derive(Clone)]
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    arena: Vec<AvlNode<T>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Tree ordered by `comparator`, which must be a total order: negative
    /// for less, zero for equal, positive for greater.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) fn arena(&self) -> &[AvlNode<T>] {
        &self.arena
    }

    pub(crate) fn id_of(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.arena[index as usize].generation,
        }
    }

    fn resolve(&self, id: NodeId) -> Option<u32> {
        let node = self.arena.get(id.index as usize)?;
        (node.generation == id.generation && node.is_live()).then_some(id.index)
    }

    fn handle(&self, index: u32) -> NodeRef<'_, T, C> {
        NodeRef::new(self, index)
    }

    fn alloc(&mut self, element: T) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize].reset(element);
                i
            }
            None => {
                self.arena.push(AvlNode::new(element));
                (self.arena.len() - 1) as u32
            }
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts `element`; `None` is ignored.
    ///
    /// Duplicates are allowed and land after the equal elements already
    /// stored. Returns the handle of the new occurrence.
    pub fn insert(&mut self, element: impl Into<Option<T>>) -> Option<NodeId> {
        let element = element.into()?;
        let n = self.alloc(element);
        self.root = Some(insert(&mut self.arena, self.root, n, &self.comparator));
        self.len += 1;
        Some(self.id_of(n))
    }

    /// Deletes the stored occurrence that is `element` itself.
    ///
    /// Candidates are scanned from the first element not smaller than
    /// `element` and the scan stops at the first larger one. Among them only
    /// the occurrence identified by [`Occurrence::is_same_occurrence`] is
    /// removed, so of several equal `Rc`s exactly the given one goes. `None` is
    /// ignored. Returns whether an element was removed.
    pub fn delete<'e>(&mut self, element: impl Into<Option<&'e T>>) -> bool
    where
        T: Occurrence + 'e,
    {
        let Some(element) = element.into() else {
            return false;
        };

        let mut curr = find_not_smaller(&self.arena, self.root, element, &self.comparator);
        while let Some(i) = curr {
            let stored = super::util::element(&self.arena, i);
            if stored.is_same_occurrence(element) {
                return self.remove_index(i).is_some();
            }
            if (self.comparator)(stored, element) > 0 {
                return false;
            }
            curr = next(&self.arena, i);
        }
        false
    }

    /// Removes the occurrence named by `id` and returns it. Stale handles
    /// return `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let i = self.resolve(id)?;
        self.remove_index(i)
    }

    fn remove_index(&mut self, i: u32) -> Option<T> {
        let root = self.root?;
        self.root = remove(&mut self.arena, root, i);
        self.len -= 1;
        let element = self.arena[i as usize].vacate();
        if !self.arena[i as usize].is_retired() {
            self.free.push(i);
        }
        element
    }

    /// Drops every element. Handles obtained before the call go stale.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.len);
        self.free.clear();
        for (i, node) in self.arena.iter_mut().enumerate() {
            if node.is_live() {
                node.vacate();
            }
            if !node.is_retired() {
                self.free.push(i as u32);
            }
        }
        self.root = None;
        self.len = 0;
    }

    pub fn get_smallest(&self) -> Option<NodeRef<'_, T, C>> {
        first(&self.arena, self.root).map(|i| self.handle(i))
    }

    pub fn get_largest(&self) -> Option<NodeRef<'_, T, C>> {
        last(&self.arena, self.root).map(|i| self.handle(i))
    }

    /// Smallest element not smaller than `reference`; the first of several
    /// equal ones.
    pub fn get_not_smaller(&self, reference: &T) -> Option<NodeRef<'_, T, C>> {
        find_not_smaller(&self.arena, self.root, reference, &self.comparator).map(|i| self.handle(i))
    }

    /// Largest element not larger than `reference`; the last of several
    /// equal ones.
    pub fn get_not_larger(&self, reference: &T) -> Option<NodeRef<'_, T, C>> {
        find_not_larger(&self.arena, self.root, reference, &self.comparator).map(|i| self.handle(i))
    }

    /// Resolves a handle, `None` if its element has been removed.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, C>> {
        self.resolve(id).map(|i| self.handle(i))
    }

    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).map(|i| element(&self.arena, i))
    }

    pub fn root(&self) -> Option<NodeRef<'_, T, C>> {
        self.root.map(|i| self.handle(i))
    }

    /// Counts the linked nodes. O(n); [`len`](Self::len) is the O(1) counter.
    pub fn size(&self) -> usize {
        size(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self, first(&self.arena, self.root), last(&self.arena, self.root), self.len)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let linked = self.size();
        if linked != self.len {
            return Err(InvariantError::LengthMismatch {
                counted: self.len,
                linked,
            });
        }
        Ok(())
    }
}

impl<T, C> Debug for AvlTree<T, C>
where
    T: Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_none() {
            return f.write_str("AvlTree ∅");
        }
        let root = |tab: &str| print(&self.arena, self.root, tab);
        let children: [Option<&PrintChild<'_>>; 1] = [Some(&root)];
        write!(f, "AvlTree{}", print_tree("", &children))
    }
}

impl<T> FromIterator<T> for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
