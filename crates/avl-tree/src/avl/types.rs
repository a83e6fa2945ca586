use crate::types::Node;

use super::balance::Balance;

/// One arena slot of an [`AvlTree`](super::AvlTree).
///
/// A live node holds `Some(element)`. A freed slot holds `None`, has no
/// links and waits on the tree's free list for reuse.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub element: Option<T>,
    pub balance: Balance,
    /// Bumped every time the slot is freed.
    pub generation: u32,
}

impl<T> AvlNode<T> {
    pub fn new(element: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            element: Some(element),
            balance: Balance::Balanced,
            generation: 0,
        }
    }

    pub fn is_live(&self) -> bool {
        self.element.is_some()
    }

    /// Refills a vacant slot with a fresh leaf.
    pub(crate) fn reset(&mut self, element: T) {
        self.p = None;
        self.l = None;
        self.r = None;
        self.element = Some(element);
        self.balance = Balance::Balanced;
    }

    /// Empties the slot and invalidates every [`NodeId`] pointing at it.
    pub(crate) fn vacate(&mut self) -> Option<T> {
        self.p = None;
        self.l = None;
        self.r = None;
        self.balance = Balance::Balanced;
        self.generation = self.generation.saturating_add(1);
        self.element.take()
    }

    /// A slot whose generation counter ran out is never handed out again.
    pub(crate) fn is_retired(&self) -> bool {
        self.generation == u32::MAX
    }
}

impl<T> Node for AvlNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Stable handle to one stored occurrence.
///
/// Rotations relink nodes instead of moving elements between them, so a
/// handle keeps naming the same element for as long as that element stays in
/// the tree. Once it is deleted the handle goes stale, and the generation
/// check keeps it stale even after its arena slot is reused. A slot freed
/// `u32::MAX` times is retired instead of reused, so generations never wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(self) -> u32 {
        self.index
    }
}
