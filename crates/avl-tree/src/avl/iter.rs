use std::iter::FusedIterator;

use crate::util::{next, prev};

use super::avl_tree::AvlTree;
use super::util::element;

/// In-order iterator over the elements of an [`AvlTree`].
pub struct Iter<'a, T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    tree: &'a AvlTree<T, C>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T, C> Iter<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<T, C>, front: Option<u32>, back: Option<u32>, remaining: usize) -> Self {
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        let tree: &'a AvlTree<T, C> = self.tree;
        let arena = tree.arena();
        self.remaining -= 1;
        self.front = next(arena, i);
        Some(element(arena, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        let tree: &'a AvlTree<T, C> = self.tree;
        let arena = tree.arena();
        self.remaining -= 1;
        self.back = prev(arena, i);
        Some(element(arena, i))
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> where C: Fn(&T, &T) -> i32 {}

impl<T, C> FusedIterator for Iter<'_, T, C> where C: Fn(&T, &T) -> i32 {}

impl<T, C> Clone for Iter<'_, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}
