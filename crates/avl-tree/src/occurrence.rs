//! Identity of stored occurrences.
//!
//! [`AvlTree::delete`](crate::AvlTree::delete) removes the occurrence that *is*
//! the given element, not merely one that compares equal to it. Shared
//! pointers and references carry an identity separate from their value; plain
//! values do not, so for them identity falls back to equality.

use std::rc::Rc;
use std::sync::Arc;

/// Decides whether two elements are the same stored occurrence.
pub trait Occurrence {
    fn is_same_occurrence(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Occurrence for Rc<T> {
    fn is_same_occurrence(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Occurrence for Arc<T> {
    fn is_same_occurrence(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Occurrence for &T {
    fn is_same_occurrence(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

macro_rules! value_occurrence {
    ($($t:ty),* $(,)?) => {
        $(
            impl Occurrence for $t {
                fn is_same_occurrence(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_occurrence!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
);
