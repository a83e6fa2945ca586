//! Structural AVL operations over an arena of [`AvlNode`]s.
//!
//! Every function works on indices and returns the (possibly new) root; the
//! owning [`AvlTree`](super::AvlTree) stores it.

use std::fmt::Debug;

use log::trace;

use crate::error::InvariantError;
use crate::print::{print_tree, PrintChild};
use crate::util::{first, get_l, get_p, get_r, last, next, replace_child, set_l, set_p, set_r};

use super::balance::{double_rotation_balances, rotation, step, Balance, Event, Rotation, Side, Step};
use super::types::AvlNode;

#[inline]
fn balance<T>(arena: &[AvlNode<T>], i: u32) -> Balance {
    arena[i as usize].balance
}

#[inline]
fn set_balance<T>(arena: &mut [AvlNode<T>], i: u32, v: Balance) {
    arena[i as usize].balance = v;
}

#[inline]
fn child<T>(arena: &[AvlNode<T>], i: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, i),
        Side::Right => get_r(arena, i),
    }
}

#[inline]
fn set_child<T>(arena: &mut [AvlNode<T>], i: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, i, v),
        Side::Right => set_r(arena, i, v),
    }
}

#[inline]
fn side_of<T>(arena: &[AvlNode<T>], parent: u32, node: u32) -> Side {
    if get_l(arena, parent) == Some(node) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Element of a node reachable from the root.
#[inline]
pub(crate) fn element<T>(arena: &[AvlNode<T>], i: u32) -> &T {
    arena[i as usize]
        .element
        .as_ref()
        .expect("linked node holds an element")
}

/// Rotation rooted at `n` lifting its left child into `n`'s position.
///
/// Nodes are relinked, elements never move between nodes. Balance tags are
/// left untouched; the caller sets them. Returns the lifted node.
pub fn rotate_clockwise<T>(arena: &mut [AvlNode<T>], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("clockwise rotation needs a left child");
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);
    trace!("rotate clockwise at {n}, lifting {nl}");

    set_p(arena, nl, p);
    replace_child(arena, p, n, Some(nl));
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    nl
}

/// Rotation rooted at `n` lifting its right child into `n`'s position.
///
/// Mirror of [`rotate_clockwise`].
pub fn rotate_counter_clockwise<T>(arena: &mut [AvlNode<T>], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("counter-clockwise rotation needs a right child");
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);
    trace!("rotate counter-clockwise at {n}, lifting {nr}");

    set_p(arena, nr, p);
    replace_child(arena, p, n, Some(nr));
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    nr
}

/// Lifts the child on `side` of `n`.
fn lift<T>(arena: &mut [AvlNode<T>], n: u32, side: Side) -> u32 {
    match side {
        Side::Left => rotate_clockwise(arena, n),
        Side::Right => rotate_counter_clockwise(arena, n),
    }
}

/// Applies `event` to `n`. Returns the node now at `n`'s position and whether
/// the height of that subtree changed.
fn rebalance<T>(arena: &mut [AvlNode<T>], n: u32, event: Event) -> (u32, bool) {
    match step(balance(arena, n), event) {
        Step::Retag { balance, propagate } => {
            set_balance(arena, n, balance);
            (n, propagate)
        }
        Step::Rotate { heavy } => restructure(arena, n, heavy, event),
    }
}

fn restructure<T>(arena: &mut [AvlNode<T>], n: u32, heavy: Side, event: Event) -> (u32, bool) {
    let c = child(arena, n, heavy).expect("heavy side has a child");

    match rotation(heavy, balance(arena, c), event) {
        Rotation::Single {
            lifted,
            lowered,
            propagate,
        } => {
            let top = lift(arena, n, heavy);
            set_balance(arena, top, lifted);
            set_balance(arena, n, lowered);
            (top, propagate)
        }
        Rotation::Double { propagate } => {
            let inner = heavy.opposite();
            let g = child(arena, c, inner).expect("inner-leaning child has an inner child");
            let g_balance = balance(arena, g);
            lift(arena, c, inner);
            let top = lift(arena, n, heavy);

            let (left, right) = match heavy {
                Side::Left => (c, n),
                Side::Right => (n, c),
            };
            let (left_balance, right_balance) = double_rotation_balances(g_balance);
            set_balance(arena, left, left_balance);
            set_balance(arena, right, right_balance);
            set_balance(arena, top, Balance::Balanced);
            (top, propagate)
        }
    }
}

/// Walks from `n` towards the root while subtree heights keep changing.
fn rebalance_upwards<T>(arena: &mut [AvlNode<T>], root: u32, mut n: u32, mut event: Event) -> u32 {
    loop {
        let (top, propagate) = rebalance(arena, n, event);
        let Some(p) = get_p(arena, top) else {
            return top;
        };
        if !propagate {
            return root;
        }
        let side = side_of(arena, p, top);
        event = match event {
            Event::Grown(_) => Event::Grown(side),
            Event::Shrunk(_) => Event::Shrunk(side),
        };
        n = p;
    }
}

/// Attaches the detached node `n` as the `side` child of `parent` and
/// rebalances. Returns the new root.
pub fn insert_at<T>(arena: &mut [AvlNode<T>], root: u32, n: u32, parent: u32, side: Side) -> u32 {
    set_child(arena, parent, side, Some(n));
    set_p(arena, n, Some(parent));
    rebalance_upwards(arena, root, parent, Event::Grown(side))
}

/// Inserts the detached node `n` below `root`. Returns the new root.
///
/// Elements comparing equal to a stored one go to its right, so equal
/// elements are traversed in insertion order.
pub fn insert<T, C>(arena: &mut [AvlNode<T>], root: Option<u32>, n: u32, comparator: &C) -> u32
where
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return n;
    };

    let mut curr = root;
    loop {
        let side = if comparator(element(arena, n), element(arena, curr)) < 0 {
            Side::Left
        } else {
            Side::Right
        };
        match child(arena, curr, side) {
            Some(c) => curr = c,
            None => return insert_at(arena, root, n, curr, side),
        }
    }
}

/// Unlinks `n` from the tree rooted at `root`. Returns the new root, `None`
/// once the last node is gone.
///
/// A node with two children is replaced by its in-order predecessor, which is
/// relinked into `n`'s position. `n`'s links are cleared; its slot is left to
/// the caller.
pub fn remove<T>(arena: &mut [AvlNode<T>], root: u32, n: u32) -> Option<u32> {
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    trace!("remove node {n}");

    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    let (root, from, side) = match (l, r) {
        (Some(l), Some(r)) => {
            let v = last(arena, Some(l)).expect("left subtree is not empty");
            let (from, side) = if v == l {
                (v, Side::Left)
            } else {
                let vp = get_p(arena, v).expect("predecessor below its subtree root has a parent");
                let vl = get_l(arena, v);
                set_r(arena, vp, vl);
                if let Some(vl) = vl {
                    set_p(arena, vl, Some(vp));
                }
                set_l(arena, v, Some(l));
                set_p(arena, l, Some(v));
                (vp, Side::Right)
            };

            set_r(arena, v, Some(r));
            set_p(arena, r, Some(v));
            set_p(arena, v, p);
            replace_child(arena, p, n, Some(v));
            set_balance(arena, v, balance(arena, n));

            (if p.is_none() { v } else { root }, from, side)
        }
        _ => {
            let c = l.or(r);
            if let Some(c) = c {
                set_p(arena, c, p);
            }
            let Some(p) = p else {
                return c;
            };
            let side = side_of(arena, p, n);
            replace_child(arena, Some(p), n, c);
            (root, p, side)
        }
    };

    Some(rebalance_upwards(arena, root, from, Event::Shrunk(side)))
}

/// The first node (in traversal order) not smaller than `reference`.
pub fn find_not_smaller<T, C>(arena: &[AvlNode<T>], root: Option<u32>, reference: &T, comparator: &C) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        if comparator(element(arena, i), reference) < 0 {
            curr = get_r(arena, i);
        } else {
            candidate = Some(i);
            curr = get_l(arena, i);
        }
    }
    candidate
}

/// The last node (in traversal order) not larger than `reference`.
pub fn find_not_larger<T, C>(arena: &[AvlNode<T>], root: Option<u32>, reference: &T, comparator: &C) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        if comparator(element(arena, i), reference) > 0 {
            curr = get_l(arena, i);
        } else {
            candidate = Some(i);
            curr = get_r(arena, i);
        }
    }
    candidate
}

fn validate_subtree<T>(arena: &[AvlNode<T>], node: u32) -> Result<usize, InvariantError> {
    if !arena[node as usize].is_live() {
        return Err(InvariantError::VacantNodeLinked { node });
    }

    let mut heights = [0usize; 2];
    for (slot, link) in [get_l(arena, node), get_r(arena, node)].into_iter().enumerate() {
        if let Some(c) = link {
            if get_p(arena, c) != Some(node) {
                return Err(InvariantError::BrokenParentLink { parent: node, child: c });
            }
            heights[slot] = validate_subtree(arena, c)?;
        }
    }

    let diff = heights[0] as i64 - heights[1] as i64;
    if diff.abs() > 1 {
        return Err(InvariantError::Unbalanced { node, diff });
    }
    let recorded = balance(arena, node);
    if recorded != Balance::from_height_diff(diff) {
        return Err(InvariantError::BalanceMismatch { node, recorded, diff });
    }

    Ok(1 + heights[0].max(heights[1]))
}

/// Checks links, balance tags, the AVL height bound and element order.
pub fn assert_avl_tree<T, C>(arena: &[AvlNode<T>], root: Option<u32>, comparator: &C) -> Result<(), InvariantError>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent { node: root });
    }

    validate_subtree(arena, root)?;

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(element(arena, prev), element(arena, i)) > 0 {
                return Err(InvariantError::OrderViolated { node: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug dump of the subtree under `node`.
pub fn print<T: Debug>(arena: &[AvlNode<T>], node: Option<u32>, tab: &str) -> String {
    let Some(i) = node else {
        return "∅".to_string();
    };

    let n = &arena[i as usize];
    let left = |tab: &str| format!("L {}", print(arena, n.l, tab));
    let right = |tab: &str| format!("R {}", print(arena, n.r, tab));
    let children: [Option<&PrintChild<'_>>; 2] = [
        n.l.map(|_| &left as &PrintChild<'_>),
        n.r.map(|_| &right as &PrintChild<'_>),
    ];

    format!(
        "Node[{i}] [{:?}] {:?}{}",
        n.balance,
        element(arena, i),
        print_tree(tab, &children)
    )
}
