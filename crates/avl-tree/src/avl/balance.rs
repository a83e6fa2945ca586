//! Balance tags and the rebalancing transition tables.
//!
//! Rebalancing is driven by two tables:
//!
//! - [`step`]: `(balance, event) -> retag | rotate`, applied at every node on
//!   the walk from the mutated leaf towards the root.
//! - [`rotation`]: `(heavy child lean, event kind) -> single | double`, applied
//!   when a node becomes two levels taller on one side.
//!
//! Both are plain `match` tables so the compiler checks they are exhaustive.

/// Sign of `height(left) - height(right)` for one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Balance {
    LeftHigh,
    #[default]
    Balanced,
    RightHigh,
}

impl Balance {
    /// The tag of a node whose `side` subtree is one level taller.
    pub fn leaning(side: Side) -> Self {
        match side {
            Side::Left => Balance::LeftHigh,
            Side::Right => Balance::RightHigh,
        }
    }

    /// The taller side, if any.
    pub fn lean(self) -> Option<Side> {
        match self {
            Balance::LeftHigh => Some(Side::Left),
            Balance::Balanced => None,
            Balance::RightHigh => Some(Side::Right),
        }
    }

    /// Tag matching a measured height difference (`left - right`).
    pub fn from_height_diff(diff: i64) -> Self {
        match diff.signum() {
            1 => Balance::LeftHigh,
            -1 => Balance::RightHigh,
            _ => Balance::Balanced,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Height change reported by a child subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// The subtree on this side became one level taller (insertion).
    Grown(Side),
    /// The subtree on this side became one level shorter (deletion).
    Shrunk(Side),
}

impl Event {
    fn is_shrink(self) -> bool {
        matches!(self, Event::Shrunk(_))
    }
}

/// What a node does with an [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Retag the node. `propagate` reports whether the subtree height
    /// changed, i.e. whether the parent must handle an event too.
    Retag { balance: Balance, propagate: bool },
    /// The `heavy` side is now two levels taller than the other.
    Rotate { heavy: Side },
}

pub(crate) fn step(balance: Balance, event: Event) -> Step {
    use Balance::{Balanced, LeftHigh, RightHigh};
    use Event::{Grown, Shrunk};
    use Side::{Left, Right};

    match (balance, event) {
        (RightHigh, Grown(Left)) => Step::Retag { balance: Balanced, propagate: false },
        (Balanced, Grown(Left)) => Step::Retag { balance: LeftHigh, propagate: true },
        (LeftHigh, Grown(Left)) => Step::Rotate { heavy: Left },

        (LeftHigh, Grown(Right)) => Step::Retag { balance: Balanced, propagate: false },
        (Balanced, Grown(Right)) => Step::Retag { balance: RightHigh, propagate: true },
        (RightHigh, Grown(Right)) => Step::Rotate { heavy: Right },

        (LeftHigh, Shrunk(Left)) => Step::Retag { balance: Balanced, propagate: true },
        (Balanced, Shrunk(Left)) => Step::Retag { balance: RightHigh, propagate: false },
        (RightHigh, Shrunk(Left)) => Step::Rotate { heavy: Right },

        (RightHigh, Shrunk(Right)) => Step::Retag { balance: Balanced, propagate: true },
        (Balanced, Shrunk(Right)) => Step::Retag { balance: LeftHigh, propagate: false },
        (LeftHigh, Shrunk(Right)) => Step::Rotate { heavy: Left },
    }
}

/// Lean of the heavy child, relative to the heavy side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChildLean {
    /// Leans the same way as the heavy side.
    Outer,
    Even,
    /// Leans back towards the node's other side.
    Inner,
}

/// Restructuring chosen for a node that must rotate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    /// Lift the heavy child into the node's position. `lifted` and `lowered`
    /// are the new tags of the child and of the node.
    Single { lifted: Balance, lowered: Balance, propagate: bool },
    /// Lift the heavy child's inner grandchild; the new tags come from
    /// [`double_rotation_balances`].
    Double { propagate: bool },
}

pub(crate) fn rotation(heavy: Side, child: Balance, event: Event) -> Rotation {
    let lean = match child.lean() {
        None => ChildLean::Even,
        Some(side) if side == heavy => ChildLean::Outer,
        Some(_) => ChildLean::Inner,
    };

    match (lean, event.is_shrink()) {
        (ChildLean::Outer, shrink) => Rotation::Single {
            lifted: Balance::Balanced,
            lowered: Balance::Balanced,
            propagate: shrink,
        },
        // Only reachable on deletion: the sibling had equal subtrees, so the
        // rotated subtree keeps its height.
        (ChildLean::Even, _) => Rotation::Single {
            lifted: Balance::leaning(heavy.opposite()),
            lowered: Balance::leaning(heavy),
            propagate: false,
        },
        (ChildLean::Inner, shrink) => Rotation::Double { propagate: shrink },
    }
}

/// New tags `(left child, right child)` of the lifted grandchild after a
/// double rotation, keyed on the grandchild's tag before the rotation. The
/// grandchild itself always ends up [`Balance::Balanced`].
pub(crate) fn double_rotation_balances(grandchild: Balance) -> (Balance, Balance) {
    match grandchild {
        Balance::LeftHigh => (Balance::Balanced, Balance::RightHigh),
        Balance::Balanced => (Balance::Balanced, Balance::Balanced),
        Balance::RightHigh => (Balance::LeftHigh, Balance::Balanced),
    }
}
