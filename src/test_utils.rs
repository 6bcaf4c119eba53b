use std::{fmt::Debug, ops::Bound};

use proptest::prelude::*;

use crate::{
    interval::Interval,
    node::Node,
    order::{cmp_upper, max_upper, Comparator},
    IntervalTree,
};

const RANGE_MAX: i32 = 20;

/// Generate arbitrary endpoint values from [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_point() -> impl Strategy<Value = i32> {
    0..RANGE_MAX
}

/// Generate an arbitrary bound (of any kind) with a value from
/// [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_bound() -> impl Strategy<Value = Bound<i32>> {
    prop_oneof![
        4 => arbitrary_point().prop_map(Bound::Included),
        4 => arbitrary_point().prop_map(Bound::Excluded),
        1 => Just(Bound::Unbounded),
    ]
}

/// Generate arbitrary, always valid, intervals with bounds from
/// [0..[`RANGE_MAX`]).
///
/// The small value domain encourages generated intervals to share endpoints,
/// overlap, and be duplicated.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<i32>> {
    (
        arbitrary_point(),
        arbitrary_point(),
        any::<bool>(),
        any::<bool>(),
        0..10_u8,
    )
        .prop_map(|(a, b, start_inc, end_inc, unbounded)| {
            let (lo, hi) = (a.min(b), a.max(b));

            let start = match (unbounded, start_inc || lo == hi) {
                (0, _) => Bound::Unbounded,
                (_, true) => Bound::Included(lo),
                (_, false) => Bound::Excluded(lo),
            };
            let end = match (unbounded, end_inc || lo == hi) {
                (1, _) => Bound::Unbounded,
                (_, true) => Bound::Included(hi),
                (_, false) => Bound::Excluded(hi),
            };

            Interval::new(start, end)
        })
}

/// Linear-feedback shift register based PRNG.
///
/// Generates 65,535 unique values before cycling.
#[derive(Debug, Clone)]
pub(crate) struct Lfsr(u16);

impl Default for Lfsr {
    fn default() -> Self {
        Self(42)
    }
}

impl Lfsr {
    pub(crate) fn next_value(&mut self) -> u16 {
        let lsb = self.0 & 1;
        self.0 >>= 1;
        if lsb == 1 {
            self.0 ^= 0xD008;
        }
        assert_ne!(self.0, 42, "LFSR rollover");
        self.0
    }

    /// Return a valid closed [`Interval`] with random bounds.
    pub(crate) fn next_interval(&mut self) -> Interval<u16> {
        let a = self.next_value();
        let b = self.next_value();
        Interval::closed(a.min(b), a.max(b))
    }
}

/// The number of levels in the tree rooted at `n`, recomputed from scratch.
fn levels<T>(n: Option<&Node<T>>) -> usize {
    n.map(|v| 1 + levels(v.left()).max(levels(v.right())))
        .unwrap_or_default()
}

/// Assert the BST, AVL and interval tree properties of tree nodes, ensuring
/// the tree is well-formed.
pub(crate) fn validate_tree_structure<T, C>(t: &IntervalTree<T, C>)
where
    T: Debug + Clone,
    C: Comparator<T>,
{
    let cmp = t.comparator();
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    let mut n_intervals = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        n_intervals += n.len();

        // Invariant 1: the left child always contains an interval strictly
        // less than this node.
        assert!(n
            .left()
            .map(|v| v.interval().cmp_by(n.interval(), cmp).is_lt())
            .unwrap_or(true));

        // Invariant 2: the right child always contains an interval strictly
        // greater than this node.
        assert!(n
            .right()
            .map(|v| v.interval().cmp_by(n.interval(), cmp).is_gt())
            .unwrap_or(true));

        // Invariant 3: every interval chained at a node is equivalent to the
        // node key.
        for v in n.intervals() {
            assert!(v.cmp_by(n.interval(), cmp).is_eq());
        }

        // Invariant 4: the height of this node is always +1 of the
        // maximum child height, and matches the recomputed level count.
        let left_height = n.left().map(|v| v.height());
        let right_height = n.right().map(|v| v.height());
        let want_height = left_height
            .max(right_height)
            .map(|v| v + 1) // This node is +1 of the child, if any
            .unwrap_or_default(); // Otherwise it is at height 0

        assert_eq!(
            n.height(),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.interval(),
            want_height,
            n.height(),
        );
        assert_eq!(n.height() as usize + 1, levels(Some(n)));

        // Invariant 5: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (levels(n.left()) as i64 - levels(n.right()) as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={:?}", n.interval());

        // Invariant 6: the subtree max of "n" must be equal to the largest end
        // bound of any interval in the subtree, recomputed independently.
        let mut want_max = n.interval().end();
        let mut sub = vec![n];
        while let Some(v) = sub.pop() {
            sub.extend(v.left().iter().chain(v.right().iter()));
            want_max = max_upper(want_max, v.interval().end(), cmp);
        }
        assert!(
            cmp_upper(want_max, n.subtree_max(), cmp).is_eq(),
            "subtree max {:?} != recomputed {:?}",
            n.subtree_max(),
            want_max,
        );
    }

    assert_eq!(n_intervals, t.len());
}
