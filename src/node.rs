use std::{
    cmp::Ordering,
    iter::{Chain, Once},
    ops::Bound,
};

use crate::{
    interval::Interval,
    order::{cmp_upper, max_upper, Comparator},
};

/// The [`Interval`] references held by a single [`Node`], in insertion order.
pub(crate) type NodeIntervals<'a, T> =
    Chain<Once<&'a Interval<T>>, std::slice::Iter<'a, Interval<T>>>;

/// The owned [`Interval`] instances held by a single [`Node`], in insertion
/// order.
pub(crate) type OwnedNodeIntervals<T> = Chain<Once<Interval<T>>, std::vec::IntoIter<Interval<T>>>;

#[derive(Debug)]
pub(super) enum RemoveResult<T> {
    /// The interval was removed from the tree.
    Removed(Interval<T>),

    /// The direct descendent node contains the interval, but contains no
    /// children and must be unlinked by the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum end bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: Bound<T>,

    /// The interval this node is keyed by.
    interval: Interval<T>,

    /// Further intervals equal to `interval` under the tree comparator, in
    /// insertion order.
    ///
    /// Empty for all but duplicated intervals, which costs no allocation.
    duplicates: Vec<Interval<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(interval: Interval<T>) -> Self
    where
        T: Clone,
    {
        Self {
            subtree_max: interval.end().clone(),
            interval,
            duplicates: Vec::new(),
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Insert `interval` into the subtree rooted at `self`.
    ///
    /// Returns true if a new node was created for `interval`, or false if it
    /// was chained onto an existing node holding an equal interval.
    pub(crate) fn insert<C>(self: &mut Box<Self>, interval: Interval<T>, cmp: &C) -> bool
    where
        T: Clone,
        C: Comparator<T>,
    {
        let child = match interval.cmp_by(&self.interval, cmp) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                // An equal interval has an equal end bound, so the subtree max
                // of this node and all its ancestors is unchanged.
                self.duplicates.push(interval);
                return false;
            }
            Ordering::Greater => &mut self.right,
        };

        let created = match child {
            Some(v) => v.insert(interval, cmp),
            None => {
                // Insert the interval as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(interval)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                update_subtree_max(self, cmp);
                return true;
            }
        };

        if !created {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        rebalance(self, cmp);

        true
    }

    pub(super) fn remove<C>(
        self: &mut Box<Self>,
        interval: &Interval<T>,
        cmp: &C,
    ) -> Option<RemoveResult<T>>
    where
        T: Clone + PartialEq,
        C: Comparator<T>,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the interval is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the interval and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match self.interval.cmp_by(interval, cmp) {
            Ordering::Greater => return remove_recurse(&mut self.left, interval, cmp),
            Ordering::Less => return remove_recurse(&mut self.right, interval, cmp),
            Ordering::Equal => {
                // This node holds the interval to be removed from the tree.
            }
        };

        // Every interval equal to `interval` under the comparator is chained
        // at this node, but only an identical one is removed. The most
        // recently inserted match goes first.
        if let Some(idx) = self.duplicates.iter().rposition(|v| v == interval) {
            return Some(RemoveResult::Removed(self.duplicates.remove(idx)));
        }
        if self.interval != *interval {
            return None;
        }

        // Removing the key of a chain promotes the oldest remaining duplicate,
        // leaving the node, and the tree shape, in place.
        if !self.duplicates.is_empty() {
            let next = self.duplicates.remove(0);
            let old = std::mem::replace(&mut self.interval, next);
            return Some(RemoveResult::Removed(old));
        }

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // The in-order successor (if any) moves to replace this node.
        //
        // If "self.right" has a left child, descend its left-most edge to find
        // the successor, unlink it from there and link both children of "self"
        // to it.
        //
        // If "self.right" has no left child, "self.right" is the successor and
        // adopts "self.left".
        //
        // If there is no right child, then "self.left" replaces "self".
        let old = if let Some(mut right) = self.right.take() {
            debug_assert_ne!(self.height, 0);

            match extract_subtree_min(&mut right, cmp) {
                Some(mut min) => {
                    // The "min" node is guaranteed to have no left pointer as
                    // it is the left-most / minimum node in the subtree, and
                    // its right subtree was relinked in its place.
                    debug_assert!(min.left.is_none());
                    debug_assert!(min.right.is_none());

                    min.left = self.left.take();
                    min.right = Some(right);

                    std::mem::replace(self, min)
                }

                None => {
                    debug_assert!(right.left.is_none());

                    right.left = self.left.take();
                    std::mem::replace(self, right)
                }
            }
        } else if let Some(left) = self.left.take() {
            debug_assert!(self.right.is_none());
            debug_assert_ne!(self.height, 0);

            std::mem::replace(self, left)
        } else {
            // Otherwise "self" has no children.
            debug_assert_eq!(self.height, 0);

            // Parent will unlink this "self" node.
            return Some(RemoveResult::ParentUnlink);
        };

        // Invariant: the node being unlinked contains no subtree, and no
        // other intervals.
        debug_assert!(old.right.is_none());
        debug_assert!(old.left.is_none());
        debug_assert!(old.duplicates.is_empty());

        // Invariant: the old node being unlinked does contain the target
        // interval, and the replacement node does not.
        debug_assert!(old.interval.cmp_by(interval, cmp).is_eq());
        debug_assert!(self.interval.cmp_by(interval, cmp).is_ne());

        Some(RemoveResult::Removed(old.interval))
    }

    /// Return the node holding intervals equal to `interval`, if any.
    pub(crate) fn find<C>(&self, interval: &Interval<T>, cmp: &C) -> Option<&Self>
    where
        C: Comparator<T>,
    {
        let node = match self.interval.cmp_by(interval, cmp) {
            Ordering::Greater => self.left(),
            Ordering::Equal => return Some(self),
            Ordering::Less => self.right(),
        }?;

        // Prune this subtree from the search if the maximum end bound in the
        // subtree is less than the search end bound. If true, this subtree
        // cannot contain the search interval.
        if cmp_upper(node.subtree_max(), interval.end(), cmp).is_lt() {
            return None;
        }

        node.find(interval, cmp)
    }

    pub(crate) fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    /// All intervals held by this node, in insertion order.
    pub(crate) fn intervals(&self) -> NodeIntervals<'_, T> {
        std::iter::once(&self.interval).chain(self.duplicates.iter())
    }

    /// The number of intervals held by this node.
    pub(crate) fn len(&self) -> usize {
        1 + self.duplicates.len()
    }

    pub(crate) fn subtree_max(&self) -> &Bound<T> {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Returns true if `self` and `other` hold the same intervals, in any
    /// insertion order.
    pub(crate) fn same_intervals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }
        if self.duplicates.is_empty() {
            return self.interval == other.interval;
        }

        let theirs = other.intervals().collect::<Vec<_>>();
        let mut matched = vec![false; theirs.len()];
        self.intervals().all(|v| {
            match (0..theirs.len()).find(|&i| !matched[i] && theirs[i] == v) {
                Some(i) => {
                    matched[i] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Explode this [`Node`] into the intervals it holds.
    pub(crate) fn into_intervals(self) -> OwnedNodeIntervals<T> {
        std::iter::once(self.interval).chain(self.duplicates)
    }
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default()
}

/// Recompute the subtree max of `n` from its own interval and the (already
/// current) subtree max of its children.
fn update_subtree_max<T, C>(n: &mut Node<T>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut new_max = n.interval().end();
    for child in [n.left(), n.right()].into_iter().flatten() {
        new_max = max_upper(new_max, child.subtree_max(), cmp);
    }

    let new_max = new_max.clone();
    n.subtree_max = new_max;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    //
    // A missing child counts as -1 so a single leaf child is a skew of 1.
    let h = |v: Option<&Node<T>>| v.map(|v| v.height() as i16).unwrap_or(-1);
    (h(n.left()) - h(n.right())) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T, C>(x: &mut Box<Node<T>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    // "p" now holds the old root, which adopts the left subtree of the pivot
    // and must be updated before the pivot, its new parent.
    p.right = x.left.take();
    update_height(&mut p);
    update_subtree_max(&mut p, cmp);

    x.left = Some(p);
    update_height(x);
    update_subtree_max(x, cmp);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T, C>(y: &mut Box<Node<T>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);
    update_subtree_max(&mut p, cmp);

    y.right = Some(p);
    update_height(y);
    update_subtree_max(y, cmp);
}

/// Extracts the node holding the minimum subtree interval in a descendent of
/// `root`, if any, linking the right subtree of the extracted node in its
/// place.
fn extract_subtree_min<T, C>(root: &mut Box<Node<T>>, cmp: &C) -> Option<Box<Node<T>>>
where
    T: Clone,
    C: Comparator<T>,
{
    // Descend left to the leaf.
    let v = match extract_subtree_min(root.left_mut()?, cmp) {
        Some(v) => Some(v),
        None => {
            // The left child is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //              / \
            //             2   5
            //              \
            //               3
            // ```
            //
            // Unlink the right node of the left root, which will become the new
            // left node of "root" (if any).
            let left_right = root.left_mut().and_then(|v| v.right.take());

            std::mem::replace(&mut root.left, left_right)
        }
    };

    rebalance(root, cmp);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `interval` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the interval is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted interval within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<T, C>(
    node: &mut Option<Box<Node<T>>>,
    interval: &Interval<T>,
    cmp: &C,
) -> Option<RemoveResult<T>>
where
    T: Clone + PartialEq,
    C: Comparator<T>,
{
    // Remove the interval (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        // Prune this subtree from the search if the maximum end bound in the
        // subtree is less than the search end bound. If true, this subtree
        // cannot contain the search interval.
        if cmp_upper(v.subtree_max(), interval.end(), cmp).is_lt() {
            return None;
        }

        let ret = v.remove(interval, cmp)?;
        rebalance(v, cmp);
        Some(ret)
    })?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take().unwrap();
            debug_assert!(node.interval.cmp_by(interval, cmp).is_eq());

            node.interval
        }
    };

    Some(RemoveResult::Removed(v))
}

/// Recompute the height of `v`, restore the AVL balance of the subtree rooted
/// at it with up to two rotations, and recompute its subtree max.
///
/// The children of `v` must already be balanced, with a current height and
/// subtree max.
fn rebalance<T, C>(v: &mut Box<Node<T>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    update_height(v);

    match balance(v) {
        // Left-heavy
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v, cmp);
        }
        (2..) => {
            if let Some(l) = v.left_mut() {
                rotate_left(l, cmp);
            }
            rotate_right(v, cmp);
        }
        // Right-heavy
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v, cmp);
        }
        (..=-2) => {
            if let Some(r) = v.right_mut() {
                rotate_right(r, cmp);
            }
            rotate_left(v, cmp);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    update_subtree_max(v, cmp);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(v).abs() <= 1);
}
