//! Endpoint ordering and the bound comparisons derived from it.
//!
//! Every ordering decision made by the tree is routed through a
//! [`Comparator`] chosen when the tree is constructed, so the same tree code
//! serves any endpoint domain (integers, floats via
//! [`f64::total_cmp`], case-insensitive strings, timestamps, ...).
//!
//! The endpoint domain is treated as dense: the open interval `(3, 4)` is not
//! empty, even when `T` is an integer type.

use std::{cmp::Ordering, fmt::Debug, ops::Bound};

/// A total order over endpoint values of type `T`.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The [`Ord`] order of `T`.
///
/// This is the comparator used by [`IntervalTree::new()`].
///
/// [`IntervalTree::new()`]: crate::IntervalTree::new
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a closure into a [`Comparator`].
///
/// ```
/// use interval_avl::{FnComparator, Interval, IntervalTree};
///
/// let mut t = IntervalTree::with_comparator(FnComparator(f64::total_cmp));
/// t.insert(Interval::closed(0.5, 1.5)).unwrap();
///
/// assert_eq!(t.stab(&1.0).count(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<F> Debug for FnComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnComparator").finish_non_exhaustive()
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Order two interval start bounds.
///
/// An unbounded start sorts before everything, and an included endpoint sorts
/// before an excluded endpoint of the same value (`[3` starts before `(3`).
pub(crate) fn cmp_lower<T, C>(a: &Bound<T>, b: &Bound<T>, cmp: &C) -> Ordering
where
    C: Comparator<T>,
{
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Less,
        (_, Bound::Unbounded) => Ordering::Greater,
        (Bound::Included(x), Bound::Included(y)) | (Bound::Excluded(x), Bound::Excluded(y)) => {
            cmp.compare(x, y)
        }
        (Bound::Included(x), Bound::Excluded(y)) => cmp.compare(x, y).then(Ordering::Less),
        (Bound::Excluded(x), Bound::Included(y)) => cmp.compare(x, y).then(Ordering::Greater),
    }
}

/// Order two interval end bounds.
///
/// An unbounded end sorts after everything, and an excluded endpoint sorts
/// before an included endpoint of the same value (`3)` ends before `3]`).
pub(crate) fn cmp_upper<T, C>(a: &Bound<T>, b: &Bound<T>, cmp: &C) -> Ordering
where
    C: Comparator<T>,
{
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Greater,
        (_, Bound::Unbounded) => Ordering::Less,
        (Bound::Included(x), Bound::Included(y)) | (Bound::Excluded(x), Bound::Excluded(y)) => {
            cmp.compare(x, y)
        }
        (Bound::Included(x), Bound::Excluded(y)) => cmp.compare(x, y).then(Ordering::Greater),
        (Bound::Excluded(x), Bound::Included(y)) => cmp.compare(x, y).then(Ordering::Less),
    }
}

/// Returns the greater of two end bounds.
pub(crate) fn max_upper<'a, T, C>(a: &'a Bound<T>, b: &'a Bound<T>, cmp: &C) -> &'a Bound<T>
where
    C: Comparator<T>,
{
    match cmp_upper(a, b, cmp) {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    }
}

/// Returns true if an interval ending at `upper` shares at least one point
/// with an interval starting at `lower`.
///
/// This is monotonic in both arguments: if `upper` does not reach `lower`, it
/// reaches no start bound that sorts after `lower`, and no end bound sorting
/// before `upper` reaches `lower` either.
pub(crate) fn upper_reaches_lower<T, C>(upper: &Bound<T>, lower: &Bound<T>, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    match (upper, lower) {
        (Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
        (Bound::Included(u), Bound::Included(l)) => cmp.compare(u, l) != Ordering::Less,
        (Bound::Included(u), Bound::Excluded(l))
        | (Bound::Excluded(u), Bound::Included(l))
        | (Bound::Excluded(u), Bound::Excluded(l)) => cmp.compare(u, l) == Ordering::Greater,
    }
}

/// Returns true if `point` is not before the start bound `lower`.
pub(crate) fn lower_admits<T, C>(lower: &Bound<T>, point: &T, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    match lower {
        Bound::Unbounded => true,
        Bound::Included(v) => cmp.compare(v, point) != Ordering::Greater,
        Bound::Excluded(v) => cmp.compare(v, point) == Ordering::Less,
    }
}

/// Returns true if `point` is not after the end bound `upper`.
pub(crate) fn upper_admits<T, C>(upper: &Bound<T>, point: &T, cmp: &C) -> bool
where
    C: Comparator<T>,
{
    match upper {
        Bound::Unbounded => true,
        Bound::Included(v) => cmp.compare(v, point) != Ordering::Less,
        Bound::Excluded(v) => cmp.compare(v, point) == Ordering::Greater,
    }
}
