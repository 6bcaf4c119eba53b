use std::iter::FusedIterator;

use log::debug;

use crate::{interval::Interval, node::Node, order::Comparator};

use super::{
    intervals_of,
    pruners::{OverlapsPruner, StabbingPruner},
    pruning_iter::PruningIter,
    IntervalsOf,
};

/// An iterator over the stored intervals overlapping a query interval.
///
/// Matches are yielded in ascending order.
///
/// This `struct` is created by
/// [`IntervalTree::overlapping()`](crate::IntervalTree::overlapping).
#[derive(Debug)]
pub struct Overlapping<'a, T, C> {
    inner: IntervalsOf<'a, T, PruningIter<'a, T, OverlapsPruner<'a, T, C>>>,
}

impl<'a, T, C> Overlapping<'a, T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn new(root: Option<&'a Node<T>>, query: &'a Interval<T>, cmp: &'a C) -> Self {
        // An inverted or empty query contains no points, and so overlaps
        // nothing.
        let root = match query.validate_by(cmp) {
            Ok(()) => root,
            Err(e) => {
                debug!("overlap query matches nothing: {e}");
                None
            }
        };

        Self {
            inner: intervals_of(PruningIter::new(root, OverlapsPruner { query, cmp })),
        }
    }
}

impl<'a, T, C> Iterator for Overlapping<'a, T, C>
where
    C: Comparator<T>,
{
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T, C> FusedIterator for Overlapping<'_, T, C> where C: Comparator<T> {}

/// An iterator over the stored intervals containing a point.
///
/// Matches are yielded in ascending order.
///
/// This `struct` is created by [`IntervalTree::stab()`](crate::IntervalTree::stab).
#[derive(Debug)]
pub struct Stabbing<'a, T, C> {
    inner: IntervalsOf<'a, T, PruningIter<'a, T, StabbingPruner<'a, T, C>>>,
}

impl<'a, T, C> Stabbing<'a, T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn new(root: Option<&'a Node<T>>, point: &'a T, cmp: &'a C) -> Self {
        Self {
            inner: intervals_of(PruningIter::new(root, StabbingPruner { point, cmp })),
        }
    }
}

impl<'a, T, C> Iterator for Stabbing<'a, T, C>
where
    C: Comparator<T>,
{
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T, C> FusedIterator for Stabbing<'_, T, C> where C: Comparator<T> {}
