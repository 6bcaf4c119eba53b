use std::iter::FusedIterator;

use crate::{interval::Interval, node::Node};

use super::{intervals_of, IntervalsOf};

/// An in-order iterator of [`Node`] references.
#[derive(Debug)]
pub(crate) struct RefIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> RefIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T> Iterator for RefIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}

/// An iterator over the intervals of an
/// [`IntervalTree`](crate::IntervalTree), in ascending order.
///
/// Equal intervals are yielded in the order they were inserted.
///
/// This `struct` is created by [`IntervalTree::iter()`](crate::IntervalTree::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: IntervalsOf<'a, T, RefIter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            inner: intervals_of(RefIter::new(root)),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.inner.next()?;
        self.remaining -= 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
