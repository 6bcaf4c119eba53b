use std::iter::FusedIterator;

use crate::{
    interval::Interval,
    node::{Node, OwnedNodeIntervals},
};

/// An iterator of owned [`Interval`] instances, in ascending order, as the
/// underlying tree `into_iter()` impl.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,

    /// The intervals of the most recently visited node not yet yielded.
    current: Option<OwnedNodeIntervals<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>, len: usize) -> Self {
        let mut this = Self {
            stack: vec![],
            current: None,
            remaining: len,
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<T>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(v);
            }

            let mut v = self.stack.pop()?;

            // Descend down the left side of the right hand child of this node,
            // if any.
            if let Some(right) = v.take_right() {
                self.push_subtree(right);
            }

            self.current = Some(v.into_intervals());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
