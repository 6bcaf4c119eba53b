mod owned_iter;
mod pruners;
mod pruning_iter;
mod queries;
mod ref_iter;

use std::iter::FlatMap;

pub use owned_iter::IntoIter;
pub use queries::{Overlapping, Stabbing};
pub(crate) use ref_iter::RefIter;
pub use ref_iter::Iter;

use crate::node::{Node, NodeIntervals};

/// An iterator of the [`Interval`](crate::Interval) references held by each
/// [`Node`] yielded by `I`.
type IntervalsOf<'a, T, I> =
    FlatMap<I, NodeIntervals<'a, T>, fn(&'a Node<T>) -> NodeIntervals<'a, T>>;

fn intervals_of<'a, T, I>(nodes: I) -> IntervalsOf<'a, T, I>
where
    I: Iterator<Item = &'a Node<T>>,
{
    nodes.flat_map(Node::intervals as fn(&'a Node<T>) -> NodeIntervals<'a, T>)
}
