use crate::{
    interval::Interval,
    node::Node,
    order::{lower_admits, upper_admits, upper_reaches_lower, Comparator},
};

use super::pruning_iter::PruningOracle;

/// Matches stored intervals sharing at least one point with `query`.
#[derive(Debug)]
pub(crate) struct OverlapsPruner<'a, T, C> {
    pub(crate) query: &'a Interval<T>,
    pub(crate) cmp: &'a C,
}

impl<T, C> PruningOracle<T> for OverlapsPruner<'_, T, C>
where
    C: Comparator<T>,
{
    fn visit_subtree(&self, subtree_root: &Node<T>) -> bool {
        upper_reaches_lower(subtree_root.subtree_max(), self.query.start(), self.cmp)
    }

    fn visit_right(&self, n: &Node<T>) -> bool {
        upper_reaches_lower(self.query.end(), n.interval().start(), self.cmp)
    }

    fn filter_yield(&self, n: &Node<T>) -> bool {
        n.interval().overlaps_by(self.query, self.cmp)
    }
}

/// Matches stored intervals containing `point`.
#[derive(Debug)]
pub(crate) struct StabbingPruner<'a, T, C> {
    pub(crate) point: &'a T,
    pub(crate) cmp: &'a C,
}

impl<T, C> PruningOracle<T> for StabbingPruner<'_, T, C>
where
    C: Comparator<T>,
{
    fn visit_subtree(&self, subtree_root: &Node<T>) -> bool {
        upper_admits(subtree_root.subtree_max(), self.point, self.cmp)
    }

    fn visit_right(&self, n: &Node<T>) -> bool {
        lower_admits(n.interval().start(), self.point, self.cmp)
    }

    fn filter_yield(&self, n: &Node<T>) -> bool {
        n.interval().contains_by(self.point, self.cmp)
    }
}
