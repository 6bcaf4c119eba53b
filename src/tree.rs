use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use log::{debug, trace};

use crate::{
    error::Result,
    interval::Interval,
    iter::{IntoIter, Iter, Overlapping, RefIter, Stabbing},
    node::{remove_recurse, Node, RemoveResult},
    order::{Comparator, NaturalOrder},
};

/// An AVL-balanced, augmented interval tree.
///
/// Intervals are ordered by their start bound (tie-broken by their end bound)
/// under the [`Comparator`] `C` given at construction time. Each node records
/// the greatest end bound in its subtree, which allows [`IntervalTree::stab()`]
/// and [`IntervalTree::overlapping()`] to skip subtrees that cannot contain a
/// match.
///
/// The tree is a multiset: inserting an interval equal to one already stored
/// keeps both, and both are yielded by iterators and queries.
///
/// The tree is not internally synchronised; iterators borrow it immutably, so
/// it cannot be modified while they are live.
///
/// ```
/// use interval_avl::{Interval, IntervalTree};
///
/// let mut t = IntervalTree::new();
/// t.insert(Interval::closed(1, 5)).unwrap();
/// t.insert(Interval::closed(10, 15)).unwrap();
/// t.insert(Interval::closed_open(6, 9)).unwrap();
///
/// let query = Interval::closed(4, 6);
/// let got = t.overlapping(&query).collect::<Vec<_>>();
/// assert_eq!(got, [&Interval::closed(1, 5), &Interval::closed_open(6, 9)]);
///
/// assert_eq!(t.stab(&12).next(), Some(&Interval::closed(10, 15)));
///
/// assert!(t.remove(&Interval::closed(10, 15)));
/// assert_eq!(t.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<T, C = NaturalOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    cmp: C,
}

impl<T, C> Default for IntervalTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> IntervalTree<T> {
    /// Construct an empty tree ordering endpoints by their [`Ord`] impl.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> IntervalTree<T, C> {
    /// Construct an empty tree ordering endpoints with `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The endpoint [`Comparator`] of this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The number of intervals stored in the tree, including duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove all intervals from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The number of levels in the tree (0 when empty).
    ///
    /// Equal intervals share a level, and the AVL balance bounds this to
    /// roughly `1.44 * log2(n + 2)` for `n` distinct intervals.
    pub fn height(&self) -> usize {
        self.root
            .as_ref()
            .map(|v| v.height() as usize + 1)
            .unwrap_or_default()
    }

    /// Iterate over all intervals in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// The lowest interval in the tree, if any.
    pub fn first(&self) -> Option<&Interval<T>> {
        let mut n = self.root()?;
        while let Some(left) = n.left() {
            n = left;
        }
        Some(n.interval())
    }

    /// The highest interval in the tree, if any.
    ///
    /// Of several equal highest intervals, the most recently inserted one is
    /// returned, matching the last item yielded by [`IntervalTree::iter()`].
    pub fn last(&self) -> Option<&Interval<T>> {
        let mut n = self.root()?;
        while let Some(right) = n.right() {
            n = right;
        }
        n.intervals().last()
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C> IntervalTree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `interval` into the tree.
    ///
    /// Returns `Ok(true)` if no equal interval was stored before, and
    /// `Ok(false)` if an equal interval exists, in which case both are kept.
    /// As with [`HashSet::insert()`], `true` reports a *new* interval; it is
    /// the inverse of an "already existed" flag.
    ///
    /// [`HashSet::insert()`]: std::collections::HashSet::insert
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the interval is inverted or
    /// empty under the tree [`Comparator`]; the tree is left unchanged.
    pub fn insert(&mut self, interval: Interval<T>) -> Result<bool>
    where
        T: Clone,
    {
        if let Err(e) = interval.validate_by(&self.cmp) {
            debug!("rejected interval insert: {e}");
            return Err(e);
        }

        let created = match self.root {
            Some(ref mut v) => v.insert(interval, &self.cmp),
            None => {
                self.root = Some(Box::new(Node::new(interval)));
                true
            }
        };

        self.len += 1;
        trace!(
            "inserted interval (new node: {created}, len: {}, height: {})",
            self.len,
            self.height()
        );

        Ok(created)
    }

    /// Remove one interval identical to `interval` from the tree, returning
    /// it.
    ///
    /// Intervals the [`Comparator`] considers equal to `interval` but that are
    /// not `==` to it are left in place. Of several identical intervals, the
    /// most recently inserted one is removed.
    pub fn take(&mut self, interval: &Interval<T>) -> Option<Interval<T>>
    where
        T: Clone + PartialEq,
    {
        match remove_recurse(&mut self.root, interval, &self.cmp)? {
            RemoveResult::Removed(v) => {
                self.len -= 1;
                trace!("removed interval (len: {})", self.len);
                Some(v)
            }
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Remove one interval identical to `interval` from the tree.
    ///
    /// Returns false if no such interval is stored, leaving the tree
    /// unchanged.
    pub fn remove(&mut self, interval: &Interval<T>) -> bool
    where
        T: Clone + PartialEq,
    {
        self.take(interval).is_some()
    }

    /// Returns true if an interval identical (`==`) to `interval` is stored.
    pub fn contains(&self, interval: &Interval<T>) -> bool
    where
        T: PartialEq,
    {
        self.find(interval)
            .is_some_and(|n| n.intervals().any(|v| v == interval))
    }

    /// The number of stored intervals identical (`==`) to `interval`.
    pub fn count(&self, interval: &Interval<T>) -> usize
    where
        T: PartialEq,
    {
        self.find(interval)
            .map(|n| n.intervals().filter(|v| *v == interval).count())
            .unwrap_or_default()
    }

    /// Iterate over the stored intervals containing `point`, in ascending
    /// order.
    pub fn stab<'a>(&'a self, point: &'a T) -> Stabbing<'a, T, C> {
        Stabbing::new(self.root(), point, &self.cmp)
    }

    /// Iterate over the stored intervals sharing at least one point with
    /// `query`, in ascending order.
    ///
    /// An inverted or empty `query` overlaps nothing.
    pub fn overlapping<'a>(&'a self, query: &'a Interval<T>) -> Overlapping<'a, T, C> {
        Overlapping::new(self.root(), query, &self.cmp)
    }

    /// Returns true if any stored interval overlaps `query`.
    pub fn is_overlapping(&self, query: &Interval<T>) -> bool {
        self.overlapping(query).next().is_some()
    }

    /// The smallest interval covering every stored interval, if any.
    ///
    /// ```
    /// use interval_avl::{Interval, IntervalTree};
    ///
    /// let mut t = IntervalTree::new();
    /// t.insert(Interval::open(4, 8)).unwrap();
    /// t.insert(Interval::closed(1, 2)).unwrap();
    ///
    /// assert_eq!(t.span(), Some(Interval::closed_open(1, 8)));
    /// ```
    pub fn span(&self) -> Option<Interval<T>>
    where
        T: Clone,
    {
        let start = self.first()?.start().clone();
        let end = self.root()?.subtree_max().clone();
        Some(Interval::new(start, end))
    }

    fn find(&self, interval: &Interval<T>) -> Option<&Node<T>> {
        self.root()?.find(interval, &self.cmp)
    }
}

/// Trees are equal when they hold the same intervals, regardless of their
/// shape or insertion order.
///
/// Each node holds one class of intervals equal under the [`Comparator`], and
/// both trees visit those classes in the same order, so the trees are compared
/// class by class.
impl<T, C> PartialEq for IntervalTree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut a = RefIter::new(self.root());
        let mut b = RefIter::new(other.root());
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x.same_intervals(y) => continue,
                _ => return false,
            }
        }
    }
}

impl<T, C> Eq for IntervalTree<T, C> where T: Eq {}

impl<T, C> Hash for IntervalTree<T, C>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);

        // Combine the intervals of a node with a commutative sum so the
        // insertion order within a class does not change the hash.
        for n in RefIter::new(self.root()) {
            let class = n
                .intervals()
                .map(|v| {
                    let mut h = DefaultHasher::new();
                    v.hash(&mut h);
                    h.finish()
                })
                .fold(0_u64, u64::wrapping_add);

            state.write_u64(class);
        }
    }
}

impl<T, C> IntoIterator for IntervalTree<T, C> {
    type Item = Interval<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T, C> IntoIterator for &'a IntervalTree<T, C> {
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
