use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Bound, Range, RangeBounds, RangeInclusive},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    order::{
        cmp_lower, cmp_upper, lower_admits, upper_admits, upper_reaches_lower, Comparator,
        NaturalOrder,
    },
};

/// An interval over an ordered domain, each end of which may be included,
/// excluded or unbounded.
///
/// An [`Interval`] is ordered by its start bound, and tie-broken with its end
/// bound. Its bounds cannot be changed once constructed.
///
/// Construction does not validate the bounds; an inverted or empty interval is
/// rejected when it is inserted into an
/// [`IntervalTree`](crate::IntervalTree), as only the tree knows the
/// [`Comparator`] that defines "inverted".
///
/// ```
/// use interval_avl::Interval;
///
/// let a = Interval::closed_open(1, 5);
/// let b = Interval::closed(5, 9);
///
/// assert!(!a.overlaps(&b));
/// assert!(a.contains(&4));
/// assert_eq!(a.to_string(), "[1, 5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T> Interval<T> {
    /// Construct an interval from raw bounds.
    pub const fn new(start: Bound<T>, end: Bound<T>) -> Self {
        Self { start, end }
    }

    /// `[start, end]`
    pub const fn closed(start: T, end: T) -> Self {
        Self::new(Bound::Included(start), Bound::Included(end))
    }

    /// `(start, end)`
    pub const fn open(start: T, end: T) -> Self {
        Self::new(Bound::Excluded(start), Bound::Excluded(end))
    }

    /// `[start, end)`
    pub const fn closed_open(start: T, end: T) -> Self {
        Self::new(Bound::Included(start), Bound::Excluded(end))
    }

    /// `(start, end]`
    pub const fn open_closed(start: T, end: T) -> Self {
        Self::new(Bound::Excluded(start), Bound::Included(end))
    }

    /// `[start, +∞)`
    pub const fn at_least(start: T) -> Self {
        Self::new(Bound::Included(start), Bound::Unbounded)
    }

    /// `(start, +∞)`
    pub const fn greater_than(start: T) -> Self {
        Self::new(Bound::Excluded(start), Bound::Unbounded)
    }

    /// `(-∞, end]`
    pub const fn at_most(end: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(end))
    }

    /// `(-∞, end)`
    pub const fn less_than(end: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(end))
    }

    /// `(-∞, +∞)`
    pub const fn unbounded() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// The degenerate interval `[v, v]`.
    pub fn point(v: T) -> Self
    where
        T: Clone,
    {
        Self::closed(v.clone(), v)
    }

    pub fn start(&self) -> &Bound<T> {
        &self.start
    }

    pub fn end(&self) -> &Bound<T> {
        &self.end
    }

    /// Explode this [`Interval`] into its `(start, end)` bounds.
    pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
        (self.start, self.end)
    }

    /// Check this interval is non-empty under `cmp`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedBounds`] if the start endpoint orders after the
    /// end endpoint, and [`Error::EmptyInterval`] if the endpoints are equal
    /// but not both included.
    pub fn validate_by<C>(&self, cmp: &C) -> Result<()>
    where
        C: Comparator<T>,
    {
        let (start, end) = match (&self.start, &self.end) {
            (Bound::Unbounded, _) | (_, Bound::Unbounded) => return Ok(()),
            (
                Bound::Included(s) | Bound::Excluded(s),
                Bound::Included(e) | Bound::Excluded(e),
            ) => (s, e),
        };

        match cmp.compare(start, end) {
            Ordering::Less => Ok(()),
            Ordering::Greater => Err(Error::InvertedBounds),
            Ordering::Equal => match (&self.start, &self.end) {
                (Bound::Included(_), Bound::Included(_)) => Ok(()),
                _ => Err(Error::EmptyInterval),
            },
        }
    }

    /// Returns true if `self` and `other` share at least one point under
    /// `cmp`.
    ///
    /// Both intervals are assumed to be valid (see
    /// [`Interval::validate_by()`]).
    pub fn overlaps_by<C>(&self, other: &Self, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        upper_reaches_lower(&self.end, &other.start, cmp)
            && upper_reaches_lower(&other.end, &self.start, cmp)
    }

    /// Returns true if `point` lies within `self` under `cmp`.
    pub fn contains_by<C>(&self, point: &T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        lower_admits(&self.start, point, cmp) && upper_admits(&self.end, point, cmp)
    }

    /// Order `self` against `other` under `cmp`, by start bound and then end
    /// bound.
    pub fn cmp_by<C>(&self, other: &Self, cmp: &C) -> Ordering
    where
        C: Comparator<T>,
    {
        cmp_lower(&self.start, &other.start, cmp)
            .then_with(|| cmp_upper(&self.end, &other.end, cmp))
    }

    /// [`Interval::overlaps_by()`] using the [`Ord`] impl of `T`.
    pub fn overlaps(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.overlaps_by(other, &NaturalOrder)
    }

    /// [`Interval::contains_by()`] using the [`Ord`] impl of `T`.
    pub fn contains(&self, point: &T) -> bool
    where
        T: Ord,
    {
        self.contains_by(point, &NaturalOrder)
    }
}

impl<T> PartialOrd for Interval<T>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Interval<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by(other, &NaturalOrder)
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self::closed_open(value.start, value.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (start, end) = value.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<(Bound<T>, Bound<T>)> for Interval<T> {
    fn from((start, end): (Bound<T>, Bound<T>)) -> Self {
        Self::new(start, end)
    }
}

impl<T> Display for Interval<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            Bound::Included(v) => write!(f, "[{v}")?,
            Bound::Excluded(v) => write!(f, "({v}")?,
            Bound::Unbounded => write!(f, "(-∞")?,
        }
        match &self.end {
            Bound::Included(v) => write!(f, ", {v}]"),
            Bound::Excluded(v) => write!(f, ", {v})"),
            Bound::Unbounded => write!(f, ", +∞)"),
        }
    }
}
