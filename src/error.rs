//! Error definitions for interval validation.
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reasons an [`Interval`](crate::Interval) can be rejected by an
/// [`IntervalTree`](crate::IntervalTree).
#[derive(Error, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    /// The start endpoint orders after the end endpoint.
    #[error("interval start is greater than its end")]
    InvertedBounds,

    /// Both endpoints are equal, but at least one of them is excluded, so the
    /// interval contains no points.
    #[error("an interval with equal endpoints must include both of them")]
    EmptyInterval,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
