//! An interval tree built on an AVL-balanced binary search tree.
//!
//! An [`IntervalTree`] stores a multiset of [`Interval`] over any endpoint
//! type, and answers "which stored intervals contain this point?" (a stabbing
//! query, [`IntervalTree::stab()`]) and "which stored intervals overlap this
//! interval?" ([`IntervalTree::overlapping()`]) without visiting subtrees that
//! cannot hold a match.
//!
//! Each end of an interval may be included, excluded or unbounded. Endpoints
//! are ordered by a [`Comparator`] chosen at construction time, which defaults
//! to the [`Ord`] impl of the endpoint type ([`NaturalOrder`]).
//!
//! ```
//! use interval_avl::{Interval, IntervalTree};
//!
//! let mut t = IntervalTree::new();
//!
//! t.insert(Interval::closed(1, 3)).unwrap();
//! t.insert(Interval::closed(2, 6)).unwrap();
//! t.insert(Interval::closed(8, 10)).unwrap();
//! t.insert(Interval::at_least(15)).unwrap();
//!
//! assert_eq!(t.stab(&9).collect::<Vec<_>>(), [&Interval::closed(8, 10)]);
//! assert_eq!(t.overlapping(&Interval::open(3, 8)).count(), 1);
//! assert_eq!(t.stab(&1_000_000).count(), 1);
//! ```
//!
//! # Cargo features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`Interval`], [`Error`] and
//!   [`IntervalTree`] (as a sequence of intervals).
//! * `graphviz`: `IntervalTree::to_dot()`, rendering the tree structure for
//!   debugging.
//!
//! # Logging
//!
//! Rejected intervals and malformed queries are reported at the `debug` level,
//! and structural changes at the `trace` level, through the [`log`] facade.

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    unused_qualifications
)]

mod error;
mod interval;
mod iter;
mod node;
mod order;
mod tree;

#[cfg(any(test, feature = "graphviz"))]
mod dot;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use interval::Interval;
pub use iter::{IntoIter, Iter, Overlapping, Stabbing};
pub use order::{Comparator, FnComparator, NaturalOrder};
pub use tree::IntervalTree;
