//! Serialisation of an [`IntervalTree`] as a sequence of its intervals.
//!
//! Deserialisation rebuilds the tree by inserting each interval in turn, so a
//! document holding an inverted or empty interval is rejected.

use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{interval::Interval, order::Comparator, IntervalTree};

impl<T, C> Serialize for IntervalTree<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, C> Deserialize<'de> for IntervalTree<T, C>
where
    T: Deserialize<'de> + Clone,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}

struct TreeVisitor<T, C>(PhantomData<fn() -> IntervalTree<T, C>>);

impl<'de, T, C> Visitor<'de> for TreeVisitor<T, C>
where
    T: Deserialize<'de> + Clone,
    C: Comparator<T> + Default,
{
    type Value = IntervalTree<T, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of intervals")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut t = IntervalTree::default();
        while let Some(v) = seq.next_element::<Interval<T>>()? {
            t.insert(v).map_err(de::Error::custom)?;
        }
        Ok(t)
    }
}
