//! A module containing [`IntervalCollection`].

use alloc::vec::{IntoIter as VecIntoIter, Vec};
use core::fmt;
use core::slice::Iter as SliceIter;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::operation::{subtract, union};
use crate::validator::validate;
use crate::value::OrderedValue;
use crate::{Error, Interval};

/// An immutable, ordered sequence of [`Interval`]s.
///
/// No ordering or non-overlap is enforced when a collection is built; the
/// set operations [`validate()`](IntervalCollection::validate) their inputs
/// first. The order of the intervals only affects tie-breaking during a
/// sweep, never the values covered by a result.
///
/// # Examples
/// ```
/// use interval_sweep::interval::{ee, ii};
/// use interval_sweep::IntervalCollection;
///
/// let collection = IntervalCollection::from([ii(2, 21)]);
/// let holes = IntervalCollection::from([ee(2, 21)]);
///
/// assert_eq!(
/// 	collection.subtract(&holes).unwrap(),
/// 	IntervalCollection::from([ii(2, 2), ii(21, 21)])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IntervalCollection<V> {
	intervals: Vec<Interval<V>>,
}

impl<V> IntervalCollection<V> {
	/// Makes a new, empty [`IntervalCollection`].
	pub fn new() -> Self {
		IntervalCollection {
			intervals: Vec::new(),
		}
	}

	/// Returns the number of intervals in the collection.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}

	/// Returns `true` if the collection contains no intervals.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Returns an iterator over the intervals in their stored order.
	pub fn iter(&self) -> SliceIter<'_, Interval<V>> {
		self.intervals.iter()
	}

	/// Returns the intervals as a slice.
	pub fn as_slice(&self) -> &[Interval<V>] {
		&self.intervals
	}
}

impl<V> IntervalCollection<V>
where
	V: OrderedValue + Clone,
{
	/// See [`validate()`] for more details.
	pub fn validate(&self) -> Result<(), Error> {
		validate(self)
	}

	/// See [`union()`] for more details.
	pub fn union(&self, other: &Self) -> Result<Self, Error> {
		union(self, other)
	}

	/// See [`subtract()`] for more details.
	pub fn subtract(&self, subtrahend: &Self) -> Result<Self, Error> {
		subtract(self, subtrahend)
	}

	/// Returns the collection sorted, with touching and overlapping
	/// intervals merged, by taking its union with nothing.
	///
	/// # Examples
	/// ```
	/// use interval_sweep::interval::{ie, ii};
	/// use interval_sweep::IntervalCollection;
	///
	/// let collection = IntervalCollection::from([ii(10, 12), ie(0, 5), ii(5, 8)]);
	///
	/// assert_eq!(
	/// 	collection.normalize().unwrap(),
	/// 	IntervalCollection::from([ii(0, 8), ii(10, 12)])
	/// );
	/// ```
	pub fn normalize(&self) -> Result<Self, Error> {
		union(self, &IntervalCollection::new())
	}

	/// Returns `true` if any interval in the collection contains `value`.
	pub fn contains(&self, value: &V) -> Result<bool, Error> {
		for interval in self.intervals.iter() {
			if interval.contains(value)? {
				return Ok(true);
			}
		}

		Ok(false)
	}
}

impl<V> Default for IntervalCollection<V> {
	fn default() -> Self {
		IntervalCollection::new()
	}
}

impl<V> From<Vec<Interval<V>>> for IntervalCollection<V> {
	fn from(intervals: Vec<Interval<V>>) -> Self {
		IntervalCollection { intervals }
	}
}

impl<V, const N: usize> From<[Interval<V>; N]> for IntervalCollection<V> {
	fn from(intervals: [Interval<V>; N]) -> Self {
		IntervalCollection {
			intervals: Vec::from(intervals),
		}
	}
}

impl<V> FromIterator<Interval<V>> for IntervalCollection<V> {
	fn from_iter<T: IntoIterator<Item = Interval<V>>>(iter: T) -> Self {
		IntervalCollection {
			intervals: iter.into_iter().collect(),
		}
	}
}

impl<V> IntoIterator for IntervalCollection<V> {
	type Item = Interval<V>;
	type IntoIter = VecIntoIter<Interval<V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.into_iter()
	}
}

impl<'a, V> IntoIterator for &'a IntervalCollection<V> {
	type Item = &'a Interval<V>;
	type IntoIter = SliceIter<'a, Interval<V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.intervals.iter()
	}
}

impl<V> fmt::Display for IntervalCollection<V>
where
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.intervals.iter().join(", "))
	}
}
