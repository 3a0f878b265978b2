//! A module containing the sweep [`Point`] and the builder that expands
//! interval collections into a sorted stream of them.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::value::OrderedValue;
use crate::{Error, IntervalCollection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointKind {
	Begin,
	End,
}

/// One endpoint of one input interval.
///
/// `collection` is the position of the owning collection in the
/// [`collect_points()`] call and `interval` the position of the owning
/// interval within that collection; together they identify the source
/// interval without borrowing it.
#[derive(Debug)]
pub(crate) struct Point<'a, V> {
	pub(crate) value: &'a V,
	pub(crate) kind: PointKind,
	pub(crate) inclusive: bool,
	pub(crate) collection: usize,
	pub(crate) interval: usize,
}

impl<V> Clone for Point<'_, V> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<V> Copy for Point<'_, V> {}

impl<'a, V> Point<'a, V> {
	pub(crate) fn is_begin(&self) -> bool {
		self.kind == PointKind::Begin
	}

	pub(crate) fn is_end(&self) -> bool {
		self.kind == PointKind::End
	}

	pub(crate) fn belongs_to(&self, collection: usize) -> bool {
		self.collection == collection
	}

	pub(crate) fn same_interval(&self, other: &Self) -> bool {
		self.collection == other.collection && self.interval == other.interval
	}

	/// The other endpoint of this point's interval, if it is part of `run`.
	pub(crate) fn partner_in<'p>(&self, run: &'p [Point<'a, V>]) -> Option<&'p Point<'a, V>> {
		run.iter()
			.find(|other| other.same_interval(self) && other.kind != self.kind)
	}

	/// Whether this point's interval includes the value of `run`.
	///
	/// An interval with both ends in the run is a single value and includes
	/// it only when both ends are inclusive, so `[v, v)` includes nothing.
	pub(crate) fn includes_value(&self, run: &[Point<'a, V>]) -> bool {
		self.inclusive
			&& self
				.partner_in(run)
				.map_or(true, |partner| partner.inclusive)
	}
}

impl<'a, V> Point<'a, V>
where
	V: OrderedValue,
{
	pub(crate) fn coincides(&self, other: &Self) -> Result<bool, Error> {
		self.value.is_equal(other.value)
	}
}

/// Expands every interval of every collection into its begin and end
/// points, sorted by value.
///
/// The sort is stable: at equal values the points keep the order they were
/// emitted in, which is collection by collection, interval by interval,
/// begin before end.
pub(crate) fn collect_points<'a, V>(
	collections: &[&'a IntervalCollection<V>],
) -> Result<Vec<Point<'a, V>>, Error>
where
	V: OrderedValue,
{
	let mut points = Vec::with_capacity(
		collections.iter().map(|collection| collection.len() * 2).sum(),
	);

	for (collection_index, collection) in collections.iter().enumerate() {
		for (interval_index, interval) in collection.iter().enumerate() {
			points.push(Point {
				value: interval.begin(),
				kind: PointKind::Begin,
				inclusive: interval.is_begin_inclusive(),
				collection: collection_index,
				interval: interval_index,
			});
			points.push(Point {
				value: interval.end(),
				kind: PointKind::End,
				inclusive: interval.is_end_inclusive(),
				collection: collection_index,
				interval: interval_index,
			});
		}
	}

	let mut failure = None;
	points.sort_by(|a, b| match a.value.try_cmp(b.value) {
		Ok(ordering) => ordering,
		Err(error) => {
			failure.get_or_insert(error);
			Ordering::Equal
		}
	});

	match failure {
		Some(error) => Err(error),
		None => Ok(points),
	}
}

/// Splits a sorted point stream into maximal runs of equal-valued points.
///
/// Every run is compared against its first point, so with a tolerant value
/// kind a run never spans more than one equality band.
pub(crate) fn runs<'p, 'a, V>(points: &'p [Point<'a, V>]) -> Runs<'p, 'a, V> {
	Runs { rest: points }
}

pub(crate) struct Runs<'p, 'a, V> {
	rest: &'p [Point<'a, V>],
}

impl<'p, 'a, V> Iterator for Runs<'p, 'a, V>
where
	V: OrderedValue,
{
	type Item = Result<&'p [Point<'a, V>], Error>;

	fn next(&mut self) -> Option<Self::Item> {
		let first = self.rest.first()?;

		let mut length = 1;
		while let Some(point) = self.rest.get(length) {
			match point.coincides(first) {
				Ok(true) => length += 1,
				Ok(false) => break,
				Err(error) => {
					self.rest = &[];
					return Some(Err(error));
				}
			}
		}

		let (run, rest) = self.rest.split_at(length);
		self.rest = rest;

		Some(Ok(run))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, ei, ie, ii};
	use crate::value::Value;

	fn summary<V: Copy>(points: &[Point<V>]) -> Vec<(V, PointKind, usize, usize)> {
		points
			.iter()
			.map(|point| (*point.value, point.kind, point.collection, point.interval))
			.collect()
	}

	#[test]
	fn sorted_by_value() {
		let collection = IntervalCollection::from([ii(8, 9), ie(0, 2), ee(4, 6)]);
		let points = collect_points(&[&collection]).unwrap();

		assert_eq!(
			points.iter().map(|point| *point.value).collect::<Vec<_>>(),
			[0, 2, 4, 6, 8, 9]
		);
		assert_eq!(
			points.iter().map(|point| point.inclusive).collect::<Vec<_>>(),
			[true, false, false, false, true, true]
		);
	}

	#[test]
	fn ties_keep_emission_order() {
		let first = IntervalCollection::from([ii(0, 5), ei(5, 10)]);
		let second = IntervalCollection::from([ee(5, 5)]);
		let points = collect_points(&[&first, &second]).unwrap();

		assert_eq!(
			summary(&points),
			[
				(0, PointKind::Begin, 0, 0),
				(5, PointKind::End, 0, 0),
				(5, PointKind::Begin, 0, 1),
				(5, PointKind::Begin, 1, 0),
				(5, PointKind::End, 1, 0),
				(10, PointKind::End, 0, 1),
			]
		);
	}

	#[test]
	fn empty_collections() {
		let empty = IntervalCollection::<u32>::new();
		assert!(collect_points(&[&empty, &empty]).unwrap().is_empty());
	}

	#[test]
	fn comparison_failures_are_returned() {
		let collection = IntervalCollection::from([
			ii(Value::from(0), Value::from(1)),
			ii(Value::from(2.0), Value::from(3.0)),
		]);

		assert!(matches!(
			collect_points(&[&collection]),
			Err(Error::TypeMismatch { .. })
		));
	}

	#[test]
	fn runs_group_equal_values() {
		let collection = IntervalCollection::from([ie(0, 5), ee(5, 7), ii(7, 7), ii(9, 10)]);
		let points = collect_points(&[&collection]).unwrap();
		let lengths = runs(&points)
			.map(|run| run.unwrap().len())
			.collect::<Vec<_>>();

		assert_eq!(lengths, [1, 2, 3, 1, 1]);
		assert!(runs::<u8>(&[]).next().is_none());
	}
}
