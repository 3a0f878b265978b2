//! A module containing the set operations over two [`IntervalCollection`]s.
//!
//! Both operations follow the same shape: validate each input, expand both
//! into one sorted stream of points with [`collect_points()`], then sweep
//! that stream left to right one run of equal-valued points at a time. For
//! each run every input reports whether it covers the values just below the
//! run, the run's value itself, and the values just above it; the operation
//! combines those reports and [`ResultIntervals`] turns the combined
//! coverage back into freshly allocated intervals.
//!
//! [`collect_points()`]: crate::point::collect_points

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::interval::Inclusivity;
use crate::point::Point;
use crate::value::OrderedValue;
use crate::{validate, Error, Interval, IntervalCollection};

mod subtract;
mod union;

/// A binary operation over two interval collections.
///
/// This is the seam for swapping operations at runtime, for example when
/// the operation is picked from user input.
///
/// # Examples
/// ```
/// use interval_sweep::interval::{ie, ii};
/// use interval_sweep::operation::{SetOperation, Subtract, Union};
/// use interval_sweep::IntervalCollection;
///
/// let a = IntervalCollection::from([ii(0, 10)]);
/// let b = IntervalCollection::from([ii(5, 18)]);
///
/// let operations: [&dyn SetOperation<i32>; 2] = [&Union, &Subtract];
/// let results = operations.map(|operation| operation.execute(&a, &b).unwrap());
///
/// assert_eq!(
/// 	results,
/// 	[
/// 		IntervalCollection::from([ii(0, 18)]),
/// 		IntervalCollection::from([ie(0, 5)]),
/// 	]
/// );
/// ```
pub trait SetOperation<V> {
	/// Runs the operation on `first` and `second`.
	fn execute(
		&self,
		first: &IntervalCollection<V>,
		second: &IntervalCollection<V>,
	) -> Result<IntervalCollection<V>, Error>;
}

/// The [`SetOperation`] version of [`union()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Union;

/// The [`SetOperation`] version of [`subtract()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subtract;

impl<V> SetOperation<V> for Union
where
	V: OrderedValue + Clone,
{
	fn execute(
		&self,
		first: &IntervalCollection<V>,
		second: &IntervalCollection<V>,
	) -> Result<IntervalCollection<V>, Error> {
		union(first, second)
	}
}

impl<V> SetOperation<V> for Subtract
where
	V: OrderedValue + Clone,
{
	fn execute(
		&self,
		first: &IntervalCollection<V>,
		second: &IntervalCollection<V>,
	) -> Result<IntervalCollection<V>, Error> {
		subtract(first, second)
	}
}

/// Returns the smallest set of non-overlapping intervals covering every
/// value covered by `a` or `b`.
///
/// Intervals that overlap, or that touch at a value at least one of them
/// includes, are merged into one. Intervals touching at a value neither
/// includes stay apart. The result is in ascending order.
///
/// Fails with [`Error::Overlap`] if `a` or `b` does not pass [`validate()`],
/// and with [`Error::TypeMismatch`] if the values cannot be compared.
///
/// # Examples
/// ```
/// use interval_sweep::interval::{ei, ie, ii};
/// use interval_sweep::{union, IntervalCollection};
///
/// let a = IntervalCollection::from([ii(-10, -5), ei(5, 10)]);
/// let b = IntervalCollection::from([ei(-5, 5)]);
///
/// assert_eq!(union(&a, &b), Ok(IntervalCollection::from([ii(-10, 10)])));
///
/// let c = IntervalCollection::from([ie(0, 5)]);
/// let d = IntervalCollection::from([ei(5, 10)]);
///
/// assert_eq!(union(&c, &d), Ok(IntervalCollection::from([ie(0, 5), ei(5, 10)])));
/// ```
pub fn union<V>(
	a: &IntervalCollection<V>,
	b: &IntervalCollection<V>,
) -> Result<IntervalCollection<V>, Error>
where
	V: OrderedValue + Clone,
{
	debug!(a = a.len(), b = b.len(), "union");
	validate(a)?;
	validate(b)?;

	let result = union::sweep(a, b)?;
	debug!(result = result.len(), "union complete");

	Ok(result)
}

/// Returns the intervals covering every value covered by `minuend` but not
/// by `subtrahend`.
///
/// A subtrahend interval inside a minuend interval splits it in two. Where a
/// boundary of the subtrahend excludes a value the minuend includes, that
/// value survives, possibly as a single point interval such as `[4, 4]`.
///
/// Fails with [`Error::Overlap`] if either input does not pass
/// [`validate()`], and with [`Error::TypeMismatch`] if the values cannot be
/// compared.
///
/// # Examples
/// ```
/// use interval_sweep::interval::{ee, ie, ii};
/// use interval_sweep::{subtract, IntervalCollection};
///
/// let minuend = IntervalCollection::from([ii(0, 10)]);
///
/// assert_eq!(
/// 	subtract(&minuend, &IntervalCollection::from([ii(5, 18)])),
/// 	Ok(IntervalCollection::from([ie(0, 5)]))
/// );
/// assert_eq!(
/// 	subtract(&minuend, &IntervalCollection::from([ee(0, 10)])),
/// 	Ok(IntervalCollection::from([ii(0, 0), ii(10, 10)]))
/// );
/// ```
pub fn subtract<V>(
	minuend: &IntervalCollection<V>,
	subtrahend: &IntervalCollection<V>,
) -> Result<IntervalCollection<V>, Error>
where
	V: OrderedValue + Clone,
{
	debug!(
		minuend = minuend.len(),
		subtrahend = subtrahend.len(),
		"subtract"
	);
	validate(minuend)?;
	validate(subtrahend)?;

	let result = subtract::sweep(minuend, subtrahend)?;
	debug!(result = result.len(), "subtract complete");

	Ok(result)
}

/// Coverage of the neighbourhood of one run of equal-valued points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cover {
	below: bool,
	at: bool,
	above: bool,
}

impl Cover {
	fn or(self, other: Cover) -> Cover {
		Cover {
			below: self.below || other.below,
			at: self.at || other.at,
			above: self.above || other.above,
		}
	}

	fn minus(self, other: Cover) -> Cover {
		Cover {
			below: self.below && !other.below,
			at: self.at && !other.at,
			above: self.above && !other.above,
		}
	}
}

/// Tracks how many intervals of one input collection are open as the sweep
/// moves forward.
#[derive(Debug)]
struct Openings {
	collection: usize,
	open: usize,
}

impl Openings {
	fn of(collection: usize) -> Self {
		Openings {
			collection,
			open: 0,
		}
	}

	/// Advances past `run` and reports how this collection covers it.
	///
	/// The run's value is covered if one of this collection's intervals
	/// with an end in the run includes it, or if an interval opened earlier
	/// carries on past it.
	fn advance<V>(&mut self, run: &[Point<V>]) -> Cover {
		let below = self.open > 0;

		let mut begins = 0;
		let mut ends = 0;
		let mut closes_earlier = false;
		let mut at = false;
		for point in run.iter().filter(|point| point.belongs_to(self.collection)) {
			if point.is_begin() {
				begins += 1;
			} else {
				ends += 1;
				closes_earlier |= point.partner_in(run).is_none();
			}
			at |= point.includes_value(run);
		}
		at |= below && !closes_earlier;

		self.open = (self.open + begins).saturating_sub(ends);

		Cover {
			below,
			at,
			above: self.open > 0,
		}
	}
}

/// Builds result intervals from the combined coverage of each run.
struct ResultIntervals<'a, V> {
	current_begin: Option<(&'a V, bool)>,
	intervals: Vec<Interval<V>>,
}

impl<'a, V> ResultIntervals<'a, V>
where
	V: Clone,
{
	fn new() -> Self {
		ResultIntervals {
			current_begin: None,
			intervals: Vec::new(),
		}
	}

	fn push(&mut self, value: &'a V, cover: Cover) {
		match self.current_begin {
			Some(_) if cover.at && cover.above => {}
			Some((begin, begin_inclusive)) => {
				self.close(begin, begin_inclusive, value, cover.at);
				if cover.above {
					self.current_begin = Some((value, false));
				}
			}
			None if cover.above => self.current_begin = Some((value, cover.at)),
			None if cover.at => self.close(value, true, value, true),
			None => {}
		}
	}

	fn close(&mut self, begin: &'a V, begin_inclusive: bool, end: &'a V, end_inclusive: bool) {
		let interval = Interval::new(
			begin.clone(),
			end.clone(),
			Inclusivity {
				begin: begin_inclusive,
				end: end_inclusive,
			},
		);
		trace!(
			index = self.intervals.len(),
			begin_inclusive,
			end_inclusive,
			"result interval closed"
		);

		self.intervals.push(interval);
		self.current_begin = None;
	}

	fn finish(self) -> IntervalCollection<V> {
		IntervalCollection::from(self.intervals)
	}
}
