//! A module containing [`validate()`].

use tracing::debug;

use crate::point::{collect_points, runs, Point};
use crate::value::OrderedValue;
use crate::{Error, IntervalCollection, OverlapError};

/// Checks that no two intervals of `collection` overlap.
///
/// Two intervals overlap if their ranges interleave, or if they meet at a
/// value that both of them include. Intervals that merely touch, with at
/// most one side of the shared value included, are fine, in whatever order
/// they are listed. So is a single point interval such as `[4, 4]`, and an
/// empty one such as `[4, 4)` never overlaps anything.
///
/// An interval whose end sorts before its begin is reported as overlapping
/// itself.
///
/// # Examples
/// ```
/// use interval_sweep::interval::{ei, ie, ii};
/// use interval_sweep::{validate, IntervalCollection, OverlapError};
///
/// assert_eq!(validate(&IntervalCollection::from([ii(5, 9), ie(0, 5)])), Ok(()));
/// assert_eq!(
/// 	validate(&IntervalCollection::from([ei(0, 5), ii(5, 9)])),
/// 	Err(OverlapError { first: 0, second: 1 }.into())
/// );
/// ```
pub fn validate<V>(collection: &IntervalCollection<V>) -> Result<(), Error>
where
	V: OrderedValue,
{
	let points = collect_points(&[collection])?;

	let mut open: Option<&Point<V>> = None;

	for run in runs(&points) {
		let run = run?;

		let mut inclusive = run.iter().filter(|point| point.includes_value(run));
		if let Some(first) = inclusive.next() {
			if let Some(second) = inclusive.find(|point| !point.same_interval(first)) {
				return Err(overlap(first, second));
			}
		}

		for end in run.iter().filter(|point| point.is_end()) {
			if open.is_some_and(|begin| begin.same_interval(end)) {
				open = None;
			} else if end.partner_in(run).is_none() {
				return Err(overlap(end, end));
			}
		}

		let mut starting: Option<&Point<V>> = None;
		for begin in run.iter().filter(|point| point.is_begin()) {
			let single_point = begin.partner_in(run).is_some();
			// `[v, v)` and friends are empty
			if single_point && !begin.includes_value(run) {
				continue;
			}
			if let Some(earlier) = open {
				return Err(overlap(earlier, begin));
			}
			// single point intervals open and close within the run
			if single_point {
				continue;
			}
			if let Some(earlier) = starting {
				return Err(overlap(earlier, begin));
			}
			starting = Some(begin);
		}
		open = starting;
	}

	Ok(())
}

fn overlap<V>(earlier: &Point<V>, later: &Point<V>) -> Error {
	debug!(
		first = earlier.interval,
		second = later.interval,
		"rejecting collection: input intervals overlap"
	);

	Error::Overlap(OverlapError {
		first: earlier.interval,
		second: later.interval,
	})
}
