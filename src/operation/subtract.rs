use crate::point::{collect_points, runs};
use crate::value::OrderedValue;
use crate::{Error, IntervalCollection};

use super::{Openings, ResultIntervals};

const MINUEND: usize = 0;
const SUBTRAHEND: usize = 1;

/// Covers each run of equal-valued points wherever the minuend covers it and
/// the subtrahend does not.
///
/// A subtrahend boundary that excludes its value hands that value back to the
/// minuend, which is how single point results like `[10, 10]` come about.
pub(super) fn sweep<V>(
	minuend: &IntervalCollection<V>,
	subtrahend: &IntervalCollection<V>,
) -> Result<IntervalCollection<V>, Error>
where
	V: OrderedValue + Clone,
{
	let points = collect_points(&[minuend, subtrahend])?;

	let mut inside_minuend = Openings::of(MINUEND);
	let mut inside_subtrahend = Openings::of(SUBTRAHEND);
	let mut result = ResultIntervals::new();

	for run in runs(&points) {
		let run = run?;
		let kept = inside_minuend.advance(run);
		let removed = inside_subtrahend.advance(run);

		result.push(run[0].value, kept.minus(removed));
	}

	Ok(result.finish())
}
