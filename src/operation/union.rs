use crate::point::{collect_points, runs};
use crate::value::OrderedValue;
use crate::{Error, IntervalCollection};

use super::{Openings, ResultIntervals};

const A: usize = 0;
const B: usize = 1;

/// Covers each run of equal-valued points wherever either input covers it.
///
/// Two inputs meeting at a value cover it if either includes it, so a touch
/// with at least one closed side merges into a single interval.
pub(super) fn sweep<V>(
	a: &IntervalCollection<V>,
	b: &IntervalCollection<V>,
) -> Result<IntervalCollection<V>, Error>
where
	V: OrderedValue + Clone,
{
	let points = collect_points(&[a, b])?;

	let mut a = Openings::of(A);
	let mut b = Openings::of(B);
	let mut result = ResultIntervals::new();

	for run in runs(&points) {
		let run = run?;
		let cover = a.advance(run).or(b.advance(run));

		result.push(run[0].value, cover);
	}

	Ok(result.finish())
}
