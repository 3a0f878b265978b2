//! A module containing [`Interval`], [`Inclusivity`] and the interval
//! constructor functions.
//!
//! The constructor functions are named after the inclusivity of the begin
//! then the end of the interval they make: `i` for inclusive and `e` for
//! exclusive, so [`ie()`] makes a `[begin, end)` interval.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::OrderedValue;
use crate::Error;

/// Whether each end of an [`Interval`] is part of the interval.
///
/// All four combinations are legal and distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inclusivity {
	/// Whether the begin value is part of the interval.
	pub begin: bool,
	/// Whether the end value is part of the interval.
	pub end: bool,
}

impl Inclusivity {
	/// Both ends included, `[begin, end]`.
	pub const CLOSED: Self = Inclusivity {
		begin: true,
		end: true,
	};
	/// Neither end included, `(begin, end)`.
	pub const OPEN: Self = Inclusivity {
		begin: false,
		end: false,
	};
	/// Only the begin included, `[begin, end)`.
	pub const BEGIN: Self = Inclusivity {
		begin: true,
		end: false,
	};
	/// Only the end included, `(begin, end]`.
	pub const END: Self = Inclusivity {
		begin: false,
		end: true,
	};
}

impl Default for Inclusivity {
	fn default() -> Self {
		Inclusivity::CLOSED
	}
}

/// A contiguous range of values between `begin` and `end`, with each end
/// independently included or excluded.
///
/// Intervals are immutable once made. Nothing checks that `begin` is not
/// after `end` here; [`validate()`](crate::validate) rejects such an
/// interval before any operation uses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<V> {
	begin: V,
	end: V,
	inclusivity: Inclusivity,
}

impl<V> Interval<V> {
	/// Makes a new [`Interval`].
	///
	/// # Examples
	/// ```
	/// use interval_sweep::interval::{ie, Inclusivity, Interval};
	///
	/// assert_eq!(Interval::new(0, 5, Inclusivity::BEGIN), ie(0, 5));
	/// ```
	pub fn new(begin: V, end: V, inclusivity: Inclusivity) -> Self {
		Interval {
			begin,
			end,
			inclusivity,
		}
	}

	/// Makes a new [`Interval`] including both ends.
	pub fn closed(begin: V, end: V) -> Self {
		Interval::new(begin, end, Inclusivity::CLOSED)
	}

	/// The value the interval starts at.
	pub fn begin(&self) -> &V {
		&self.begin
	}

	/// The value the interval ends at.
	pub fn end(&self) -> &V {
		&self.end
	}

	/// The inclusivity of both ends.
	pub fn inclusivity(&self) -> Inclusivity {
		self.inclusivity
	}

	/// Whether [`begin()`](Interval::begin) is part of the interval.
	pub fn is_begin_inclusive(&self) -> bool {
		self.inclusivity.begin
	}

	/// Whether [`end()`](Interval::end) is part of the interval.
	pub fn is_end_inclusive(&self) -> bool {
		self.inclusivity.end
	}
}

impl<V> Interval<V>
where
	V: OrderedValue,
{
	/// Returns `true` if `value` lies within the interval.
	///
	/// # Examples
	/// ```
	/// use interval_sweep::interval::{ei, ie};
	///
	/// assert_eq!(ie(0, 5).contains(&0), Ok(true));
	/// assert_eq!(ie(0, 5).contains(&5), Ok(false));
	/// assert_eq!(ei(0, 5).contains(&0), Ok(false));
	/// ```
	pub fn contains(&self, value: &V) -> Result<bool, Error> {
		let after_begin = if self.inclusivity.begin {
			!value.less_than(&self.begin)?
		} else {
			value.greater_than(&self.begin)?
		};
		let before_end = if self.inclusivity.end {
			!value.greater_than(&self.end)?
		} else {
			value.less_than(&self.end)?
		};

		Ok(after_begin && before_end)
	}

	/// Returns `true` if the interval is a single value, `[v, v]`.
	pub fn is_degenerate(&self) -> Result<bool, Error> {
		Ok(self.inclusivity == Inclusivity::CLOSED
			&& self.begin.is_equal(&self.end)?)
	}
}

impl<V> fmt::Display for Interval<V>
where
	V: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.inclusivity.begin { '[' } else { '(' };
		let close = if self.inclusivity.end { ']' } else { ')' };
		write!(f, "{open}{}, {}{close}", self.begin, self.end)
	}
}

/// A `[x1, x2]` interval.
pub fn ii<V>(x1: V, x2: V) -> Interval<V> {
	Interval::new(x1, x2, Inclusivity::CLOSED)
}
/// A `[x1, x2)` interval.
pub fn ie<V>(x1: V, x2: V) -> Interval<V> {
	Interval::new(x1, x2, Inclusivity::BEGIN)
}
/// A `(x1, x2]` interval.
pub fn ei<V>(x1: V, x2: V) -> Interval<V> {
	Interval::new(x1, x2, Inclusivity::END)
}
/// A `(x1, x2)` interval.
pub fn ee<V>(x1: V, x2: V) -> Interval<V> {
	Interval::new(x1, x2, Inclusivity::OPEN)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn contains_honours_inclusivity() {
		for (interval, expected) in [
			(ii(2, 4), [false, true, true, true, false]),
			(ie(2, 4), [false, true, true, false, false]),
			(ei(2, 4), [false, false, true, true, false]),
			(ee(2, 4), [false, false, true, false, false]),
		] {
			let actual = [1, 2, 3, 4, 5].map(|x| interval.contains(&x).unwrap());
			assert_eq!(actual, expected, "{interval}");
		}
	}

	#[test]
	fn degenerate() {
		assert_eq!(ii(7, 7).is_degenerate(), Ok(true));
		assert_eq!(ie(7, 7).is_degenerate(), Ok(false));
		assert_eq!(ii(7, 8).is_degenerate(), Ok(false));
	}

	#[test]
	fn display() {
		assert_eq!(ii(1, 2).to_string(), "[1, 2]");
		assert_eq!(ie(1, 2).to_string(), "[1, 2)");
		assert_eq!(ei(1, 2).to_string(), "(1, 2]");
		assert_eq!(ee(1, 2).to_string(), "(1, 2)");
	}

	#[test]
	fn accessors() {
		let interval = Interval::new('a', 'z', Inclusivity::END);
		assert_eq!(interval.begin(), &'a');
		assert_eq!(interval.end(), &'z');
		assert!(!interval.is_begin_inclusive());
		assert!(interval.is_end_inclusive());
		assert_eq!(Interval::closed(1, 2), ii(1, 2));
		assert_eq!(Inclusivity::default(), Inclusivity::CLOSED);
	}
}
