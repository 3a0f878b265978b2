use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::OrderedValue;
use crate::Error;

/// A floating point value whose equality is "within [`Tolerant::EPSILON`]".
///
/// Note that this ordering is not transitive near the edge of the band:
/// `a` may equal `b` and `b` equal `c` while `a` is still less than `c`.
/// Collections built from values spaced wider than the band are unaffected.
///
/// NaN is neither greater nor less than anything, so it equals every value.
/// An interval bounded by NaN touches every other interval at that end and
/// usually fails validation with a spurious overlap. Keep NaN out of
/// collections.
///
/// # Examples
/// ```
/// use interval_sweep::value::{OrderedValue, Tolerant};
///
/// assert_eq!(Tolerant(0.2).less_than(&Tolerant(0.201)), Ok(true));
/// assert_eq!(Tolerant(1.0).is_equal(&Tolerant(1.0 + f64::EPSILON / 2.0)), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerant(pub f64);

impl Tolerant {
	/// The width of the equality band.
	pub const EPSILON: f64 = f64::EPSILON;
}

impl OrderedValue for Tolerant {
	fn greater_than(&self, other: &Self) -> Result<bool, Error> {
		Ok(self.0 - other.0 > Self::EPSILON)
	}

	fn less_than(&self, other: &Self) -> Result<bool, Error> {
		let difference = self.0 - other.0;
		Ok(difference.abs() > Self::EPSILON && difference < Self::EPSILON)
	}
}

impl From<f64> for Tolerant {
	fn from(value: f64) -> Self {
		Tolerant(value)
	}
}

impl fmt::Display for Tolerant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use core::cmp::Ordering;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn band_equality() {
		let half = Tolerant::EPSILON / 2.0;
		assert_eq!(Tolerant(0.5).try_cmp(&Tolerant(0.5 + half)), Ok(Ordering::Equal));
		assert_eq!(Tolerant(0.5 + half).try_cmp(&Tolerant(0.5)), Ok(Ordering::Equal));
		assert_eq!(Tolerant(-6.05).try_cmp(&Tolerant(2.05)), Ok(Ordering::Less));
		assert_eq!(Tolerant(2.05).try_cmp(&Tolerant(-6.05)), Ok(Ordering::Greater));
	}

	#[test]
	fn nan_equals_everything() {
		let nan = Tolerant(f64::NAN);
		assert_eq!(nan.is_equal(&Tolerant(1.0)), Ok(true));
		assert_eq!(Tolerant(-3.5).is_equal(&nan), Ok(true));
	}

	#[test]
	fn band_is_not_transitive() {
		let a = Tolerant(0.0);
		let b = Tolerant(Tolerant::EPSILON * 0.75);
		let c = Tolerant(Tolerant::EPSILON * 1.5);
		assert_eq!(a.is_equal(&b), Ok(true));
		assert_eq!(b.is_equal(&c), Ok(true));
		assert_eq!(a.is_equal(&c), Ok(false));
	}
}
