//! A module containing the [`OrderedValue`] trait and the value kinds this
//! crate ships with.
//!
//! The sweep only ever asks two questions of a value: is it greater than
//! another, and is it less than another. Two values are equal when neither
//! holds. Both questions are fallible so that a value kind can refuse to be
//! compared with a value of a different kind, see [`Value`].

use core::cmp::Ordering;

use crate::Error;

mod any;
mod character;
mod float;

pub use any::Value;
pub use character::CiChar;
pub use float::Tolerant;

/// A trait for values drawn from a totally ordered domain.
///
/// Implementors only need to provide [`greater_than()`] and [`less_than()`];
/// equality is derived from neither of them holding.
///
/// [`greater_than()`]: OrderedValue::greater_than
/// [`less_than()`]: OrderedValue::less_than
///
/// # Examples
/// ```
/// use interval_sweep::value::{OrderedValue, Tolerant};
///
/// assert_eq!(4_u8.greater_than(&2), Ok(true));
/// assert_eq!(Tolerant(0.1 + 0.2).is_equal(&Tolerant(0.3)), Ok(true));
/// ```
pub trait OrderedValue {
	/// Returns whether `self` is strictly greater than `other`.
	///
	/// Fails with [`Error::TypeMismatch`] if the two values cannot be
	/// compared.
	fn greater_than(&self, other: &Self) -> Result<bool, Error>;

	/// Returns whether `self` is strictly less than `other`.
	///
	/// Fails with [`Error::TypeMismatch`] if the two values cannot be
	/// compared.
	fn less_than(&self, other: &Self) -> Result<bool, Error>;

	/// Orders `self` against `other` using [`greater_than()`] then
	/// [`less_than()`].
	///
	/// [`greater_than()`]: OrderedValue::greater_than
	/// [`less_than()`]: OrderedValue::less_than
	fn try_cmp(&self, other: &Self) -> Result<Ordering, Error> {
		if self.greater_than(other)? {
			Ok(Ordering::Greater)
		} else if self.less_than(other)? {
			Ok(Ordering::Less)
		} else {
			Ok(Ordering::Equal)
		}
	}

	/// Returns whether `self` is neither greater nor less than `other`.
	fn is_equal(&self, other: &Self) -> Result<bool, Error> {
		Ok(self.try_cmp(other)?.is_eq())
	}
}

macro_rules! ord_value {
    () => {};
	($ident:ty, $($t:tt)*) => {
		impl OrderedValue for $ident {
			fn greater_than(&self, other: &Self) -> Result<bool, Error> {
				Ok(self > other)
			}
			fn less_than(&self, other: &Self) -> Result<bool, Error> {
				Ok(self < other)
			}
		}

        ord_value!($($t)*);
	};
}

ord_value!(
	u8,
	i8,
	u16,
	i16,
	u32,
	i32,
	u64,
	i64,
	u128,
	i128,
	usize,
	isize,
	char,
	chrono::NaiveDate,
	chrono::NaiveTime,
	chrono::NaiveDateTime,
);

impl<Tz> OrderedValue for chrono::DateTime<Tz>
where
	Tz: chrono::TimeZone,
{
	fn greater_than(&self, other: &Self) -> Result<bool, Error> {
		Ok(self > other)
	}
	fn less_than(&self, other: &Self) -> Result<bool, Error> {
		Ok(self < other)
	}
}

#[cfg(test)]
mod tests {
	use chrono::{NaiveDate, TimeZone, Utc};
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn primitive_ordering() {
		assert_eq!(3_i32.try_cmp(&7), Ok(Ordering::Less));
		assert_eq!((-3_i64).try_cmp(&-7), Ok(Ordering::Greater));
		assert_eq!(5_u8.is_equal(&5), Ok(true));
		assert_eq!('a'.less_than(&'b'), Ok(true));
	}

	#[test]
	fn dates_and_date_times() {
		let morning = NaiveDate::from_ymd_opt(2021, 12, 8)
			.unwrap()
			.and_hms_opt(6, 0, 0)
			.unwrap();
		let evening = NaiveDate::from_ymd_opt(2021, 12, 8)
			.unwrap()
			.and_hms_opt(18, 0, 0)
			.unwrap();
		assert_eq!(morning.try_cmp(&evening), Ok(Ordering::Less));
		assert_eq!(morning.date().is_equal(&evening.date()), Ok(true));

		let utc_morning = Utc.from_utc_datetime(&morning);
		let utc_evening = Utc.from_utc_datetime(&evening);
		assert_eq!(utc_evening.greater_than(&utc_morning), Ok(true));
	}
}
