use core::fmt;

use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CiChar, OrderedValue, Tolerant};
use crate::Error;

/// A value of one of the kinds this crate knows about.
///
/// Use [`Value`] when a single collection type has to carry different
/// kinds of value at runtime. Comparing two values of different kinds is an
/// error rather than a coercion, and it surfaces from whichever operation
/// triggered the comparison.
///
/// # Examples
/// ```
/// use interval_sweep::value::{OrderedValue, Value};
/// use interval_sweep::Error;
///
/// assert_eq!(Value::Integer(4).less_than(&Value::Integer(5)), Ok(true));
/// assert_eq!(
/// 	Value::Integer(4).less_than(&Value::from(5.0)),
/// 	Err(Error::TypeMismatch {
/// 		left: "integer",
/// 		right: "float"
/// 	})
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
	/// A whole number.
	Integer(i64),
	/// A float compared with a tolerance, see [`Tolerant`].
	Float(Tolerant),
	/// A calendar date and wall-clock time.
	DateTime(NaiveDateTime),
	/// A case-insensitive letter.
	Character(CiChar),
}

impl Value {
	/// The name of this value's kind, as used in [`Error::TypeMismatch`].
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Integer(_) => "integer",
			Value::Float(_) => "float",
			Value::DateTime(_) => "date-time",
			Value::Character(_) => "character",
		}
	}

	fn mismatch(&self, other: &Self) -> Error {
		Error::TypeMismatch {
			left: self.kind(),
			right: other.kind(),
		}
	}
}

impl OrderedValue for Value {
	fn greater_than(&self, other: &Self) -> Result<bool, Error> {
		match (self, other) {
			(Value::Integer(a), Value::Integer(b)) => a.greater_than(b),
			(Value::Float(a), Value::Float(b)) => a.greater_than(b),
			(Value::DateTime(a), Value::DateTime(b)) => a.greater_than(b),
			(Value::Character(a), Value::Character(b)) => a.greater_than(b),
			_ => Err(self.mismatch(other)),
		}
	}

	fn less_than(&self, other: &Self) -> Result<bool, Error> {
		match (self, other) {
			(Value::Integer(a), Value::Integer(b)) => a.less_than(b),
			(Value::Float(a), Value::Float(b)) => a.less_than(b),
			(Value::DateTime(a), Value::DateTime(b)) => a.less_than(b),
			(Value::Character(a), Value::Character(b)) => a.less_than(b),
			_ => Err(self.mismatch(other)),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}
impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Integer(i64::from(value))
	}
}
impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(Tolerant(value))
	}
}
impl From<Tolerant> for Value {
	fn from(value: Tolerant) -> Self {
		Value::Float(value)
	}
}
impl From<NaiveDateTime> for Value {
	fn from(value: NaiveDateTime) -> Self {
		Value::DateTime(value)
	}
}
impl From<CiChar> for Value {
	fn from(value: CiChar) -> Self {
		Value::Character(value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Integer(value) => value.fmt(f),
			Value::Float(value) => value.fmt(f),
			Value::DateTime(value) => value.fmt(f),
			Value::Character(value) => value.fmt(f),
		}
	}
}
