//! A module containing the crate's [`Error`] type and [`OverlapError`].

use thiserror::Error;

/// The error returned when a collection contains intervals that overlap each
/// other, either in range or by sharing an inclusive endpoint.
///
/// `first` and `second` are the positions, within the rejected collection,
/// of the two intervals found to overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input intervals overlap (intervals {first} and {second})")]
pub struct OverlapError {
	/// The position of the interval that was already open.
	pub first: usize,
	/// The position of the interval that collided with it.
	pub second: usize,
}

/// Every way an operation in this crate can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// One of the input collections failed validation.
	#[error(transparent)]
	Overlap(#[from] OverlapError),
	/// Two values of different kinds were compared.
	#[error("cannot compare a {left} value with a {right} value")]
	TypeMismatch {
		/// The kind of the left-hand value.
		left: &'static str,
		/// The kind of the right-hand value.
		right: &'static str,
	},
	/// A [`CiChar`](crate::value::CiChar) was built from something other
	/// than an ASCII letter.
	#[error("{0:?} is not an ASCII letter")]
	InvalidCharacter(char),
}

impl Error {
	/// Returns `true` if this is an [`Error::Overlap`].
	pub fn is_overlap(&self) -> bool {
		matches!(self, Error::Overlap(_))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn messages() {
		let overlap = Error::from(OverlapError {
			first: 0,
			second: 3,
		});

		assert!(overlap.is_overlap());
		assert_eq!(
			overlap.to_string(),
			"input intervals overlap (intervals 0 and 3)"
		);
		assert_eq!(
			Error::TypeMismatch {
				left: "float",
				right: "integer"
			}
			.to_string(),
			"cannot compare a float value with a integer value"
		);
		assert!(!Error::InvalidCharacter('1').is_overlap());
	}
}
