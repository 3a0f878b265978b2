use core::fmt;
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::OrderedValue;
use crate::Error;

/// A case-insensitive ASCII letter, `'a'` and `'A'` are equal.
///
/// Equality and hashing ignore case as well, matching the ordering. The
/// case the letter was made with is kept for display.
///
/// # Examples
/// ```
/// use interval_sweep::value::{CiChar, OrderedValue};
///
/// let lower = CiChar::new('g').unwrap();
/// let upper = CiChar::new('G').unwrap();
///
/// assert_eq!(lower.is_equal(&upper), Ok(true));
/// assert!(CiChar::new('7').is_err());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct CiChar(char);

impl CiChar {
	/// Makes a new [`CiChar`], failing with [`Error::InvalidCharacter`] if
	/// `character` is not an ASCII letter.
	pub fn new(character: char) -> Result<Self, Error> {
		if character.is_ascii_alphabetic() {
			Ok(CiChar(character))
		} else {
			Err(Error::InvalidCharacter(character))
		}
	}

	/// The letter as it was given.
	pub fn get(&self) -> char {
		self.0
	}

	fn folded(&self) -> char {
		self.0.to_ascii_uppercase()
	}
}

impl PartialEq for CiChar {
	fn eq(&self, other: &Self) -> bool {
		self.folded() == other.folded()
	}
}
impl Eq for CiChar {}

impl Hash for CiChar {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.folded().hash(state);
	}
}

impl OrderedValue for CiChar {
	fn greater_than(&self, other: &Self) -> Result<bool, Error> {
		Ok(self.folded() > other.folded())
	}

	fn less_than(&self, other: &Self) -> Result<bool, Error> {
		Ok(self.folded() < other.folded())
	}
}

impl TryFrom<char> for CiChar {
	type Error = Error;

	fn try_from(character: char) -> Result<Self, Self::Error> {
		CiChar::new(character)
	}
}

impl From<CiChar> for char {
	fn from(character: CiChar) -> Self {
		character.0
	}
}

impl fmt::Display for CiChar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use core::cmp::Ordering;
	use std::collections::hash_map::DefaultHasher;

	use pretty_assertions::{assert_eq, assert_ne};

	use super::*;

	fn c(character: char) -> CiChar {
		CiChar::new(character).unwrap()
	}

	#[test]
	fn ordering_ignores_case() {
		assert_eq!(c('a').try_cmp(&c('Y')), Ok(Ordering::Less));
		assert_eq!(c('z').try_cmp(&c('C')), Ok(Ordering::Greater));
		assert_eq!(c('q').try_cmp(&c('Q')), Ok(Ordering::Equal));
	}

	#[test]
	fn equality_and_hash_ignore_case() {
		let hash = |character: CiChar| {
			let mut hasher = DefaultHasher::new();
			character.hash(&mut hasher);
			hasher.finish()
		};

		assert_eq!(c('q'), c('Q'));
		assert_ne!(c('q'), c('r'));
		assert_eq!(hash(c('q')), hash(c('Q')));
		assert_eq!(c('Q').to_string(), "Q");
	}

	#[test]
	fn rejects_non_letters() {
		assert_eq!(CiChar::new('1'), Err(Error::InvalidCharacter('1')));
		assert_eq!(CiChar::try_from('é'), Err(Error::InvalidCharacter('é')));
		assert_eq!(c('x').get(), 'x');
	}
}
