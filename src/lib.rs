//! This crate provides exact set algebra over [`IntervalCollection`]s:
//! [`union()`], [`subtract()`] and the overlap check [`validate()`] that
//! guards both.
//!
//! Every [`Interval`] carries its own begin and end inclusivity, so the
//! results are exact at the boundaries: `[0, 5)` and `[5, 10]` merge into
//! `[0, 10]`, `(0, 5)` and `(5, 10)` stay apart, and subtracting `(2, 21)`
//! from `[2, 21]` leaves the two single point intervals `[2, 2]` and
//! `[21, 21]`.
//!
//! ## Example
//!
//! ```rust
//! use interval_sweep::interval::{ee, ei, ie, ii};
//! use interval_sweep::{subtract, union, IntervalCollection};
//!
//! let a = IntervalCollection::from([ii(0, 10), ii(15, 20)]);
//! let b = IntervalCollection::from([ii(5, 18)]);
//!
//! assert_eq!(union(&a, &b), Ok(IntervalCollection::from([ii(0, 20)])));
//! assert_eq!(
//! 	subtract(&a, &b),
//! 	Ok(IntervalCollection::from([ie(0, 5), ei(18, 20)]))
//! );
//!
//! let c = IntervalCollection::from([ii(2, 21)]);
//! let d = IntervalCollection::from([ee(2, 21)]);
//!
//! assert_eq!(
//! 	subtract(&c, &d),
//! 	Ok(IntervalCollection::from([ii(2, 2), ii(21, 21)]))
//! );
//! ```
//!
//! # Values
//!
//! Intervals are generic over any type implementing [`OrderedValue`], a
//! fallible strict ordering. It is implemented for the primitive integers,
//! [`char`] and chrono's date and time types, as well as:
//!
//! - [`Tolerant`](value::Tolerant), an `f64` whose equality has a
//!   tolerance band of [`f64::EPSILON`]
//! - [`CiChar`](value::CiChar), an ASCII letter compared without regard to
//!   case
//! - [`Value`](value::Value), a closed sum of the above which reports
//!   [`Error::TypeMismatch`] instead of comparing two different kinds
//!
//! # How it works
//!
//! Each operation expands its inputs into the begin and end points of
//! every interval, sorts them once, and sweeps over them left to right one
//! value at a time. No intervals are stored between calls; every call
//! allocates a fresh result.
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the interval and value
//!   types.

#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub mod interval;
pub mod operation;
pub mod value;

pub(crate) mod point;

mod collection;
mod error;
mod validator;

pub use crate::collection::IntervalCollection;
pub use crate::error::{Error, OverlapError};
pub use crate::interval::{Inclusivity, Interval};
pub use crate::operation::{subtract, union};
pub use crate::validator::validate;
pub use crate::value::OrderedValue;
