//! This module provides the `ByteRange` struct, a window of `length` bytes starting at `offset`.
//!
//! # Examples
//!
//! ```rust
//! use rangefile_core::types::ByteRange;
//!
//! let range = ByteRange::new(8, 10);
//! assert_eq!(range.end(), 18);
//! assert_eq!(range.clamp_to(10), ByteRange::new(8, 2));
//! assert_eq!("8,10".parse::<ByteRange>().unwrap(), range);
//! ```

use std::{fmt, ops::Range, str::FromStr};
use thiserror::Error;

/// A window of bytes, described by its starting offset and its length.
///
/// The window is a request: readers serve as much of it as the data actually holds.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct ByteRange {
	/// The starting offset of the byte range.
	pub offset: u64,
	/// The length of the byte range.
	pub length: u64,
}

impl ByteRange {
	/// Creates a new `ByteRange` with the specified offset and length.
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	/// Creates an empty `ByteRange` with zero offset and length.
	pub fn empty() -> Self {
		Self { offset: 0, length: 0 }
	}

	/// Returns `true` if the window asks for no bytes at all.
	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	/// The exclusive end of the window. Saturates at `u64::MAX` instead of overflowing.
	pub fn end(&self) -> u64 {
		self.offset.saturating_add(self.length)
	}

	/// Returns the part of this window that lies inside data of `len` bytes.
	///
	/// Windows starting at or beyond `len` become empty windows at `len`.
	///
	/// # Arguments
	///
	/// * `len` - The total length of the data.
	pub fn clamp_to(&self, len: u64) -> Self {
		let offset = self.offset.min(len);
		Self {
			offset,
			length: self.end().min(len) - offset,
		}
	}

	/// Converts the `ByteRange` to a `Range<usize>`.
	pub fn as_range_usize(&self) -> Range<usize> {
		Range {
			start: self.offset as usize,
			end: self.end() as usize,
		}
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}

impl fmt::Display for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}..{}", self.offset, self.end())
	}
}

/// Returned when a string is neither `OFFSET,LENGTH` nor `OFFSET..END`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid byte range '{0}', expected OFFSET,LENGTH or OFFSET..END")]
pub struct ParseByteRangeError(String);

impl FromStr for ByteRange {
	type Err = ParseByteRangeError;

	/// Parses `OFFSET,LENGTH` (e.g. `8,10`) or `OFFSET..END` (e.g. `8..18`).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let error = || ParseByteRangeError(s.to_owned());
		let number = |v: &str| v.trim().parse::<u64>().map_err(|_| error());

		if let Some((offset, length)) = s.split_once(',') {
			Ok(ByteRange::new(number(offset)?, number(length)?))
		} else if let Some((start, end)) = s.split_once("..") {
			let (start, end) = (number(start)?, number(end)?);
			if end < start {
				return Err(error());
			}
			Ok(ByteRange::new(start, end - start))
		} else {
			Err(error())
		}
	}
}
