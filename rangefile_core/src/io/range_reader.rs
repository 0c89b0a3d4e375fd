//! This module defines the `RangeReaderTrait`, the interface shared by all range readers.
//!
//! # Overview
//!
//! A range reader serves windows of bytes described by a [`ByteRange`]. Windows are clamped to the
//! data that exists when the read happens: a window reaching past the end is truncated, and a
//! window starting at or after the end yields an empty [`Blob`]. Neither case is an error.
//!
//! Readers move through the states *open* and *closed*. Closing is idempotent, and reading from a
//! closed reader fails with [`RangeFileError::ClosedHandle`](crate::RangeFileError::ClosedHandle).
//!
//! # Examples
//!
//! ```rust
//! use rangefile_core::{io::{RangeReader, RangeReaderBlob}, ByteRange, RangeFileError};
//!
//! let mut reader: RangeReader = Box::new(RangeReaderBlob::from("ABCDEFGHIJ"));
//!
//! let window = reader.read_range(&ByteRange::new(8, 10)).unwrap();
//! assert_eq!(window.as_slice(), b"IJ");
//!
//! reader.close();
//! let error = reader.read_all().unwrap_err();
//! assert!(matches!(error, RangeFileError::ClosedHandle { .. }));
//! ```

use crate::{Blob, ByteRange, Result};
use std::fmt::Debug;

/// Type alias for a boxed dynamic implementation of the `RangeReaderTrait`.
pub type RangeReader = Box<dyn RangeReaderTrait>;

/// A trait for reading byte windows from a single, fixed data source.
///
/// Reads take `&mut self`: a reader has no internal synchronization, so concurrent reads on one
/// instance are ruled out by the borrow checker. Independent readers over the same source are fine.
pub trait RangeReaderTrait: Debug + Send {
	/// Reads the bytes inside `range`, truncated at the end of the data.
	///
	/// # Errors
	///
	/// Fails if the reader is closed or the underlying source reports an error.
	fn read_range(&mut self, range: &ByteRange) -> Result<Blob>;

	/// Reads everything from offset 0 to the end of the data.
	fn read_all(&mut self) -> Result<Blob> {
		self.read_range(&ByteRange::new(0, u64::MAX))
	}

	/// Gets the name of the data source.
	fn get_name(&self) -> &str;

	/// Releases the underlying resource. Calling it again is a no-op.
	fn close(&mut self);

	/// Returns `true` once [`close`](RangeReaderTrait::close) has been called.
	fn is_closed(&self) -> bool;
}
