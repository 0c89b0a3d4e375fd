//! This module provides the [`Blob`] struct, the immutable byte sequence returned by every read.
//!
//! # Examples
//!
//! ```rust
//! use rangefile_core::Blob;
//!
//! let blob = Blob::from("ABCDEFGHIJ");
//! assert_eq!(blob.len(), 10);
//! assert_eq!(blob.range(2..5), b"CDE");
//! assert_eq!(blob.to_string_lossy(), "ABCDEFGHIJ");
//! ```

use std::{borrow::Cow, fmt::Debug, ops::Range};

/// A simple wrapper around [`Vec<u8>`] holding exactly the bytes that were read.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	///
	/// ```rust
	/// use rangefile_core::Blob;
	///
	/// let empty_blob = Blob::new_empty();
	/// assert_eq!(empty_blob.len(), 0);
	/// assert!(empty_blob.is_empty());
	/// ```
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns a byte slice from the specified `range`.
	///
	/// # Panics
	///
	/// Panics if the specified range is out of bounds.
	#[must_use]
	pub fn range(&self, range: Range<usize>) -> &[u8] {
		&self.0[range]
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Consumes this [`Blob`] and returns the underlying `Vec<u8>`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the bytes as text. Invalid UTF-8 sequences are replaced with `U+FFFD`.
	///
	/// ```rust
	/// use rangefile_core::Blob;
	///
	/// assert_eq!(Blob::from("Xylofön").to_string_lossy(), "Xylofön");
	/// assert_eq!(Blob::from(vec![0x41, 0xff]).to_string_lossy(), "A\u{fffd}");
	/// ```
	#[must_use]
	pub fn to_string_lossy(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Returns a hexadecimal string representation of the bytes, separated by spaces.
	///
	/// ```rust
	/// use rangefile_core::Blob;
	///
	/// let blob = Blob::from(vec![0xDE, 0xAD, 0xBE, 0xEF]);
	/// assert_eq!(blob.as_hex(), "de ad be ef");
	/// ```
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Returns the number of bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	/// Returns `true` if no bytes were read.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(item: String) -> Self {
		Blob(item.into_bytes())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for Blob {
	/// Shows the length and at most the first 16 bytes.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		const PREVIEW: usize = 16;
		let preview = Blob::from(&self.0[..self.0.len().min(PREVIEW)]);
		let ellipsis = if self.0.len() > PREVIEW { " ..." } else { "" };
		write!(f, "Blob({}): {}{ellipsis}", self.0.len(), preview.as_hex())
	}
}
