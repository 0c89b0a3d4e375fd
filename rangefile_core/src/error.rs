//! The error type shared by all range readers.

use crate::FileLocation;
use std::io::ErrorKind;
use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T, E = RangeFileError> = std::result::Result<T, E>;

/// Errors that can occur while opening or reading a location.
///
/// End-of-file is never an error: a window that starts at or beyond the end of the data
/// yields an empty result instead.
#[derive(Debug, Error)]
pub enum RangeFileError {
	/// The location does not resolve to an existing file.
	#[error("file {location} does not exist")]
	NotFound {
		location: String,
		#[source]
		source: std::io::Error,
	},

	/// The caller lacks the rights to open or read the file.
	#[error("permission denied for file {location}")]
	PermissionDenied {
		location: String,
		#[source]
		source: std::io::Error,
	},

	/// The location exists but cannot be read as a flat byte sequence.
	#[error("{location} is not a readable file: {reason}")]
	InvalidTarget { location: String, reason: String },

	/// Any other I/O failure, with the underlying diagnostic.
	#[error("I/O error on {location}: {source}")]
	Io {
		location: String,
		#[source]
		source: std::io::Error,
	},

	/// The reader was closed before the operation.
	#[error("reader for {location} is closed")]
	ClosedHandle { location: String },
}

impl RangeFileError {
	/// Maps an [`std::io::Error`] raised while accessing `location` onto the error taxonomy.
	pub fn from_io(location: &FileLocation, source: std::io::Error) -> Self {
		match source.kind() {
			ErrorKind::NotFound => RangeFileError::NotFound {
				location: location.to_string(),
				source,
			},
			ErrorKind::PermissionDenied => RangeFileError::PermissionDenied {
				location: location.to_string(),
				source,
			},
			ErrorKind::IsADirectory => RangeFileError::InvalidTarget {
				location: location.to_string(),
				reason: String::from("is a directory"),
			},
			ErrorKind::NotADirectory => RangeFileError::InvalidTarget {
				location: location.to_string(),
				reason: String::from("a path component is not a directory"),
			},
			_ => RangeFileError::Io {
				location: location.to_string(),
				source,
			},
		}
	}
}
