//! This module provides [`FileLocation`], the immutable reference to the file a reader binds to.
//!
//! A location is either a plain filesystem path or a `file://` URI. Building a location never
//! touches the filesystem; whether it resolves is decided when it is opened.
//!
//! # Examples
//!
//! ```rust
//! use rangefile_core::FileLocation;
//! use std::path::Path;
//!
//! let location: FileLocation = "file:///tmp/my%20data.bin".parse().unwrap();
//! assert_eq!(location.as_path(), Path::new("/tmp/my data.bin"));
//!
//! let location = FileLocation::parse("relative/data.bin").unwrap();
//! assert_eq!(location.as_path(), Path::new("relative/data.bin"));
//!
//! assert!(FileLocation::parse("https://example.org/data.bin").is_err());
//! ```

use crate::{RangeFileError, Result};
use percent_encoding::percent_decode_str;
use std::{
	fmt,
	path::{Path, PathBuf},
	str::FromStr,
};

/// An opaque, immutable reference to a file on the host system.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FileLocation {
	path: PathBuf,
}

impl FileLocation {
	/// Wraps a filesystem path as given, without resolving it.
	pub fn from_path(path: impl AsRef<Path>) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
		}
	}

	/// Parses a plain path or a `file://` URI.
	///
	/// `file` URIs may carry an empty host or `localhost`. Their path is percent-decoded and any
	/// query or fragment is dropped. URIs with any other scheme are rejected.
	///
	/// # Errors
	///
	/// Returns [`RangeFileError::InvalidTarget`] for URIs that cannot refer to a local file.
	pub fn parse(location: &str) -> Result<Self> {
		let Some((scheme, rest)) = split_scheme(location) else {
			return Ok(Self::from_path(location));
		};

		let invalid = |reason: &str| RangeFileError::InvalidTarget {
			location: location.to_owned(),
			reason: reason.to_owned(),
		};

		if !scheme.eq_ignore_ascii_case("file") {
			return Err(invalid(&format!("unsupported URI scheme '{scheme}'")));
		}

		let rest = rest.split(['?', '#']).next().unwrap_or_default();
		let path = match rest.find('/') {
			Some(0) => rest,
			Some(index) if rest[..index].eq_ignore_ascii_case("localhost") => &rest[index..],
			Some(_) => return Err(invalid("file URIs must not name a remote host")),
			None => return Err(invalid("file URI has no path")),
		};

		let path = percent_decode_str(path)
			.decode_utf8()
			.map_err(|_| invalid("file URI path is not valid UTF-8"))?;

		Ok(Self::from_path(strip_drive_slash(&path)))
	}

	/// The filesystem path this location refers to.
	pub fn as_path(&self) -> &Path {
		&self.path
	}
}

/// Splits `scheme://rest`, if the prefix is a syntactically valid URI scheme.
fn split_scheme(location: &str) -> Option<(&str, &str)> {
	let (scheme, rest) = location.split_once("://")?;
	let mut chars = scheme.chars();
	let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
	valid.then_some((scheme, rest))
}

/// `file:///C:/data` names `C:/data` on Windows.
#[cfg(windows)]
fn strip_drive_slash(path: &str) -> &str {
	let bytes = path.as_bytes();
	if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
		&path[1..]
	} else {
		path
	}
}

#[cfg(not(windows))]
fn strip_drive_slash(path: &str) -> &str {
	path
}

impl FromStr for FileLocation {
	type Err = RangeFileError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl From<&Path> for FileLocation {
	fn from(path: &Path) -> Self {
		Self::from_path(path)
	}
}

impl From<PathBuf> for FileLocation {
	fn from(path: PathBuf) -> Self {
		Self { path }
	}
}

impl AsRef<Path> for FileLocation {
	fn as_ref(&self) -> &Path {
		&self.path
	}
}

impl fmt::Display for FileLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path.display())
	}
}
