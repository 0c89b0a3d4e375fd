//! This module provides [`RangeFileReader`], which reads byte windows from a file.
//!
//! # Overview
//!
//! A `RangeFileReader` binds to one file when it is opened and keeps that handle until it is
//! closed or dropped. Every read seeks to an absolute offset, so reads do not depend on each other.
//! Nothing is cached: each read sees the file as it is at call time.
//!
//! # Examples
//!
//! ```rust
//! use rangefile_core::{io::RangeFileReader, FileLocation, RangeFileError};
//! # fn main() -> Result<(), RangeFileError> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("letters.txt");
//! # std::fs::write(&path, "ABCDEFGHIJ").unwrap();
//! let mut reader = RangeFileReader::open(FileLocation::from_path(&path))?;
//!
//! assert_eq!(reader.read(0, 4)?.as_slice(), b"ABCD");
//! assert_eq!(reader.read(8, 10)?.as_slice(), b"IJ");
//! assert!(reader.read(10, 5)?.is_empty());
//! assert!(reader.read(3, 0)?.is_empty());
//!
//! reader.close();
//! assert!(matches!(reader.read(0, 4), Err(RangeFileError::ClosedHandle { .. })));
//! # Ok(())
//! # }
//! ```

use super::RangeReaderTrait;
use crate::{Blob, ByteRange, FileLocation, RangeFileError, Result};
use log::trace;
use std::{
	fs::File,
	io::{Read, Seek, SeekFrom},
};

/// Upper bound for the buffer reserved up front. Longer windows grow the buffer as data arrives.
const PREALLOCATION_LIMIT: u64 = 8 * 1024 * 1024;

/// Reads arbitrary byte windows from one file.
#[derive(Debug)]
pub struct RangeFileReader {
	location: FileLocation,
	name: String,
	file: Option<File>,
}

impl RangeFileReader {
	/// Opens the file at `location`.
	///
	/// The location is not checked beforehand; whatever the operating system reports is mapped onto
	/// [`RangeFileError`]. A handle that turns out to refer to something other than a regular file
	/// is released before the error is returned.
	///
	/// # Errors
	///
	/// * [`RangeFileError::NotFound`] if nothing exists at `location`.
	/// * [`RangeFileError::PermissionDenied`] if the file may not be read.
	/// * [`RangeFileError::InvalidTarget`] if `location` is a directory or another non-regular file.
	/// * [`RangeFileError::Io`] for any other failure.
	pub fn open(location: impl Into<FileLocation>) -> Result<RangeFileReader> {
		let location = location.into();
		let name = location.to_string();

		// Opening a FIFO blocks until a writer shows up, so non-regular files are rejected first.
		match std::fs::metadata(location.as_path()) {
			Ok(metadata) if !metadata.is_file() => return Err(not_a_file(&name)),
			_ => {}
		}

		let file = File::open(location.as_path()).map_err(|error| {
			// Windows refuses to open directories instead of reporting them as such.
			if location.as_path().is_dir() {
				not_a_file(&name)
			} else {
				RangeFileError::from_io(&location, error)
			}
		})?;

		let metadata = file
			.metadata()
			.map_err(|error| RangeFileError::from_io(&location, error))?;
		if !metadata.is_file() {
			return Err(not_a_file(&name));
		}

		trace!("opened {name}");

		Ok(RangeFileReader {
			location,
			name,
			file: Some(file),
		})
	}

	/// Reads up to `count` bytes starting at the absolute `offset`.
	///
	/// Returns fewer than `count` bytes only if the window reaches past the end of the file, and an
	/// empty [`Blob`] if `offset` is at or beyond the end or `count` is zero.
	///
	/// # Errors
	///
	/// * [`RangeFileError::ClosedHandle`] after [`close`](RangeFileReader::close).
	/// * [`RangeFileError::Io`] if seeking or reading fails. Failures are not retried.
	pub fn read(&mut self, offset: u64, count: u64) -> Result<Blob> {
		self.read_range(&ByteRange::new(offset, count))
	}

	/// Releases the file handle. Later reads fail with [`RangeFileError::ClosedHandle`].
	///
	/// Calling it more than once is a no-op. Dropping the reader closes it as well.
	pub fn close(&mut self) {
		if self.file.take().is_some() {
			trace!("closed {}", self.name);
		}
	}

	/// Returns `true` once the reader has been closed.
	pub fn is_closed(&self) -> bool {
		self.file.is_none()
	}

	/// The location this reader was opened with.
	pub fn location(&self) -> &FileLocation {
		&self.location
	}

	fn io_error(&self, source: std::io::Error) -> RangeFileError {
		RangeFileError::Io {
			location: self.name.clone(),
			source,
		}
	}
}

impl RangeReaderTrait for RangeFileReader {
	fn read_range(&mut self, range: &ByteRange) -> Result<Blob> {
		let Some(file) = self.file.as_mut() else {
			return Err(RangeFileError::ClosedHandle {
				location: self.name.clone(),
			});
		};

		if range.is_empty() {
			return Ok(Blob::new_empty());
		}

		// lseek rejects offsets past the largest possible file size, so look at the current length.
		let len = match file.metadata() {
			Ok(metadata) => metadata.len(),
			Err(error) => return Err(self.io_error(error)),
		};
		if range.offset >= len {
			return Ok(Blob::new_empty());
		}

		let result = file.seek(SeekFrom::Start(range.offset)).and_then(|_| {
			let mut buffer = Vec::with_capacity(range.length.min(PREALLOCATION_LIMIT) as usize);
			file.take(range.length).read_to_end(&mut buffer)?;
			Ok(buffer)
		});

		match result {
			Ok(buffer) => {
				trace!("read {} of {range:?} from {}", buffer.len(), self.name);
				Ok(Blob::from(buffer))
			}
			Err(error) => Err(self.io_error(error)),
		}
	}

	fn get_name(&self) -> &str {
		&self.name
	}

	fn close(&mut self) {
		RangeFileReader::close(self);
	}

	fn is_closed(&self) -> bool {
		RangeFileReader::is_closed(self)
	}
}

fn not_a_file(name: &str) -> RangeFileError {
	RangeFileError::InvalidTarget {
		location: name.to_owned(),
		reason: String::from("not a regular file"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assert_display_matches;
	use anyhow::Result;
	use assert_fs::{NamedTempFile, TempDir, prelude::*};
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::{fs::OpenOptions, io::Write};

	fn letters() -> Result<NamedTempFile> {
		let file = NamedTempFile::new("letters.txt")?;
		file.write_str("ABCDEFGHIJ")?;
		Ok(file)
	}

	#[test]
	fn open() -> Result<()> {
		let file = letters()?;
		let reader = RangeFileReader::open(file.path())?;
		assert!(!reader.is_closed());
		assert_display_matches!(reader.get_name(), "*letters.txt");
		assert_eq!(reader.location().as_path(), file.path());
		Ok(())
	}

	#[test]
	fn open_missing_file() -> Result<()> {
		let missing = NamedTempFile::new("missing.txt")?;
		let error = RangeFileReader::open(missing.path()).unwrap_err();
		assert!(matches!(error, RangeFileError::NotFound { .. }));
		assert_display_matches!(error, "file *missing.txt does not exist");
		Ok(())
	}

	#[test]
	fn open_directory() -> Result<()> {
		let dir = TempDir::new()?;
		let error = RangeFileReader::open(dir.path()).unwrap_err();
		assert!(matches!(error, RangeFileError::InvalidTarget { .. }));
		assert_display_matches!(error, "* is not a readable file: not a regular file");
		Ok(())
	}

	#[test]
	fn open_below_a_file() -> Result<()> {
		let file = letters()?;
		let error = RangeFileReader::open(file.path().join("child")).unwrap_err();
		assert!(matches!(
			error,
			RangeFileError::InvalidTarget { .. } | RangeFileError::NotFound { .. }
		));
		Ok(())
	}

	#[cfg(unix)]
	#[test]
	fn open_without_permission() -> Result<()> {
		use std::os::unix::fs::PermissionsExt;

		let file = letters()?;
		std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o000))?;

		// Privileged users ignore file modes.
		if File::open(file.path()).is_ok() {
			return Ok(());
		}

		let error = RangeFileReader::open(file.path()).unwrap_err();
		assert!(matches!(error, RangeFileError::PermissionDenied { .. }));
		Ok(())
	}

	#[cfg(unix)]
	#[test]
	fn open_fifo() -> Result<()> {
		use std::{process::Command, sync::mpsc, thread, time::Duration};

		let dir = TempDir::new()?;
		let fifo = dir.path().join("pipe");
		let Ok(status) = Command::new("mkfifo").arg(&fifo).status() else {
			return Ok(());
		};
		assert!(status.success());

		let (sender, receiver) = mpsc::channel();
		thread::spawn(move || sender.send(RangeFileReader::open(fifo).map(|_| ())));

		let result = receiver.recv_timeout(Duration::from_secs(5))?;
		assert!(matches!(result, Err(RangeFileError::InvalidTarget { .. })));
		Ok(())
	}

	#[rstest]
	#[case(0, 4, "ABCD")]
	#[case(4, 6, "EFGHIJ")]
	#[case(0, 10, "ABCDEFGHIJ")]
	#[case(8, 10, "IJ")]
	#[case(9, u64::MAX, "J")]
	#[case(10, 5, "")]
	#[case(11, 1, "")]
	#[case(1 << 62, 4, "")]
	#[case(i64::MAX as u64, 4, "")]
	#[case(1 << 63, 4, "")]
	#[case(u64::MAX, 4, "")]
	#[case(u64::MAX, u64::MAX, "")]
	#[case(3, 0, "")]
	#[case(25, 0, "")]
	fn read(#[case] offset: u64, #[case] count: u64, #[case] expected: &str) -> Result<()> {
		let file = letters()?;
		let mut reader = RangeFileReader::open(file.path())?;
		assert_eq!(reader.read(offset, count)?.as_slice(), expected.as_bytes());
		Ok(())
	}

	#[test]
	fn reads_are_independent() -> Result<()> {
		let file = letters()?;
		let mut reader = RangeFileReader::open(file.path())?;
		assert_eq!(reader.read(6, 2)?.as_slice(), b"GH");
		assert_eq!(reader.read(0, 2)?.as_slice(), b"AB");
		assert_eq!(reader.read(6, 2)?.as_slice(), b"GH");
		Ok(())
	}

	#[test]
	fn read_all() -> Result<()> {
		let file = letters()?;
		let mut reader = RangeFileReader::open(file.path())?;
		assert_eq!(reader.read_all()?.as_slice(), b"ABCDEFGHIJ");
		Ok(())
	}

	#[test]
	fn read_empty_file() -> Result<()> {
		let file = NamedTempFile::new("empty.bin")?;
		file.touch()?;
		let mut reader = RangeFileReader::open(file.path())?;
		assert!(reader.read(0, 100)?.is_empty());
		assert!(reader.read_all()?.is_empty());
		Ok(())
	}

	#[test]
	fn reads_see_current_contents() -> Result<()> {
		let file = letters()?;
		let mut reader = RangeFileReader::open(file.path())?;
		assert_eq!(reader.read(8, 4)?.as_slice(), b"IJ");

		OpenOptions::new().append(true).open(file.path())?.write_all(b"KL")?;
		assert_eq!(reader.read(8, 4)?.as_slice(), b"IJKL");

		OpenOptions::new().write(true).open(file.path())?.set_len(5)?;
		assert!(reader.read(8, 4)?.is_empty());
		assert_eq!(reader.read(3, 4)?.as_slice(), b"DE");
		Ok(())
	}

	#[test]
	fn close() -> Result<()> {
		let file = letters()?;
		let mut reader = RangeFileReader::open(file.path())?;
		reader.close();
		assert!(reader.is_closed());

		let error = reader.read(0, 4).unwrap_err();
		assert!(matches!(error, RangeFileError::ClosedHandle { .. }));
		assert_display_matches!(error, "reader for *letters.txt is closed");

		// closing twice is a no-op
		reader.close();
		assert!(reader.is_closed());
		assert!(matches!(reader.read(0, 0), Err(RangeFileError::ClosedHandle { .. })));
		Ok(())
	}

	#[test]
	fn boxed_reader() -> Result<()> {
		let file = letters()?;
		let mut reader: crate::io::RangeReader = Box::new(RangeFileReader::open(file.path())?);
		assert_eq!(reader.read_range(&ByteRange::new(2, 3))?.as_slice(), b"CDE");
		Ok(())
	}
}
