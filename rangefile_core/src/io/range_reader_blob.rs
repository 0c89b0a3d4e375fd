//! An in-memory range reader with the same window semantics as [`RangeFileReader`](super::RangeFileReader).

use super::RangeReaderTrait;
use crate::{Blob, ByteRange, RangeFileError, Result};

/// Serves byte windows from a [`Blob`] held in memory.
#[derive(Debug)]
pub struct RangeReaderBlob {
	blob: Option<Blob>,
}

impl RangeReaderBlob {
	/// Length of the held data, or `None` once closed.
	pub fn size(&self) -> Option<u64> {
		self.blob.as_ref().map(Blob::len)
	}
}

impl RangeReaderTrait for RangeReaderBlob {
	fn read_range(&mut self, range: &ByteRange) -> Result<Blob> {
		let Some(blob) = &self.blob else {
			return Err(RangeFileError::ClosedHandle {
				location: self.get_name().to_owned(),
			});
		};
		let range = range.clamp_to(blob.len());
		Ok(Blob::from(blob.range(range.as_range_usize())))
	}

	fn get_name(&self) -> &str {
		"memory"
	}

	fn close(&mut self) {
		self.blob = None;
	}

	fn is_closed(&self) -> bool {
		self.blob.is_none()
	}
}

impl From<Blob> for RangeReaderBlob {
	fn from(blob: Blob) -> Self {
		RangeReaderBlob { blob: Some(blob) }
	}
}

impl From<Vec<u8>> for RangeReaderBlob {
	fn from(value: Vec<u8>) -> Self {
		RangeReaderBlob::from(Blob::from(value))
	}
}

impl From<&str> for RangeReaderBlob {
	fn from(value: &str) -> Self {
		RangeReaderBlob::from(Blob::from(value))
	}
}
