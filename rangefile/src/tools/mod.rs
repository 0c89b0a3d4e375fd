pub mod cat;
pub mod read;

use anyhow::{Context, Result};
use rangefile_core::{Blob, FileLocation, io::RangeFileReader};
use std::io::Write;

/// Opens a location given on the command line.
fn open(location: &str) -> Result<RangeFileReader> {
	let location: FileLocation = location.parse()?;
	log::debug!("open {location}");
	Ok(RangeFileReader::open(location)?)
}

/// Writes a blob either as raw bytes or as lines of 16 hex bytes prefixed with their offset.
fn write_blob(blob: &Blob, offset: u64, hex: bool, output: &mut impl Write) -> Result<()> {
	if hex {
		for (index, chunk) in blob.as_slice().chunks(16).enumerate() {
			let line = Blob::from(chunk);
			writeln!(output, "{:08x}  {}", offset + index as u64 * 16, line.as_hex())?;
		}
	} else {
		output.write_all(blob.as_slice())?;
	}
	output.flush().context("failed to write to stdout")
}
