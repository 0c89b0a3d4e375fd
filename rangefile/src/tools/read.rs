use anyhow::{Context, Result};
use clap::Args;
use rangefile_core::ByteRange;
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file to read from, as a path or a file:// URI
	#[arg(required = true)]
	location: String,

	/// byte range to print, either OFFSET,LENGTH or OFFSET..END
	/// windows reaching past the end of the file are truncated
	#[arg(required = true, verbatim_doc_comment)]
	range: ByteRange,

	/// print a hex dump instead of raw bytes
	#[arg(long, short = 'x')]
	hex: bool,
}

pub fn run(arguments: &Subcommand, output: &mut impl Write) -> Result<()> {
	let mut reader = super::open(&arguments.location)?;
	let blob = reader
		.read(arguments.range.offset, arguments.range.length)
		.with_context(|| format!("reading {} from '{}'", arguments.range, arguments.location))?;
	reader.close();

	log::info!("read {} bytes of {} from {}", blob.len(), arguments.range, arguments.location);
	super::write_blob(&blob, arguments.range.offset, arguments.hex, output)
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::{NamedTempFile, prelude::*};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("0,4", "ABCD")]
	#[case("8,10", "IJ")]
	#[case("10,5", "")]
	#[case("3,0", "")]
	#[case("2..5", "CDE")]
	fn raw(#[case] range: &str, #[case] expected: &str) {
		let file = NamedTempFile::new("letters.txt").unwrap();
		file.write_str("ABCDEFGHIJ").unwrap();

		let output = run_command(vec!["rangefile", "read", file.path().to_str().unwrap(), range]).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), expected);
	}

	#[test]
	fn hex() {
		let file = NamedTempFile::new("bytes.bin").unwrap();
		file.write_binary(&(0u8..40).collect::<Vec<_>>()).unwrap();

		let output = run_command(vec!["rangefile", "read", "--hex", file.path().to_str().unwrap(), "4,20"]).unwrap();
		assert_eq!(
			String::from_utf8(output).unwrap(),
			"00000004  04 05 06 07 08 09 0a 0b 0c 0d 0e 0f 10 11 12 13\n00000014  14 15 16 17\n"
		);
	}

	#[test]
	fn missing_file() {
		let file = NamedTempFile::new("missing.txt").unwrap();
		let error = run_command(vec!["rangefile", "read", file.path().to_str().unwrap(), "0,4"]).unwrap_err();
		assert!(error.to_string().ends_with("missing.txt does not exist"));
	}

	#[test]
	fn invalid_range() {
		let error = run_command(vec!["rangefile", "read", "letters.txt", "4"]).unwrap_err();
		assert!(error.to_string().contains("invalid byte range '4'"));
	}
}
