use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file to print, as a path or a file:// URI
	#[arg(required = true)]
	location: String,

	/// print a hex dump instead of raw bytes
	#[arg(long, short = 'x')]
	hex: bool,
}

pub fn run(arguments: &Subcommand, output: &mut impl Write) -> Result<()> {
	use rangefile_core::io::RangeReaderTrait;

	let mut reader = super::open(&arguments.location)?;
	let blob = reader
		.read_all()
		.with_context(|| format!("reading '{}'", arguments.location))?;
	reader.close();

	log::info!("read {} bytes from {}", blob.len(), arguments.location);
	super::write_blob(&blob, 0, arguments.hex, output)
}
