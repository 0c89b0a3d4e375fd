// Command-line caller of `rangefile_core`
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	arg_required_else_help = true, // Show help instead of an error without arguments
	propagate_version = true, // Enable version flag for subcommands
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // Set subcommands

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

// Define subcommands for the command-line interface
#[derive(Subcommand, Debug)]
enum Commands {
	/// Print a byte range of a file
	Read(tools::read::Subcommand),

	/// Print a whole file
	Cat(tools::cat::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli, &mut std::io::stdout().lock())
}

// Helper function for running subcommands
fn run(cli: &Cli, output: &mut impl std::io::Write) -> Result<()> {
	match &cli.command {
		Commands::Read(arguments) => tools::read::run(arguments, output),
		Commands::Cat(arguments) => tools::cat::run(arguments, output),
	}
}
