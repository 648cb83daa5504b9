//! `presetgen` binary.
//!
//! Generates a single CMake preset from its name, or every common
//! combination with `--generate-all`.

mod app;
mod catalog;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let default_level = match cli.verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	app::run(cli)
}
