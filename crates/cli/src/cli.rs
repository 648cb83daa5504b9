use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::catalog;

#[derive(Parser, Debug)]
#[command(name = "presetgen")]
#[command(about = "CMake Preset Generator for AOCL-Data Analytics (AOCL-DA)")]
#[command(version)]
#[command(after_long_help = catalog::render())]
pub struct Cli {
	/// Preset name, e.g. linux-make-gcc-st-lp64-znver3-static (not used with --generate-all)
	pub preset_name: Option<String>,

	/// Generate all preset combinations
	#[arg(long, conflicts_with = "preset_name")]
	pub generate_all: bool,

	/// List combinations without generating them (with --generate-all)
	#[arg(long, requires = "generate_all")]
	pub dry_run: bool,

	/// Limit number of presets to generate (with --generate-all)
	#[arg(long, value_name = "N", requires = "generate_all")]
	pub limit: Option<NonZeroUsize>,

	/// Directory receiving preset files and includes.json
	#[arg(long, short = 'o', value_name = "DIR")]
	pub output_dir: Option<PathBuf>,

	/// TOML file with generator settings
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Increase log verbosity (-v info, -vv debug)
	#[arg(long, short = 'v', action = ArgAction::Count)]
	pub verbose: u8,
}
