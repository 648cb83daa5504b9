use std::num::NonZeroUsize;
use std::process::ExitCode;

use presetgen_core::batch::{self, BatchOptions, BatchReport, BatchSink};
use presetgen_core::{Error, GeneratedPreset, GeneratorSettings, PresetWriter, Registration};

use crate::catalog;
use crate::cli::Cli;

pub const BANNER: &str = "CMake Preset Generator for AOCL-Data Analytics (AOCL-DA)";

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
	println!("{BANNER}");

	let mut settings = match &cli.config {
		Some(path) => GeneratorSettings::load(path)?,
		None => GeneratorSettings::default(),
	};
	if let Some(dir) = cli.output_dir {
		settings.output_dir = dir;
	}
	let writer = PresetWriter::new(settings);

	if cli.generate_all {
		let options = BatchOptions {
			dry_run: cli.dry_run,
			limit: cli.limit,
		};
		let report = batch::run(&options, &mut ConsoleSink { writer: &writer });
		print_summary(&report);
		return Ok(ExitCode::SUCCESS);
	}

	let Some(name) = cli.preset_name else {
		print!("{}", catalog::render());
		return Ok(ExitCode::FAILURE);
	};

	match writer.generate(&name) {
		Ok(generated) => {
			print_generated(&generated, &writer.settings().includes_file);
			Ok(ExitCode::SUCCESS)
		}
		Err(Error::Parse(error)) => {
			println!("Error: {error}");
			println!("{}", catalog::format_examples());
			Ok(ExitCode::FAILURE)
		}
		Err(error) => Err(error.into()),
	}
}

fn print_generated(generated: &GeneratedPreset, includes_file: &str) {
	println!("Generated preset configuration in {}", generated.path.display());
	let entry = &generated.include_entry;
	match generated.registration {
		Registration::Added => println!("Added {entry} to {includes_file}"),
		Registration::AlreadyPresent => println!("{entry} already in {includes_file}"),
	}
}

fn print_summary(report: &BatchReport) {
	println!();
	println!("Generated {} of {} presets successfully.", report.successful, report.attempted);
	println!("Skipped {} invalid combinations (static lib with Python).", report.skipped);
	if report.failed() > 0 {
		println!("Failed {} presets.", report.failed());
	}
	if report.dry_run {
		println!("This was a dry run. No presets were actually generated.");
	}
}

/// Prints batch progress and generates through a [`PresetWriter`].
struct ConsoleSink<'a> {
	writer: &'a PresetWriter,
}

impl BatchSink for ConsoleSink<'_> {
	fn generate(&mut self, name: &str) -> presetgen_core::Result<()> {
		let generated = self.writer.generate(name)?;
		print_generated(&generated, &self.writer.settings().includes_file);
		Ok(())
	}

	fn attempting(&mut self, index: usize, name: &str) {
		println!("[{index}] Generating preset: {name}");
	}

	fn failed(&mut self, _name: &str, error: &Error) {
		println!("  Error: {error}");
	}

	fn limit_reached(&mut self, limit: NonZeroUsize) {
		println!("Reached limit of {limit} presets");
	}
}
