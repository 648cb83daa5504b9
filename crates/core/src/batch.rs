//! Batch generation over the cross-product of common options.
//!
//! Linux names include a compiler, Windows names never do. Combinations of
//! a static library with Python bindings are skipped rather than attempted.
//! A failing combination is recorded and the batch moves on.

use std::num::NonZeroUsize;

use itertools::{Itertools, iproduct};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::registry::WINDOWS_PLATFORM;

pub const PLATFORMS: [&str; 2] = ["linux", "win"];
/// Linux only.
pub const COMPILERS: [&str; 2] = ["gcc", "clang"];
pub const THREADING: [&str; 2] = ["st", "mt"];
pub const INT_SIZES: [&str; 2] = ["lp64", "ilp64"];
pub const LIB_TYPES: [&str; 2] = ["static", "shared"];
pub const BUILD_TYPES: [&str; 2] = ["release", "debug"];
pub const ARCHES: [&str; 2] = ["native", "dynamic"];
pub const PYTHON: [Option<&str>; 2] = [None, Some("python")];

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
	/// Enumerate and report without generating anything.
	pub dry_run: bool,
	/// Stop once this many combinations have been attempted.
	pub limit: Option<NonZeroUsize>,
}

/// One enumerated combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	pub name: String,
	/// Static library with Python bindings; never attempted.
	pub skip: bool,
}

/// A combination whose generation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
	pub name: String,
	pub message: String,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
	/// Combinations handed to generation (or that would be, in a dry run).
	pub attempted: usize,
	pub successful: usize,
	/// Invalid combinations passed over.
	pub skipped: usize,
	pub failures: Vec<BatchFailure>,
	pub dry_run: bool,
	/// Enumeration stopped early at the configured limit.
	pub limit_reached: bool,
}

impl BatchReport {
	pub fn failed(&self) -> usize {
		self.failures.len()
	}
}

/// Receives the combinations of a batch run.
pub trait BatchSink {
	/// Generates a single preset.
	fn generate(&mut self, name: &str) -> Result<()>;

	/// Called before each attempt with its 1-based index, also in dry runs.
	fn attempting(&mut self, _index: usize, _name: &str) {}

	/// Called when [`generate`](Self::generate) fails.
	fn failed(&mut self, _name: &str, _error: &Error) {}

	/// Called when enumeration stops at the limit.
	fn limit_reached(&mut self, _limit: NonZeroUsize) {}
}

impl<F> BatchSink for F
where
	F: FnMut(&str) -> Result<()>,
{
	fn generate(&mut self, name: &str) -> Result<()> {
		self(name)
	}
}

/// Enumerates every combination in generation order, Linux first.
pub fn candidates() -> impl Iterator<Item = Candidate> {
	PLATFORMS.into_iter().flat_map(platform_candidates)
}

fn platform_candidates(platform: &'static str) -> impl Iterator<Item = Candidate> {
	const LINUX: [Option<&str>; 2] = [Some(COMPILERS[0]), Some(COMPILERS[1])];
	let compilers: &'static [Option<&'static str>] = if platform == WINDOWS_PLATFORM { &[None] } else { &LINUX };

	iproduct!(
		compilers.iter().copied(),
		THREADING,
		INT_SIZES,
		LIB_TYPES,
		BUILD_TYPES,
		ARCHES,
		PYTHON
	)
	.map(move |(compiler, threading, int_size, lib_type, build_type, arch, python)| {
		let name = [
			Some(platform),
			compiler,
			Some(threading),
			Some(int_size),
			Some(lib_type),
			Some(build_type),
			Some(arch),
			python,
		]
		.into_iter()
		.flatten()
		.join("-");
		Candidate {
			name,
			skip: lib_type == "static" && python.is_some(),
		}
	})
}

/// Runs generation for every valid combination.
///
/// Generation errors are recorded in the report and never abort the batch.
pub fn run(options: &BatchOptions, sink: &mut impl BatchSink) -> BatchReport {
	let mut report = BatchReport {
		dry_run: options.dry_run,
		..BatchReport::default()
	};

	for candidate in candidates() {
		if candidate.skip {
			debug!(preset = %candidate.name, "skipping static library with python bindings");
			report.skipped += 1;
			continue;
		}

		report.attempted += 1;
		sink.attempting(report.attempted, &candidate.name);
		info!(index = report.attempted, preset = %candidate.name, dry_run = options.dry_run, "generating preset");

		if !options.dry_run {
			match sink.generate(&candidate.name) {
				Ok(()) => report.successful += 1,
				Err(error) => {
					warn!(preset = %candidate.name, %error, "preset generation failed");
					sink.failed(&candidate.name, &error);
					report.failures.push(BatchFailure {
						name: candidate.name,
						message: error.to_string(),
					});
				}
			}
		}

		if let Some(limit) = options.limit
			&& report.attempted >= limit.get()
		{
			info!(limit = limit.get(), "reached batch limit");
			sink.limit_reached(limit);
			report.limit_reached = true;
			break;
		}
	}

	report
}
