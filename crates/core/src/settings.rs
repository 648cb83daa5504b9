//! Generator settings.
//!
//! Settings control where artifacts are written and the fixed parts of every
//! preset document. All fields have defaults, so a settings file only names
//! what it overrides:
//!
//! ```toml
//! [generator]
//! output-dir = "cmake/presets"
//! workflow-description = "Build and check"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Settings shared by every generated preset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeneratorSettings {
	/// Directory receiving preset files and the includes registry.
	pub output_dir: PathBuf,
	/// Placeholder for the project root in binary and install paths.
	pub source_root: String,
	/// Preset every generated preset inherits from first.
	pub base_preset: String,
	/// File providing [`base_preset`](Self::base_preset).
	pub base_include: String,
	/// CMake presets schema version.
	pub schema_version: u32,
	/// Description attached to the workflow preset.
	pub workflow_description: String,
	/// File name of the includes registry inside `output_dir`.
	pub includes_file: String,
}

impl Default for GeneratorSettings {
	fn default() -> Self {
		Self {
			output_dir: PathBuf::from("."),
			source_root: "${sourceDir}".to_string(),
			base_preset: "base".to_string(),
			base_include: "base.json".to_string(),
			schema_version: 6,
			workflow_description: "Build and check AOCL-DA".to_string(),
			includes_file: "includes.json".to_string(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
	#[serde(default)]
	generator: GeneratorSettings,
}

impl GeneratorSettings {
	/// Parses settings from TOML text.
	///
	/// `path` is only used for error reporting.
	pub fn parse(input: &str, path: impl AsRef<Path>) -> Result<Self> {
		let file: SettingsFile = toml::from_str(input).map_err(|error| Error::Settings {
			path: path.as_ref().to_path_buf(),
			error,
		})?;
		Ok(file.generator)
	}

	/// Loads settings from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
		let settings = Self::parse(&content, path)?;
		debug!(path = %path.display(), ?settings, "loaded generator settings");
		Ok(settings)
	}

	/// Path of the includes registry.
	pub fn includes_path(&self) -> PathBuf {
		self.output_dir.join(&self.includes_file)
	}

	/// Path of the artifact for `preset_name`.
	pub fn preset_path(&self, preset_name: &str) -> PathBuf {
		self.output_dir.join(format!("{preset_name}.json"))
	}
}
