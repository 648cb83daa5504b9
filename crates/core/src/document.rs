//! CMake preset documents.
//!
//! One document is built per preset name. It holds a configure preset that
//! inherits from the base preset followed by one fragment per resolved token,
//! plain and install build presets, a test preset, and a workflow chaining
//! configure, install-build and test.

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::naming::{build_dir_name, install_dir_name};
use crate::settings::GeneratorSettings;

/// Suffix of the build preset that also runs the `install` target.
pub const INSTALL_SUFFIX: &str = "-install";

/// A complete `CMakePresets`-style document for a single preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDocument {
	pub version: u32,
	pub include: Vec<String>,
	pub configure_presets: Vec<ConfigurePreset>,
	pub build_presets: Vec<BuildPreset>,
	pub test_presets: Vec<TestPreset>,
	pub workflow_presets: Vec<WorkflowPreset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePreset {
	pub name: String,
	/// Fragments in override order: later entries win.
	pub inherits: Vec<String>,
	pub cache_variables: CacheVariables,
	pub binary_dir: String,
	pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheVariables {
	#[serde(rename = "CMAKE_INSTALL_PREFIX")]
	pub install_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPreset {
	pub name: String,
	pub configure_preset: String,
	pub inherits: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub targets: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPreset {
	pub name: String,
	pub configure_preset: String,
	pub inherits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowPreset {
	pub name: String,
	pub description: String,
	pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
	#[serde(rename = "type")]
	pub kind: StepKind,
	pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
	Configure,
	Build,
	Test,
}

impl PresetDocument {
	/// Builds the document for `name` from its resolved configuration.
	///
	/// The workflow's build step references the install variant, so artifacts
	/// are installed before tests run.
	pub fn build(name: &str, config: &ResolvedConfig, settings: &GeneratorSettings) -> Self {
		let base = &settings.base_preset;
		let root = &settings.source_root;
		let install_name = format!("{name}{INSTALL_SUFFIX}");

		let inherits = std::iter::once(base.clone())
			.chain(config.iter().map(|(_, token)| token.to_string()))
			.collect();

		let configure = ConfigurePreset {
			name: name.to_string(),
			inherits,
			cache_variables: CacheVariables {
				install_prefix: format!("{root}/install-{}", install_dir_name(config)),
			},
			binary_dir: format!("{root}/build-{}", build_dir_name(config)),
			hidden: false,
		};

		let build = |preset_name: &str, targets: Option<&str>| BuildPreset {
			name: preset_name.to_string(),
			configure_preset: name.to_string(),
			inherits: base.clone(),
			targets: targets.map(str::to_string),
		};

		let step = |kind, step_name: &str| WorkflowStep {
			kind,
			name: step_name.to_string(),
		};

		Self {
			version: settings.schema_version,
			include: vec![settings.base_include.clone()],
			configure_presets: vec![configure],
			build_presets: vec![build(name, None), build(&install_name, Some("install"))],
			test_presets: vec![TestPreset {
				name: name.to_string(),
				configure_preset: name.to_string(),
				inherits: base.clone(),
			}],
			workflow_presets: vec![WorkflowPreset {
				name: name.to_string(),
				description: settings.workflow_description.clone(),
				steps: vec![
					step(StepKind::Configure, name),
					step(StepKind::Build, &install_name),
					step(StepKind::Test, name),
				],
			}],
		}
	}

	/// Serializes the document as pretty-printed JSON.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

#[cfg(test)]
mod tests;
