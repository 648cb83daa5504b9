use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::parse;

fn document(name: &str) -> PresetDocument {
	PresetDocument::build(name, &parse(name).unwrap(), &GeneratorSettings::default())
}

#[test]
fn linux_document_matches_cmake_layout() {
	let name = "linux-make-gcc-mt-lp64-static-release-znver3";
	let value = serde_json::to_value(document(name)).unwrap();

	assert_eq!(
		value,
		json!({
			"version": 6,
			"include": ["base.json"],
			"configurePresets": [{
				"name": name,
				"inherits": ["base", "linux", "make", "gcc", "mt", "lp64", "static", "znver3", "release"],
				"cacheVariables": {
					"CMAKE_INSTALL_PREFIX": "${sourceDir}/install-linux-gcc-znver3-release"
				},
				"binaryDir": "${sourceDir}/build-linux-make-gcc-mt-lp64-static-znver3-release",
				"hidden": false
			}],
			"buildPresets": [
				{
					"name": name,
					"configurePreset": name,
					"inherits": "base"
				},
				{
					"name": "linux-make-gcc-mt-lp64-static-release-znver3-install",
					"configurePreset": name,
					"inherits": "base",
					"targets": "install"
				}
			],
			"testPresets": [{
				"name": name,
				"configurePreset": name,
				"inherits": "base"
			}],
			"workflowPresets": [{
				"name": name,
				"description": "Build and check AOCL-DA",
				"steps": [
					{ "type": "configure", "name": name },
					{ "type": "build", "name": "linux-make-gcc-mt-lp64-static-release-znver3-install" },
					{ "type": "test", "name": name }
				]
			}]
		})
	);
}

#[test]
fn windows_inherits_synthesized_generator() {
	let doc = document("win-st-lp64-znver3-static");
	let configure = &doc.configure_presets[0];

	assert_eq!(configure.inherits, ["base", "win", "msvc", "st", "lp64", "static", "znver3"]);
	assert_eq!(configure.binary_dir, "${sourceDir}/build-win-st-lp64-static-znver3");
	assert_eq!(configure.cache_variables.install_prefix, "${sourceDir}/install-win-znver3");
}

#[test]
fn workflow_builds_install_variant() {
	let doc = document("linux-clang");
	let steps = &doc.workflow_presets[0].steps;
	assert_eq!(steps.len(), 3);
	assert_eq!(steps[1].kind, StepKind::Build);
	assert_eq!(steps[1].name, "linux-clang-install");
	assert_eq!(doc.build_presets[1].name, steps[1].name);
	assert_eq!(doc.build_presets[1].targets.as_deref(), Some("install"));
	assert_eq!(doc.build_presets[0].targets, None);
}

#[test]
fn settings_shape_fixed_fields() {
	let settings = GeneratorSettings {
		source_root: "/src".to_string(),
		base_preset: "common".to_string(),
		base_include: "common.json".to_string(),
		schema_version: 8,
		workflow_description: "CI".to_string(),
		..GeneratorSettings::default()
	};
	let doc = PresetDocument::build("linux-gcc", &parse("linux-gcc").unwrap(), &settings);

	assert_eq!(doc.version, 8);
	assert_eq!(doc.include, ["common.json"]);
	assert_eq!(doc.configure_presets[0].inherits[0], "common");
	assert_eq!(doc.configure_presets[0].binary_dir, "/src/build-linux-gcc");
	assert_eq!(doc.test_presets[0].inherits, "common");
	assert_eq!(doc.workflow_presets[0].description, "CI");
}

#[test]
fn json_uses_two_space_indent() {
	let json = document("linux-gcc").to_json().unwrap();
	assert!(json.starts_with("{\n  \"version\": 6,\n  \"include\": [\n    \"base.json\"\n  ],"));
}
