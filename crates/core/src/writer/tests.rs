use pretty_assertions::assert_eq;

use super::*;
use crate::error::ParseError;

fn writer_in(dir: &Path) -> PresetWriter {
	PresetWriter::new(GeneratorSettings {
		output_dir: dir.to_path_buf(),
		..GeneratorSettings::default()
	})
}

fn read_json(path: &Path) -> serde_json::Value {
	serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn generate_writes_document_and_registers_it() {
	let dir = tempfile::tempdir().unwrap();
	let writer = writer_in(dir.path());

	let generated = writer.generate("linux-clang-st-lp64-static-release").unwrap();
	assert_eq!(generated.path, dir.path().join("linux-clang-st-lp64-static-release.json"));
	assert_eq!(generated.registration, Registration::Added);

	let document = read_json(&generated.path);
	assert_eq!(document["configurePresets"][0]["name"], "linux-clang-st-lp64-static-release");
	assert_eq!(
		read_json(&dir.path().join("includes.json")),
		serde_json::json!({ "include": ["linux-clang-st-lp64-static-release.json"] })
	);
}

#[test]
fn regenerating_keeps_includes_unchanged() {
	let dir = tempfile::tempdir().unwrap();
	let writer = writer_in(dir.path());
	writer.generate("linux-gcc").unwrap();
	writer.generate("win-mt").unwrap();
	let includes = dir.path().join("includes.json");
	let before = fs::read_to_string(&includes).unwrap();

	let again = writer.generate("linux-gcc").unwrap();
	assert_eq!(again.registration, Registration::AlreadyPresent);
	assert_eq!(fs::read_to_string(&includes).unwrap(), before);
	assert_eq!(
		read_json(&includes),
		serde_json::json!({ "include": ["linux-gcc.json", "win-mt.json"] })
	);
}

#[test]
fn invalid_name_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let writer = writer_in(dir.path());

	let err = writer.generate("win-gcc-st").unwrap_err();
	assert!(matches!(
		err,
		Error::Parse(ParseError::IncompatiblePlatformCompiler { compiler: "gcc" })
	));
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_includes_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("includes.json"), "not json").unwrap();

	let err = writer_in(dir.path()).generate("linux-gcc").unwrap_err();
	assert!(matches!(err, Error::Json { .. }));
	assert!(!dir.path().join("linux-gcc.json").exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn creates_missing_output_dir() {
	let dir = tempfile::tempdir().unwrap();
	let nested = dir.path().join("cmake").join("presets");
	writer_in(&nested).generate("linux-ninja-clang").unwrap();
	assert!(nested.join("linux-ninja-clang.json").is_file());
	assert!(nested.join("includes.json").is_file());
}

#[test]
fn unwritable_includes_location_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let writer = PresetWriter::new(GeneratorSettings {
		output_dir: dir.path().to_path_buf(),
		includes_file: "missing/includes.json".to_string(),
		..GeneratorSettings::default()
	});

	let err = writer.generate("linux-gcc").unwrap_err();
	assert!(matches!(err, Error::Io { .. }));
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_registry_commit_removes_new_document() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("linux-gcc.json");
	let document = stage(dir.path(), "{}").unwrap();
	let includes = stage(dir.path(), "{\"include\": []}").unwrap();

	let err = commit(document, &path, Some(includes), &dir.path().join("missing").join("includes.json")).unwrap_err();
	assert!(matches!(err, Error::Io { .. }));
	assert!(!path.exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_registry_commit_restores_previous_document() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("linux-gcc.json");
	fs::write(&path, "previous").unwrap();
	let document = stage(dir.path(), "replacement").unwrap();
	let includes = stage(dir.path(), "{\"include\": []}").unwrap();

	commit(document, &path, Some(includes), &dir.path().join("missing").join("includes.json")).unwrap_err();
	assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
