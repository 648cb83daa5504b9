//! Single-preset generation.
//!
//! [`PresetWriter::generate`] resolves a name, builds its document and
//! persists both the document and the updated includes registry. Both files
//! are staged next to their destination before either is moved into place,
//! so a failure before persisting leaves the output directory untouched. If
//! the registry cannot be moved into place after the document was, the
//! document is rolled back to its previous state.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::document::PresetDocument;
use crate::error::{Error, Result};
use crate::includes::{IncludesRegistry, Registration};
use crate::parse::parse;
use crate::settings::GeneratorSettings;

/// Result of a successful [`PresetWriter::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPreset {
	/// Preset name as given.
	pub name: String,
	/// Path of the written preset document.
	pub path: PathBuf,
	/// File name recorded in the includes registry.
	pub include_entry: String,
	/// Whether the includes registry gained an entry.
	pub registration: Registration,
}

/// Writes preset documents and maintains the includes registry.
#[derive(Debug, Clone, Default)]
pub struct PresetWriter {
	settings: GeneratorSettings,
}

impl PresetWriter {
	pub fn new(settings: GeneratorSettings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &GeneratorSettings {
		&self.settings
	}

	/// Generates and persists the preset called `name`.
	///
	/// # Errors
	///
	/// Returns [`Error::Parse`] for invalid names, and I/O or JSON errors for
	/// the artifact and the includes registry.
	pub fn generate(&self, name: &str) -> Result<GeneratedPreset> {
		let config = parse(name)?;
		let document = PresetDocument::build(name, &config, &self.settings);
		let path = self.settings.preset_path(name);
		let document_json = document.to_json().map_err(|e| Error::json(&path, e))?;

		let includes_path = self.settings.includes_path();
		let mut includes = IncludesRegistry::load(&includes_path)?;
		let include_entry = format!("{name}.json");
		let registration = includes.register(include_entry.clone());

		let dir = &self.settings.output_dir;
		fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

		let staged_document = stage(dir, &document_json)?;
		let staged_includes = match registration {
			Registration::Added => {
				let json = includes.to_json().map_err(|e| Error::json(&includes_path, e))?;
				let includes_dir = includes_path.parent().unwrap_or(dir.as_path());
				Some(stage(includes_dir, &json)?)
			}
			Registration::AlreadyPresent => None,
		};

		commit(staged_document, &path, staged_includes, &includes_path)?;
		info!(preset = name, path = %path.display(), "wrote preset document");
		match registration {
			Registration::Added => debug!(preset = name, path = %includes_path.display(), "updated includes registry"),
			Registration::AlreadyPresent => debug!(preset = name, "includes registry unchanged"),
		}

		Ok(GeneratedPreset {
			name: name.to_string(),
			path,
			include_entry,
			registration,
		})
	}
}

fn stage(dir: &Path, content: &str) -> Result<NamedTempFile> {
	let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
	file.write_all(content.as_bytes()).map_err(|e| Error::io(file.path(), e))?;
	file.flush().map_err(|e| Error::io(file.path(), e))?;
	Ok(file)
}

/// Moves the staged document and registry into place.
///
/// A failure to persist the registry restores the document's previous
/// contents, or removes it if it did not exist before.
fn commit(document: NamedTempFile, path: &Path, includes: Option<NamedTempFile>, includes_path: &Path) -> Result<()> {
	let previous = match fs::read(path) {
		Ok(bytes) => Some(bytes),
		Err(e) if e.kind() == io::ErrorKind::NotFound => None,
		Err(e) => return Err(Error::io(path, e)),
	};

	persist(document, path)?;
	let Some(includes) = includes else {
		return Ok(());
	};
	persist(includes, includes_path).inspect_err(|_| rollback(path, previous))
}

fn rollback(path: &Path, previous: Option<Vec<u8>>) {
	let restored = match previous {
		Some(bytes) => fs::write(path, bytes),
		None => fs::remove_file(path),
	};
	match restored {
		Ok(()) => debug!(path = %path.display(), "rolled back preset document"),
		Err(error) => warn!(path = %path.display(), %error, "failed to roll back preset document"),
	}
}

fn persist(file: NamedTempFile, path: &Path) -> Result<()> {
	file.persist(path).map_err(|e| Error::io(path, e.error))?;
	Ok(())
}

#[cfg(test)]
mod tests;
