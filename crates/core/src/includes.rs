//! Persisted list of generated preset files.
//!
//! The registry is a JSON document `{"include": [...]}` naming every preset
//! artifact. Entries are appended in registration order and never repeated.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Outcome of [`IncludesRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
	/// The file was appended.
	Added,
	/// The file was already listed; nothing changed.
	AlreadyPresent,
}

/// In-memory view of `includes.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludesRegistry {
	include: Vec<String>,
}

impl IncludesRegistry {
	/// Loads the registry at `path`, or an empty one if the file does not exist.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "includes registry not found, starting empty");
				return Ok(Self::default());
			}
			Err(e) => return Err(Error::io(path, e)),
		};
		serde_json::from_str(&content).map_err(|e| Error::json(path, e))
	}

	/// Adds `file` unless it is already listed.
	pub fn register(&mut self, file: impl Into<String>) -> Registration {
		let file = file.into();
		if self.contains(&file) {
			return Registration::AlreadyPresent;
		}
		self.include.push(file);
		Registration::Added
	}

	/// Returns true if `file` is listed.
	pub fn contains(&self, file: &str) -> bool {
		self.include.iter().any(|f| f == file)
	}

	/// Listed files in registration order.
	pub fn files(&self) -> &[String] {
		&self.include
	}

	/// Serializes the registry as pretty-printed JSON.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}
