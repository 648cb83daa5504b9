//! Error types for preset resolution and generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::Category;

/// Validation errors raised while resolving a preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// The name contains no tokens.
	#[error("Empty preset name")]
	EmptyName,

	/// A token does not belong to any category.
	#[error("Part '{token}' does not match any category")]
	UnrecognizedToken {
		/// The offending token.
		token: String,
	},

	/// A token is legal in more than one category.
	#[error("Part '{token}' matches multiple categories: {}", join_categories(.categories))]
	AmbiguousToken {
		/// The offending token.
		token: String,
		/// Every category whose token set contains it.
		categories: Vec<Category>,
	},

	/// Two tokens select a value for the same category.
	#[error("Multiple values for category '{category}' found: {existing} and {conflicting}")]
	DuplicateCategory {
		/// The category claimed twice.
		category: Category,
		/// Value recorded from the earlier token.
		existing: &'static str,
		/// Value of the later token.
		conflicting: &'static str,
	},

	/// A compiler was named together with the Windows platform.
	#[error("Compiler options (gcc, clang) cannot be used with Windows platform (found '{compiler}')")]
	IncompatiblePlatformCompiler {
		/// The compiler token that was supplied.
		compiler: &'static str,
	},

	/// Python bindings were requested for a static library.
	#[error("Python bindings (python) require shared libraries. Please use 'shared' instead of 'static'")]
	StaticPythonConflict,

	/// No platform token was supplied.
	#[error("Missing platform: one of {} is required", crate::registry::def(Category::Platform).tokens.join(", "))]
	MissingPlatform,
}

fn join_categories(categories: &[Category]) -> String {
	categories.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
}

/// Errors raised while generating and persisting presets.
#[derive(Debug, Error)]
pub enum Error {
	/// The preset name failed validation.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// Reading or writing a file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A JSON document could not be read or written.
	#[error("invalid JSON in {path}: {error}")]
	Json {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying serde error.
		error: serde_json::Error,
	},

	/// The settings file could not be parsed.
	#[error("invalid settings in {path}: {error}")]
	Settings {
		/// Path of the settings file.
		path: PathBuf,
		/// The underlying TOML error.
		error: toml::de::Error,
	},
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Error::Io {
			path: path.into(),
			error,
		}
	}

	pub(crate) fn json(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
		Error::Json {
			path: path.into(),
			error,
		}
	}
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, Error>;
