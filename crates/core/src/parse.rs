//! Preset name parser.
//!
//! A name is split on `-` and every token is matched against the registry.
//! Parsing is all-or-nothing: the first violation aborts with a
//! [`ParseError`] and no partial configuration is returned.
//!
//! After matching, Windows rules are applied in order:
//!
//! 1. `win` forces the generator to `msvc` (never taken from the name)
//! 2. `win` together with a compiler is rejected
//! 3. `static` together with `python` is rejected
//! 4. a missing platform is rejected

use tracing::trace;

use crate::config::ResolvedConfig;
use crate::error::ParseError;
use crate::registry::{self, Category, CategoryDef, WINDOWS_GENERATOR};

/// Separator between tokens in a preset name.
pub const TOKEN_SEP: char = '-';

/// Parses a preset name into a [`ResolvedConfig`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, scanning tokens left to
/// right and then applying the cross-category rules.
pub fn parse(name: &str) -> Result<ResolvedConfig, ParseError> {
	if name.split(TOKEN_SEP).all(str::is_empty) {
		return Err(ParseError::EmptyName);
	}

	let mut config = ResolvedConfig::new();
	for part in name.split(TOKEN_SEP) {
		let (category, token) = match_token(registry::all(), part)?;
		if let Some(existing) = config.get(category) {
			return Err(ParseError::DuplicateCategory {
				category,
				existing,
				conflicting: token,
			});
		}
		trace!(%category, token, "matched preset token");
		config.set(category, token);
	}

	if config.is_windows() {
		config.set(Category::Generator, WINDOWS_GENERATOR);
		if let Some(compiler) = config.get(Category::Compiler) {
			return Err(ParseError::IncompatiblePlatformCompiler { compiler });
		}
	}

	if config.get(Category::LibType) == Some("static") && config.is_set(Category::BuildPython) {
		return Err(ParseError::StaticPythonConflict);
	}

	if config.platform().is_none() {
		return Err(ParseError::MissingPlatform);
	}

	Ok(config)
}

/// Finds the single category among `defs` owning `part`.
fn match_token<'r>(
	defs: impl IntoIterator<Item = &'r CategoryDef>,
	part: &str,
) -> Result<(Category, &'static str), ParseError> {
	let mut matches = defs.into_iter().filter_map(|def| def.token(part).map(|t| (def.category, t)));
	let Some(first) = matches.next() else {
		return Err(ParseError::UnrecognizedToken { token: part.to_string() });
	};

	let rest: Vec<_> = matches.map(|(c, _)| c).collect();
	if !rest.is_empty() {
		let mut categories = vec![first.0];
		categories.extend(rest);
		return Err(ParseError::AmbiguousToken {
			token: part.to_string(),
			categories,
		});
	}

	Ok(first)
}
