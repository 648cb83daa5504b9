//! Build and install directory names.
//!
//! Both names join the set tokens of a [`ResolvedConfig`] with `-` in
//! registry order. They differ in which categories they drop.

use crate::config::ResolvedConfig;
use crate::registry::Category;

/// Categories left out of install directory names.
pub const INSTALL_SKIPPED: [Category; 6] = [
	Category::IntSize,
	Category::LibType,
	Category::BuildPython,
	Category::Documentation,
	Category::Generator,
	Category::Threading,
];

/// Suffix of the build directory (`build-<name>`).
///
/// Every set token is included except the generator of a Windows
/// configuration, which is synthesized rather than chosen.
pub fn build_dir_name(config: &ResolvedConfig) -> String {
	let windows = config.is_windows();
	join(config.iter().filter(|(c, _)| !(windows && *c == Category::Generator)))
}

/// Suffix of the install directory (`install-<name>`).
///
/// Drops the [`INSTALL_SKIPPED`] categories regardless of platform.
pub fn install_dir_name(config: &ResolvedConfig) -> String {
	join(config.iter().filter(|(c, _)| !INSTALL_SKIPPED.contains(c)))
}

fn join<'a>(parts: impl Iterator<Item = (Category, &'a str)>) -> String {
	parts.map(|(_, token)| token).collect::<Vec<_>>().join("-")
}
