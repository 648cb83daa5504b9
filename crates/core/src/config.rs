//! Resolved preset configuration.

use strum::{EnumCount, IntoEnumIterator};

use crate::registry::{Category, WINDOWS_PLATFORM};

/// Category-to-token mapping produced by [`parse`](crate::parse()).
///
/// Every category holds either a token from its legal set or nothing. Values
/// are the registry's own `&'static str`s, so an unset category can never be
/// confused with a legal token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedConfig {
	values: [Option<&'static str>; Category::COUNT],
}

impl ResolvedConfig {
	/// Creates a configuration with every category unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the token selected for `category`, if any.
	pub fn get(&self, category: Category) -> Option<&'static str> {
		self.values[category.index()]
	}

	/// Returns true if `category` holds a token.
	pub fn is_set(&self, category: Category) -> bool {
		self.get(category).is_some()
	}

	pub(crate) fn set(&mut self, category: Category, token: &'static str) {
		self.values[category.index()] = Some(token);
	}

	/// Iterates over the set categories in registry order.
	pub fn iter(&self) -> impl Iterator<Item = (Category, &'static str)> + '_ {
		Category::iter().filter_map(|c| self.get(c).map(|v| (c, v)))
	}

	/// Returns the selected platform token.
	pub fn platform(&self) -> Option<&'static str> {
		self.get(Category::Platform)
	}

	/// Returns true for Windows configurations, whose generator is synthesized.
	pub fn is_windows(&self) -> bool {
		self.platform() == Some(WINDOWS_PLATFORM)
	}
}
