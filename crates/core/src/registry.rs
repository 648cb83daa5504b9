//! Option registry.
//!
//! Categories are configuration axes (platform, compiler, threading, ...) each
//! owning a fixed set of legal tokens. The registry is compile-time data and
//! its order is the declaration order of [`Category`].

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// A configuration axis.
///
/// Variants are declared in registry order. Derived directory names and the
/// preset inheritance list follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
	Platform,
	Generator,
	Compiler,
	Threading,
	IntSize,
	LibType,
	BuildPython,
	Arch,
	BuildType,
	Sanitizer,
	MemSanitizer,
	CodeCoverage,
	Valgrind,
	Documentation,
	Libmem,
}

impl Category {
	/// Returns the snake_case category name (e.g. `"int_size"`).
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Position of this category in registry order.
	pub(crate) fn index(self) -> usize {
		self as usize
	}

	/// Returns the registry definition for this category.
	pub fn def(self) -> &'static CategoryDef {
		def(self)
	}
}

/// Definition of a category and its legal tokens.
#[derive(Debug)]
pub struct CategoryDef {
	/// The category this definition describes.
	pub category: Category,
	/// Legal tokens, in display order.
	pub tokens: &'static [&'static str],
	/// Human-readable description.
	pub description: &'static str,
	/// Optional usage note shown next to the tokens.
	pub note: Option<&'static str>,
}

impl CategoryDef {
	/// Returns the registry's static copy of `token` if it is legal here.
	pub fn token(&self, token: &str) -> Option<&'static str> {
		self.tokens.iter().copied().find(|t| *t == token)
	}
}

/// Registry of all categories, in [`Category`] order.
pub static CATEGORIES: [CategoryDef; Category::COUNT] = [
	CategoryDef {
		category: Category::Platform,
		tokens: &["linux", "win"],
		description: "Platform options",
		note: Some("required"),
	},
	CategoryDef {
		category: Category::Generator,
		tokens: &["make", "ninja", "msvc"],
		description: "Generator options",
		note: None,
	},
	CategoryDef {
		category: Category::Compiler,
		tokens: &["gcc", "clang"],
		description: "Compiler options",
		note: Some("for Linux only"),
	},
	CategoryDef {
		category: Category::Threading,
		tokens: &["st", "mt"],
		description: "Threading options",
		note: Some("st (single-threaded), mt (multi-threaded)"),
	},
	CategoryDef {
		category: Category::IntSize,
		tokens: &["lp64", "ilp64"],
		description: "Integer size options",
		note: None,
	},
	CategoryDef {
		category: Category::LibType,
		tokens: &["static", "shared"],
		description: "Library type options",
		note: None,
	},
	CategoryDef {
		category: Category::BuildPython,
		tokens: &["python"],
		description: "Python Bindings",
		note: None,
	},
	CategoryDef {
		category: Category::Arch,
		tokens: &["native", "dynamic", "znver2", "znver3", "znver4", "znver5"],
		description: "Architecture options",
		note: None,
	},
	CategoryDef {
		category: Category::BuildType,
		tokens: &["release", "debug", "relwithdebinfo"],
		description: "Build type options",
		note: None,
	},
	CategoryDef {
		category: Category::Sanitizer,
		tokens: &["asan"],
		description: "Address Sanitizer",
		note: None,
	},
	CategoryDef {
		category: Category::MemSanitizer,
		tokens: &["memsan"],
		description: "Memory Sanitizer",
		note: None,
	},
	CategoryDef {
		category: Category::CodeCoverage,
		tokens: &["coverage"],
		description: "Code Coverage",
		note: None,
	},
	CategoryDef {
		category: Category::Valgrind,
		tokens: &["valgrind"],
		description: "Valgrind Support",
		note: None,
	},
	CategoryDef {
		category: Category::Documentation,
		tokens: &["doc"],
		description: "Documentation",
		note: None,
	},
	CategoryDef {
		category: Category::Libmem,
		tokens: &["libmem"],
		description: "Memory Library",
		note: None,
	},
];

/// Generator synthesized for every Windows preset.
pub const WINDOWS_GENERATOR: &str = "msvc";

/// Platform token selecting Windows.
pub const WINDOWS_PLATFORM: &str = "win";

/// Returns all category definitions in registry order.
pub fn all() -> impl Iterator<Item = &'static CategoryDef> {
	CATEGORIES.iter()
}

/// Returns the definition of `category`.
pub fn def(category: Category) -> &'static CategoryDef {
	&CATEGORIES[category.index()]
}

/// Returns every category whose token set contains `token`.
///
/// A well-formed registry yields at most one category per token.
pub fn categories_for_token(token: &str) -> Vec<Category> {
	all().filter(|d| d.token(token).is_some()).map(|d| d.category).collect()
}

#[cfg(test)]
mod tests;
