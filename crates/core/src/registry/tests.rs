use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::*;

#[test]
fn definitions_follow_category_order() {
	let from_registry: Vec<_> = all().map(|d| d.category).collect();
	let from_enum: Vec<_> = Category::iter().collect();
	assert_eq!(from_registry, from_enum);
}

#[test]
fn token_sets_are_disjoint() {
	let mut seen = HashSet::new();
	for def in all() {
		for token in def.tokens {
			assert!(seen.insert(*token), "token '{token}' appears in more than one category");
		}
	}
}

#[test]
fn category_names_are_snake_case() {
	assert_eq!(Category::IntSize.as_str(), "int_size");
	assert_eq!(Category::BuildPython.to_string(), "build_python");
	assert_eq!(Category::MemSanitizer.as_str(), "mem_sanitizer");
}

#[test]
fn lookup_by_token() {
	assert_eq!(categories_for_token("znver4"), vec![Category::Arch]);
	assert_eq!(categories_for_token("msvc"), vec![Category::Generator]);
	assert!(categories_for_token("icc").is_empty());
	assert!(categories_for_token("").is_empty());
}

#[test]
fn def_returns_matching_entry() {
	for category in Category::iter() {
		assert_eq!(category.def().category, category);
	}
	assert_eq!(def(Category::Compiler).note, Some("for Linux only"));
}
