//! Option catalog shown when no preset is given and in `--help`.

use presetgen_core::registry;

/// Renders every category with its tokens, followed by usage examples.
pub fn render() -> String {
	let mut lines = vec!["Available preset options:".to_string()];

	for def in registry::all() {
		lines.push(String::new());
		lines.push(format!("{}:", def.description));
		let tokens = def.tokens.join(", ");
		lines.push(match def.note {
			Some(note) => format!("  {tokens} ({note})"),
			None => format!("  {tokens}"),
		});
	}

	lines.extend(
		[
			"",
			"Usage examples:",
			"  Linux with compiler:",
			"    presetgen linux-make-gcc-st-lp64-znver3-static",
			"  Windows:",
			"    presetgen win-st-lp64-znver3-static",
			"  Generate all presets:",
			"    presetgen --generate-all [--dry-run] [--limit N]",
			"",
			"Notes:",
			"- Options should be separated by hyphens (-)",
			"- Each category can only have one option",
			"- For Windows, compiler options are not allowed and the msvc generator is implied",
		]
		.map(String::from),
	);

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

/// Hint printed after a rejected preset name.
pub fn format_examples() -> &'static str {
	"\nValid format examples:\n  Linux: presetgen linux-make-clang-st-python\n  Windows: presetgen win-st-lp64-znver3-static"
}
