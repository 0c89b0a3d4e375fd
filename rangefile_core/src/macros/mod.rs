//! Assertion macros for tests.

/// Asserts that the `Display` output of a value matches a wildcard pattern (`*` and `?`).
///
/// Error messages embed temporary paths, so tests compare them against patterns instead of exact
/// strings. An optional trailing format string adds context to the failure message.
///
/// ```
/// use rangefile_core::assert_display_matches;
///
/// let message = "file /tmp/.tmpA1b2/letters.txt does not exist";
/// assert_display_matches!(message, "file *letters.txt does not exist");
/// assert_display_matches!(message, "file /tmp/.tmp????/*", "checking {}", "temp dir");
/// ```
#[macro_export]
macro_rules! assert_display_matches {
	($value:expr, $pattern:expr $(,)?) => {
		$crate::assert_display_matches!($value, $pattern, "display output does not match")
	};
	($value:expr, $pattern:expr, $($context:tt)+) => {{
		let text = $value.to_string();
		let pattern: &str = $pattern;
		assert!(
			wildmatch::WildMatch::new(pattern).matches(&text),
			"{}\n   text: {text:?}\npattern: {pattern:?}",
			format_args!($($context)+)
		);
	}};
}
