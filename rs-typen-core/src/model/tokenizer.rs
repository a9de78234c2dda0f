//! Tolerant tokenizer for raw completion text.
//!
//! Two strategies only: comma-separated when a comma is present, whitespace
//! otherwise. Token order is kept as emitted, since position decides which
//! words become probable and which become creative.

/// Splits a raw completion into lowercase candidate tokens.
///
/// - If `raw` contains a comma, splits on commas and trims each segment.
/// - Otherwise splits on runs of whitespace.
///
/// Segments may still contain punctuation, digits or inner spaces; that is
/// the sanitizer's job.
pub fn tokenize(raw: &str) -> Vec<String> {
	if raw.contains(',') {
		raw.split(',').map(|segment| segment.trim().to_lowercase()).collect()
	} else {
		raw.to_lowercase().split_whitespace().map(str::to_owned).collect()
	}
}

/// Removes every character that is not a lowercase ASCII letter.
///
/// Characters are deleted wherever they appear, not only at the edges, so
/// `"in to"` becomes `"into"`.
pub fn sanitize(token: &str) -> String {
	token.chars().filter(char::is_ascii_lowercase).collect()
}

/// Sanitizes every candidate and drops the ones left empty, keeping order.
pub fn sanitize_all<I, S>(candidates: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	candidates
		.into_iter()
		.map(|candidate| sanitize(candidate.as_ref()))
		.filter(|word| !word.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn comma_list_is_split_trimmed_and_lowercased() {
		assert_eq!(
			tokenize(" Forest ,dark,  OLD ,the"),
			vec!["forest", "dark", "old", "the"]
		);
	}

	#[test]
	fn comma_wins_over_whitespace() {
		assert_eq!(tokenize("a b, c d"), vec!["a b", "c d"]);
	}

	#[test]
	fn empty_segments_are_kept_for_the_sanitizer() {
		assert_eq!(tokenize("one,,two,"), vec!["one", "", "two", ""]);
	}

	#[test]
	fn whitespace_fallback() {
		assert_eq!(
			tokenize("The\nNight   was\tYOUNG"),
			vec!["the", "night", "was", "young"]
		);
	}

	#[test]
	fn blank_input_yields_nothing() {
		assert!(tokenize("  ").is_empty());
		assert!(tokenize("").is_empty());
	}

	#[test]
	fn sanitize_strips_inner_characters() {
		assert_eq!(sanitize("1. dark!"), "dark");
		assert_eq!(sanitize("in to"), "into");
		assert_eq!(sanitize("don't"), "dont");
		assert_eq!(sanitize("café"), "caf");
		assert_eq!(sanitize("Upper"), "pper");
	}

	#[test]
	fn sanitize_is_idempotent_on_clean_words() {
		for word in ["the", "whispered", "a", "shadows"] {
			assert_eq!(sanitize(word), word);
			assert_eq!(sanitize(&sanitize(word)), sanitize(word));
		}
	}

	#[test]
	fn sanitize_all_drops_empties_without_reordering() {
		let words = sanitize_all(["zeta", "123", "alpha", "...", "mid"]);
		assert_eq!(words, vec!["zeta", "alpha", "mid"]);
	}
}
