/// Default number of trailing words kept from the writer's text.
pub const DEFAULT_CONTEXT_WORDS: usize = 30;

/// Bounded suffix of the writer's text that is sent upstream.
///
/// The text is split on whitespace. When it holds more words than the
/// limit, only the last `max_words` are kept, rejoined with single spaces.
/// Otherwise the original text is kept untouched (including its spacing).
///
/// # Invariants
/// - `text` never holds more than `max_words` words
/// - `dropped_words == 0` implies `text` equals the raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
	text: String,
	word_count: usize,
	dropped_words: usize,
}

impl ContextWindow {
	/// Extracts the window from `raw`, keeping at most `max_words` words.
	pub fn extract(raw: &str, max_words: usize) -> Self {
		let words: Vec<&str> = raw.split_whitespace().collect();

		if words.len() <= max_words {
			return Self {
				text: raw.to_owned(),
				word_count: words.len(),
				dropped_words: 0,
			};
		}

		let start = words.len() - max_words;
		Self {
			text: words[start..].join(" "),
			word_count: max_words,
			dropped_words: start,
		}
	}

	/// The trimmed text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Number of words in the trimmed text.
	pub fn word_count(&self) -> usize {
		self.word_count
	}

	/// Number of leading words that were cut off.
	pub fn dropped_words(&self) -> usize {
		self.dropped_words
	}
}
