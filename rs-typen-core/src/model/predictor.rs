use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::error::{Error, Result};
use crate::model::context_window::{ContextWindow, DEFAULT_CONTEXT_WORDS};
use crate::model::padding::pad;
use crate::model::prediction::PredictionSet;
use crate::model::prediction_input::PredictionRequest;
use crate::model::prompt::build_prompt;
use crate::model::tokenizer::{sanitize_all, tokenize};

/// Turns raw completion text into exactly eight ranked suggestions.
///
/// Stages: tokenize, sanitize, pad, rank. Never fails: degenerate input
/// (empty, garbage, too short) is filled from the default tables.
pub fn normalize(raw: &str) -> PredictionSet {
	let candidates = tokenize(raw);
	log::trace!("tokenized {} candidate(s)", candidates.len());

	let words = sanitize_all(candidates);
	log::trace!("{} candidate(s) left after sanitizing", words.len());

	PredictionSet::rank(pad(words))
}

/// Prediction pipeline bound to one completion client.
///
/// # Responsibilities
/// - Short-circuit empty text to the canonical answer
/// - Bound the context sent upstream
/// - Call the completion client exactly once per request
/// - Normalize whatever comes back
///
/// The predictor holds no mutable state and can be shared across requests.
#[derive(Clone)]
pub struct Predictor {
	client: std::result::Result<Arc<dyn CompletionClient>, String>,
	context_words: usize,
}

impl Predictor {
	/// Creates a predictor using `client` for every request.
	pub fn new(client: Arc<dyn CompletionClient>) -> Self {
		Self {
			client: Ok(client),
			context_words: DEFAULT_CONTEXT_WORDS,
		}
	}

	/// Creates a predictor with no client. Every prediction fails with
	/// [`Error::Configuration`] carrying `reason`.
	pub fn unconfigured(reason: impl Into<String>) -> Self {
		Self {
			client: Err(reason.into()),
			context_words: DEFAULT_CONTEXT_WORDS,
		}
	}

	/// Sets how many trailing words of context are sent upstream.
	///
	/// A value of zero is ignored.
	pub fn with_context_words(mut self, context_words: usize) -> Self {
		if context_words > 0 {
			self.context_words = context_words;
		}
		self
	}

	pub fn context_words(&self) -> usize {
		self.context_words
	}

	pub fn is_configured(&self) -> bool {
		self.client.is_ok()
	}

	/// Runs the full pipeline for one request.
	///
	/// # Errors
	/// - [`Error::Configuration`] if no client is configured (checked before anything else)
	/// - [`Error::Upstream`] / [`Error::Http`] if the client call fails; no defaults are
	///   substituted in that case
	pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionSet> {
		let client = match &self.client {
			Ok(client) => client,
			Err(reason) => {
				log::error!("prediction refused: {reason}");
				return Err(Error::Configuration(reason.clone()));
			}
		};

		if request.is_blank() {
			log::debug!("empty text, returning canonical predictions");
			return Ok(PredictionSet::canonical());
		}

		let window = ContextWindow::extract(request.text(), self.context_words);
		if window.dropped_words() > 0 {
			log::debug!(
				"context trimmed to last {} word(s), {} dropped",
				window.word_count(),
				window.dropped_words()
			);
		}

		let prompt = build_prompt(window.text(), request.genre());
		let raw = client.complete(&prompt).await.inspect_err(|e| {
			log::error!("completion request failed: {e}");
		})?;
		log::debug!("completion reply: {raw}");

		Ok(normalize(&raw))
	}
}

#[cfg(test)]
mod tests {
	use crate::completion::cohere::MISSING_API_KEY;

	use super::*;

	#[test]
	fn well_formed_reply_keeps_order() {
		let set = normalize("forest, dark, old, the, grew, beneath, shadow, whispered");
		assert_eq!(
			set.words(),
			["forest", "dark", "old", "the", "grew", "beneath", "shadow", "whispered"]
		);
	}

	#[test]
	fn whitespace_only_reply_gets_all_defaults() {
		assert_eq!(
			normalize("  ").words(),
			["and", "the", "to", "of", "a", "beneath", "whispered", "shadows"]
		);
	}

	#[test]
	fn noisy_reply_is_cleaned_before_padding() {
		let set = normalize("1. Ember\n2. Ash\n3. ...");
		// no comma: whitespace split gives "1.", "ember", "2.", "ash", "3.", "..."
		assert_eq!(
			set.words(),
			["ember", "ash", "to", "of", "a", "beneath", "whispered", "shadows"]
		);
	}

	#[test]
	fn zero_context_words_is_ignored() {
		let predictor = Predictor::unconfigured(MISSING_API_KEY).with_context_words(0);
		assert_eq!(predictor.context_words(), DEFAULT_CONTEXT_WORDS);
		assert!(!predictor.is_configured());
	}
}
