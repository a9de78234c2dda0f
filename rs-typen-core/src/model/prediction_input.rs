use serde::{Deserialize, Serialize};

/// Genre used when a request does not name one.
pub const DEFAULT_GENRE: &str = "fiction";

/// One inbound prediction request.
///
/// Both fields are optional on the wire. Missing text behaves like empty
/// text, and a missing or blank genre falls back to [`DEFAULT_GENRE`].
///
/// Requests are stateless: nothing is kept between two calls.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionRequest {
	#[serde(default)]
	text: Option<String>,

	#[serde(default)]
	genre: Option<String>,
}

impl PredictionRequest {
	/// Creates a request with the given text and the default genre.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: Some(text.into()),
			genre: None,
		}
	}

	/// Sets the genre.
	pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
		self.genre = Some(genre.into());
		self
	}

	/// The writer's text with surrounding whitespace removed.
	pub fn text(&self) -> &str {
		self.text.as_deref().unwrap_or_default().trim()
	}

	/// The requested genre, trimmed, or [`DEFAULT_GENRE`] when absent or blank.
	pub fn genre(&self) -> &str {
		match self.genre.as_deref().map(str::trim) {
			Some(genre) if !genre.is_empty() => genre,
			_ => DEFAULT_GENRE,
		}
	}

	/// Returns `true` when there is no text to predict from.
	pub fn is_blank(&self) -> bool {
		self.text().is_empty()
	}
}
