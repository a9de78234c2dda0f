//! Error types for the prediction pipeline.
//!
//! Only availability problems are errors. A completion that is present but
//! unusable is repaired by the padding stage and never reaches this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	/// No completion client is available. The message is shown to callers as-is.
	#[error("{0}")]
	Configuration(String),

	/// The completion service answered, but not with usable text.
	#[error("{0}")]
	Upstream(String),

	/// The completion service could not be reached.
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
}

impl Error {
	/// Returns `true` for failures raised by the completion service itself.
	pub fn is_upstream(&self) -> bool {
		matches!(self, Error::Upstream(_) | Error::Http(_))
	}
}

pub type Result<T> = std::result::Result<T, Error>;
