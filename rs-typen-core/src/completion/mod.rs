//! Boundary to the text-generation service.
//!
//! The pipeline only needs one operation: send a prompt, get text back.
//! Implementations own their transport concerns (authentication, timeouts);
//! the pipeline never retries or caches.

use async_trait::async_trait;

use crate::error::Result;

/// Hosted Cohere chat client.
pub mod cohere;

/// In-process client with a canned reply, for demos and tests.
pub mod fixed;

pub use cohere::CohereClient;
pub use fixed::StaticCompletion;

/// A service that turns a prompt into free-form text.
///
/// The returned text is untrusted: it may be empty, oddly delimited, or
/// much longer than asked for.
#[async_trait]
pub trait CompletionClient: Send + Sync {
	/// Sends `prompt` and returns the raw reply.
	///
	/// # Errors
	/// Returns [`crate::Error::Upstream`] or [`crate::Error::Http`] when the
	/// service cannot produce a reply.
	async fn complete(&self, prompt: &str) -> Result<String>;
}
