use async_trait::async_trait;

use crate::completion::CompletionClient;
use crate::error::{Error, Result};

/// Completion client that always gives the same answer.
#[derive(Debug, Clone)]
pub struct StaticCompletion {
	reply: std::result::Result<String, String>,
}

impl StaticCompletion {
	/// Always replies with `text`.
	pub fn new(text: impl Into<String>) -> Self {
		Self { reply: Ok(text.into()) }
	}

	/// Always fails with an upstream error carrying `message`.
	pub fn failing(message: impl Into<String>) -> Self {
		Self { reply: Err(message.into()) }
	}
}

#[async_trait]
impl CompletionClient for StaticCompletion {
	async fn complete(&self, _prompt: &str) -> Result<String> {
		match &self.reply {
			Ok(text) => Ok(text.clone()),
			Err(message) => Err(Error::Upstream(message.clone())),
		}
	}
}
