use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionClient;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.cohere.com";
pub const DEFAULT_MODEL: &str = "command-a-03-2025";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reported whenever no usable API key is available.
pub const MISSING_API_KEY: &str = "Cohere API key not configured";

#[derive(Serialize)]
struct ChatRequest<'a> {
	model: &'a str,
	messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
	role: &'a str,
	content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
	message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
	#[serde(default)]
	content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
	#[serde(default)]
	text: Option<String>,
}

impl ChatResponse {
	/// Text of the first content block, trimmed.
	fn into_text(self) -> Result<String> {
		self.message
			.content
			.into_iter()
			.next()
			.and_then(|block| block.text)
			.map(|text| text.trim().to_owned())
			.ok_or_else(|| Error::Upstream("cohere chat returned no text content".to_owned()))
	}
}

/// Client for Cohere's v2 chat endpoint.
///
/// One user message per call, no streaming.
#[derive(Clone)]
pub struct CohereClient {
	client: Client,
	base_url: String,
	api_key: String,
	model: String,
}

impl CohereClient {
	/// Creates a client with the default model, base URL and timeout.
	pub fn new(api_key: impl Into<String>) -> Result<Self> {
		Self::builder(api_key).build()
	}

	pub fn builder(api_key: impl Into<String>) -> CohereClientBuilder {
		CohereClientBuilder {
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_owned(),
			model: DEFAULT_MODEL.to_owned(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	pub fn model(&self) -> &str {
		&self.model
	}
}

/// Options for [`CohereClient`].
#[derive(Debug, Clone)]
pub struct CohereClientBuilder {
	api_key: String,
	base_url: String,
	model: String,
	timeout: Duration,
}

impl CohereClientBuilder {
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_owned();
		self
	}

	pub fn model(mut self, model: impl Into<String>) -> Self {
		self.model = model.into();
		self
	}

	/// Whole-request timeout, enforced by the HTTP client.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// # Errors
	/// Returns an error if the API key is blank or the HTTP client cannot be built.
	pub fn build(self) -> Result<CohereClient> {
		if self.api_key.trim().is_empty() {
			return Err(Error::Configuration(MISSING_API_KEY.to_owned()));
		}

		let client = Client::builder().timeout(self.timeout).build()?;
		Ok(CohereClient {
			client,
			base_url: self.base_url,
			api_key: self.api_key,
			model: self.model,
		})
	}
}

#[async_trait]
impl CompletionClient for CohereClient {
	async fn complete(&self, prompt: &str) -> Result<String> {
		let url = format!("{}/v2/chat", self.base_url);
		let response = self
			.client
			.post(url)
			.bearer_auth(&self.api_key)
			.json(&ChatRequest {
				model: &self.model,
				messages: [ChatMessage {
					role: "user",
					content: prompt,
				}],
			})
			.send()
			.await?;

		if !response.status().is_success() {
			let status = response.status();
			let detail = match response.text().await {
				Ok(body) => normalize_err_body(&body),
				Err(e) => format!("<unreadable body: {e}>"),
			};
			return Err(Error::Upstream(format!("cohere chat returned {status}: {detail}")));
		}

		let response = response
			.json::<ChatResponse>()
			.await
			.map_err(|e| Error::Upstream(format!("failed to decode cohere chat response: {e}")))?;

		let text = response.into_text()?;
		log::debug!("cohere response: {text}");
		Ok(text)
	}
}

/// Pulls the provider's error message out of a JSON error body when there is one.
fn normalize_err_body(body: &str) -> String {
	let trimmed = body.trim();
	if trimmed.is_empty() {
		return "<empty body>".to_owned();
	}

	if let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) {
		for key in ["message", "error"] {
			if let Some(err) = json.get(key).and_then(|v| v.as_str()) {
				return err.to_owned();
			}
		}
	}

	trimmed.to_owned()
}
