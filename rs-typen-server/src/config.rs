use std::env;
use std::str::FromStr;
use std::time::Duration;

use rs_typen_core::completion::cohere;
use rs_typen_core::model::context_window::DEFAULT_CONTEXT_WORDS;

const DEFAULT_ORIGINS: [&str; 3] = [
	"http://localhost:5173",
	"http://localhost:5174",
	"http://localhost:3000",
];

/// Server settings, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub cohere_api_key: Option<String>,
	pub cohere_model: String,
	pub cohere_base_url: String,
	pub cohere_timeout: Duration,
	pub context_words: usize,
	pub allowed_origins: Vec<String>,
}

impl ServerConfig {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds the configuration from any key/value source.
	///
	/// Missing or unparseable values fall back to their defaults.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

		Self {
			host: non_blank("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
			port: parsed(&lookup, "PORT").unwrap_or(5000),
			cohere_api_key: non_blank("COHERE_API_KEY"),
			cohere_model: non_blank("COHERE_MODEL")
				.unwrap_or_else(|| cohere::DEFAULT_MODEL.to_owned()),
			cohere_base_url: non_blank("COHERE_BASE_URL")
				.unwrap_or_else(|| cohere::DEFAULT_BASE_URL.to_owned()),
			cohere_timeout: parsed(&lookup, "COHERE_TIMEOUT_SECS")
				.map(Duration::from_secs)
				.unwrap_or(cohere::DEFAULT_TIMEOUT),
			context_words: parsed(&lookup, "CONTEXT_WORDS")
				.filter(|n: &usize| *n > 0)
				.unwrap_or(DEFAULT_CONTEXT_WORDS),
			allowed_origins: match non_blank("ALLOWED_ORIGINS") {
				Some(origins) => origins
					.split(',')
					.map(|s| s.trim())
					.filter(|s| !s.is_empty())
					.map(str::to_owned)
					.collect(),
				None => DEFAULT_ORIGINS.iter().map(|s| (*s).to_owned()).collect(),
			},
		}
	}
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
{
	lookup(key).and_then(|v| v.trim().parse().ok())
}
