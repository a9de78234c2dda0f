use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error, get, middleware, post, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use env_logger::Env;
use serde::Serialize;

use rs_typen_core::completion::cohere::MISSING_API_KEY;
use rs_typen_core::{CohereClient, PredictionRequest, PredictionSet, Predictor};

use crate::config::ServerConfig;

mod config;

struct SharedData {
	predictor: Predictor,
}

/// `{"status": ..., "message": ...}` payload used for health and errors.
#[derive(Serialize)]
struct StatusMessage {
	status: &'static str,
	message: String,
}

impl StatusMessage {
	fn success(message: impl Into<String>) -> Self {
		Self { status: "success", message: message.into() }
	}

	fn error(message: impl Into<String>) -> Self {
		Self { status: "error", message: message.into() }
	}
}

#[derive(Serialize)]
struct PredictResponse {
	status: &'static str,
	predictions: PredictionSet,
}

/// HTTP GET endpoint `/`
///
/// Health check.
#[get("/")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().json(StatusMessage::success("Next Word Prediction API is running!"))
}

/// HTTP POST endpoint `/api/predict`
///
/// Takes `{text?, genre?}` and returns exactly eight ranked suggestions.
/// Client unavailability or failure is answered with a 500 error payload;
/// no default words are substituted.
#[post("/api/predict")]
async fn post_predict(data: web::Data<SharedData>, request: web::Json<PredictionRequest>) -> impl Responder {
	match data.predictor.predict(&request).await {
		Ok(predictions) => HttpResponse::Ok().json(PredictResponse { status: "success", predictions }),
		Err(e) => {
			log::error!("error predicting words: {e}");
			HttpResponse::InternalServerError().json(StatusMessage::error(e.to_string()))
		}
	}
}

/// Turns body extraction failures into the same error payload as the handlers.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
	let response = HttpResponse::BadRequest().json(StatusMessage::error(format!("Invalid request body: {err}")));
	error::InternalError::from_response(err, response).into()
}

/// Registers routes and extractor settings.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
		.service(get_health)
		.service(post_predict);
}

/// Builds the predictor from the configuration.
///
/// A missing or unusable API key does not stop the server: predictions
/// then answer with a configuration error.
fn build_predictor(config: &ServerConfig) -> Predictor {
	let predictor = match &config.cohere_api_key {
		None => {
			log::warn!("{MISSING_API_KEY}");
			Predictor::unconfigured(MISSING_API_KEY)
		}
		Some(api_key) => {
			let client = CohereClient::builder(api_key.as_str())
				.base_url(config.cohere_base_url.as_str())
				.model(config.cohere_model.as_str())
				.timeout(config.cohere_timeout)
				.build();
			match client {
				Ok(client) => {
					log::info!("using Cohere model {}", client.model());
					Predictor::new(Arc::new(client))
				}
				Err(e) => {
					log::error!("failed to build Cohere client: {e}");
					Predictor::unconfigured(e.to_string())
				}
			}
		}
	};

	predictor.with_context_words(config.context_words)
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment, builds the predictor once
/// and shares it read-only between workers.
///
/// # Notes
/// - Binds to `HOST:PORT` (default `0.0.0.0:5000`).
/// - CORS only allows the configured origins.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env();
	let shared_data = web::Data::new(SharedData {
		predictor: build_predictor(&config),
	});
	let origins = config.allowed_origins.clone();

	log::info!("starting server on {}:{}", config.host, config.port);

	HttpServer::new(move || {
		let cors = origins
			.iter()
			.fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
			.allowed_methods(vec!["GET", "POST"])
			.allow_any_header()
			.max_age(3600);

		App::new()
			.wrap(cors)
			.wrap(middleware::Logger::default())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use actix_web::http::{header::ContentType, StatusCode};
	use actix_web::test;
	use serde_json::{json, Value};

	use rs_typen_core::StaticCompletion;

	use super::*;

	fn shared(predictor: Predictor) -> web::Data<SharedData> {
		web::Data::new(SharedData { predictor })
	}

	async fn post_json(predictor: Predictor, body: Value) -> (StatusCode, Value) {
		let app = test::init_service(App::new().app_data(shared(predictor)).configure(configure)).await;
		let req = test::TestRequest::post().uri("/api/predict").set_json(body).to_request();
		let resp = test::call_service(&app, req).await;
		let status = resp.status();
		(status, test::read_body_json(resp).await)
	}

	#[actix_web::test]
	async fn health_check() {
		let app = test::init_service(App::new().configure(configure)).await;
		let req = test::TestRequest::get().uri("/").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, json!({"status": "success", "message": "Next Word Prediction API is running!"}));
	}

	#[actix_web::test]
	async fn predicts_eight_ranked_words() {
		let predictor = Predictor::new(Arc::new(StaticCompletion::new(
			"forest, dark, old, the, grew, beneath, shadow, whispered",
		)));
		let (status, body) = post_json(predictor, json!({"text": "Into the", "genre": "fantasy"})).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "success");

		let predictions = body["predictions"].as_array().unwrap();
		assert_eq!(predictions.len(), 8);
		assert_eq!(predictions[0], json!({"id": 1, "word": "forest", "rank": "1", "type": "probable"}));
		assert_eq!(predictions[5], json!({"id": 6, "word": "beneath", "rank": "C1", "type": "creative"}));
		assert_eq!(predictions[7]["rank"], "C3");
	}

	#[actix_web::test]
	async fn empty_body_object_gets_canonical_words() {
		let predictor = Predictor::new(Arc::new(StaticCompletion::failing("must not be called")));
		let (status, body) = post_json(predictor, json!({})).await;

		assert_eq!(status, StatusCode::OK);
		let words: Vec<&str> = body["predictions"]
			.as_array()
			.unwrap()
			.iter()
			.map(|p| p["word"].as_str().unwrap())
			.collect();
		assert_eq!(words, ["the", "once", "in", "it", "there", "beneath", "whispered", "shadows"]);
	}

	#[actix_web::test]
	async fn upstream_failure_is_an_error_payload() {
		let predictor = Predictor::new(Arc::new(StaticCompletion::failing("quota exceeded")));
		let (status, body) = post_json(predictor, json!({"text": "The storm"})).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, json!({"status": "error", "message": "quota exceeded"}));
	}

	#[actix_web::test]
	async fn missing_api_key_is_an_error_payload() {
		let (status, body) = post_json(Predictor::unconfigured(MISSING_API_KEY), json!({"text": ""})).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, json!({"status": "error", "message": "Cohere API key not configured"}));
	}

	#[actix_web::test]
	async fn malformed_body_is_a_bad_request() {
		let app = test::init_service(
			App::new()
				.app_data(shared(Predictor::new(Arc::new(StaticCompletion::new("a")))))
				.configure(configure),
		)
		.await;
		let req = test::TestRequest::post()
			.uri("/api/predict")
			.insert_header(ContentType::json())
			.set_payload("{not json")
			.to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["status"], "error");
	}

	#[actix_web::test]
	async fn missing_key_builds_an_unconfigured_predictor() {
		let config = ServerConfig::from_lookup(|_| None);
		let predictor = build_predictor(&config);
		assert!(!predictor.is_configured());
		assert_eq!(predictor.context_words(), 30);

		let err = predictor.predict(&PredictionRequest::new("")).await.unwrap_err();
		assert_eq!(err.to_string(), "Cohere API key not configured");
	}
}
