use std::env;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use serde::Deserialize;

use rs_typen_core::{Prediction, PredictionRequest, PredictionType};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Body of a `/api/predict` reply, success or failure.
#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum PredictReply {
    Success { predictions: Vec<Prediction> },
    Error { message: String },
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(30, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a POST request to `/api/predict`.
    ///
    /// Error payloads from the server are returned as `Err(message)`.
    fn post_predict(&self, request: &PredictionRequest) -> Result<Vec<Prediction>, String> {
        let reply = self.client
            .post(format!("{}/api/predict", self.base_url))
            .json(request)
            .send()
            .and_then(|response| response.json::<PredictReply>())
            .map_err(|e| e.to_string())?;

        match reply {
            PredictReply::Success { predictions } => Ok(predictions),
            PredictReply::Error { message } => Err(message),
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct WritingPadUI {
    rest: RESTContext,
    text: String,
    genre: String,
    predictions: Vec<Prediction>,
    last_error: Option<String>,
}

impl WritingPadUI {
    /// Initializes the UI with sane defaults.
    fn new(base_url: String) -> reqwest::Result<Self> {
        Ok(Self {
            rest: RESTContext::new(base_url)?,
            text: String::new(),
            genre: "fiction".to_owned(),
            predictions: Vec::new(),
            last_error: None,
        })
    }

    /// Performs the prediction request.
    fn get_predictions(&mut self) {
        let request = PredictionRequest::new(self.text.as_str()).with_genre(self.genre.as_str());
        match self.rest.post_predict(&request) {
            Ok(predictions) => {
                self.predictions = predictions;
                self.last_error = None;
            }
            Err(e) => {
                self.predictions.clear();
                self.last_error = Some(format!("Error: {e}"));
            }
        }
    }

    /// Appends a chosen suggestion and clears the list.
    fn accept(&mut self, word: &str) {
        append_word(&mut self.text, word);
        self.predictions.clear();
    }

    fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Draws one row of suggestion buttons and returns the clicked word.
    fn suggestion_row(ui: &mut egui::Ui, label: &str, predictions: &[&Prediction]) -> Option<String> {
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            ui.label(label);
            for prediction in predictions {
                let button = egui::Button::new(prediction.word.as_str());
                if ui.add(button).on_hover_text(format!("rank {}", prediction.rank)).clicked() {
                    clicked = Some(prediction.word.clone());
                }
            }
        });
        clicked
    }
}

impl eframe::App for WritingPadUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Genre");
                ui.text_edit_singleline(&mut self.genre);
            });

            ui.add(
                egui::TextEdit::multiline(&mut self.text)
                    .hint_text("Type something here...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                if ui
                    .add_sized([120.0, 30.0], egui::Button::new("Predict"))
                    .clicked()
                {
                    self.get_predictions();
                }
                ui.label(format!("Words: {}", self.word_count()));
            });

            ui.separator();

            if let Some(error) = &self.last_error {
                ui.colored_label(egui::Color32::RED, error);
            } else if self.predictions.is_empty() {
                ui.label("Click Predict to get suggestions");
            } else {
                let probable: Vec<&Prediction> = self.predictions
                    .iter()
                    .filter(|p| p.kind == PredictionType::Probable)
                    .collect();
                let creative: Vec<&Prediction> = self.predictions
                    .iter()
                    .filter(|p| p.kind == PredictionType::Creative)
                    .collect();

                let first = Self::suggestion_row(ui, "Suggested words:", &probable);
                let second = Self::suggestion_row(ui, "Creative:", &creative);

                if let Some(word) = first.or(second) {
                    self.accept(&word);
                }
            }
        });
    }
}

/// Appends `word`, separated by a single space only when one is needed.
fn append_word(text: &mut String, word: &str) {
    if !text.is_empty() && !text.ends_with(char::is_whitespace) {
        text.push(' ');
    }
    text.push_str(word);
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let base_url = env::var("TYPEN_SERVER_URL")
        .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_owned())
        .trim_end_matches('/')
        .to_owned();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-typen",
        options,
        Box::new(|_| Ok(Box::new(WritingPadUI::new(base_url)?))),
    )
}
