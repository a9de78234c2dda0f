//! Next-word suggestion library for fiction writers.
//!
//! This crate turns free-form text from a hosted language model into a
//! fixed, ranked set of suggestions:
//! - Five probable continuations and three creative alternatives
//! - Bounded context sent upstream
//! - Tolerant parsing and sanitizing of whatever the model returns
//! - Deterministic padding so the answer is always complete
//!
//! Transport failures are reported; poor-quality output is repaired.

/// Prediction pipeline: request, context, prompt, parsing, padding, ranking.
pub mod model;

/// Completion client boundary and implementations.
pub mod completion;

/// Error and result types.
pub mod error;

pub use completion::{CohereClient, CompletionClient, StaticCompletion};
pub use error::{Error, Result};
pub use model::prediction::{Prediction, PredictionSet, PredictionType};
pub use model::prediction_input::PredictionRequest;
pub use model::predictor::{Predictor, normalize};
