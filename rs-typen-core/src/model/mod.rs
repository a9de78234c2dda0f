//! Top-level module for the prediction pipeline.
//!
//! This module turns a writer's text into eight ranked word suggestions:
//! - Context trimming (`ContextWindow`)
//! - Prompt construction (`build_prompt`)
//! - Tolerant parsing of the reply (`tokenize`, `sanitize`)
//! - Default padding (`pad`)
//! - Ranking (`PredictionSet`)
//! - A high-level orchestration interface (`Predictor`)

/// High-level interface running one request through the pipeline.
///
/// Owns the injected completion client and the context size.
pub mod predictor;

/// Ranked suggestions and the fixed-size set returned to callers.
pub mod prediction;

/// Inbound request with its wire defaults.
pub mod prediction_input;

/// Trailing-words context extraction.
pub mod context_window;

/// Instruction template sent upstream.
pub mod prompt;

/// Two-strategy tokenizer and character sanitizer.
///
/// Pure functions, safe to call on any text.
pub mod tokenizer;

/// Default-vocabulary padding to exactly eight words.
pub mod padding;
