use std::env;
use std::sync::Arc;

use rs_typen_core::completion::cohere::MISSING_API_KEY;
use rs_typen_core::{
    normalize, CohereClient, CompletionClient, PredictionRequest, PredictionSet, Predictor,
    StaticCompletion,
};

fn print_predictions(title: &str, predictions: &PredictionSet) {
    println!("{title}");
    for p in predictions.iter() {
        println!("  #{} {:<4} {:<9} {}", p.id, p.rank, p.kind, p.word);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the hosted model when a key is available, otherwise a canned reply
    let client: Arc<dyn CompletionClient> = match env::var("COHERE_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Arc::new(CohereClient::new(key)?),
        _ => Arc::new(StaticCompletion::new(
            "forest, dark, old, the, grew, beneath, shadow, whispered",
        )),
    };

    // Only the last 30 words of the text are sent upstream (configurable)
    let predictor = Predictor::new(client).with_context_words(30);

    // Empty text never reaches the completion service
    let empty = predictor.predict(&PredictionRequest::new("")).await?;
    print_predictions("Empty text:", &empty);

    // A regular request; genre defaults to "fiction" when not set
    let request = PredictionRequest::new("The lantern flickered as she stepped into the")
        .with_genre("gothic");
    let predictions = predictor.predict(&request).await?;
    print_predictions("Gothic continuation:", &predictions);

    // Whatever the model sends back, the answer always has eight words
    for raw in ["  ", "1. Ember\n2. Ash", "door, slowly, creaked, open, wide, and"] {
        print_predictions(&format!("Normalized {raw:?}:"), &normalize(raw));
    }

    // Client failures are reported, not replaced by defaults
    let failing = Predictor::new(Arc::new(StaticCompletion::failing("service unavailable")));
    match failing.predict(&PredictionRequest::new("Once upon a time")).await {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Upstream failure reported: {e}"),
    }

    // Without any client, every request is refused with a configuration error
    match Predictor::unconfigured(MISSING_API_KEY).predict(&PredictionRequest::new("")).await {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Configuration error reported: {e}"),
    }

    Ok(())
}
