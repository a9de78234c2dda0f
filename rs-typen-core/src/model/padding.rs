use crate::model::prediction::{CREATIVE_COUNT, PREDICTION_COUNT, PROBABLE_COUNT};

/// Fill words for missing probable slots, indexed by slot position.
pub const DEFAULT_PROBABLE: [&str; PROBABLE_COUNT] = ["and", "the", "to", "of", "a"];

/// Fill words for missing creative slots, indexed by `position - PROBABLE_COUNT`.
pub const DEFAULT_CREATIVE: [&str; CREATIVE_COUNT] = ["beneath", "whispered", "shadows"];

/// Returns the default word for a given output position.
fn default_for(position: usize) -> &'static str {
	if position < PROBABLE_COUNT {
		DEFAULT_PROBABLE[position]
	} else {
		DEFAULT_CREATIVE[position - PROBABLE_COUNT]
	}
}

/// Forces a sanitized word list to exactly [`PREDICTION_COUNT`] entries.
///
/// Words past the eighth are discarded. Missing slots are filled from the
/// default tables at the slot's own position, so three usable words are
/// followed by `"of", "a"` and not by `"and", "the"`.
pub fn pad(words: Vec<String>) -> [String; PREDICTION_COUNT] {
	let shortfall = PREDICTION_COUNT.saturating_sub(words.len());
	if shortfall > 0 {
		log::debug!("padding {shortfall} missing prediction slot(s) with defaults");
	}

	let mut words = words.into_iter();
	std::array::from_fn(|position| {
		words
			.next()
			.unwrap_or_else(|| default_for(position).to_owned())
	})
}
