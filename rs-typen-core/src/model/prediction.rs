use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of probable suggestions, ranked `"1"..="5"`.
pub const PROBABLE_COUNT: usize = 5;

/// Number of creative suggestions, ranked `"C1"..="C3"`.
pub const CREATIVE_COUNT: usize = 3;

/// Total number of suggestions in every answer.
pub const PREDICTION_COUNT: usize = PROBABLE_COUNT + CREATIVE_COUNT;

/// Answer returned for empty text, without asking the completion service.
const CANONICAL_WORDS: [&str; PREDICTION_COUNT] = [
	"the", "once", "in", "it", "there", "beneath", "whispered", "shadows",
];

/// Category of a suggestion.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PredictionType {
	Probable,
	Creative,
}

impl fmt::Display for PredictionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PredictionType::Probable => f.pad("probable"),
			PredictionType::Creative => f.pad("creative"),
		}
	}
}

/// A single ranked word suggestion.
///
/// Serialized as `{id, word, rank, type}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
	pub id: usize,
	pub word: String,
	pub rank: String,
	#[serde(rename = "type")]
	pub kind: PredictionType,
}

impl Prediction {
	/// Stamps the word found at `index` (0-based) in the final sequence.
	fn ranked(index: usize, word: String) -> Self {
		let (rank, kind) = if index < PROBABLE_COUNT {
			((index + 1).to_string(), PredictionType::Probable)
		} else {
			(format!("C{}", index - PROBABLE_COUNT + 1), PredictionType::Creative)
		};

		Self {
			id: index + 1,
			word,
			rank,
			kind,
		}
	}
}

/// The complete answer: always exactly eight ranked suggestions.
///
/// # Invariants
/// - ids are `1..=8`, contiguous and in order
/// - the first five are probable (`"1".."5"`), the last three creative (`"C1".."C3"`)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct PredictionSet([Prediction; PREDICTION_COUNT]);

impl PredictionSet {
	/// Assigns ids, ranks and categories to a final word sequence.
	pub fn rank(words: [String; PREDICTION_COUNT]) -> Self {
		let mut index = 0;
		Self(words.map(|word| {
			let prediction = Prediction::ranked(index, word);
			index += 1;
			prediction
		}))
	}

	/// The fixed answer for empty input.
	pub fn canonical() -> Self {
		Self::rank(CANONICAL_WORDS.map(str::to_owned))
	}

	pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
		self.0.iter()
	}

	/// The five probable suggestions.
	pub fn probable(&self) -> &[Prediction] {
		&self.0[..PROBABLE_COUNT]
	}

	/// The three creative suggestions.
	pub fn creative(&self) -> &[Prediction] {
		&self.0[PROBABLE_COUNT..]
	}

	/// The words alone, in rank order.
	pub fn words(&self) -> Vec<&str> {
		self.0.iter().map(|p| p.word.as_str()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ranks_probable_then_creative() {
		let set = PredictionSet::canonical();
		let ranks: Vec<&str> = set.iter().map(|p| p.rank.as_str()).collect();
		assert_eq!(ranks, ["1", "2", "3", "4", "5", "C1", "C2", "C3"]);

		let ids: Vec<usize> = set.iter().map(|p| p.id).collect();
		assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);

		assert!(set.probable().iter().all(|p| p.kind == PredictionType::Probable));
		assert!(set.creative().iter().all(|p| p.kind == PredictionType::Creative));
	}

	#[test]
	fn canonical_words() {
		assert_eq!(
			PredictionSet::canonical().words(),
			["the", "once", "in", "it", "there", "beneath", "whispered", "shadows"]
		);
	}

	#[test]
	fn serializes_as_a_plain_array() {
		let json = serde_json::to_value(PredictionSet::canonical()).unwrap();
		let entries = json.as_array().unwrap();
		assert_eq!(entries.len(), 8);
		assert_eq!(
			entries[0],
			serde_json::json!({"id": 1, "word": "the", "rank": "1", "type": "probable"})
		);
		assert_eq!(
			entries[7],
			serde_json::json!({"id": 8, "word": "shadows", "rank": "C3", "type": "creative"})
		);
	}

	#[test]
	fn prediction_reads_back_from_json() {
		let prediction: Prediction = serde_json::from_str(
			r#"{"id": 6, "word": "beneath", "rank": "C1", "type": "creative"}"#,
		)
		.unwrap();
		assert_eq!(prediction.kind, PredictionType::Creative);
		assert_eq!(prediction.rank, "C1");
		assert_eq!(prediction.word, "beneath");
	}
}
