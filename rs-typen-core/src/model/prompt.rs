/// Builds the instruction sent to the completion service.
///
/// The output-format lines are only a request: the tokenizer never relies
/// on the model honouring them.
pub fn build_prompt(context: &str, genre: &str) -> String {
	format!(
		r#"You are a literary-level predictive writing assistant trained to help professional novelists.

You analyze narrative flow, pacing, emotional tone, and genre conventions before predicting the next words.

Genre: "{genre}"

Recent Context:
"{context}"

Return:
- 5 highly probable next words
- 3 creative alternative words

Format:
comma-separated list only (8 words total, probable first then creative)
lowercase only, no punctuation, no explanation"#
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embeds_genre_and_context() {
		let prompt = build_prompt("the door creaked open", "horror");
		assert!(prompt.contains("Genre: \"horror\""));
		assert!(prompt.contains("\"the door creaked open\""));
	}

	#[test]
	fn states_the_output_shape() {
		let prompt = build_prompt("x", "fiction");
		assert!(prompt.starts_with("You are a literary-level predictive writing assistant"));
		assert!(prompt.contains("5 highly probable next words"));
		assert!(prompt.contains("3 creative alternative words"));
		assert!(prompt.contains("comma-separated list only (8 words total"));
		assert!(prompt.ends_with("lowercase only, no punctuation, no explanation"));
	}
}
