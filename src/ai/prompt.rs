//! Prompt template generation
//!
//! Renders a basis text and the user's freeform instruction into the prompt
//! sent to the language model. Pure: identical input gives identical output.

use crate::editor::{last_word, word_count};

/// Build the suggestion prompt for a non-empty basis.
///
/// The basis is always quoted. One or more words add synonym and rhyme
/// instructions for the last word; two or more add figurative language for
/// the whole basis. A non-empty freeform instruction is appended last.
pub fn build_prompt(basis: &str, freeform: &str) -> String {
    let basis = basis.trim();
    let mut prompt = String::new();

    prompt.push_str("Text to analyse:\n");
    prompt.push_str(&format!("\"{}\"\n\n", basis));

    if let Some(word) = last_word(basis) {
        prompt.push_str(&format!(
            "Give synonyms and alternative expressions for the last word: \"{}\".\n",
            word
        ));
        prompt.push_str(&format!("Give rhyme suggestions for \"{}\".\n", word));
    }

    if word_count(basis) >= 2 {
        prompt.push_str(&format!(
            "Invent 2-4 fresh figures of speech (metaphors, similes) for the whole text: \"{}\".\n",
            basis
        ));
    }

    prompt.push_str("\nStyle: creative but usable in a song.\n");

    let freeform = freeform.trim();
    if !freeform.is_empty() {
        prompt.push_str(&format!("\nAdditional instruction: {}\n", freeform));
    }

    prompt
}

/// Placeholder basis shown in the prompt preview when nothing is selected
/// and the caret line is empty.
pub const PREVIEW_PLACEHOLDER: &str = "<no selection / caret line empty>";

/// Prompt preview for the developer view; never sent anywhere.
pub fn preview_prompt(basis: &str, freeform: &str) -> String {
    if basis.trim().is_empty() {
        build_prompt(PREVIEW_PLACEHOLDER, freeform)
    } else {
        build_prompt(basis, freeform)
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
