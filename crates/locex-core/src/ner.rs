// crates/locex-core/src/ner.rs

//! # Named-entity seam
//!
//! The engine does not do NER itself; it consumes candidate strings from a
//! collaborator behind [`EntityRecognizer`]. The bundled
//! [`HeuristicRecognizer`] is a minimal stand-in built on structural signals
//! (capitalization, punctuation) so the facade is runnable without an
//! external model. Nothing downstream assumes candidates are real places.

/// Contract for the external text-analysis collaborator: a pure function
/// from text to an ordered list (duplicates allowed) of candidate
/// place-name substrings. No guarantee of geographic validity.
pub trait EntityRecognizer {
    fn find_entities(&self, text: &str) -> Vec<String>;
}

// Capitalized function words that commonly open sentences but never name
// places.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "i", "he", "she", "it", "we", "they",
    "person",
];

/// Groups consecutive capitalized tokens into candidate phrases.
#[derive(Clone, Debug, Default)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn find_entities(&self, text: &str) -> Vec<String> {
        let mut entities = Vec::new();
        let mut phrase: Vec<&str> = Vec::new();

        for raw in text.split_whitespace() {
            // Trailing punctuation ends the current phrase even when the
            // next token is capitalized ("Berlin, Germany" is two phrases).
            let boundary = raw
                .chars()
                .last()
                .is_some_and(|c| matches!(c, ',' | '.' | ';' | ':' | '!' | '?'));
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());

            let capitalized = word.chars().next().is_some_and(char::is_uppercase);
            let keep = capitalized && !STOPWORDS.contains(&word.to_lowercase().as_str());

            if keep {
                phrase.push(word);
            }
            if !keep || boundary {
                if !phrase.is_empty() {
                    entities.push(phrase.join(" "));
                    phrase.clear();
                }
            }
        }
        if !phrase.is_empty() {
            entities.push(phrase.join(" "));
        }
        entities
    }
}
