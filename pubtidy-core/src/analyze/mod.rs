//! Language-analysis capability consumed by the cleaning transforms
//!
//! The transforms only need two things from a language model: tokens
//! carrying a lemma plus stopword/punctuation flags, and sentence
//! boundaries. This module defines that contract and ships a lightweight
//! rule-based English implementation; callers with a real NLP model
//! implement [`Analyzer`] over it instead.

mod english;
mod profile;

pub use english::EnglishAnalyzer;
pub use profile::{english_profile, AnalyzerProfile};

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Canonical dictionary form of the token
    pub lemma: String,
    /// Whether the token is a stopword
    pub is_stop: bool,
    /// Whether the token is punctuation
    pub is_punct: bool,
}

/// An opaque language-analysis capability
pub trait Analyzer {
    /// Tokenize text, exposing lemma and stopword/punctuation flags
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Segment text into trimmed sentences
    fn sentences(&self, text: &str) -> Vec<String>;
}
