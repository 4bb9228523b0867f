//! Rule-based English analyzer
//!
//! A lightweight stand-in for a statistical NLP model: good enough for
//! stopword filtering, rough lemmatization and sentence segmentation of
//! abstracts and titles. Not a model — the [`Analyzer`] trait is the
//! contract for anything better.

use super::profile::{english_profile, AnalyzerProfile};
use super::{Analyzer, Token};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

// Words (with optional internal apostrophes/hyphens), digit runs, or a
// single symbol character.
fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z]+(?:['-][A-Za-z]+)*|\d+|[^\sA-Za-z\d]").expect("static pattern")
    })
}

/// Built-in English analyzer driven by the embedded profile
pub struct EnglishAnalyzer {
    profile: &'static AnalyzerProfile,
    stopwords: HashSet<String>,
    non_breaking: HashSet<String>,
}

impl EnglishAnalyzer {
    /// Create an analyzer over the embedded English profile
    pub fn new() -> Self {
        let profile = english_profile();
        Self {
            profile,
            stopwords: profile
                .stopwords
                .words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            non_breaking: profile
                .sentences
                .non_breaking
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    fn lemma(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(lemma) = self.profile.lemmatizer.irregular.get(&lower) {
            return lemma.clone();
        }
        for rule in &self.profile.lemmatizer.rules {
            if let Some(stem) = lower.strip_suffix(rule.suffix.as_str()) {
                if stem.chars().count() >= rule.min_stem {
                    return format!("{stem}{}", rule.replace);
                }
            }
        }
        lower
    }

    fn breaks_after(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        let bare = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if bare.chars().count() == 1 && bare.chars().all(char::is_alphabetic) {
            // initials like the "J." of "J. Smith"
            return false;
        }
        !self.non_breaking.contains(&bare)
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn preceding_word(text: &str) -> &str {
    text.split_whitespace().next_back().unwrap_or("")
}

impl Analyzer for EnglishAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        token_re()
            .find_iter(text)
            .map(|m| {
                let word = m.as_str();
                let is_punct = word.chars().all(|c| !c.is_alphanumeric());
                let is_stop = !is_punct && self.stopwords.contains(&word.to_lowercase());
                let lemma = if is_punct {
                    word.to_string()
                } else {
                    self.lemma(word)
                };
                Token {
                    lemma,
                    is_stop,
                    is_punct,
                }
            })
            .collect()
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (pos, ch) in text.char_indices() {
            if !self.profile.sentences.terminators.contains(&ch) {
                continue;
            }
            let end = pos + ch.len_utf8();
            if !self.breaks_after(preceding_word(&text[start..pos])) {
                continue;
            }
            let after = &text[end..];
            let opener = after.trim_start();
            let breaks = if opener.is_empty() {
                true
            } else if after.len() == opener.len() {
                // no whitespace after the terminator ("3.5", "e.g.")
                false
            } else {
                opener
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
            };
            if breaks {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }
}
