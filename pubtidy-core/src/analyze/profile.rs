//! Embedded analyzer profile
//!
//! The built-in analyzer is driven by a TOML profile compiled into the
//! binary, parsed once on first use.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Declarative description of a rule-based analyzer
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerProfile {
    /// Profile identification
    pub metadata: ProfileMetadata,
    /// Stopword list
    pub stopwords: StopwordConfig,
    /// Lemmatizer tables
    pub lemmatizer: LemmatizerConfig,
    /// Sentence segmentation rules
    pub sentences: SentenceConfig,
}

/// Profile identification block
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMetadata {
    /// Language code, e.g. "en"
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Stopword section
#[derive(Debug, Clone, Deserialize)]
pub struct StopwordConfig {
    /// Words filtered out during normalization
    pub words: Vec<String>,
}

/// Lemmatizer section: ordered suffix rewrites plus an irregular-form
/// table consulted first
#[derive(Debug, Clone, Deserialize)]
pub struct LemmatizerConfig {
    /// Suffix rewrites tried in order; the first applicable rule wins
    #[serde(default)]
    pub rules: Vec<SuffixRule>,
    /// Irregular forms mapped straight to their lemma
    #[serde(default)]
    pub irregular: HashMap<String, String>,
}

/// One suffix rewrite
#[derive(Debug, Clone, Deserialize)]
pub struct SuffixRule {
    /// Suffix to strip
    pub suffix: String,
    /// Replacement appended to the stem
    pub replace: String,
    /// Minimum stem length for the rule to apply
    #[serde(default)]
    pub min_stem: usize,
}

/// Sentence segmentation section
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceConfig {
    /// Characters that may end a sentence
    pub terminators: Vec<char>,
    /// Words a terminator does not break after (abbreviations)
    #[serde(default)]
    pub non_breaking: Vec<String>,
}

static ENGLISH_PROFILE: OnceLock<AnalyzerProfile> = OnceLock::new();

/// The embedded English profile
pub fn english_profile() -> &'static AnalyzerProfile {
    ENGLISH_PROFILE.get_or_init(|| {
        toml::from_str(include_str!("../../configs/english.toml"))
            .expect("embedded English profile must parse")
    })
}
