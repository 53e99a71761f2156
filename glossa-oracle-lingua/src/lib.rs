#![deny(missing_docs)]
//! Lingua-backed oracle for glossa detectors.
//!
//! [`LinguaOracle`] implements both [`LabelOracle`] and [`RankedOracle`], so
//! the same loaded model can back a
//! [`SingleLabelDetector`](https://docs.rs/glossa-detect-single) and a
//! [`RankedDetector`](https://docs.rs/glossa-detect-ranked). Labels are bare
//! ISO 639-1 codes; there is no decoration to strip.
//!
//! The compiled language set is Dutch, English, French, German, Italian,
//! Portuguese, and Spanish. Short texts are easily confused between close
//! relatives (a one-line German greeting can come back as Dutch), so restrict
//! the oracle with [`LinguaOracle::from_languages`] when the candidate
//! languages are known up front.
//!
//! # Ranked scoring
//!
//! Lingua's confidence values describe the text as one unit and always sum
//! to one, so a text mixing two languages rarely yields two strong
//! candidates. The default [`Scoring::SentenceShare`] instead lets every
//! sentence vote for its language, weighted by its letter count, and scores
//! each language by its share of the text. [`Scoring::Confidence`] exposes
//! lingua's values unchanged.
//!
//! # Cost
//!
//! Building an oracle loads every language model into memory. Do it once
//! per process and share the oracle (it is `Send + Sync`; wrap it in an
//! `Arc` to back several detectors).
//!
//! ```no_run
//! use glossa_oracle_lingua::{Language, LinguaOracle};
//! use std::sync::Arc;
//!
//! let oracle = Arc::new(LinguaOracle::from_languages(&[Language::English, Language::German]).unwrap());
//! ```

use glossa_core::error::{ConfigurationError, OracleError};
use glossa_core::oracle::{LabelOracle, Prediction, RankedOracle};
use lingua::{LanguageDetector as LinguaDetector, LanguageDetectorBuilder};

pub use lingua::Language;

/// Fewest languages lingua can build a detector from.
const MIN_LANGUAGES: usize = 2;

/// How [`RankedOracle::predict`] scores candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Each sentence's share of the text's letters, summed per detected language.
    #[default]
    SentenceShare,
    /// Lingua's confidence values for the whole text.
    Confidence,
}

/// A loaded lingua model.
pub struct LinguaOracle {
    detector: LinguaDetector,
    scoring: Scoring,
}

impl LinguaOracle {
    /// Load every compiled language, with models preloaded eagerly.
    #[must_use]
    pub fn new() -> Self {
        let detector = LanguageDetectorBuilder::from_all_languages()
            .with_preloaded_language_models()
            .build();
        tracing::debug!(backend = "lingua", "loaded language models");
        Self {
            detector,
            scoring: Scoring::default(),
        }
    }

    /// Restrict detection to `languages`. Lingua needs at least two.
    pub fn from_languages(languages: &[Language]) -> Result<Self, ConfigurationError> {
        if languages.len() < MIN_LANGUAGES {
            return Err(ConfigurationError::TooFewLanguages {
                required: MIN_LANGUAGES,
                given: languages.len(),
            });
        }
        let detector = LanguageDetectorBuilder::from_languages(languages)
            .with_preloaded_language_models()
            .build();
        tracing::debug!(backend = "lingua", languages = languages.len(), "loaded language models");
        Ok(Self {
            detector,
            scoring: Scoring::default(),
        })
    }

    /// Choose how ranked predictions are scored.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// The active ranked scoring.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    fn sentence_shares(&self, text: &str) -> Vec<(Language, f64)> {
        let mut letters_by_language: Vec<(Language, usize)> = Vec::new();
        for sentence in text.split_inclusive(['.', '!', '?']) {
            let letters = sentence.chars().filter(|c| c.is_alphabetic()).count();
            if letters == 0 {
                continue;
            }
            let Some(language) = self.detector.detect_language_of(sentence) else {
                continue;
            };
            match letters_by_language.iter_mut().find(|(l, _)| *l == language) {
                Some((_, count)) => *count += letters,
                None => letters_by_language.push((language, letters)),
            }
        }

        let total: usize = letters_by_language.iter().map(|(_, n)| n).sum();
        let mut shares: Vec<(Language, f64)> = letters_by_language
            .into_iter()
            .map(|(language, n)| (language, n as f64 / total as f64))
            .collect();
        // stable: ties keep first-seen order
        shares.sort_by(|a, b| b.1.total_cmp(&a.1));
        shares
    }
}

impl Default for LinguaOracle {
    fn default() -> Self {
        Self::new()
    }
}

fn code(language: Language) -> String {
    language.iso_code_639_1().to_string()
}

impl LabelOracle for LinguaOracle {
    fn predict(&self, text: &str) -> Result<String, OracleError> {
        self.detector
            .detect_language_of(text)
            .map(code)
            .ok_or(OracleError::Undetermined)
    }
}

impl RankedOracle for LinguaOracle {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        let values = match self.scoring {
            Scoring::SentenceShare => self.sentence_shares(text),
            Scoring::Confidence => self.detector.compute_language_confidence_values(text),
        };
        if values.is_empty() {
            return Err(OracleError::Undetermined);
        }
        tracing::debug!(backend = "lingua", scoring = ?self.scoring, returned = values.len(), k, "scored languages");
        Ok(Prediction::from_pairs(
            values
                .into_iter()
                .take(k)
                .map(|(language, score)| (code(language), score)),
        ))
    }
}
