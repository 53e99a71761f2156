#![deny(missing_docs)]
//! Ranked implementation of glossa's LanguageDetector trait.
//!
//! Wraps a [`RankedOracle`] that returns parallel label/score sequences,
//! fastText style. The adapter owns all of the post-processing:
//!
//! 1. validate the prediction (aligned lengths, scores in `[0, 1]`) and
//!    cap it at the requested `k`
//! 2. strip label decoration such as `__label__`
//! 3. keep only candidates scoring strictly above the threshold
//! 4. sort descending by score, stable on ties
//!
//! The oracle's own ordering is never trusted.
//!
//! ```
//! use glossa_core::LanguageDetector;
//! use glossa_core::test_utils::ScriptedRankedOracle;
//! use glossa_detect_ranked::RankedDetector;
//!
//! let oracle = ScriptedRankedOracle::new([("__label__en", 0.9), ("__label__de", 0.05)]);
//! let detector = RankedDetector::new(oracle);
//! assert_eq!(detector.detect_single_language("Hello").unwrap(), "en");
//! assert_eq!(detector.detect_many_languages("Hello").unwrap().len(), 1);
//! ```

pub mod config;
mod label;

pub use config::{
    DEFAULT_LABEL_PREFIX, DEFAULT_MAX_CANDIDATES, DEFAULT_THRESHOLD, RankedConfig, Threshold,
};
pub use label::strip_label;

use glossa_core::detector::{DetectorKind, LanguageDetector, rank_candidates};
use glossa_core::error::{ConfigurationError, DetectionError};
use glossa_core::language::{Candidate, LanguageCode};
use glossa_core::oracle::{Prediction, RankedOracle};

/// Detector over an oracle that returns scored candidates.
///
/// Construction is cheap; loading the model is the oracle's job and should
/// happen once per process. The configuration is fixed at construction.
pub struct RankedDetector<O> {
    oracle: O,
    config: RankedConfig,
}

impl<O: RankedOracle> RankedDetector<O> {
    /// Create a detector with the default configuration
    /// (threshold 0.1, up to 5 candidates, `__label__` prefix).
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            config: RankedConfig::default(),
        }
    }

    /// Create a detector with an explicit configuration.
    pub fn with_config(oracle: O, config: RankedConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { oracle, config })
    }

    /// Create a detector with the default configuration and a custom threshold.
    pub fn with_threshold(oracle: O, threshold: f64) -> Result<Self, ConfigurationError> {
        let config = RankedConfig {
            threshold: Threshold::new(threshold)?,
            ..RankedConfig::default()
        };
        Self::with_config(oracle, config)
    }

    /// The exclusive minimum score for reported candidates.
    pub fn threshold(&self) -> f64 {
        self.config.threshold.value()
    }

    /// How many candidates are requested for multi-language detection.
    pub fn max_candidates(&self) -> usize {
        self.config.max_candidates
    }

    /// The full configuration.
    pub fn config(&self) -> &RankedConfig {
        &self.config
    }

    /// Borrow the wrapped oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Ask the oracle for up to `k` candidates and normalize them, unfiltered,
    /// in the oracle's order.
    fn candidates(&self, text: &str, k: usize) -> Result<Vec<Candidate>, DetectionError> {
        let Prediction { labels, scores } = self.oracle.predict(text, k)?;
        if labels.len() != scores.len() {
            return Err(DetectionError::MalformedPrediction(format!(
                "{} labels but {} scores",
                labels.len(),
                scores.len()
            )));
        }

        labels
            .iter()
            .zip(scores)
            .take(k)
            .map(|(label, score)| {
                if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                    return Err(DetectionError::InvalidScore(score));
                }
                let code = strip_label(label, &self.config.label_prefix);
                if code.is_empty() {
                    return Err(DetectionError::MalformedPrediction(format!(
                        "label {label:?} is empty after normalization"
                    )));
                }
                Ok(Candidate::scored(code, score))
            })
            .collect()
    }
}

impl<O: RankedOracle + Sync> LanguageDetector for RankedDetector<O> {
    fn kind(&self) -> DetectorKind {
        DetectorKind::Ranked
    }

    fn detect_single(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        let best = self
            .candidates(text, 1)?
            .into_iter()
            .next()
            .ok_or(DetectionError::NoCandidates)?;
        tracing::debug!(backend = "ranked", k = 1, language = %best.language, "detected language");
        Ok(best.language)
    }

    fn detect_many(&self, text: &str) -> Result<Vec<Candidate>, DetectionError> {
        let k = self.config.max_candidates;
        let threshold = self.config.threshold;
        let all = self.candidates(text, k)?;
        let returned = all.len();

        let mut kept: Vec<Candidate> = all
            .into_iter()
            .filter(|c| c.score().is_some_and(|s| threshold.admits(s)))
            .collect();
        rank_candidates(&mut kept);

        tracing::debug!(
            backend = "ranked",
            k,
            returned,
            kept = kept.len(),
            threshold = threshold.value(),
            "detected candidate languages"
        );
        Ok(kept)
    }
}
