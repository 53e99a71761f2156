#![deny(missing_docs)]
//! Single-label implementation of glossa's LanguageDetector trait.
//!
//! Wraps a [`LabelOracle`] that produces one best guess per text and no
//! scores. [`LanguageDetector::detect_many_languages`] degenerates to a
//! one-element list whose candidate is [`Confidence::Unscored`]; there is
//! nothing to threshold or sort.

use glossa_core::detector::{DetectorKind, LanguageDetector};
use glossa_core::error::DetectionError;
use glossa_core::language::{Candidate, Confidence, LanguageCode};
use glossa_core::oracle::LabelOracle;

/// Detector over a best-guess-only oracle.
///
/// Holds the oracle and nothing else; every call is a round trip to it.
/// The detector is `Sync` exactly when the oracle is. Wrap a non-`Sync`
/// oracle in [`glossa_core::Exclusive`] before sharing it across threads.
pub struct SingleLabelDetector<O> {
    oracle: O,
}

impl<O: LabelOracle> SingleLabelDetector<O> {
    /// Create a detector over an already-loaded oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Borrow the wrapped oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    fn guess(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        let label = self.oracle.predict(text)?;
        let label = label.trim();
        if label.is_empty() {
            return Err(DetectionError::NoCandidates);
        }
        tracing::debug!(backend = "single_label", language = %label, "detected language");
        Ok(LanguageCode::from(label))
    }
}

impl<O: LabelOracle + Sync> LanguageDetector for SingleLabelDetector<O> {
    fn kind(&self) -> DetectorKind {
        DetectorKind::SingleLabel
    }

    fn detect_single(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        self.guess(text)
    }

    fn detect_many(&self, text: &str) -> Result<Vec<Candidate>, DetectionError> {
        let language = self.guess(text)?;
        Ok(vec![Candidate {
            language,
            confidence: Confidence::Unscored,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::error::{DetectError, OracleError};
    use glossa_core::test_utils::{FailingOracle, FixedLabelOracle};

    #[test]
    fn single_delegates_to_oracle() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new("en"));
        assert_eq!(detector.detect_single_language("Hello").unwrap(), "en");
        assert_eq!(detector.oracle().calls(), 1);
    }

    #[test]
    fn many_is_one_unscored_candidate() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new("de"));
        let got = detector.detect_many_languages("Hallo").unwrap();
        assert_eq!(got, vec![Candidate::unscored("de")]);
    }

    #[test]
    fn label_whitespace_is_trimmed() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new(" fr\n"));
        assert_eq!(detector.detect_single_language("Bonjour").unwrap(), "fr");
    }

    #[test]
    fn blank_label_is_no_candidates() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new("  "));
        let err = detector.detect_single_language("???").unwrap_err();
        assert!(matches!(
            err,
            DetectError::Detection(DetectionError::NoCandidates)
        ));
    }

    #[test]
    fn oracle_failure_is_detection_error() {
        let detector = SingleLabelDetector::new(FailingOracle::new("no features in text"));
        let err = detector.detect_many_languages("1234").unwrap_err();
        assert!(matches!(
            err,
            DetectError::Detection(DetectionError::Oracle(OracleError::Failed(_)))
        ));
    }

    #[test]
    fn empty_input_never_reaches_oracle() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new("en"));
        assert!(detector.detect_single_language("").is_err());
        assert_eq!(detector.oracle().calls(), 0);
    }

    #[test]
    fn kind_is_single_label() {
        let detector = SingleLabelDetector::new(FixedLabelOracle::new("en"));
        assert_eq!(detector.kind(), DetectorKind::SingleLabel);
    }
}
