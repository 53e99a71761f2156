//! The detection protocol: most probable language, or ranked candidates.

use crate::error::{DetectError, DetectionError, InputError};
use crate::language::{Candidate, LanguageCode};
use serde::{Deserialize, Serialize};

/// Which tier of detection a backend natively supports.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// One best guess per text, no scores. Candidates are
    /// [`Confidence::Unscored`](crate::Confidence::Unscored).
    SingleLabel,
    /// A ranked list of scored candidates. Candidates are
    /// [`Confidence::Score`](crate::Confidence::Score).
    Ranked,
}

/// Language detection over an external model.
///
/// Backends implement the two primitives, [`detect_single`] and
/// [`detect_many`], which receive text that has already passed
/// [`validate_text`]. Callers use the provided operations,
/// [`detect_single_language`] and [`detect_many_languages`], which add
/// input validation and the ordering guarantee on top.
///
/// The trait is object-safe; hold detectors as `Box<dyn LanguageDetector>`
/// to swap backends without touching call sites.
///
/// [`detect_single`]: LanguageDetector::detect_single
/// [`detect_many`]: LanguageDetector::detect_many
/// [`detect_single_language`]: LanguageDetector::detect_single_language
/// [`detect_many_languages`]: LanguageDetector::detect_many_languages
pub trait LanguageDetector: Send + Sync {
    /// The detection tier this backend supports natively.
    fn kind(&self) -> DetectorKind;

    /// Backend primitive: the single most probable language.
    fn detect_single(&self, text: &str) -> Result<LanguageCode, DetectionError>;

    /// Backend primitive: candidate languages, in any order.
    fn detect_many(&self, text: &str) -> Result<Vec<Candidate>, DetectionError>;

    /// The single most probable language of `text`.
    ///
    /// Fails with [`InputError::Empty`] for empty or whitespace-only text.
    fn detect_single_language(&self, text: &str) -> Result<LanguageCode, DetectError> {
        let text = validate_text(text)?;
        Ok(self.detect_single(text)?)
    }

    /// Every candidate the backend reports, highest confidence first.
    ///
    /// Ties keep the order the backend returned them in. An empty vector
    /// means no candidate was confident enough; it is not an error.
    fn detect_many_languages(&self, text: &str) -> Result<Vec<Candidate>, DetectError> {
        let text = validate_text(text)?;
        let mut candidates = self.detect_many(text)?;
        rank_candidates(&mut candidates);
        Ok(candidates)
    }

    /// [`detect_single_language`](Self::detect_single_language) over raw bytes.
    ///
    /// Fails with [`InputError::NotUtf8`] if the bytes are not UTF-8.
    fn detect_single_language_bytes(&self, bytes: &[u8]) -> Result<LanguageCode, DetectError> {
        let text = std::str::from_utf8(bytes).map_err(InputError::NotUtf8)?;
        self.detect_single_language(text)
    }

    /// [`detect_many_languages`](Self::detect_many_languages) over raw bytes.
    fn detect_many_languages_bytes(&self, bytes: &[u8]) -> Result<Vec<Candidate>, DetectError> {
        let text = std::str::from_utf8(bytes).map_err(InputError::NotUtf8)?;
        self.detect_many_languages(text)
    }
}

impl<D: LanguageDetector + ?Sized> LanguageDetector for Box<D> {
    fn kind(&self) -> DetectorKind {
        (**self).kind()
    }

    fn detect_single(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        (**self).detect_single(text)
    }

    fn detect_many(&self, text: &str) -> Result<Vec<Candidate>, DetectionError> {
        (**self).detect_many(text)
    }
}

/// Reject text no backend can meaningfully score.
pub fn validate_text(text: &str) -> Result<&str, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

/// Sort candidates by confidence, highest first, keeping backend order on ties.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    // sort_by is stable
    candidates.sort_by(|a, b| b.confidence.rank_cmp(&a.confidence));
}
