//! Language codes, confidence values, and detection candidates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A bare language identifier such as `"en"` or `"de"`.
///
/// Just a string underneath. Backends decide the code system (ISO 639-1 for
/// the bundled oracles); the protocol does not enforce a format.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(pub String);

impl LanguageCode {
    /// Create a language code from anything that converts to String.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How sure a backend is about a candidate.
///
/// Serialized as a bare number for [`Confidence::Score`] and `null` for
/// [`Confidence::Unscored`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Confidence {
    /// A probability estimate in `[0, 1]` from a ranked backend.
    Score(f64),
    /// The backend produced a best guess without any score.
    Unscored,
}

impl Confidence {
    /// The numeric score, if the backend produced one.
    pub fn score(&self) -> Option<f64> {
        match self {
            Confidence::Score(s) => Some(*s),
            Confidence::Unscored => None,
        }
    }

    /// Ordering used when ranking candidates, highest first.
    ///
    /// An unscored best guess outranks any score. Scores compare with IEEE
    /// total ordering so the result is always a total order.
    pub fn rank_cmp(&self, other: &Confidence) -> Ordering {
        match (self, other) {
            (Confidence::Unscored, Confidence::Unscored) => Ordering::Equal,
            (Confidence::Unscored, Confidence::Score(_)) => Ordering::Greater,
            (Confidence::Score(_), Confidence::Unscored) => Ordering::Less,
            (Confidence::Score(a), Confidence::Score(b)) => a.total_cmp(b),
        }
    }
}

impl From<Option<f64>> for Confidence {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(s) => Confidence::Score(s),
            None => Confidence::Unscored,
        }
    }
}

impl From<Confidence> for Option<f64> {
    fn from(value: Confidence) -> Self {
        value.score()
    }
}

/// One candidate language for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The bare language code.
    pub language: LanguageCode,
    /// How confident the backend is.
    pub confidence: Confidence,
}

impl Candidate {
    /// A candidate carrying a score from a ranked backend.
    pub fn scored(language: impl Into<LanguageCode>, score: f64) -> Self {
        Self {
            language: language.into(),
            confidence: Confidence::Score(score),
        }
    }

    /// A best-guess candidate with no score.
    pub fn unscored(language: impl Into<LanguageCode>) -> Self {
        Self {
            language: language.into(),
            confidence: Confidence::Unscored,
        }
    }

    /// Shorthand for `self.confidence.score()`.
    pub fn score(&self) -> Option<f64> {
        self.confidence.score()
    }
}
