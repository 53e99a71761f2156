//! Configuration for RankedDetector.

use glossa_core::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Default minimum score (exclusive) for a candidate to be reported.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default number of candidates requested from the oracle.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Default label decoration, as emitted by fastText-style models.
pub const DEFAULT_LABEL_PREFIX: &str = "__label__";

/// Exclusive minimum confidence, validated to be a finite value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    /// Validate and wrap a threshold.
    pub fn new(value: f64) -> Result<Self, ConfigurationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigurationError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether `score` clears the threshold. Equal is not enough.
    pub fn admits(self, score: f64) -> bool {
        score > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl<'de> Deserialize<'de> for Threshold {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Threshold::new(value).map_err(serde::de::Error::custom)
    }
}

/// Static configuration for a RankedDetector instance.
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// use glossa_detect_ranked::RankedConfig;
///
/// let config: RankedConfig = serde_json::from_str(r#"{"threshold": 0.25}"#).unwrap();
/// assert_eq!(config.threshold.value(), 0.25);
/// assert_eq!(config.max_candidates, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedConfig {
    /// Exclusive minimum score for a candidate to be reported.
    pub threshold: Threshold,

    /// How many candidates to request for multi-language detection.
    /// A capacity bound only; must be at least 1.
    pub max_candidates: usize,

    /// Decoration stripped from the front of each label, when present.
    pub label_prefix: String,
}

impl RankedConfig {
    /// Check invariants that serde alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_candidates == 0 {
            return Err(ConfigurationError::InvalidCandidateCount);
        }
        Threshold::new(self.threshold.value())?;
        Ok(())
    }
}

impl Default for RankedConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            label_prefix: DEFAULT_LABEL_PREFIX.into(),
        }
    }
}
