//! FixedLabelOracle: returns a preset label, optionally per text.

use crate::error::OracleError;
use crate::oracle::LabelOracle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A single-label oracle that answers from a table.
///
/// Texts with an entry get that label; everything else gets the default.
pub struct FixedLabelOracle {
    default: String,
    by_text: HashMap<String, String>,
    calls: AtomicUsize,
}

impl FixedLabelOracle {
    /// Answer `label` for every text.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            default: label.into(),
            by_text: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer `label` for exactly `text`.
    pub fn with_text(mut self, text: impl Into<String>, label: impl Into<String>) -> Self {
        self.by_text.insert(text.into(), label.into());
        self
    }

    /// How many predictions have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LabelOracle for FixedLabelOracle {
    fn predict(&self, text: &str) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .by_text
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }
}
