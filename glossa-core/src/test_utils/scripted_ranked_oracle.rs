//! ScriptedRankedOracle: returns preset `(label, score)` pairs.

use crate::error::OracleError;
use crate::oracle::{Prediction, RankedOracle};
use std::collections::HashMap;
use std::sync::Mutex;

/// A ranked oracle that answers from a script.
///
/// Pairs are returned in exactly the order given (truncated to `k`), so
/// tests can feed unsorted or tied output and check what the adapter does
/// with it. Every requested `k` is recorded.
pub struct ScriptedRankedOracle {
    default: Vec<(String, f64)>,
    by_text: HashMap<String, Vec<(String, f64)>>,
    requested_k: Mutex<Vec<usize>>,
}

impl ScriptedRankedOracle {
    /// Answer `pairs` for every text.
    pub fn new<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            default: collect(pairs),
            by_text: HashMap::new(),
            requested_k: Mutex::new(Vec::new()),
        }
    }

    /// Answer `pairs` for exactly `text`.
    pub fn with_text<L: Into<String>>(
        mut self,
        text: impl Into<String>,
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        self.by_text.insert(text.into(), collect(pairs));
        self
    }

    /// Every `k` passed to `predict`, in call order.
    pub fn requested_k(&self) -> Vec<usize> {
        self.requested_k
            .lock()
            .map(|k| k.clone())
            .unwrap_or_default()
    }
}

fn collect<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Vec<(String, f64)> {
    pairs.into_iter().map(|(l, s)| (l.into(), s)).collect()
}

impl RankedOracle for ScriptedRankedOracle {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        self.requested_k
            .lock()
            .map_err(|_| OracleError::Poisoned)?
            .push(k);
        let pairs = self.by_text.get(text).unwrap_or(&self.default);
        Ok(Prediction::from_pairs(pairs.iter().take(k).cloned()))
    }
}
