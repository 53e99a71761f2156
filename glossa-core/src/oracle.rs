//! The oracle protocol: the external statistical model a detector wraps.
//!
//! Oracles are opaque: given text, they return labels, optionally with
//! scores. Labels come back in whatever form the model uses natively
//! (fastText-style models decorate them with `__label__`); normalizing them
//! is the detector's job, not the oracle's.

use crate::error::OracleError;
use std::sync::{Arc, Mutex};

/// A model that returns exactly one best-guess label per text.
pub trait LabelOracle: Send {
    /// The model's best-guess label for `text`.
    fn predict(&self, text: &str) -> Result<String, OracleError>;
}

/// Native output of a [`RankedOracle`]: two parallel sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    /// Labels in the model's native order and form.
    pub labels: Vec<String>,
    /// Scores, index-aligned with `labels`.
    pub scores: Vec<f64>,
}

impl Prediction {
    /// Build a prediction from `(label, score)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        let (labels, scores) = pairs.into_iter().map(|(l, s)| (l.into(), s)).unzip();
        Self { labels, scores }
    }

    /// Number of labels returned.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the model returned nothing.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A model that returns up to `k` labels with confidence scores.
///
/// The order of the returned sequences is not part of the contract.
pub trait RankedOracle: Send {
    /// Up to `k` candidate labels for `text`, with scores.
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError>;
}

impl<O: LabelOracle + Sync + ?Sized> LabelOracle for Arc<O> {
    fn predict(&self, text: &str) -> Result<String, OracleError> {
        (**self).predict(text)
    }
}

impl<O: LabelOracle + ?Sized> LabelOracle for Box<O> {
    fn predict(&self, text: &str) -> Result<String, OracleError> {
        (**self).predict(text)
    }
}

impl<O: RankedOracle + Sync + ?Sized> RankedOracle for Arc<O> {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        (**self).predict(text, k)
    }
}

impl<O: RankedOracle + ?Sized> RankedOracle for Box<O> {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        (**self).predict(text, k)
    }
}

/// Serializes access to an oracle that cannot take concurrent calls.
///
/// `Exclusive<O>` is `Sync` whenever `O` is `Send`, so it can sit inside a
/// detector shared across threads. Every prediction holds the lock for the
/// duration of the external call.
pub struct Exclusive<O> {
    inner: Mutex<O>,
}

impl<O> Exclusive<O> {
    /// Wrap an oracle.
    pub fn new(oracle: O) -> Self {
        Self {
            inner: Mutex::new(oracle),
        }
    }

    /// Unwrap the oracle.
    pub fn into_inner(self) -> Result<O, OracleError> {
        self.inner.into_inner().map_err(|_| OracleError::Poisoned)
    }
}

impl<O: LabelOracle> LabelOracle for Exclusive<O> {
    fn predict(&self, text: &str) -> Result<String, OracleError> {
        let guard = self.inner.lock().map_err(|_| OracleError::Poisoned)?;
        guard.predict(text)
    }
}

impl<O: RankedOracle> RankedOracle for Exclusive<O> {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        let guard = self.inner.lock().map_err(|_| OracleError::Poisoned)?;
        guard.predict(text, k)
    }
}
