//! FailingOracle: every prediction fails.

use crate::error::OracleError;
use crate::oracle::{LabelOracle, Prediction, RankedOracle};

/// An oracle whose every call fails with [`OracleError::Failed`].
pub struct FailingOracle {
    message: String,
}

impl FailingOracle {
    /// Fail with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LabelOracle for FailingOracle {
    fn predict(&self, _text: &str) -> Result<String, OracleError> {
        Err(OracleError::Failed(self.message.clone()))
    }
}

impl RankedOracle for FailingOracle {
    fn predict(&self, _text: &str, _k: usize) -> Result<Prediction, OracleError> {
        Err(OracleError::Failed(self.message.clone()))
    }
}
