//! Training history curves and fine-tuning splices.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Per-epoch training curves, in the layout Keras writes `history.history`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingHistory {
    pub loss: Vec<f64>,
    pub accuracy: Vec<f64>,
    pub val_loss: Vec<f64>,
    pub val_accuracy: Vec<f64>,
}

impl TrainingHistory {
    /// Parse a history dumped as JSON. Missing curves default to empty.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ForecastError::ParseError {
            line: e.line(),
            reason: e.to_string(),
        })
    }

    /// Number of recorded epochs.
    pub fn epochs(&self) -> usize {
        self.loss.len()
    }

    /// Check that every non-empty curve has one entry per epoch.
    pub fn validate(&self) -> Result<()> {
        let epochs = self.epochs();
        for curve in [&self.accuracy, &self.val_loss, &self.val_accuracy] {
            if !curve.is_empty() && curve.len() != epochs {
                return Err(ForecastError::DimensionMismatch {
                    expected: epochs,
                    got: curve.len(),
                });
            }
        }
        Ok(())
    }
}

/// An initial history followed by a fine-tuning history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedHistory {
    /// Concatenated curves.
    pub history: TrainingHistory,
    /// Epoch index where fine-tuning starts (`initial_epochs - 1`).
    pub fine_tune_start: usize,
}

/// Splice a fine-tuning run onto the run it continued from.
///
/// `initial_epochs` is the number of epochs in `original`; the marker is
/// placed on its last epoch.
pub fn combine_histories(
    original: &TrainingHistory,
    fine_tune: &TrainingHistory,
    initial_epochs: usize,
) -> Result<CombinedHistory> {
    if initial_epochs == 0 {
        return Err(ForecastError::InvalidParameter(
            "initial_epochs must be at least 1".into(),
        ));
    }

    let join = |a: &[f64], b: &[f64]| a.iter().chain(b).copied().collect::<Vec<_>>();

    let history = TrainingHistory {
        loss: join(&original.loss, &fine_tune.loss),
        accuracy: join(&original.accuracy, &fine_tune.accuracy),
        val_loss: join(&original.val_loss, &fine_tune.val_loss),
        val_accuracy: join(&original.val_accuracy, &fine_tune.val_accuracy),
    };

    Ok(CombinedHistory {
        history,
        fine_tune_start: initial_epochs - 1,
    })
}
