//! Drift predictor.
//!
//! Extends the line through the first and last value of the window.

use crate::error::{ForecastError, Result};
use crate::models::WindowPredictor;

/// Random walk with drift over the input window.
///
/// The forecast is: y_hat\[t+h\] = y\[t\] + h * drift, where drift is the
/// average change across the window.
#[derive(Debug, Clone)]
pub struct Drift {
    horizon: usize,
}

impl Drift {
    /// One-step drift predictor.
    pub fn new() -> Self {
        Self { horizon: 1 }
    }

    /// Drift predictor producing `horizon` steps per call.
    pub fn with_horizon(horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be at least 1".to_string(),
            ));
        }
        Ok(Self { horizon })
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowPredictor for Drift {
    type Error = ForecastError;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        let n = window.len();
        if n < 2 {
            return Err(ForecastError::InvalidWindow {
                window_size: 2,
                len: n,
            });
        }

        let last = window[n - 1];
        let drift = (last - window[0]) / (n - 1) as f64;

        Ok((1..=self.horizon)
            .map(|h| last + h as f64 * drift)
            .collect())
    }

    fn name(&self) -> &str {
        "Drift"
    }
}
