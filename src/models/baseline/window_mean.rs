//! Window mean predictor.
//!
//! Forecasts the mean of the input window for every step of its horizon.

use crate::error::{ForecastError, Result};
use crate::models::WindowPredictor;

/// Predicts the mean of the window it is given.
#[derive(Debug, Clone)]
pub struct WindowMean {
    horizon: usize,
}

impl WindowMean {
    /// One-step window mean.
    pub fn new() -> Self {
        Self { horizon: 1 }
    }

    /// Window mean repeated over `horizon` steps.
    pub fn with_horizon(horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be at least 1".to_string(),
            ));
        }
        Ok(Self { horizon })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

impl Default for WindowMean {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowPredictor for WindowMean {
    type Error = ForecastError;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        if window.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        Ok(vec![mean; self.horizon])
    }

    fn name(&self) -> &str {
        "WindowMean"
    }
}
