//! Naive predictor.
//!
//! Repeats the most recent value of the window.

use crate::error::{ForecastError, Result};
use crate::models::WindowPredictor;

/// Naive predictor that repeats the last value of the window.
#[derive(Debug, Clone, Default)]
pub struct LastValue;

impl LastValue {
    pub fn new() -> Self {
        Self
    }
}

impl WindowPredictor for LastValue {
    type Error = ForecastError;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        window
            .last()
            .map(|&v| vec![v])
            .ok_or(ForecastError::EmptyData)
    }

    fn name(&self) -> &str {
        "LastValue"
    }
}
