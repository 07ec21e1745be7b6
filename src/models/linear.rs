//! Linear autoregressive predictor.
//!
//! Learns one weight per window position plus an intercept by least squares,
//! so it can be refitted on the growing dataset of a retraining run.

use crate::core::TrainingSet;
use crate::error::{ForecastError, Result};
use crate::models::{TrainablePredictor, WindowPredictor};
use crate::utils::ols::{ols_fit, OLSResult};

/// Linear AR model: y_hat = intercept + sum(w_i * window\[i\]).
#[derive(Debug, Clone, Default)]
pub struct LinearAutoregressor {
    ridge: f64,
    fitted: Option<OLSResult>,
    fits: usize,
}

impl LinearAutoregressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an L2 penalty on the window weights.
    pub fn with_ridge(mut self, ridge: f64) -> Self {
        self.ridge = ridge.max(0.0);
        self
    }

    /// Fitted weights, one per window position.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|f| f.coefficients.as_slice())
    }

    pub fn intercept(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.intercept)
    }

    /// Number of times the model has been fitted.
    pub fn fit_count(&self) -> usize {
        self.fits
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}

impl WindowPredictor for LinearAutoregressor {
    type Error = ForecastError;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>> {
        let fitted = self.fitted.as_ref().ok_or(ForecastError::FitRequired)?;
        Ok(vec![fitted.predict_row(window)?])
    }

    fn name(&self) -> &str {
        "LinearAutoregressor"
    }
}

impl TrainablePredictor for LinearAutoregressor {
    /// The least-squares solution is exact, so any positive `epochs` gives the
    /// same fit; `epochs == 0` leaves the model untouched.
    fn fit(&mut self, data: &TrainingSet, epochs: usize) -> Result<()> {
        if epochs == 0 {
            return Ok(());
        }
        if data.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        self.fitted = Some(ols_fit(data.inputs(), data.labels(), self.ridge)?);
        self.fits += 1;
        Ok(())
    }
}
