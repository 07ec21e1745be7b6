//! Run configuration shared by the windowing and forecasting entry points.

use serde::{Deserialize, Serialize};

use crate::core::Trajectory;
use crate::error::{ForecastError, Result, RunError};
use crate::forecast::{make_future_forecasts, pred_model_run};
use crate::models::{TrainablePredictor, WindowPredictor};
use crate::transform::{make_windows, LabelledWindows};

/// Window, horizon and run length for one forecasting experiment.
///
/// # Example
/// ```
/// use window_forecast::config::ForecastConfig;
/// use window_forecast::models::baseline::WindowMean;
///
/// let config = ForecastConfig::default().with_window_size(3).with_into_future(2);
/// let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
///
/// let trajectory = config.forecast(&series, &mut WindowMean::new()).unwrap();
/// assert_eq!(trajectory.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Length of every model input window.
    pub window_size: usize,
    /// Number of values each window is labelled with.
    pub horizon: usize,
    /// Number of steps to forecast past the end of the series.
    pub into_future: usize,
    /// Fit passes per step for retraining runs.
    pub epochs: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_size: 7,
            horizon: 1,
            into_future: 0,
            epochs: 5,
        }
    }
}

impl ForecastConfig {
    pub fn new(window_size: usize, horizon: usize) -> Self {
        Self {
            window_size,
            horizon,
            ..Self::default()
        }
    }

    /// Set the window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the label horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the number of steps to forecast.
    pub fn with_into_future(mut self, into_future: usize) -> Self {
        self.into_future = into_future;
        self
    }

    /// Set the fit passes per retraining step.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ForecastError::ParseError {
            line: e.line(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that window size and horizon are positive.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "window_size must be at least 1".to_string(),
            ));
        }
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Split `series` into labelled windows with this window and horizon.
    pub fn windows(&self, series: &[f64]) -> Result<LabelledWindows> {
        make_windows(series, self.window_size, self.horizon)
    }

    /// Forecast `into_future` steps past `series`.
    pub fn forecast<M>(
        &self,
        series: &[f64],
        model: &mut M,
    ) -> std::result::Result<Trajectory, RunError<M::Error>>
    where
        M: WindowPredictor + ?Sized,
    {
        make_future_forecasts(series, model, self.into_future, self.window_size)
    }

    /// Window `series`, then forecast with a refit before every step.
    ///
    /// Retraining folds one forecast value back in per step, so the training
    /// data is the one-step framing of `series` and `horizon` must be 1.
    ///
    /// # Errors
    /// * [`ForecastError::InvalidParameter`] if `horizon` is not 1
    pub fn retrain<M>(
        &self,
        series: &[f64],
        model: M,
    ) -> std::result::Result<(M, Trajectory), RunError<M::Error>>
    where
        M: TrainablePredictor,
    {
        if self.horizon != 1 {
            return Err(ForecastError::InvalidParameter(format!(
                "retraining needs horizon 1, got {}",
                self.horizon
            ))
            .into());
        }
        let windows = make_windows(series, self.window_size, 1)?;
        let labels = windows.first_labels();
        pred_model_run(
            &labels,
            &windows.windows,
            model,
            self.into_future,
            self.window_size,
            self.epochs,
        )
    }
}
