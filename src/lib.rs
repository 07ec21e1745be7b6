//! # window-forecast
//!
//! Windowing, autoregressive forecasting and evaluation helpers for time
//! series experiments.
//!
//! Turns a series into supervised (window, label) pairs, runs a window
//! predictor forward past the end of the data by feeding its own forecasts
//! back into its input, and scores the result with regression and
//! classification metrics.
//!
//! # Example
//!
//! ```
//! use window_forecast::prelude::*;
//! use window_forecast::models::baseline::WindowMean;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let pairs = make_windows(&series, 3, 1).unwrap();
//! assert_eq!(pairs.len(), 4);
//!
//! let trajectory = make_future_forecasts(&series, &mut WindowMean::new(), 2, 3).unwrap();
//! assert_eq!(trajectory.points()[0], 6.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod core;
pub mod error;
pub mod forecast;
pub mod models;
pub mod text;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result, RunError};

pub mod prelude {
    pub use crate::config::ForecastConfig;
    pub use crate::core::{TrainingSet, Trajectory};
    pub use crate::error::{ForecastError, Result, RunError};
    pub use crate::forecast::{make_future_forecasts, pred_model_run};
    pub use crate::models::{from_fn, TrainablePredictor, WindowPredictor};
    pub use crate::transform::{get_labelled_windows, make_windows, LabelledWindows};
    pub use crate::utils::{
        calculate_results, calculate_results_time_series, mean_absolute_scaled_error,
        ClassificationResults, TimeSeriesResults,
    };
}
