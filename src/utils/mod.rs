//! Evaluation and calendar utilities.

pub mod classification;
pub mod dates;
pub mod metrics;
pub mod ols;

pub use classification::{
    argmax, calculate_results, class_predictions, confusion_matrix, decision_grid, linspace,
    ClassificationResults, ConfusionMatrix,
};
pub use dates::{experiment_log_dir, get_future_dates};
pub use metrics::{
    calculate_results_multi_horizon, calculate_results_time_series, mean_absolute_scaled_error,
    TimeSeriesResults,
};
pub use ols::{ols_fit, OLSResult};
