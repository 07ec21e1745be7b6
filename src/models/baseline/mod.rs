//! Baseline window predictors.
//!
//! Simple methods that serve as benchmarks and as deterministic models for
//! exercising the forecasting loops.

mod drift;
mod last_value;
mod window_mean;

pub use drift::Drift;
pub use last_value::LastValue;
pub use window_mean::WindowMean;
