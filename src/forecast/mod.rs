//! Autoregressive multi-step forecasting.
//!
//! Both loops keep a trailing window of `window_size` values, ask the model
//! for the next step and slide the forecast back into the window, so later
//! steps are predicted from earlier predictions once real data runs out.
//!
//! # Example
//!
//! ```
//! use window_forecast::forecast::make_future_forecasts;
//! use window_forecast::models::baseline::WindowMean;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let mut model = WindowMean::new();
//!
//! let trajectory = make_future_forecasts(&series, &mut model, 2, 3).unwrap();
//! assert_eq!(trajectory.len(), 2);
//! assert_eq!(trajectory.points()[0], 6.0);
//! ```

mod autoregressive;
mod retrain;

pub use autoregressive::make_future_forecasts;
pub use retrain::pred_model_run;

use crate::error::{ForecastError, Result};

/// Take the last `window_size` values of the series as the starting window.
pub(crate) fn initial_window(series: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if window_size == 0 || series.len() < window_size {
        return Err(ForecastError::InvalidWindow {
            window_size,
            len: series.len(),
        });
    }
    Ok(series[series.len() - window_size..].to_vec())
}

/// Append `forecast` to `window` and keep the most recent `window.len()` values.
pub(crate) fn slide_window(mut window: Vec<f64>, forecast: &[f64]) -> Vec<f64> {
    let size = window.len();
    window.extend_from_slice(forecast);
    window.drain(..window.len() - size);
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_window_takes_tail() {
        assert_eq!(
            initial_window(&[1.0, 2.0, 3.0, 4.0], 2).unwrap(),
            vec![3.0, 4.0]
        );
        assert_eq!(initial_window(&[1.0, 2.0], 2).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn initial_window_rejects_short_series() {
        assert_eq!(
            initial_window(&[1.0, 2.0], 3),
            Err(ForecastError::InvalidWindow {
                window_size: 3,
                len: 2
            })
        );
    }

    #[test]
    fn initial_window_rejects_zero_size() {
        assert!(initial_window(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn slide_window_scalar() {
        let window = slide_window(vec![5.0, 6.0, 7.0], &[6.0]);
        assert_eq!(window, vec![6.0, 7.0, 6.0]);
    }

    #[test]
    fn slide_window_horizon_vector() {
        let window = slide_window(vec![1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(window, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn slide_window_long_forecast_keeps_tail() {
        let window = slide_window(vec![1.0, 2.0], &[3.0, 4.0, 5.0]);
        assert_eq!(window, vec![4.0, 5.0]);
    }
}
