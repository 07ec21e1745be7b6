//! Accuracy metrics for forecast evaluation.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Smallest denominator used for percentage errors.
const MAPE_EPSILON: f64 = 1e-7;

/// Regression metrics for a forecast, in the order they are usually reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResults {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
    /// Mean Absolute Scaled Error against the one-step naive forecast
    pub mase: f64,
}

fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}

/// Calculate all time-series metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Actual observed values
/// * `predicted` - Predicted/forecast values
///
/// # Returns
/// `TimeSeriesResults` with MAE, MSE, RMSE, MAPE and MASE.
pub fn calculate_results_time_series(
    actual: &[f64],
    predicted: &[f64],
) -> Result<TimeSeriesResults> {
    check_pair(actual, predicted)?;

    let squared = mse(actual, predicted);
    Ok(TimeSeriesResults {
        mae: mae(actual, predicted),
        mse: squared,
        rmse: squared.sqrt(),
        mape: mape(actual, predicted),
        mase: mean_absolute_scaled_error(actual, predicted)?,
    })
}

/// Calculate time-series metrics for multi-horizon forecasts.
///
/// Each row holds one forecast's horizon. MAE, MSE, RMSE and MAPE are computed
/// per row and averaged; MASE scales the overall MAE by the naive error
/// between consecutive rows.
pub fn calculate_results_multi_horizon(
    actual: &[Vec<f64>],
    predicted: &[Vec<f64>],
) -> Result<TimeSeriesResults> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let rows = actual.len() as f64;
    let mut totals = [0.0_f64; 4];
    for (a, p) in actual.iter().zip(predicted.iter()) {
        check_pair(a, p)?;
        let row_mse = mse(a, p);
        totals[0] += mae(a, p);
        totals[1] += row_mse;
        totals[2] += row_mse.sqrt();
        totals[3] += mape(a, p);
    }

    Ok(TimeSeriesResults {
        mae: totals[0] / rows,
        mse: totals[1] / rows,
        rmse: totals[2] / rows,
        mape: totals[3] / rows,
        mase: multi_horizon_mase(actual, predicted)?,
    })
}

fn multi_horizon_mase(actual: &[Vec<f64>], predicted: &[Vec<f64>]) -> Result<f64> {
    let flat_actual: Vec<f64> = actual.iter().flatten().copied().collect();
    let flat_predicted: Vec<f64> = predicted.iter().flatten().copied().collect();
    let forecast_mae = mae(&flat_actual, &flat_predicted);

    if actual.len() < 2 {
        return Err(ForecastError::InvalidWindow {
            window_size: 2,
            len: actual.len(),
        });
    }

    let naive: Vec<f64> = actual
        .windows(2)
        .flat_map(|pair| {
            pair[1]
                .iter()
                .zip(pair[0].iter())
                .map(|(curr, prev)| (curr - prev).abs())
        })
        .collect();
    scale_by_naive(forecast_mae, &naive)
}

/// Calculate Mean Absolute Scaled Error for a non-seasonal series.
///
/// MASE = MAE / MAE_naive
/// where MAE_naive is the MAE of the one-step naive forecast of `actual`.
pub fn mean_absolute_scaled_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pair(actual, predicted)?;
    if actual.len() < 2 {
        return Err(ForecastError::InvalidWindow {
            window_size: 2,
            len: actual.len(),
        });
    }

    let naive: Vec<f64> = actual
        .iter()
        .skip(1)
        .zip(actual.iter())
        .map(|(curr, prev)| (curr - prev).abs())
        .collect();
    scale_by_naive(mae(actual, predicted), &naive)
}

fn scale_by_naive(forecast_mae: f64, naive_errors: &[f64]) -> Result<f64> {
    let naive_mae = naive_errors.iter().sum::<f64>() / naive_errors.len() as f64;
    if naive_mae == 0.0 {
        return Err(ForecastError::ComputationError(
            "naive forecast error is zero, MASE is undefined".to_string(),
        ));
    }
    Ok(forecast_mae / naive_mae)
}

/// Calculate MAE between two slices.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MSE between two slices.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate RMSE between two slices.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Calculate MAPE between two slices, in percent.
///
/// Denominators are clamped to a small epsilon, so zeros in `actual` give a
/// very large but finite error.
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let n = actual.len() as f64;
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| ((a - p) / a.abs().max(MAPE_EPSILON)).abs())
        .sum::<f64>()
        * 100.0
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn results_perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let results = calculate_results_time_series(&actual, &actual).unwrap();

        assert_relative_eq!(results.mae, 0.0, epsilon = 1e-10);
        assert_relative_eq!(results.mse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(results.rmse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(results.mape, 0.0, epsilon = 1e-10);
        assert_relative_eq!(results.mase, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn results_known_values() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![1.5, 2.5, 2.5, 4.5, 4.5];
        // Errors: 0.5 each; naive MAE is 1.0

        let results = calculate_results_time_series(&actual, &predicted).unwrap();

        assert_relative_eq!(results.mae, 0.5, epsilon = 1e-10);
        assert_relative_eq!(results.mse, 0.25, epsilon = 1e-10);
        assert_relative_eq!(results.rmse, 0.5, epsilon = 1e-10);
        assert_relative_eq!(results.mase, 0.5, epsilon = 1e-10);
        // (50 + 25 + 16.67 + 12.5 + 10) / 5
        assert_relative_eq!(results.mape, 22.8333333333, epsilon = 1e-6);
    }

    #[test]
    fn results_dimension_mismatch() {
        let result = calculate_results_time_series(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn results_empty_data() {
        let result = calculate_results_time_series(&[], &[]);
        assert!(matches!(result, Err(ForecastError::EmptyData)));
    }

    #[test]
    fn mase_flat_series_is_undefined() {
        let result = mean_absolute_scaled_error(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(ForecastError::ComputationError(_))));
    }

    #[test]
    fn mase_single_value() {
        assert!(mean_absolute_scaled_error(&[2.0], &[1.0]).is_err());
    }

    #[test]
    fn mape_with_zero_actual_stays_finite() {
        let value = mape(&[0.0, 1.0], &[0.1, 1.0]);
        assert!(value.is_finite());
        assert!(value > 1e6);
    }

    #[test]
    fn multi_horizon_averages_rows() {
        let actual = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 4.0]];
        let predicted = vec![vec![1.0, 3.0], vec![2.0, 3.0], vec![5.0, 4.0]];
        // Row MAE: 0.5, 0.0, 1.0 ; row MSE: 0.5, 0.0, 2.0

        let results = calculate_results_multi_horizon(&actual, &predicted).unwrap();

        assert_relative_eq!(results.mae, 0.5, epsilon = 1e-10);
        assert_relative_eq!(results.mse, 2.5 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(
            results.rmse,
            (0.5_f64.sqrt() + 0.0 + 2.0_f64.sqrt()) / 3.0,
            epsilon = 1e-10
        );
        // Overall MAE 0.5, naive row-to-row error 1.0
        assert_relative_eq!(results.mase, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn multi_horizon_ragged_rows() {
        let actual = vec![vec![1.0, 2.0], vec![2.0]];
        let predicted = vec![vec![1.0, 2.0], vec![2.0, 3.0]];
        assert!(calculate_results_multi_horizon(&actual, &predicted).is_err());
    }

    #[test]
    fn standalone_mae() {
        assert_relative_eq!(
            mae(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]),
            0.5,
            epsilon = 1e-10
        );
    }

    #[test]
    fn standalone_rmse() {
        assert_relative_eq!(
            rmse(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]),
            1.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn standalone_mismatch_is_nan() {
        assert!(mae(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(mse(&[], &[]).is_nan());
        assert!(mape(&[1.0], &[]).is_nan());
    }
}
