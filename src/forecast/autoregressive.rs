//! One-model autoregressive forecast loop.

use log::{debug, trace};

use super::{initial_window, slide_window};
use crate::core::Trajectory;
use crate::error::{ForecastError, RunError};
use crate::models::WindowPredictor;

/// Make `into_future` forecasts past the end of `series`.
///
/// The first window is the last `window_size` values of `series`. Each step
/// predicts on the current window, records the forecast and slides it into
/// the window for the next step. The loop always runs exactly `into_future`
/// times; a model error aborts the whole run and is returned unchanged.
///
/// # Arguments
/// * `series` - Observed values, at least `window_size` of them
/// * `model` - Predictor called once per step
/// * `into_future` - Number of steps to forecast
/// * `window_size` - Length of every window handed to the model
///
/// # Errors
/// * [`ForecastError::InvalidWindow`] if `window_size` is 0 or exceeds the series length
/// * [`ForecastError::EmptyPrediction`] if the model returns no values
/// * [`RunError::Model`] with the model's own error
pub fn make_future_forecasts<M>(
    series: &[f64],
    model: &mut M,
    into_future: usize,
    window_size: usize,
) -> Result<Trajectory, RunError<M::Error>>
where
    M: WindowPredictor + ?Sized,
{
    let mut window = initial_window(series, window_size)?;
    let mut trajectory = Trajectory::with_capacity(into_future);

    for step in 0..into_future {
        let forecast = model.predict(&window).map_err(RunError::Model)?;
        if forecast.is_empty() {
            return Err(ForecastError::EmptyPrediction.into());
        }

        debug!(
            "{} step {}: predicting on {:?} -> {:?}",
            model.name(),
            step,
            window,
            forecast
        );

        window = slide_window(window, &forecast);
        trace!("next window {:?}", window);
        trajectory.push(forecast);
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::baseline::{LastValue, WindowMean};
    use crate::models::from_fn;
    use approx::assert_relative_eq;
    use std::convert::Infallible;

    #[test]
    fn mean_model_example() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let mut model = WindowMean::new();

        let trajectory = make_future_forecasts(&series, &mut model, 2, 3).unwrap();
        let points = trajectory.points();

        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0], 6.0, epsilon = 1e-10);
        assert_relative_eq!(points[1], 19.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn windows_include_previous_forecasts() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        let mut seen: Vec<Vec<f64>> = Vec::new();
        let mut model = from_fn(|w: &[f64]| {
            seen.push(w.to_vec());
            Ok::<_, Infallible>(vec![w[w.len() - 1] * 10.0])
        });

        let trajectory = make_future_forecasts(&series, &mut model, 3, 2).unwrap();
        drop(model);

        assert_eq!(trajectory.points(), vec![40.0, 400.0, 4000.0]);
        assert_eq!(
            seen,
            vec![vec![3.0, 4.0], vec![4.0, 40.0], vec![40.0, 400.0]]
        );
    }

    #[test]
    fn zero_steps_never_calls_model() {
        let mut calls = 0;
        let mut model = from_fn(|_: &[f64]| {
            calls += 1;
            Ok::<_, Infallible>(vec![0.0])
        });

        let trajectory = make_future_forecasts(&[1.0, 2.0, 3.0], &mut model, 0, 3).unwrap();
        drop(model);

        assert!(trajectory.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn series_shorter_than_window_is_rejected() {
        let mut model = LastValue::new();
        let err = make_future_forecasts(&[1.0, 2.0], &mut model, 3, 5).unwrap_err();

        assert_eq!(
            err,
            RunError::Invalid(ForecastError::InvalidWindow {
                window_size: 5,
                len: 2
            })
        );
    }

    #[test]
    fn model_error_propagates_unchanged() {
        #[derive(Debug, PartialEq)]
        struct ShapeError(usize);

        let mut calls = 0;
        let mut model = from_fn(|w: &[f64]| {
            calls += 1;
            if calls == 2 {
                Err(ShapeError(w.len()))
            } else {
                Ok(vec![1.0])
            }
        });

        let err = make_future_forecasts(&[1.0, 2.0, 3.0], &mut model, 5, 3).unwrap_err();
        drop(model);

        assert_eq!(err, RunError::Model(ShapeError(3)));
        assert_eq!(calls, 2);
    }

    #[test]
    fn empty_prediction_is_rejected() {
        let mut model = from_fn(|_: &[f64]| Ok::<_, Infallible>(Vec::new()));
        let err = make_future_forecasts(&[1.0, 2.0], &mut model, 1, 2).unwrap_err();
        assert_eq!(err, RunError::Invalid(ForecastError::EmptyPrediction));
    }

    #[test]
    fn multi_horizon_forecasts_slide_every_value() {
        let series = vec![1.0, 2.0, 3.0];
        let mut model = from_fn(|w: &[f64]| {
            let last = w[w.len() - 1];
            Ok::<_, Infallible>(vec![last + 1.0, last + 2.0])
        });

        let trajectory = make_future_forecasts(&series, &mut model, 2, 3).unwrap();

        assert_eq!(trajectory.steps(), &[vec![4.0, 5.0], vec![6.0, 7.0]]);
        assert_eq!(trajectory.points(), vec![4.0, 6.0]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let series: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).sin()).collect();
        let first = make_future_forecasts(&series, &mut WindowMean::new(), 10, 5).unwrap();
        let second = make_future_forecasts(&series, &mut WindowMean::new(), 10, 5).unwrap();
        assert_eq!(first, second);
    }
}
