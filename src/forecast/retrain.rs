//! Autoregressive forecasting with a refit before every step.

use log::{debug, info};

use super::{initial_window, slide_window};
use crate::core::{TrainingSet, Trajectory};
use crate::error::{ForecastError, RunError};
use crate::models::TrainablePredictor;

/// Loop state threaded through each step of the retraining run.
struct RunState {
    data: TrainingSet,
    window: Vec<f64>,
    trajectory: Trajectory,
}

/// Forecast `into_future` steps, refitting the model before each one.
///
/// `series` holds the labels and `inputs` the window that precedes each
/// label, so `inputs[i]` predicts `series[i]`. Every step fits the model on
/// the accumulated data for `epochs`, predicts on the current window and
/// folds `(window, forecast)` into the data as a new sample before sliding
/// the forecast into the window. The fitted model is handed back with the
/// trajectory.
///
/// # Errors
/// * [`ForecastError::DimensionMismatch`] if `inputs` and `series` differ in
///   length or an input row is not `window_size` wide
/// * [`ForecastError::InvalidWindow`] if `window_size` is 0 or exceeds the series length
/// * [`ForecastError::EmptyPrediction`] if the model returns no values
/// * [`RunError::Model`] with the model's own fit or predict error
pub fn pred_model_run<M>(
    series: &[f64],
    inputs: &[Vec<f64>],
    mut model: M,
    into_future: usize,
    window_size: usize,
    epochs: usize,
) -> Result<(M, Trajectory), RunError<M::Error>>
where
    M: TrainablePredictor,
{
    let window = initial_window(series, window_size)?;
    if let Some(row) = inputs.iter().find(|row| row.len() != window_size) {
        return Err(ForecastError::DimensionMismatch {
            expected: window_size,
            got: row.len(),
        }
        .into());
    }
    let data = TrainingSet::new(inputs.to_vec(), series.to_vec())?;

    info!(
        "retraining {} for {} steps on {} samples ({} epochs each)",
        model.name(),
        into_future,
        data.len(),
        epochs
    );

    let start = RunState {
        data,
        window,
        trajectory: Trajectory::with_capacity(into_future),
    };

    let finished = (0..into_future).try_fold(
        start,
        |state, step| -> Result<RunState, RunError<M::Error>> {
            model.fit(&state.data, epochs).map_err(RunError::Model)?;

            let forecast = model.predict(&state.window).map_err(RunError::Model)?;
            let label = *forecast.first().ok_or(ForecastError::EmptyPrediction)?;

            debug!(
                "{} step {}: predicting on {:?} -> {:?}",
                model.name(),
                step,
                state.window,
                forecast
            );

            let data = state.data.with_sample(state.window.clone(), label)?;
            let window = slide_window(state.window, &forecast);
            let mut trajectory = state.trajectory;
            trajectory.push(forecast);

            Ok(RunState {
                data,
                window,
                trajectory,
            })
        },
    )?;

    info!(
        "retraining run finished with {} samples",
        finished.data.len()
    );

    Ok((model, finished.trajectory))
}
