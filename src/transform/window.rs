//! Sliding window splitter.
//!
//! Provides the supervised framing used to train window predictors: each
//! slide of `window_size + horizon` values becomes one input window and the
//! `horizon` values that follow it.

use crate::error::{ForecastError, Result};

/// Parallel input windows and their labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelledWindows {
    /// Input windows, each `window_size` long.
    pub windows: Vec<Vec<f64>>,
    /// Labels, each `horizon` long.
    pub labels: Vec<Vec<f64>>,
}

impl LabelledWindows {
    /// Number of (window, label) pairs.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over (window, label) pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.windows
            .iter()
            .zip(self.labels.iter())
            .map(|(w, l)| (w.as_slice(), l.as_slice()))
    }

    /// First value of every label, the target vector for one-step models.
    pub fn first_labels(&self) -> Vec<f64> {
        self.labels
            .iter()
            .filter_map(|l| l.first().copied())
            .collect()
    }
}

/// Number of windows `make_windows` produces for a series of length `len`.
///
/// Returns 0 when the series is shorter than `window_size + horizon`.
pub fn window_count(len: usize, window_size: usize, horizon: usize) -> usize {
    match window_size.checked_add(horizon) {
        Some(span) if span <= len => len - span + 1,
        _ => 0,
    }
}

/// Split a series into sliding (window, label) pairs.
///
/// # Arguments
/// * `series` - Input time series
/// * `window_size` - Length of each input window
/// * `horizon` - Number of values after each window used as its label
///
/// # Returns
/// `len - (window_size + horizon) + 1` pairs in series order.
///
/// # Errors
/// * [`ForecastError::InvalidParameter`] if `window_size` or `horizon` is 0
/// * [`ForecastError::InvalidWindow`] if the series is shorter than
///   `window_size + horizon`
pub fn make_windows(series: &[f64], window_size: usize, horizon: usize) -> Result<LabelledWindows> {
    if window_size == 0 {
        return Err(ForecastError::InvalidParameter(
            "window_size must be at least 1".to_string(),
        ));
    }
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "horizon must be at least 1".to_string(),
        ));
    }

    // A span past usize::MAX is longer than any series.
    let span = window_size.saturating_add(horizon);
    if series.len() < span {
        return Err(ForecastError::InvalidWindow {
            window_size: span,
            len: series.len(),
        });
    }

    let rows: Vec<Vec<f64>> = series.windows(span).map(|w| w.to_vec()).collect();
    get_labelled_windows(&rows, horizon)
}

/// Split already-windowed rows into inputs and labels.
///
/// The last `horizon` values of every row become its label.
pub fn get_labelled_windows(rows: &[Vec<f64>], horizon: usize) -> Result<LabelledWindows> {
    let width = match rows.first() {
        Some(row) => row.len(),
        None => return Ok(LabelledWindows::default()),
    };

    if horizon == 0 || horizon >= width {
        return Err(ForecastError::InvalidParameter(format!(
            "horizon must be between 1 and {}, got {}",
            width.saturating_sub(1),
            horizon
        )));
    }

    let split = width - horizon;
    let mut windows = Vec::with_capacity(rows.len());
    let mut labels = Vec::with_capacity(rows.len());

    for row in rows {
        if row.len() != width {
            return Err(ForecastError::DimensionMismatch {
                expected: width,
                got: row.len(),
            });
        }
        let (window, label) = row.split_at(split);
        windows.push(window.to_vec());
        labels.push(label.to_vec());
    }

    Ok(LabelledWindows { windows, labels })
}
