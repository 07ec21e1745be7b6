//! Forecast trajectory produced by an autoregressive run.

use crate::error::{ForecastError, Result};

/// Ordered forecasts of one run, one entry per step into the future.
///
/// Each step holds the full model output for that step: a single value for
/// scalar models, `horizon` values for multi-horizon models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<Vec<f64>>,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trajectory with room for `steps` forecasts.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            steps: Vec::with_capacity(steps),
        }
    }

    /// Append the forecast for the next step.
    pub(crate) fn push(&mut self, forecast: Vec<f64>) {
        self.steps.push(forecast);
    }

    /// Number of steps forecast.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps were forecast.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the forecast for one step.
    pub fn step(&self, index: usize) -> Result<&[f64]> {
        self.steps
            .get(index)
            .map(|v| v.as_slice())
            .ok_or(ForecastError::DimensionMismatch {
                expected: index + 1,
                got: self.steps.len(),
            })
    }

    /// All steps in chronological order.
    pub fn steps(&self) -> &[Vec<f64>] {
        &self.steps
    }

    /// First value of every step.
    ///
    /// For scalar models this is the trajectory as a plain series.
    pub fn points(&self) -> Vec<f64> {
        self.steps
            .iter()
            .filter_map(|s| s.first().copied())
            .collect()
    }

    /// Every value of every step, concatenated in order.
    pub fn flatten(&self) -> Vec<f64> {
        self.steps.iter().flatten().copied().collect()
    }

    /// Consume the trajectory, returning the raw steps.
    pub fn into_steps(self) -> Vec<Vec<f64>> {
        self.steps
    }
}

impl IntoIterator for Trajectory {
    type Item = Vec<f64>;
    type IntoIter = std::vec::IntoIter<Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_starts_empty() {
        let trajectory = Trajectory::new();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.len(), 0);
        assert!(trajectory.points().is_empty());
        assert!(trajectory.step(0).is_err());
    }

    #[test]
    fn trajectory_keeps_step_order() {
        let mut trajectory = Trajectory::with_capacity(3);
        trajectory.push(vec![1.0]);
        trajectory.push(vec![2.0]);
        trajectory.push(vec![3.0]);

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.points(), vec![1.0, 2.0, 3.0]);
        assert_eq!(trajectory.step(1).unwrap(), &[2.0]);
    }

    #[test]
    fn multi_horizon_steps_flatten_in_order() {
        let mut trajectory = Trajectory::new();
        trajectory.push(vec![1.0, 1.5]);
        trajectory.push(vec![2.0, 2.5]);

        assert_eq!(trajectory.points(), vec![1.0, 2.0]);
        assert_eq!(trajectory.flatten(), vec![1.0, 1.5, 2.0, 2.5]);
        assert_eq!(trajectory.into_steps().len(), 2);
    }
}
