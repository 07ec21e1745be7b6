//! Labelled training data accumulated across a retraining run.

use crate::error::{ForecastError, Result};

/// Windowed inputs paired with one label each.
///
/// Every input row has the same width. The set only grows by value through
/// [`TrainingSet::with_sample`], so each loop iteration owns the data it fits on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    inputs: Vec<Vec<f64>>,
    labels: Vec<f64>,
    width: usize,
}

impl TrainingSet {
    /// Build a training set from parallel inputs and labels.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self> {
        if inputs.len() != labels.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: inputs.len(),
                got: labels.len(),
            });
        }

        let width = inputs.first().map(|row| row.len()).unwrap_or(0);
        if let Some(row) = inputs.iter().find(|row| row.len() != width) {
            return Err(ForecastError::DimensionMismatch {
                expected: width,
                got: row.len(),
            });
        }

        Ok(Self {
            inputs,
            labels,
            width,
        })
    }

    /// Return a new set with one more sample appended.
    pub fn with_sample(mut self, input: Vec<f64>, label: f64) -> Result<Self> {
        if !self.inputs.is_empty() && input.len() != self.width {
            return Err(ForecastError::DimensionMismatch {
                expected: self.width,
                got: input.len(),
            });
        }
        self.width = input.len();
        self.inputs.push(input);
        self.labels.push(label);
        Ok(self)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Width of every input row (0 for an empty set).
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let result = TrainingSet::new(vec![vec![1.0, 2.0]], vec![3.0, 4.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 1,
                got: 2
            })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = TrainingSet::new(vec![vec![1.0, 2.0], vec![1.0]], vec![3.0, 4.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn with_sample_grows_by_value() {
        let set = TrainingSet::new(vec![vec![1.0, 2.0]], vec![3.0]).unwrap();
        let grown = set.clone().with_sample(vec![2.0, 3.0], 4.0).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.inputs()[1], vec![2.0, 3.0]);
        assert_eq!(grown.labels(), &[3.0, 4.0]);
    }

    #[test]
    fn with_sample_checks_width() {
        let set = TrainingSet::new(vec![vec![1.0, 2.0]], vec![3.0]).unwrap();
        assert!(set.with_sample(vec![1.0], 2.0).is_err());
    }

    #[test]
    fn empty_set_adopts_first_width() {
        let set = TrainingSet::default().with_sample(vec![1.0, 2.0, 3.0], 4.0).unwrap();
        assert_eq!(set.width(), 3);
        assert!(!set.is_empty());
    }
}
