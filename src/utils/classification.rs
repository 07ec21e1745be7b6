//! Classification metrics and helpers for turning model outputs into labels.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Headline classification scores.
///
/// Precision, recall and F1 are averaged over classes weighted by each
/// class's support in the true labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResults {
    /// Share of correct predictions, in percent.
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Calculate accuracy and support-weighted precision, recall and F1.
///
/// A class that is never predicted has precision 0; a class with precision
/// and recall both 0 has F1 0.
pub fn calculate_results(y_true: &[usize], y_pred: &[usize]) -> Result<ClassificationResults> {
    let matrix = confusion_matrix(y_true, y_pred)?;
    let n = y_true.len() as f64;

    let correct: usize = (0..matrix.n_classes()).map(|i| matrix.counts[i][i]).sum();
    let mut precision = 0.0;
    let mut recall = 0.0;
    let mut f1 = 0.0;

    for i in 0..matrix.n_classes() {
        let support: usize = matrix.counts[i].iter().sum();
        if support == 0 {
            continue;
        }
        let tp = matrix.counts[i][i] as f64;
        let predicted: usize = matrix.counts.iter().map(|row| row[i]).sum();

        let p = if predicted == 0 {
            0.0
        } else {
            tp / predicted as f64
        };
        let r = tp / support as f64;
        let f = if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        };

        let weight = support as f64 / n;
        precision += weight * p;
        recall += weight * r;
        f1 += weight * f;
    }

    Ok(ClassificationResults {
        accuracy: 100.0 * correct as f64 / n,
        precision,
        recall,
        f1,
    })
}

/// Counts of true label (row) against predicted label (column).
///
/// Rows and columns follow `labels`, the sorted labels seen in either input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Class label of each row and column, ascending.
    pub labels: Vec<usize>,
    /// counts\[true\]\[predicted\], indexed by position in `labels`
    pub counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Number of classes (rows and columns).
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Row/column position of `label`, if it occurs.
    pub fn index_of(&self, label: usize) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    /// Number of samples whose true label is `label`.
    pub fn support(&self, label: usize) -> usize {
        self.index_of(label)
            .map(|i| self.counts[i].iter().sum())
            .unwrap_or(0)
    }

    /// Number of samples predicted as `label`.
    pub fn predicted(&self, label: usize) -> usize {
        self.index_of(label)
            .map(|i| self.counts.iter().map(|row| row[i]).sum())
            .unwrap_or(0)
    }

    /// Row-normalised matrix: each row divided by its support.
    ///
    /// Rows with no samples stay at zero.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let total: usize = row.iter().sum();
                row.iter()
                    .map(|&c| {
                        if total == 0 {
                            0.0
                        } else {
                            c as f64 / total as f64
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Midpoint between the smallest and largest count.
    ///
    /// Cells above it are drawn with light text on a heatmap.
    pub fn text_threshold(&self) -> f64 {
        let cells = self.counts.iter().flatten();
        let max = cells.clone().copied().max().unwrap_or(0);
        let min = cells.copied().min().unwrap_or(0);
        (max + min) as f64 / 2.0
    }

    /// Render each cell as `count` or `count (pct%)` when `norm` is set.
    pub fn cell_labels(&self, norm: bool) -> Vec<Vec<String>> {
        let normalized = self.normalized();
        self.counts
            .iter()
            .zip(normalized.iter())
            .map(|(row, norm_row)| {
                row.iter()
                    .zip(norm_row.iter())
                    .map(|(c, f)| {
                        if norm {
                            format!("{} ({:.1}%)", c, f * 100.0)
                        } else {
                            c.to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Build a confusion matrix over the labels that occur in either input.
pub fn confusion_matrix(y_true: &[usize], y_pred: &[usize]) -> Result<ConfusionMatrix> {
    if y_true.is_empty() || y_pred.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if y_true.len() != y_pred.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }

    let labels: Vec<usize> = y_true
        .iter()
        .chain(y_pred.iter())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let position = |label: usize| labels.binary_search(&label).unwrap_or_default();

    let mut counts = vec![vec![0usize; labels.len()]; labels.len()];
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        counts[position(t)][position(p)] += 1;
    }

    Ok(ConfusionMatrix { labels, counts })
}

/// Convert model probability rows into class labels.
///
/// Rows with several columns take the argmax (multi-class). Single-column
/// rows are a binary probability: above 0.5 is class 1, otherwise class 0.
pub fn class_predictions(probabilities: &[Vec<f64>]) -> Result<Vec<usize>> {
    let width = match probabilities.first() {
        Some(row) if !row.is_empty() => row.len(),
        Some(_) => return Err(ForecastError::EmptyData),
        None => return Ok(Vec::new()),
    };

    probabilities
        .iter()
        .map(|row| {
            if row.len() != width {
                return Err(ForecastError::DimensionMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
            if width == 1 {
                return Ok(usize::from(row[0] > 0.5));
            }
            Ok(argmax(row))
        })
        .collect()
}

/// Index of the largest value; the first one wins ties.
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, best_val), (i, &v)| {
            if v > best_val {
                (i, v)
            } else {
                (best, best_val)
            }
        })
        .0
}

/// Evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Grid of `steps x steps` points spanning the bounding box of `data`.
///
/// Points are ordered row by row (y outer, x inner), so a label vector
/// predicted on them reshapes directly into a `steps x steps` image for a
/// decision-boundary plot.
pub fn decision_grid(data: &[[f64; 2]], steps: usize) -> Result<Vec<[f64; 2]>> {
    if data.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if steps < 2 {
        return Err(ForecastError::InvalidParameter(
            "grid needs at least 2 steps per axis".to_string(),
        ));
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &[x, y] in data {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let xs = linspace(x_min, x_max, steps);
    let ys = linspace(y_min, y_max, steps);

    Ok(ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| [x, y]))
        .collect())
}
