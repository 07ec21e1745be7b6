//! Ordinary Least Squares (OLS) regression over windowed rows.
//!
//! Used by the linear autoregressive predictor to fit window weights.

use crate::error::{ForecastError, Result};

/// OLS regression coefficients and intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct OLSResult {
    /// Regression coefficients (one per column).
    pub coefficients: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
}

impl OLSResult {
    /// Predict one observation: intercept + row @ coefficients.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }

        Ok(self.intercept
            + row
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, b)| x * b)
                .sum::<f64>())
    }

    /// Get the number of regressors.
    pub fn num_regressors(&self) -> usize {
        self.coefficients.len()
    }
}

/// Fit OLS regression: y = intercept + X @ coefficients
///
/// Each entry of `rows` is one observation. A small ridge term keeps the
/// normal equations solvable for collinear windows.
///
/// Uses Cholesky decomposition to solve the normal equations.
pub fn ols_fit(rows: &[Vec<f64>], y: &[f64], ridge: f64) -> Result<OLSResult> {
    let n = y.len();

    if n == 0 {
        return Err(ForecastError::EmptyData);
    }
    if rows.len() != n {
        return Err(ForecastError::DimensionMismatch {
            expected: n,
            got: rows.len(),
        });
    }

    let k = rows[0].len();
    if let Some(row) = rows.iter().find(|r| r.len() != k) {
        return Err(ForecastError::DimensionMismatch {
            expected: k,
            got: row.len(),
        });
    }

    // Design matrix has k+1 columns: [1, x1, x2, ...]
    let num_params = k + 1;
    let mut xtx = vec![vec![0.0; num_params]; num_params];
    let mut xty = vec![0.0; num_params];

    for (row, &y_obs) in rows.iter().zip(y.iter()) {
        xtx[0][0] += 1.0;
        for j in 0..k {
            xtx[0][j + 1] += row[j];
            xtx[j + 1][0] += row[j];
        }
        for i in 0..k {
            for j in 0..k {
                xtx[i + 1][j + 1] += row[i] * row[j];
            }
        }

        xty[0] += y_obs;
        for i in 0..k {
            xty[i + 1] += row[i] * y_obs;
        }
    }

    // The intercept is left unpenalised.
    let ridge = ridge.max(1e-8);
    xtx[0][0] += 1e-8;
    for i in 1..num_params {
        xtx[i][i] += ridge;
    }

    let beta = solve_symmetric(&xtx, &xty).ok_or_else(|| {
        ForecastError::ComputationError(
            "OLS regression failed: matrix not positive definite".into(),
        )
    })?;

    Ok(OLSResult {
        intercept: beta[0],
        coefficients: beta[1..].to_vec(),
    })
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ols_fit_simple_linear() {
        // y = 2 + 3*x
        let rows: Vec<Vec<f64>> = (1..=5).map(|x| vec![x as f64]).collect();
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];

        let result = ols_fit(&rows, &y, 0.0).unwrap();

        assert_relative_eq!(result.intercept, 2.0, epsilon = 1e-5);
        assert_eq!(result.num_regressors(), 1);
        assert_relative_eq!(result.coefficients[0], 3.0, epsilon = 1e-5);
    }

    #[test]
    fn ols_fit_two_columns() {
        // y = 1 + 2*x1 + 3*x2
        let rows = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 1.0],
            vec![1.0, 3.0],
            vec![3.0, 2.0],
        ];
        let y: Vec<f64> = rows.iter().map(|r| 1.0 + 2.0 * r[0] + 3.0 * r[1]).collect();

        let result = ols_fit(&rows, &y, 0.0).unwrap();

        assert_relative_eq!(result.intercept, 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-5);
        assert_relative_eq!(result.coefficients[1], 3.0, epsilon = 1e-5);
        assert_relative_eq!(
            result.predict_row(&[2.0, 2.0]).unwrap(),
            11.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn ols_fit_empty() {
        assert!(matches!(ols_fit(&[], &[], 0.0), Err(ForecastError::EmptyData)));
    }

    #[test]
    fn ols_fit_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            ols_fit(&rows, &[1.0, 2.0], 0.0),
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn predict_row_checks_width() {
        let result = OLSResult {
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
        };
        assert!(result.predict_row(&[1.0]).is_err());
    }
}
