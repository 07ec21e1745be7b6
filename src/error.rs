//! Error types for the window-forecast library.

use thiserror::Error;

/// Result type alias for forecasting and evaluation operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while windowing, forecasting or evaluating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// The series is too short for the requested window.
    #[error("invalid window: need at least {window_size} values, got {len}")]
    InvalidWindow { window_size: usize, len: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// The model returned a forecast with no values.
    #[error("model returned an empty prediction")]
    EmptyPrediction,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),

    /// Malformed line in a text input.
    #[error("parse error on line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// Filesystem failure, carrying the rendered `std::io::Error`.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}

/// Error returned by the forecasting loops.
///
/// Input validation failures are reported as [`RunError::Invalid`]; anything
/// the model itself raises is handed back untouched in [`RunError::Model`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError<E> {
    /// The inputs to the loop were rejected before or during the run.
    #[error(transparent)]
    Invalid(#[from] ForecastError),

    /// The model failed to fit or predict.
    #[error("model error: {0}")]
    Model(E),
}

impl<E> RunError<E> {
    /// Return the model error, if this is one.
    pub fn into_model_error(self) -> Option<E> {
        match self {
            RunError::Model(e) => Some(e),
            RunError::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = ForecastError::InvalidWindow {
            window_size: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid window: need at least 7 values, got 3"
        );

        let err = ForecastError::InvalidParameter("horizon must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: horizon must be positive");

        let err = ForecastError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");

        let err = ForecastError::ParseError {
            line: 4,
            reason: "missing tab".to_string(),
        };
        assert_eq!(err.to_string(), "parse error on line 4: missing tab");

        let err = ForecastError::FitRequired;
        assert_eq!(err.to_string(), "model must be fitted before prediction");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ForecastError = io.into();
        assert_eq!(err, ForecastError::Io("gone".to_string()));
    }

    #[test]
    fn run_error_keeps_model_error_untouched() {
        let err: RunError<&str> = RunError::Model("shape mismatch");
        assert_eq!(err.to_string(), "model error: shape mismatch");
        assert_eq!(err.into_model_error(), Some("shape mismatch"));

        let err: RunError<&str> = ForecastError::EmptyPrediction.into();
        assert_eq!(err.to_string(), "model returned an empty prediction");
        assert!(err.into_model_error().is_none());
    }
}
