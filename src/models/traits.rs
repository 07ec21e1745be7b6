//! Predictor traits defining the model boundary of the forecasting loops.

use crate::core::TrainingSet;

/// A model that maps one input window to a forecast.
///
/// The returned vector holds the model's horizon: one value for a scalar
/// one-step model, more for a multi-horizon model. Errors are the model's own
/// and are passed through the forecasting loops unchanged.
pub trait WindowPredictor {
    /// Error raised by the model.
    type Error;

    /// Forecast the step(s) following `window`.
    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>, Self::Error>;

    /// Get the model name.
    fn name(&self) -> &str {
        "WindowPredictor"
    }
}

/// A predictor that can be refitted on labelled windows.
pub trait TrainablePredictor: WindowPredictor {
    /// Fit the model on `data` for `epochs` passes.
    fn fit(&mut self, data: &TrainingSet, epochs: usize) -> Result<(), Self::Error>;
}

impl<M: WindowPredictor + ?Sized> WindowPredictor for &mut M {
    type Error = M::Error;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>, Self::Error> {
        (**self).predict(window)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: TrainablePredictor + ?Sized> TrainablePredictor for &mut M {
    fn fit(&mut self, data: &TrainingSet, epochs: usize) -> Result<(), Self::Error> {
        (**self).fit(data, epochs)
    }
}

impl<M: WindowPredictor + ?Sized> WindowPredictor for Box<M> {
    type Error = M::Error;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>, Self::Error> {
        (**self).predict(window)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Type alias for boxed predictor trait objects.
///
/// # Example
///
/// ```
/// use window_forecast::models::{BoxedPredictor, WindowPredictor};
/// use window_forecast::models::baseline::WindowMean;
/// use window_forecast::ForecastError;
///
/// let model: BoxedPredictor<ForecastError> = Box::new(WindowMean::new());
/// assert_eq!(model.name(), "WindowMean");
/// ```
pub type BoxedPredictor<E> = Box<dyn WindowPredictor<Error = E>>;

/// Predictor backed by a closure.
///
/// Built with [`from_fn`].
pub struct FnPredictor<F> {
    f: F,
}

/// Wrap a closure as a [`WindowPredictor`].
///
/// # Example
///
/// ```
/// use window_forecast::models::{from_fn, WindowPredictor};
///
/// let mut model = from_fn(|w: &[f64]| Ok::<_, String>(vec![w[w.len() - 1] + 1.0]));
/// assert_eq!(model.predict(&[1.0, 2.0]).unwrap(), vec![3.0]);
/// ```
pub fn from_fn<F, E>(f: F) -> FnPredictor<F>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
{
    FnPredictor { f }
}

impl<F, E> WindowPredictor for FnPredictor<F>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
{
    type Error = E;

    fn predict(&mut self, window: &[f64]) -> Result<Vec<f64>, E> {
        (self.f)(window)
    }

    fn name(&self) -> &str {
        "FnPredictor"
    }
}
