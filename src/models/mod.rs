//! Window predictors and the traits the forecasting loops drive them through.

mod traits;

pub mod baseline;
pub mod linear;

pub use linear::LinearAutoregressor;
pub use traits::{from_fn, BoxedPredictor, FnPredictor, TrainablePredictor, WindowPredictor};
