//! Core data structures shared by the forecasting loops.

mod history;
mod training_set;
mod trajectory;

pub use history::{combine_histories, CombinedHistory, TrainingHistory};
pub use training_set::TrainingSet;
pub use trajectory::Trajectory;
