//! Data transformations for time series.
//!
//! Turns a 1-D series into supervised (window, label) pairs.
//!
//! # Example
//!
//! ```
//! use window_forecast::transform::make_windows;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let pairs = make_windows(&series, 4, 1).unwrap();
//!
//! assert_eq!(pairs.len(), 4);
//! assert_eq!(pairs.windows[0], vec![1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(pairs.labels[0], vec![5.0]);
//! ```

pub mod window;

pub use window::{get_labelled_windows, make_windows, window_count, LabelledWindows};
