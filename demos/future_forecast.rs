//! Forecast past the end of a series with a fitted linear window model.
//!
//! Run with: RUST_LOG=debug cargo run --example future_forecast

use chrono::NaiveDate;
use window_forecast::config::ForecastConfig;
use window_forecast::core::TrainingSet;
use window_forecast::models::baseline::WindowMean;
use window_forecast::models::{LinearAutoregressor, TrainablePredictor};
use window_forecast::utils::get_future_dates;

fn main() {
    env_logger::init();

    println!("=== Future Forecast ===\n");

    // Daily closing prices with a trend and a weekly cycle
    let prices: Vec<f64> = (0..200)
        .map(|i| {
            let t = i as f64;
            20_000.0 + 35.0 * t + 400.0 * (t * 2.0 * std::f64::consts::PI / 7.0).sin()
                + 120.0 * (t * 0.13).cos()
        })
        .collect();
    let last_day = NaiveDate::from_ymd_opt(2021, 5, 18).unwrap();

    let config = ForecastConfig::new(7, 1).with_into_future(14);
    println!(
        "Series length: {}, window: {}, steps: {}",
        prices.len(),
        config.window_size,
        config.into_future
    );

    // 1. Frame the series as a supervised problem and fit
    let pairs = config.windows(&prices).unwrap();
    println!("Training pairs: {}", pairs.len());

    let data = TrainingSet::new(pairs.windows.clone(), pairs.first_labels()).unwrap();
    let mut model = LinearAutoregressor::new().with_ridge(1.0);
    model.fit(&data, config.epochs).unwrap();
    println!("Intercept: {:.4}", model.intercept().unwrap());
    println!("Weights:   {:?}", model.coefficients().unwrap());

    // 2. Roll the model forward
    let linear = config.forecast(&prices, &mut model).unwrap();
    let mean = config.forecast(&prices, &mut WindowMean::new()).unwrap();
    let dates = get_future_dates(last_day, config.into_future, 1);

    println!("\n{:>12} {:>14} {:>14}", "Date", "Linear", "WindowMean");
    println!("{:-<42}", "");
    for ((date, l), m) in dates.iter().zip(linear.points()).zip(mean.points()) {
        println!("{:>12} {:>14.2} {:>14.2}", date, l, m);
    }

    // 3. Retrain on every forecast step
    println!("\n--- Retraining run ---");
    let retrain = config.clone().with_epochs(1);
    let (model, trajectory) = retrain
        .retrain(&prices, LinearAutoregressor::new().with_ridge(1.0))
        .unwrap();
    println!("Refits: {}", model.fit_count());
    for (i, value) in trajectory.points().iter().enumerate() {
        println!("  step {:>2}: {:.2}", i + 1, value);
    }
}
