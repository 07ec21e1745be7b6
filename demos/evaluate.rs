//! Score forecasts and classifiers with the evaluation helpers.
//!
//! Run with: cargo run --example evaluate

use window_forecast::core::TrainingSet;
use window_forecast::forecast::make_future_forecasts;
use window_forecast::models::baseline::{Drift, LastValue, WindowMean};
use window_forecast::models::{BoxedPredictor, LinearAutoregressor, TrainablePredictor};
use window_forecast::transform::make_windows;
use window_forecast::utils::{
    calculate_results, calculate_results_time_series, class_predictions, confusion_matrix,
};
use window_forecast::ForecastError;

fn main() {
    env_logger::init();

    println!("=== Forecast Evaluation ===\n");

    let series: Vec<f64> = (0..160)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.4 * t + 6.0 * (t * 0.45).sin() + 1.5 * (t * 1.9).cos()
        })
        .collect();
    let (train, test) = series.split_at(140);
    let window_size = 10;

    let pairs = make_windows(train, window_size, 1).unwrap();
    let data = TrainingSet::new(pairs.windows.clone(), pairs.first_labels()).unwrap();
    let mut linear = LinearAutoregressor::new().with_ridge(0.1);
    linear.fit(&data, 1).unwrap();

    let mut models: Vec<(&str, BoxedPredictor<ForecastError>)> = vec![
        ("LastValue", Box::new(LastValue::new())),
        ("WindowMean", Box::new(WindowMean::new())),
        ("Drift", Box::new(Drift::new())),
        ("Linear", Box::new(linear)),
    ];

    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Model", "MAE", "MSE", "RMSE", "MAPE", "MASE"
    );
    println!("{:-<67}", "");
    for (name, model) in models.iter_mut() {
        let trajectory = make_future_forecasts(train, model, test.len(), window_size).unwrap();
        let r = calculate_results_time_series(test, &trajectory.points()).unwrap();
        println!(
            "{:<12} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            name, r.mae, r.mse, r.rmse, r.mape, r.mase
        );
    }

    println!("\n=== Classification ===\n");

    // Sigmoid outputs from a binary classifier
    let probabilities = vec![
        vec![0.9],
        vec![0.2],
        vec![0.7],
        vec![0.4],
        vec![0.6],
        vec![0.1],
        vec![0.8],
        vec![0.3],
    ];
    let y_true = vec![1, 0, 1, 1, 0, 0, 1, 0];
    let y_pred = class_predictions(&probabilities).unwrap();

    let results = calculate_results(&y_true, &y_pred).unwrap();
    println!("Accuracy:  {:.2}%", results.accuracy);
    println!("Precision: {:.4}", results.precision);
    println!("Recall:    {:.4}", results.recall);
    println!("F1:        {:.4}", results.f1);

    let matrix = confusion_matrix(&y_true, &y_pred).unwrap();
    println!("\nConfusion matrix:");
    for row in matrix.cell_labels(true) {
        println!("  {}", row.join("  "));
    }
}
