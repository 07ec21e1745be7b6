//! Calendar helpers for labelling forecasts and experiment runs.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Daily dates for `into_future` forecasts.
///
/// The first date is `start + offset` days; one date per day follows.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use window_forecast::utils::get_future_dates;
///
/// let last = NaiveDate::from_ymd_opt(2021, 5, 18).unwrap();
/// let dates = get_future_dates(last, 3, 1);
///
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2021, 5, 19).unwrap());
/// assert_eq!(dates.len(), 3);
/// ```
pub fn get_future_dates(start: NaiveDate, into_future: usize, offset: i64) -> Vec<NaiveDate> {
    let first = start + Duration::days(offset);
    (0..into_future)
        .map(|i| first + Duration::days(i as i64))
        .collect()
}

/// Log directory for one experiment run: `dir/experiment/YYYYMMDD-HHMMSS`.
pub fn experiment_log_dir(dir: impl AsRef<Path>, experiment: &str, now: NaiveDateTime) -> PathBuf {
    dir.as_ref()
        .join(experiment)
        .join(now.format("%Y%m%d-%H%M%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_dates_start_after_offset() {
        let dates = get_future_dates(date(2021, 12, 30), 4, 1);
        assert_eq!(
            dates,
            vec![
                date(2021, 12, 31),
                date(2022, 1, 1),
                date(2022, 1, 2),
                date(2022, 1, 3)
            ]
        );
    }

    #[test]
    fn future_dates_zero_offset_and_empty() {
        assert_eq!(
            get_future_dates(date(2020, 2, 28), 2, 0),
            vec![date(2020, 2, 28), date(2020, 2, 29)]
        );
        assert!(get_future_dates(date(2020, 1, 1), 0, 1).is_empty());
    }

    #[test]
    fn log_dir_layout() {
        let now = date(2023, 4, 5).and_hms_opt(13, 7, 9).unwrap();
        let path = experiment_log_dir("logs", "efficientnet_model_1", now);
        assert_eq!(
            path,
            PathBuf::from("logs")
                .join("efficientnet_model_1")
                .join("20230405-130709")
        );
    }
}
