use chrono::{NaiveTime, TimeDelta};

use crate::models::BedtimeInput;
use crate::prediction::{PredictionError, SleepPredictor};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Short 12-hour clock, e.g. `11:30 PM`.
const BEDTIME_FORMAT: &str = "%-I:%M %p";

/// Wake time minus the predicted amount of sleep, wrapping across midnight.
pub fn predict_bedtime<P>(input: &BedtimeInput, predictor: &P) -> Result<NaiveTime, PredictionError>
where
    P: SleepPredictor + ?Sized,
{
    let actual_sleep = predictor.predict(
        input.wake_feature(),
        input.sleep_amount,
        f64::from(input.coffee_amount),
    )?;

    if !actual_sleep.is_finite() {
        return Err(PredictionError::Inference(format!(
            "predictor returned {actual_sleep}"
        )));
    }

    // `as` saturates, and only the time of day matters, so fold into one day first.
    let sleep_secs = ((actual_sleep * 3600.0).round() as i64).rem_euclid(SECONDS_PER_DAY);
    let (bedtime, _) = input
        .wake_time
        .overflowing_sub_signed(TimeDelta::seconds(sleep_secs));
    Ok(bedtime)
}

pub fn format_bedtime(bedtime: NaiveTime) -> String {
    bedtime.format(BEDTIME_FORMAT).to_string()
}

/// Recommended bedtime for `input`, formatted for display.
///
/// Pure: the same input and a deterministic predictor always give the same string.
pub fn compute_bedtime<P>(input: &BedtimeInput, predictor: &P) -> Result<String, PredictionError>
where
    P: SleepPredictor + ?Sized,
{
    predict_bedtime(input, predictor).map(format_bedtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{COFFEE_RANGE, SLEEP_STEP};
    use crate::prediction::LinearSleepModel;
    use std::cell::RefCell;

    const BUNDLED: &str = include_str!("../../resources/sleep_calculator.json");

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn fixed(hours: f64) -> impl Fn(f64, f64, f64) -> Result<f64, PredictionError> {
        move |_, _, _| Ok(hours)
    }

    fn failing(_: f64, _: f64, _: f64) -> Result<f64, PredictionError> {
        Err(PredictionError::Inference("model crashed".into()))
    }

    #[test]
    fn test_seven_and_a_half_hours_before_seven_am() {
        let input = BedtimeInput::new(at(7, 0), 8.0, 2);
        assert_eq!(compute_bedtime(&input, &fixed(7.5)).unwrap(), "11:30 PM");
    }

    #[test]
    fn test_wraps_across_midnight_from_midnight_wake() {
        let input = BedtimeInput::new(at(0, 0), 4.0, 1);
        let bedtime = predict_bedtime(&input, &fixed(4.0)).unwrap();
        assert_eq!(bedtime, at(20, 0));
        assert_eq!(format_bedtime(bedtime), "8:00 PM");
    }

    #[test]
    fn test_morning_bedtime_has_no_leading_zero() {
        let input = BedtimeInput::new(at(13, 5), 8.0, 1);
        assert_eq!(compute_bedtime(&input, &fixed(4.0)).unwrap(), "9:05 AM");
    }

    #[test]
    fn test_predictions_longer_than_a_day_still_wrap() {
        let input = BedtimeInput::new(at(6, 0), 8.0, 1);
        assert_eq!(compute_bedtime(&input, &fixed(32.0)).unwrap(), "10:00 PM");
        assert_eq!(compute_bedtime(&input, &fixed(-2.0)).unwrap(), "8:00 AM");
    }

    #[test]
    fn test_features_passed_to_predictor() {
        let seen = RefCell::new(None);
        let recording = |wake: f64, sleep: f64, coffee: f64| -> Result<f64, PredictionError> {
            *seen.borrow_mut() = Some((wake, sleep, coffee));
            Ok(8.0)
        };

        let input = BedtimeInput::new(at(7, 45), 9.25, 3);
        compute_bedtime(&input, &recording).unwrap();
        assert_eq!(*seen.borrow(), Some((52.0, 9.25, 3.0)));
    }

    #[test]
    fn test_predictor_failure_is_returned() {
        let input = BedtimeInput::default();
        let err = compute_bedtime(&input, &failing).unwrap_err();
        assert!(matches!(err, PredictionError::Inference(_)));
    }

    #[test]
    fn test_non_finite_prediction_is_error() {
        let input = BedtimeInput::default();
        assert!(compute_bedtime(&input, &fixed(f64::NAN)).is_err());
        assert!(compute_bedtime(&input, &fixed(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_same_input_gives_same_output() {
        let model = LinearSleepModel::from_json(BUNDLED).unwrap();
        let input = BedtimeInput::new(at(6, 30), 7.75, 4);
        let first = compute_bedtime(&input, &model).unwrap();
        let second = compute_bedtime(&input, &model).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_form_value_produces_a_bedtime() {
        let model = LinearSleepModel::from_json(BUNDLED).unwrap();
        for wake in [at(0, 0), at(6, 0), at(23, 59)] {
            let mut sleep = 4.0;
            while sleep <= 12.0 {
                for coffee in COFFEE_RANGE {
                    let input = BedtimeInput::new(wake, sleep, coffee);
                    let bedtime = compute_bedtime(&input, &model).unwrap();
                    assert!(bedtime.ends_with("AM") || bedtime.ends_with("PM"));
                }
                sleep += SLEEP_STEP;
            }
        }
    }
}
