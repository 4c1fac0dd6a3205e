use std::ops::RangeInclusive;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
pub const DEFAULT_COFFEE_CUPS: u32 = 1;

pub const SLEEP_RANGE: RangeInclusive<f64> = 4.0..=12.0;
pub const SLEEP_STEP: f64 = 0.25;
pub const COFFEE_RANGE: RangeInclusive<u32> = 1..=20;

/// The three values the user controls on the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BedtimeInput {
    pub wake_time: NaiveTime,
    pub sleep_amount: f64,
    pub coffee_amount: u32,
}

impl Default for BedtimeInput {
    fn default() -> Self {
        Self {
            wake_time: Self::default_wake_time(),
            sleep_amount: DEFAULT_SLEEP_HOURS,
            coffee_amount: DEFAULT_COFFEE_CUPS,
        }
    }
}

impl BedtimeInput {
    pub fn new(wake_time: NaiveTime, sleep_amount: f64, coffee_amount: u32) -> Self {
        Self {
            wake_time,
            sleep_amount,
            coffee_amount,
        }
    }

    /// 06:00.
    pub fn default_wake_time() -> NaiveTime {
        NaiveTime::from_hms_opt(6, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Wake-time feature fed to the model.
    ///
    /// This is `hour + minute`, not minutes since midnight. The bundled model
    /// was fitted against this encoding, so 07:30 and 08:29 map to the same value.
    pub fn wake_feature(&self) -> f64 {
        f64::from(self.wake_time.hour() + self.wake_time.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = BedtimeInput::default();
        assert_eq!(input.wake_time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(input.sleep_amount, 8.0);
        assert_eq!(input.coffee_amount, 1);
    }

    #[test]
    fn test_wake_feature_adds_hour_and_minute() {
        let input = BedtimeInput::new(NaiveTime::from_hms_opt(7, 30, 0).unwrap(), 8.0, 1);
        assert_eq!(input.wake_feature(), 37.0);

        let midnight = BedtimeInput::new(NaiveTime::MIN, 8.0, 1);
        assert_eq!(midnight.wake_feature(), 0.0);
    }
}
