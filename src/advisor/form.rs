use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::compute::compute_bedtime;
use crate::models::{BedtimeAlert, BedtimeInput, COFFEE_RANGE, SLEEP_RANGE, SLEEP_STEP};
use crate::prediction::SleepPredictor;
use crate::{log_debug, log_warn};

const ENABLE_LOGS: bool = true;

pub const SCREEN_TITLE: &str = "SleepWell";

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("wake time {hour:02}:{minute:02} is not a valid time of day")]
    InvalidWakeTime { hour: u32, minute: u32 },

    #[error("sleep amount {0} is outside 4-12 hours")]
    SleepOutOfRange(f64),

    #[error("sleep amount {0} is not a multiple of 0.25 hours")]
    SleepOffStep(f64),

    #[error("coffee amount {0} is outside 1-20 cups")]
    CoffeeOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StepDirection {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeOption {
    pub cups: u32,
    pub label: String,
}

/// Everything the screen needs to draw itself after one render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BedtimeView {
    pub title: String,
    /// `HH:MM`, 24-hour.
    pub wake_time: String,
    pub sleep_amount: f64,
    pub sleep_label: String,
    pub coffee_amount: u32,
    pub coffee_label: String,
    pub coffee_options: Vec<CoffeeOption>,
    /// Empty when the prediction failed.
    pub bedtime: String,
    pub alert: Option<BedtimeAlert>,
}

/// `8 hours`, `8.25 hours`.
pub fn sleep_label(hours: f64) -> String {
    format!("{hours} hours")
}

pub fn coffee_label(cups: u32) -> String {
    if cups == 1 {
        "1 cup".to_string()
    } else {
        format!("{cups} cups")
    }
}

/// In-memory state behind the single form screen.
#[derive(Debug, Clone, Default)]
pub struct BedtimeForm {
    input: BedtimeInput,
    alert: Option<BedtimeAlert>,
}

impl BedtimeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &BedtimeInput {
        &self.input
    }

    pub fn alert(&self) -> Option<&BedtimeAlert> {
        self.alert.as_ref()
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert.is_some()
    }

    pub fn set_wake_time(&mut self, hour: u32, minute: u32) -> Result<(), InputError> {
        let wake_time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(InputError::InvalidWakeTime { hour, minute })?;
        self.input.wake_time = wake_time;
        Ok(())
    }

    pub fn set_sleep_amount(&mut self, hours: f64) -> Result<(), InputError> {
        if !SLEEP_RANGE.contains(&hours) {
            return Err(InputError::SleepOutOfRange(hours));
        }
        if (hours / SLEEP_STEP).fract() != 0.0 {
            return Err(InputError::SleepOffStep(hours));
        }
        self.input.sleep_amount = hours;
        Ok(())
    }

    /// Moves the sleep amount one step, stopping at the ends of the range.
    pub fn step_sleep_amount(&mut self, direction: StepDirection) {
        let delta = match direction {
            StepDirection::Increment => SLEEP_STEP,
            StepDirection::Decrement => -SLEEP_STEP,
        };
        self.input.sleep_amount =
            (self.input.sleep_amount + delta).clamp(*SLEEP_RANGE.start(), *SLEEP_RANGE.end());
    }

    pub fn set_coffee_amount(&mut self, cups: u32) -> Result<(), InputError> {
        if !COFFEE_RANGE.contains(&cups) {
            return Err(InputError::CoffeeOutOfRange(cups));
        }
        self.input.coffee_amount = cups;
        Ok(())
    }

    /// Dismisses the alert and puts every field back to its default.
    ///
    /// Returns `false` (and changes nothing) when no alert is showing.
    pub fn acknowledge_alert(&mut self) -> bool {
        if self.alert.take().is_none() {
            return false;
        }
        self.input = BedtimeInput::default();
        log_debug!("Alert acknowledged; form reset to defaults");
        true
    }

    /// Recomputes the bedtime for the current fields.
    ///
    /// A failed prediction raises the alert and renders an empty bedtime.
    pub fn render<P>(&mut self, predictor: &P) -> BedtimeView
    where
        P: SleepPredictor + ?Sized,
    {
        let bedtime = match compute_bedtime(&self.input, predictor) {
            Ok(bedtime) => bedtime,
            Err(err) => {
                log_warn!("Bedtime prediction failed for {:?}: {err}", self.input);
                self.alert = Some(err.alert());
                String::new()
            }
        };

        BedtimeView {
            title: SCREEN_TITLE.to_string(),
            wake_time: self.input.wake_time.format("%H:%M").to_string(),
            sleep_amount: self.input.sleep_amount,
            sleep_label: sleep_label(self.input.sleep_amount),
            coffee_amount: self.input.coffee_amount,
            coffee_label: coffee_label(self.input.coffee_amount),
            coffee_options: COFFEE_RANGE
                .map(|cups| CoffeeOption {
                    cups,
                    label: coffee_label(cups),
                })
                .collect(),
            bedtime,
            alert: self.alert.clone(),
        }
    }
}
