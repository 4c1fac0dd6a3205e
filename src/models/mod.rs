pub mod alert;
pub mod bedtime;

pub use alert::{BedtimeAlert, ALERT_MESSAGE, ALERT_TITLE};
pub use bedtime::{
    BedtimeInput, COFFEE_RANGE, DEFAULT_COFFEE_CUPS, DEFAULT_SLEEP_HOURS, SLEEP_RANGE, SLEEP_STEP,
};
