pub mod compute;
pub mod form;

#[cfg(feature = "desktop")]
pub mod commands;

pub use compute::{compute_bedtime, format_bedtime, predict_bedtime};
pub use form::{BedtimeForm, BedtimeView, CoffeeOption, InputError, StepDirection};
