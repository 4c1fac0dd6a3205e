//! The regression model behind the bedtime recommendation.
//!
//! The advisor only depends on [`SleepPredictor`]; the shipped implementation
//! is a linear model read from JSON by [`ModelStore`].

pub mod linear;
pub mod store;

pub use linear::LinearSleepModel;
pub use store::{ModelStore, MODEL_PATH_ENV};

use thiserror::Error;

use crate::models::BedtimeAlert;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model unavailable at {path}: {source}")]
    ModelUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("invalid input for feature '{feature}': {value}")]
    InvalidInput { feature: &'static str, value: f64 },

    #[error("inference failed: {0}")]
    Inference(String),
}

impl PredictionError {
    /// What the user sees for any failure: one fixed title and message,
    /// whatever the variant. The variant itself only goes to the log.
    pub fn alert(&self) -> BedtimeAlert {
        BedtimeAlert::prediction_failed()
    }
}

/// Predicts how many hours the user will actually sleep.
pub trait SleepPredictor {
    fn predict(
        &self,
        wake: f64,
        estimated_sleep: f64,
        coffee: f64,
    ) -> Result<f64, PredictionError>;
}

impl<F> SleepPredictor for F
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    fn predict(
        &self,
        wake: f64,
        estimated_sleep: f64,
        coffee: f64,
    ) -> Result<f64, PredictionError> {
        self(wake, estimated_sleep, coffee)
    }
}
