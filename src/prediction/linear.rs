use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{PredictionError, SleepPredictor};

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coefficients {
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

/// Ordinary least squares fit of actual sleep (hours) against the three form inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinearSleepModel {
    pub version: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub intercept: f64,
    pub coefficients: Coefficients,
}

impl LinearSleepModel {
    pub fn from_json(contents: &str) -> Result<Self, PredictionError> {
        let model: Self = serde_json::from_str(contents)
            .map_err(|err| PredictionError::InvalidModel(err.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, PredictionError> {
        let contents =
            fs::read_to_string(path).map_err(|source| PredictionError::ModelUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), PredictionError> {
        if self.version != SUPPORTED_VERSION {
            return Err(PredictionError::InvalidModel(format!(
                "unsupported version {} (expected {SUPPORTED_VERSION})",
                self.version
            )));
        }

        let Coefficients {
            wake,
            estimated_sleep,
            coffee,
        } = self.coefficients;
        if [self.intercept, wake, estimated_sleep, coffee]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(PredictionError::InvalidModel(
                "coefficients must be finite".into(),
            ));
        }

        Ok(())
    }
}

fn check_feature(feature: &'static str, value: f64) -> Result<f64, PredictionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictionError::InvalidInput { feature, value })
    }
}

impl SleepPredictor for LinearSleepModel {
    fn predict(
        &self,
        wake: f64,
        estimated_sleep: f64,
        coffee: f64,
    ) -> Result<f64, PredictionError> {
        let wake = check_feature("wake", wake)?;
        let estimated_sleep = check_feature("estimatedSleep", estimated_sleep)?;
        let coffee = check_feature("coffee", coffee)?;

        let actual_sleep = self.intercept
            + self.coefficients.wake * wake
            + self.coefficients.estimated_sleep * estimated_sleep
            + self.coefficients.coffee * coffee;

        if actual_sleep.is_finite() {
            Ok(actual_sleep)
        } else {
            Err(PredictionError::Inference(format!(
                "non-finite prediction {actual_sleep}"
            )))
        }
    }
}
