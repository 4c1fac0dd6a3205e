use std::path::{Path, PathBuf};

use super::{LinearSleepModel, PredictionError, SleepPredictor};
use crate::log_info;

/// Overrides the model file location, e.g. to try a retrained model.
pub const MODEL_PATH_ENV: &str = "SLEEPWELL_MODEL_PATH";

const ENABLE_LOGS: bool = true;

/// Points at the serialized model and loads it read-only on every prediction,
/// so a replaced artifact is picked up on the next render.
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `SLEEPWELL_MODEL_PATH` when set, otherwise `fallback`.
    pub fn from_env_or(fallback: PathBuf) -> Self {
        match std::env::var_os(MODEL_PATH_ENV) {
            Some(path) if !path.is_empty() => {
                let path = PathBuf::from(path);
                log_info!("Using model from {MODEL_PATH_ENV}: {}", path.display());
                Self::new(path)
            }
            _ => Self::new(fallback),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<LinearSleepModel, PredictionError> {
        LinearSleepModel::from_file(&self.path)
    }
}

impl SleepPredictor for ModelStore {
    fn predict(
        &self,
        wake: f64,
        estimated_sleep: f64,
        coffee: f64,
    ) -> Result<f64, PredictionError> {
        self.load()?.predict(wake, estimated_sleep, coffee)
    }
}
