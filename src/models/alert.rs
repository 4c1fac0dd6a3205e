use serde::{Deserialize, Serialize};

pub const ALERT_TITLE: &str = "Error";
pub const ALERT_MESSAGE: &str = "There is a technical problem...";

/// Modal notification raised when no bedtime could be predicted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BedtimeAlert {
    pub title: String,
    pub message: String,
}

impl BedtimeAlert {
    pub fn prediction_failed() -> Self {
        Self {
            title: ALERT_TITLE.into(),
            message: ALERT_MESSAGE.into(),
        }
    }
}
