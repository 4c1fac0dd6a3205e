pub mod advisor;
pub mod models;
pub mod prediction;
pub mod utils;

pub use advisor::{compute_bedtime, BedtimeForm, BedtimeView, InputError, StepDirection};
pub use models::BedtimeInput;
pub use prediction::{LinearSleepModel, ModelStore, PredictionError, SleepPredictor};

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Mutex;

    use anyhow::Context;
    use log::info;
    use tauri::{path::BaseDirectory, Manager};

    use crate::advisor::{
        commands::{
            acknowledge_alert, get_bedtime_form, set_coffee_amount, set_sleep_amount,
            set_wake_time, step_sleep_amount,
        },
        BedtimeForm,
    };
    use crate::prediction::ModelStore;
    use crate::{log_error, log_warn};

    const ENABLE_LOGS: bool = true;

    /// Bundled through `bundle.resources` in `tauri.conf.json`.
    const BUNDLED_MODEL: &str = "resources/sleep_calculator.json";

    pub(crate) struct AppState {
        pub(crate) form: Mutex<BedtimeForm>,
        pub(crate) model: ModelStore,
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        crate::utils::logging::init();

        info!("SleepWell starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let bundled = app
                        .path()
                        .resolve(BUNDLED_MODEL, BaseDirectory::Resource)
                        .context("Failed to resolve bundled model path")?;
                    let model = ModelStore::from_env_or(bundled);

                    // Not fatal: the form shows its alert on every failed render instead.
                    if let Err(err) = model.load() {
                        log_warn!("Model at {} is not loadable: {err}", model.path().display());
                    }

                    app.manage(AppState {
                        form: Mutex::new(BedtimeForm::new()),
                        model,
                    });
                    Ok(())
                })();

                if let Err(err) = &result {
                    log_error!("Setup failed: {err:#}");
                }
                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                get_bedtime_form,
                set_wake_time,
                set_sleep_amount,
                step_sleep_amount,
                set_coffee_amount,
                acknowledge_alert,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(test)]
mod tests {
    const TAURI_CONF: &str = include_str!("../tauri.conf.json");

    #[test]
    fn test_tauri_cli_builds_with_desktop_feature() {
        let conf: serde_json::Value = serde_json::from_str(TAURI_CONF).unwrap();
        let features = conf["build"]["features"].as_array().unwrap();
        assert!(features.iter().any(|feature| feature == "desktop"));
    }

    #[test]
    fn test_tauri_bundles_model_resource() {
        let conf: serde_json::Value = serde_json::from_str(TAURI_CONF).unwrap();
        let resources = conf["bundle"]["resources"].as_array().unwrap();
        assert!(resources
            .iter()
            .any(|resource| resource == "resources/sleep_calculator.json"));
    }
}
