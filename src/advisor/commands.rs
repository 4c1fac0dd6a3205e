use tauri::State;

use crate::{
    advisor::{BedtimeForm, BedtimeView, StepDirection},
    AppState,
};

fn with_form<F>(state: &State<'_, AppState>, update: F) -> Result<BedtimeView, String>
where
    F: FnOnce(&mut BedtimeForm) -> Result<(), String>,
{
    let mut form = state
        .form
        .lock()
        .map_err(|_| "bedtime form state is poisoned".to_string())?;
    update(&mut form)?;
    Ok(form.render(&state.model))
}

#[tauri::command]
pub fn get_bedtime_form(state: State<'_, AppState>) -> Result<BedtimeView, String> {
    with_form(&state, |_| Ok(()))
}

#[tauri::command]
pub fn set_wake_time(
    state: State<'_, AppState>,
    hour: u32,
    minute: u32,
) -> Result<BedtimeView, String> {
    with_form(&state, |form| {
        form.set_wake_time(hour, minute).map_err(|e| e.to_string())
    })
}

#[tauri::command]
pub fn set_sleep_amount(state: State<'_, AppState>, hours: f64) -> Result<BedtimeView, String> {
    with_form(&state, |form| {
        form.set_sleep_amount(hours).map_err(|e| e.to_string())
    })
}

#[tauri::command]
pub fn step_sleep_amount(
    state: State<'_, AppState>,
    direction: StepDirection,
) -> Result<BedtimeView, String> {
    with_form(&state, |form| {
        form.step_sleep_amount(direction);
        Ok(())
    })
}

#[tauri::command]
pub fn set_coffee_amount(state: State<'_, AppState>, cups: u32) -> Result<BedtimeView, String> {
    with_form(&state, |form| {
        form.set_coffee_amount(cups).map_err(|e| e.to_string())
    })
}

/// The alert's OK button.
#[tauri::command]
pub fn acknowledge_alert(state: State<'_, AppState>) -> Result<BedtimeView, String> {
    with_form(&state, |form| {
        form.acknowledge_alert();
        Ok(())
    })
}
