//! Logger setup plus macros that respect a module-level `ENABLE_LOGS` flag.
//!
//! A module opts in by declaring the flag and importing the macros it needs:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_warn};
//!
//! log_warn!("prediction failed: {err}");
//! ```

use log::LevelFilter;

/// Set to `1` or `true` to log at debug level regardless of `RUST_LOG` defaults.
pub const DEBUG_ENV: &str = "SLEEPWELL_DEBUG";

fn is_debug_value(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn debug_requested() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|value| is_debug_value(&value))
        .unwrap_or(false)
}

/// Initialize `env_logger` (reads `RUST_LOG`). Safe to call more than once.
pub fn init() {
    let level = if debug_requested() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Info logging gated by the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn logging gated by the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
