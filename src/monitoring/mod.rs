//! Frontend monitoring module for Dioxus
//!
//! Provides:
//! - Client-side event logging
//! - Browser console logging

pub mod logger;

pub use logger::{Level, Logger};

use crate::config::{AppConfig, BUILD_TIME};

/// Initialize frontend monitoring
///
/// Call once at app startup in main.rs. Off wasm this also installs the
/// `tracing` subscriber the logger writes through.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    init_subscriber();
    Logger::init();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_subscriber() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Err only means a global subscriber is already installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log which version is about to be served
pub fn log_startup(config: &AppConfig) {
    crate::log_event!(&startup_message(config));
}

pub fn startup_message(config: &AppConfig) -> String {
    match config.build_version() {
        Some(build) => format!(
            "Starting version {} (build {}, built at {})",
            config.application_version, build, BUILD_TIME
        ),
        None => format!(
            "Starting version {} (built at {})",
            config.application_version, BUILD_TIME
        ),
    }
}

/// Log an event
#[macro_export]
macro_rules! log_event {
    ($event:expr) => {
        $crate::monitoring::logger::Logger::log($event)
    };
}
