pub mod app;
pub mod config;
pub mod error;
pub mod monitoring;
pub mod views;

pub use app::App;
pub use config::AppConfig;
pub use error::{ConfigError, ConfigResult};
pub use views::{Home, HomeModel};
