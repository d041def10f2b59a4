// src/main.rs
use home_view::config::AppConfig;
use home_view::monitoring;
use home_view::App;

fn main() {
    monitoring::init();

    let config = AppConfig::from_build_env();
    monitoring::log_startup(&config);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
