// views/home.rs
use crate::config::AppConfig;
use dioxus::prelude::*;

pub const HEADING: &str = "Home";
pub const WELCOME: &str = "Welcome to the Home page!";

/// Text content of the home page, derived from the injected config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeModel {
    version: String,
    build_version: Option<String>,
}

impl HomeModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            version: config.application_version.clone(),
            build_version: config.build_version().map(str::to_owned),
        }
    }

    pub fn heading(&self) -> &'static str {
        HEADING
    }

    pub fn welcome(&self) -> &'static str {
        WELCOME
    }

    pub fn version_line(&self) -> String {
        format!("Version {}", self.version)
    }

    /// `None` when no build version was supplied; the line is then omitted.
    pub fn build_line(&self) -> Option<String> {
        self.build_version
            .as_ref()
            .map(|build| format!("Build Version: {}", build))
    }
}

#[component]
pub fn Home(config: AppConfig) -> Element {
    let model = HomeModel::new(&config);
    let heading = model.heading();
    let welcome = model.welcome();
    let version_line = model.version_line();

    rsx! {
        div { class: "p-8",
            h1 { class: "text-2xl font-bold mb-4", "{heading}" }
            p { class: "text-gray-700 dark:text-gray-300", "{welcome}" }
            p { class: "text-gray-700 dark:text-gray-300", "{version_line}" }
            if let Some(build_line) = model.build_line() {
                p { class: "text-gray-700 dark:text-gray-300", "{build_line}" }
            }
        }
    }
}
