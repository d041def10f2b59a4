use crate::config::AppConfig;
use crate::views::Home;
use dioxus::prelude::*;

/// Root component. The host supplies `AppConfig` as root context and the
/// view receives it as an explicit prop.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_else(AppConfig::from_build_env);

    rsx! {
        div {
            class: "min-h-screen transition-colors bg-white dark:bg-gray-900 text-gray-900 dark:text-white",

            main {
                Home { config }
            }
        }
    }
}
