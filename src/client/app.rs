use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{router::Route, store::AppServices, util::browser::state_storage},
    config::Config,
    error::{Action, Error},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match Config::load() {
        Ok(config) => {
            tracing::info!("Using backend at {}", config.backend_url);
            Ok(config)
        }
        Err(err) => {
            let err = Error::from(err);
            tracing::error!("Invalid configuration: {}", err);
            Err(err.user_message(Action::Start))
        }
    });

    rsx!(
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {match config {
            Ok(config) => rsx!(Services { config }),
            Err(message) => rsx!(ConfigurationError { message }),
        }}
    )
}

/// Provides the application services to every route.
#[component]
fn Services(config: Config) -> Element {
    use_context_provider(|| AppServices::new(&config, state_storage()));

    rsx!(Router::<Route> {})
}

#[component]
fn ConfigurationError(message: String) -> Element {
    rsx!(
        div { class: "page",
            div { class: "container",
                h1 { class: "heading", "Configuration error" }
                p { class: "error", "{message}" }
                p {
                    "Set VEHICLE_BACKEND_URL and VEHICLE_BACKEND_ANON_KEY in the environment or a .env file and rebuild."
                }
            }
        }
    )
}
