use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn TitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "navbar-logo",
            "Vehicle Admin"
        }
    )
}
