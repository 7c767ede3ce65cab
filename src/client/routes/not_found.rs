use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Page not found" }
                p { class: "error", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, "Back to home" }
            }
        }
    )
}
