use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, routes::make::form::MakeForm},
    model::vehicle::MakeInput,
};

#[component]
pub fn MakeCreate() -> Element {
    rsx!(
        Title { "Add Manufacturer | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Add Manufacturer" }
                MakeForm { initial: MakeInput::default(), id: None }
            }
        }
    )
}
