use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, routes::model::form::ModelForm},
    model::vehicle::ModelInput,
};

#[component]
pub fn ModelCreate() -> Element {
    rsx!(
        Title { "Add Model | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Add Model" }
                ModelForm { initial: ModelInput::default(), id: None, current_make: None }
            }
        }
    )
}
