use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, routes::make::form::MakeForm, store::AppServices},
    error::Action,
    model::vehicle::{EntityKind, MakeInput},
};

#[component]
pub fn MakeEdit(id: i64) -> Element {
    let services = use_context::<AppServices>();

    let lists = services.lists.clone();
    let make = use_resource(use_reactive!(|id| {
        let lists = lists.clone();

        async move {
            lists
                .find_make(id)
                .await
                .map_err(|err| err.user_message(Action::Load(EntityKind::Make)))
        }
    }));

    let loaded = make.read().clone();

    rsx!(
        Title { "Edit Manufacturer | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Edit Manufacturer" }
                {match loaded {
                    Some(Ok(make)) => rsx!(
                        MakeForm { key: "{make.id}", initial: MakeInput::from(&make), id: Some(make.id) }
                    ),
                    Some(Err(message)) => rsx!(p { class: "error", "{message}" }),
                    None => rsx!(p { "Loading..." }),
                }}
            }
        }
    )
}
