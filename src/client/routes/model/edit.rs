use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, routes::model::form::ModelForm, store::AppServices},
    error::Action,
    model::vehicle::{EntityKind, ModelInput},
};

#[component]
pub fn ModelEdit(id: i64) -> Element {
    let services = use_context::<AppServices>();

    let lists = services.lists.clone();
    let model = use_resource(use_reactive!(|id| {
        let lists = lists.clone();

        async move {
            lists
                .find_model(id)
                .await
                .map_err(|err| err.user_message(Action::Load(EntityKind::Model)))
        }
    }));

    let loaded = model.read().clone();

    rsx!(
        Title { "Edit Model | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Edit Model" }
                {match loaded {
                    Some(Ok(model)) => rsx!(
                        ModelForm {
                            key: "{model.id}",
                            initial: ModelInput::from(&model),
                            id: Some(model.id),
                            current_make: Some(model.current_make_label().to_string()),
                        }
                    ),
                    Some(Err(message)) => rsx!(p { class: "error", "{message}" }),
                    None => rsx!(p { "Loading..." }),
                }}
            }
        }
    )
}
