use dioxus::prelude::*;

use crate::{
    client::{
        components::TextField,
        router::Route,
        store::AppServices,
        util::form::{field_error, settle},
    },
    error::validation::ValidationError,
    model::vehicle::MakeInput,
    service::MutationState,
};

/// Make create and edit form, `id` selects between insert and update.
#[component]
pub fn MakeForm(initial: MakeInput, id: Option<i64>) -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();

    let mut input = use_signal(move || initial);
    let mut status = use_signal(MutationState::default);
    let mut invalid = use_signal(|| None::<ValidationError>);

    let dispatcher = services.mutations.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if !status.write().begin() {
            return;
        }

        let dispatcher = dispatcher.clone();
        let values = input();

        spawn(async move {
            let result = match id {
                Some(id) => dispatcher.update_make(id, &values).await,
                None => dispatcher.create_make(&values).await,
            };

            invalid.set(settle(&result, &mut status.write()));

            if result.is_ok() {
                navigator.push(Route::MakeList {});
            }
        });
    };

    let submitting = status.read().is_submitting();
    let failure = status.read().error().map(str::to_string);
    let values = input();

    rsx!(
        form { class: "vehicle-form", onsubmit: onsubmit,
            TextField {
                name: "name",
                label: "Name",
                value: "{values.name}",
                disabled: submitting,
                error: field_error(&invalid.read(), "name"),
                oninput: move |value: String| input.write().name = value,
            }
            TextField {
                name: "abrv",
                label: "Abbreviation",
                value: "{values.abrv}",
                disabled: submitting,
                error: field_error(&invalid.read(), "abrv"),
                oninput: move |value: String| input.write().abrv = value,
            }
            if let Some(message) = failure {
                p { class: "error", "{message}" }
            }
            div { class: "controls",
                button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Saving..." } else if id.is_some() { "Save" } else { "Add" }
                }
                button {
                    r#type: "button",
                    disabled: submitting,
                    onclick: move |_| {
                        navigator.push(Route::MakeList {});
                    },
                    "Cancel"
                }
            }
        }
    )
}
