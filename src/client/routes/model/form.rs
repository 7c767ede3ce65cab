use dioxus::prelude::*;

use crate::{
    client::{
        components::{SelectField, SelectOption, TextField},
        router::Route,
        store::AppServices,
        util::form::{field_error, settle},
    },
    error::{validation::ValidationError, Action},
    model::vehicle::{EntityKind, ModelInput},
    service::MutationState,
};

/// Model create and edit form, `id` selects between insert and update.
///
/// `current_make` is the manufacturer label shown above the dropdown, only set when editing.
#[component]
pub fn ModelForm(initial: ModelInput, id: Option<i64>, current_make: Option<String>) -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();

    let mut input = use_signal(move || initial);
    let mut status = use_signal(MutationState::default);
    let mut invalid = use_signal(|| None::<ValidationError>);

    let lists = services.lists.clone();
    let makes = use_resource(move || {
        let lists = lists.clone();

        async move {
            lists
                .all_makes()
                .await
                .map_err(|err| err.user_message(Action::Load(EntityKind::Make)))
        }
    });

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
                Some(id) => dispatcher.update_model(id, &values).await,
                None => dispatcher.create_model(&values).await,
            };

            invalid.set(settle(&result, &mut status.write()));

            if result.is_ok() {
                navigator.push(Route::ModelList {});
            }
        });
    };

    let submitting = status.read().is_submitting();
    let failure = status.read().error().map(str::to_string);
    let values = input();
    let selected_make = values.make_id.map(|id| id.to_string()).unwrap_or_default();

    let (make_options, makes_error) = match makes.read().clone() {
        Some(Ok(makes)) => (
            makes
                .iter()
                .map(|make| SelectOption::new(make.id.to_string(), make.name.clone()))
                .collect(),
            None,
        ),
        Some(Err(message)) => (Vec::new(), Some(message)),
        None => (Vec::new(), None),
    };

    rsx!(
        form { class: "vehicle-form", onsubmit: onsubmit,
            {current_make.map(|label| rsx!(p { "Current manufacturer: {label}" }))}
            SelectField {
                name: "make_id",
                label: "Manufacturer",
                options: make_options,
                value: "{selected_make}",
                disabled: submitting,
                error: field_error(&invalid.read(), "make_id").or(makes_error),
                onchange: move |value: String| input.write().make_id = value.parse::<i64>().ok(),
            }
            TextField {
                name: "name",
                label: "Model Name",
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
                        navigator.push(Route::ModelList {});
                    },
                    "Cancel"
                }
            }
        }
    )
}
