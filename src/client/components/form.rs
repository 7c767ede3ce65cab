use dioxus::prelude::*;

use crate::client::components::SelectOption;

#[component]
pub fn TextField(
    name: &'static str,
    label: &'static str,
    value: String,
    disabled: bool,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "vehicle-form__field",
            label { r#for: name, "{label}" }
            input {
                id: name,
                name,
                r#type: "text",
                value: "{value}",
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(error) = error {
                span { class: "vehicle-form__error", "{error}" }
            }
        }
    )
}

/// Dropdown field with a leading empty "Select..." option.
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    options: Vec<SelectOption>,
    value: String,
    disabled: bool,
    error: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "vehicle-form__field",
            label { r#for: name, "{label}" }
            select {
                id: name,
                name,
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", selected: value.is_empty(), "Select..." }
                {options.iter().map(|option| rsx!(
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == value,
                        "{option.label}"
                    }
                ))}
            }
            if let Some(error) = error {
                span { class: "vehicle-form__error", "{error}" }
            }
        }
    )
}
