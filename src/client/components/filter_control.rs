use dioxus::prelude::*;

use crate::client::components::select::{Select, SelectOption};

/// Filter field dropdown plus either a free-text input or, when `choices` is given, a
/// dropdown of allowed values with an "All" entry that clears the filter.
#[component]
pub fn FilterControl(
    fields: Vec<SelectOption>,
    field: String,
    value: String,
    choices: Option<Vec<SelectOption>>,
    disabled: bool,
    onfieldchange: EventHandler<String>,
    onvaluechange: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "controls",
            Select {
                label: "Filter by",
                options: fields,
                value: "{field}",
                disabled,
                onchange: move |field: String| onfieldchange.call(field),
            }
            if let Some(choices) = choices {
                Select {
                    label: "Value",
                    options: std::iter::once(SelectOption::new("", "All"))
                        .chain(choices)
                        .collect::<Vec<_>>(),
                    value: "{value}",
                    disabled,
                    onchange: move |value: String| onvaluechange.call(value),
                }
            } else {
                input {
                    r#type: "text",
                    placeholder: "Filter value",
                    value: "{value}",
                    disabled,
                    oninput: move |evt: FormEvent| onvaluechange.call(evt.value()),
                }
            }
        }
    )
}
