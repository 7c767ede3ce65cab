use dioxus::prelude::*;

use crate::model::list::{Column, SortDirection};

/// A single `<option>` of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// One option per column, keyed by backend column name
    pub fn columns<C: Column>() -> Vec<Self> {
        C::all()
            .iter()
            .map(|column| Self::new(column.column_name(), column.label()))
            .collect()
    }

    pub fn directions() -> Vec<Self> {
        SortDirection::ALL
            .iter()
            .map(|direction| Self::new(direction.as_str(), direction.label()))
            .collect()
    }
}

#[component]
pub fn Select(
    label: &'static str,
    options: Vec<SelectOption>,
    value: String,
    disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx!(
        label {
            "{label}"
            select {
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                {options.iter().map(|option| rsx!(
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == value,
                        "{option.label}"
                    }
                ))}
            }
        }
    )
}

/// Sort field and direction dropdowns of a list page.
#[component]
pub fn SortControls(
    fields: Vec<SelectOption>,
    field: String,
    direction: String,
    disabled: bool,
    onfieldchange: EventHandler<String>,
    ondirectionchange: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "controls",
            Select {
                label: "Sort by",
                options: fields,
                value: "{field}",
                disabled,
                onchange: move |value: String| onfieldchange.call(value),
            }
            Select {
                label: "Direction",
                options: SelectOption::directions(),
                value: "{direction}",
                disabled,
                onchange: move |value: String| ondirectionchange.call(value),
            }
        }
    )
}
