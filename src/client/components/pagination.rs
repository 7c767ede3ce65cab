use dioxus::prelude::*;

use crate::model::list::PAGE_SIZE_OPTIONS;

#[component]
pub fn Pagination(
    page: u32,
    page_size: u32,
    has_prev: bool,
    has_next: bool,
    disabled: bool,
    onprev: EventHandler<()>,
    onnext: EventHandler<()>,
    onpagesize: EventHandler<u32>,
) -> Element {
    rsx!(
        div { class: "pagination",
            button {
                r#type: "button",
                disabled: disabled || !has_prev,
                onclick: move |_| onprev.call(()),
                "Previous"
            }
            span { "Page {page}" }
            button {
                r#type: "button",
                disabled: disabled || !has_next,
                onclick: move |_| onnext.call(()),
                "Next"
            }
            label {
                "Rows per page"
                select {
                    disabled,
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<u32>() {
                            onpagesize.call(size);
                        }
                    },
                    {PAGE_SIZE_OPTIONS.iter().map(|size| rsx!(
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: *size == page_size,
                            "{size}"
                        }
                    ))}
                }
            }
        }
    )
}
