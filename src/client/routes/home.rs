use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCar, FaIndustry};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Vehicle Admin" }
        Meta {
            name: "description",
            content: "Administration of vehicle manufacturers and models."
        }
        Page {
            div { class: "container",
                h1 { class: "heading", "Vehicle Admin" }
                p { "Manage the vehicle manufacturers and the models they produce." }
                ul { class: "controls",
                    li {
                        Link { to: Route::MakeList {},
                            Icon { width: 24, height: 24, icon: FaIndustry }
                            " Manufacturers"
                        }
                    }
                    li {
                        Link { to: Route::ModelList {},
                            Icon { width: 24, height: 24, icon: FaCar }
                            " Models"
                        }
                    }
                }
            }
        }
    )
}
