use dioxus::prelude::*;

use crate::client::{components::TitleButton, router::Route};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                TitleButton {}
            }
            div {
                class: "navbar-end",
                Link {
                    to: Route::MakeList {},
                    active_class: "active",
                    "Manufacturers"
                }
                Link {
                    to: Route::ModelList {},
                    active_class: "active",
                    "Models"
                }
            }
        }

        Outlet::<Route> {}
    }
}
