use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        make::{MakeCreate, MakeEdit, MakeList},
        model::{ModelCreate, ModelEdit, ModelList},
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/vehicle-makes")]
    MakeList {},

    #[route("/vehicle-makes/create")]
    MakeCreate {},

    #[route("/vehicle-makes/edit/:id")]
    MakeEdit { id: i64 },

    #[route("/vehicle-models")]
    ModelList {},

    #[route("/vehicle-models/create")]
    ModelCreate {},

    #[route("/vehicle-models/edit/:id")]
    ModelEdit { id: i64 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
