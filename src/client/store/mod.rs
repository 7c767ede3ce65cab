use std::rc::Rc;

use crate::{
    config::Config,
    data::PostgrestClient,
    service::{
        state::{MakeListStore, ModelListStore},
        ListService, MutationDispatcher, StateStorage,
    },
};

/// Services shared through the Dioxus context.
///
/// The list service and the dispatcher share their caches, so a mutation made on one page
/// is visible the next time any list is read.
#[derive(Clone)]
pub struct AppServices {
    pub lists: ListService,
    pub mutations: MutationDispatcher,
    pub make_list_store: MakeListStore,
    pub model_list_store: ModelListStore,
}

impl AppServices {
    pub fn new(config: &Config, storage: Rc<dyn StateStorage>) -> Self {
        let lists = ListService::new(PostgrestClient::new(config));
        let mutations = lists.dispatcher();

        Self {
            lists,
            mutations,
            make_list_store: MakeListStore::for_makes(Rc::clone(&storage)),
            model_list_store: ModelListStore::for_models(storage),
        }
    }
}
