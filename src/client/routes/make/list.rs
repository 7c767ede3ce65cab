use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCirclePlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{EntityTable, FilterControl, Page, Pagination, SelectOption, SortControls, TableRow},
        router::Route,
        store::AppServices,
        util::browser::{alert, DialogConfirm},
    },
    error::Action,
    model::{
        list::{Column, MakeFilterField, MakeSortField, SortDirection},
        vehicle::EntityKind,
    },
    service::MutationOutcome,
};

#[component]
pub fn MakeList() -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();

    let store = services.make_list_store.clone();
    let mut list_state = use_signal(move || store.load());
    let mut revision = use_signal(|| 0u64);
    let mut deleting = use_signal(|| false);

    let store = services.make_list_store.clone();
    use_effect(move || store.save(&list_state.read()));

    let lists = services.lists.clone();
    let makes = use_resource(move || {
        let lists = lists.clone();
        let state = list_state();
        revision();

        async move {
            lists
                .list_makes(&state)
                .await
                .map_err(|err| err.user_message(Action::Load(EntityKind::Make)))
        }
    });

    let dispatcher = services.mutations.clone();
    let on_delete = move |id: i64| {
        let dispatcher = dispatcher.clone();

        spawn(async move {
            deleting.set(true);

            match dispatcher.delete_make(id, &DialogConfirm).await {
                Ok(MutationOutcome::Performed(_)) => *revision.write() += 1,
                Ok(MutationOutcome::Declined) => (),
                Err(err) => alert(&err.user_message(Action::Delete(EntityKind::Make))),
            }

            deleting.set(false);
        });
    };

    let state = list_state();
    let busy = deleting();
    let loaded = makes.read().clone();
    let loading = loaded.is_none();

    let (rows, error) = match loaded {
        Some(Ok(makes)) => (makes, None),
        Some(Err(message)) => (Vec::new(), Some(message)),
        None => (Vec::new(), None),
    };
    let row_count = rows.len();
    let table_rows: Vec<TableRow> = rows
        .iter()
        .map(|make| TableRow {
            id: make.id,
            cells: vec![make.id.to_string(), make.name.clone(), make.abrv.clone()],
        })
        .collect();

    rsx!(
        Title { "Manufacturers | Vehicle Admin" }
        Page {
            div { class: "container",
                h1 { class: "heading", "Vehicle Manufacturers" }
                button {
                    class: "add-button",
                    r#type: "button",
                    title: "Add new vehicle make",
                    disabled: busy,
                    onclick: move |_| {
                        navigator.push(Route::MakeCreate {});
                    },
                    Icon { width: 32, height: 32, icon: FaCirclePlus }
                }
                FilterControl {
                    fields: SelectOption::columns::<MakeFilterField>(),
                    field: "{state.filter_field().column_name()}",
                    value: "{state.filter_value()}",
                    disabled: busy,
                    onfieldchange: move |value: String| {
                        if let Some(field) = MakeFilterField::from_column_name(&value) {
                            list_state.write().set_filter_field(field);
                        }
                    },
                    onvaluechange: move |value: String| list_state.write().set_filter_value(value),
                }
                SortControls {
                    fields: SelectOption::columns::<MakeSortField>(),
                    field: "{state.sort_field().column_name()}",
                    direction: "{state.sort_direction().as_str()}",
                    disabled: busy,
                    onfieldchange: move |value: String| {
                        if let Some(field) = MakeSortField::from_column_name(&value) {
                            list_state.write().set_sort_field(field);
                        }
                    },
                    ondirectionchange: move |value: String| {
                        if let Some(direction) = SortDirection::parse(&value) {
                            list_state.write().set_sort_direction(direction);
                        }
                    },
                }
                if let Some(message) = error {
                    p { class: "error", "{message}" }
                }
                if loading {
                    p { "Loading..." }
                }
                EntityTable {
                    headers: vec!["ID", "Name", "Abbreviation"],
                    rows: table_rows,
                    disabled: busy,
                    onedit: move |id: i64| {
                        navigator.push(Route::MakeEdit { id });
                    },
                    ondelete: on_delete,
                }
                Pagination {
                    page: state.page(),
                    page_size: state.page_size(),
                    has_prev: state.has_prev_page(),
                    has_next: state.has_next_page(row_count),
                    disabled: busy,
                    onprev: move |_| list_state.write().prev_page(),
                    onnext: move |_| {
                        list_state.write().next_page(row_count);
                    },
                    onpagesize: move |size: u32| list_state.write().set_page_size(size),
                }
            }
        }
    )
}
