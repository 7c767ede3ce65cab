use dioxus::prelude::*;

/// A rendered list row: the record ID plus one display string per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<String>,
}

#[component]
pub fn EntityTable(
    headers: Vec<&'static str>,
    rows: Vec<TableRow>,
    disabled: bool,
    onedit: EventHandler<i64>,
    ondelete: EventHandler<i64>,
) -> Element {
    let colspan = headers.len() + 1;

    rsx!(
        table { class: "entity-table",
            thead {
                tr {
                    {headers.iter().map(|header| rsx!(th { key: "{header}", "{header}" }))}
                    th { "Actions" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { class: "empty", colspan: "{colspan}", "No records found" }
                    }
                }
                {rows.iter().map(|row| {
                    let id = row.id;

                    rsx!(
                        tr { key: "{id}",
                            {row.cells.iter().map(|cell| rsx!(td { "{cell}" }))}
                            td {
                                button {
                                    r#type: "button",
                                    disabled,
                                    onclick: move |_| onedit.call(id),
                                    "Edit"
                                }
                                button {
                                    r#type: "button",
                                    class: "btn-danger",
                                    disabled,
                                    onclick: move |_| ondelete.call(id),
                                    "Delete"
                                }
                            }
                        }
                    )
                })}
            }
        }
    )
}
