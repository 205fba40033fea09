use api::{DataView, Record};
use dioxus::prelude::*;
use serde_json::Value;

use crate::core::format::{or_placeholder, row_number};
use crate::core::intervention::{display_text, parse_categories};
use crate::core::records::{cell_kind, cell_text, CellKind, Column, MASKED_HEADER_COLUMNS};
use crate::core::value::{has_data, is_truthy};
use crate::t;

use super::TableState;

/// What a click on a cell asks the screen to open.
#[derive(Debug, Clone, PartialEq)]
pub enum CellAction {
    Detail { title: String, content: Value },
    Intervention { row: usize },
    Guide { row: usize, title: String },
    Consultation { row: usize, title: String },
}

#[component]
pub fn DataTable(state: Signal<TableState>, on_open: EventHandler<CellAction>) -> Element {
    let snapshot = state();
    let view = snapshot.view;
    let columns = snapshot.columns();
    let numbered = view == DataView::Deidentified;
    let page = snapshot.query.page;
    let page_size = snapshot.query.page_size;

    rsx! {
        div { class: "data-table-container",
            div { class: "table-wrapper",
                table { class: "data-table",
                    thead {
                        tr {
                            if numbered {
                                th { class: "row-number-header", {t!("table-row-number")} }
                            }
                            for column in columns.iter() {
                                {render_header(view, column)}
                            }
                        }
                    }
                    tbody {
                        for (row , record) in snapshot.records.iter().enumerate() {
                            tr { key: "{row}",
                                if numbered {
                                    td { class: "row-number", "{row_number(page, page_size, row)}" }
                                }
                                for column in columns.iter() {
                                    {render_cell(view, row, record, column, on_open)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_header(view: DataView, column: &Column) -> Element {
    let badged = view == DataView::Deidentified && MASKED_HEADER_COLUMNS.contains(&column.id.as_str());
    rsx! {
        th { key: "{column.id}",
            if badged {
                div { class: "header-with-badge",
                    div { "{column.name}" }
                    span { class: "deidentified-badge-header", {t!("table-deidentified-badge")} }
                }
            } else {
                "{column.name}"
            }
        }
    }
}

fn render_cell(
    view: DataView,
    row: usize,
    record: &Record,
    column: &Column,
    on_open: EventHandler<CellAction>,
) -> Element {
    let value = record.get(&column.id);
    let title = column.name.clone();

    let body = match cell_kind(view, &column.id, value) {
        CellKind::Intervention => {
            let codes = value.map(parse_categories).unwrap_or_default();
            let text = display_text(&codes);
            let text = or_placeholder(&text).to_string();
            rsx! {
                div {
                    class: "intervention-cell",
                    onclick: move |_| on_open.call(CellAction::Intervention { row }),
                    "{text}"
                }
            }
        }
        CellKind::Guide => {
            let label = if is_truthy(value) {
                t!("table-guide-view")
            } else {
                t!("table-guide-write")
            };
            rsx! {
                button {
                    r#type: "button",
                    class: "guide-button",
                    onclick: move |_| on_open.call(CellAction::Guide { row, title: title.clone() }),
                    "{label}"
                }
            }
        }
        CellKind::Consultation => {
            let label = if has_data(value) {
                title.clone()
            } else {
                t!("table-guide-write")
            };
            rsx! {
                button {
                    r#type: "button",
                    class: "cell-button edit-button",
                    onclick: move |_| on_open.call(CellAction::Consultation { row, title: title.clone() }),
                    "{label}"
                }
            }
        }
        CellKind::Plain => {
            let text = cell_text(record, &column.id);
            rsx! {
                span { class: "patient-id", "{text}" }
            }
        }
        CellKind::Detail => {
            let content = value.cloned().unwrap_or(Value::Null);
            let label = title.clone();
            rsx! {
                button {
                    r#type: "button",
                    class: "cell-button",
                    onclick: move |_| {
                        on_open.call(CellAction::Detail {
                            title: title.clone(),
                            content: content.clone(),
                        })
                    },
                    "{label}"
                }
            }
        }
        CellKind::Empty => rsx! {},
    };

    rsx! {
        td { key: "{column.id}", {body} }
    }
}
