use dioxus::prelude::*;

use crate::core::format::PLACEHOLDER;
use crate::core::tpr::{split_timestamp, TprCell, TprGrid, TprRow};
use crate::t;

/// Time-aligned vitals table: two header rows (date, time) and a category column that
/// spans its measurements.
pub fn render_tpr(grid: &TprGrid) -> Element {
    if grid.is_empty() {
        return rsx! {
            div { class: "tpr-empty", {t!("tpr-no-data")} }
        };
    }

    let headers: Vec<(String, String)> = grid
        .columns
        .iter()
        .map(|stamp| split_timestamp(stamp))
        .collect();

    let mut body: Vec<(Option<(String, usize)>, &TprRow)> = Vec::with_capacity(grid.rows.len());
    let mut offset = 0;
    for (category, span) in grid.category_spans() {
        for (index, row) in grid.rows[offset..offset + span].iter().enumerate() {
            let lead = (index == 0).then(|| (category.to_string(), span));
            body.push((lead, row));
        }
        offset += span;
    }

    rsx! {
        div { class: "tpr-table-wrapper",
            table { class: "tpr-table",
                thead {
                    tr {
                        th { rowspan: "2", class: "tpr-table__category", {t!("tpr-category")} }
                        th { rowspan: "2", class: "tpr-table__measurement", {t!("tpr-measurement")} }
                        for (index, (date, _)) in headers.iter().enumerate() {
                            th { key: "d{index}", class: "tpr-table__date", "{date}" }
                        }
                    }
                    tr {
                        for (index, (_, time)) in headers.iter().enumerate() {
                            th { key: "t{index}", class: "tpr-table__time", "{time}" }
                        }
                    }
                }
                tbody {
                    for (index, (lead, row)) in body.into_iter().enumerate() {
                        tr { key: "{index}",
                            if let Some((category, span)) = lead {
                                td { rowspan: "{span}", class: "tpr-table__category", "{category}" }
                            }
                            td { class: "tpr-table__measurement", "{row.measurement}" }
                            for cell in row.cells.iter() {
                                {render_cell(cell)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(cell: &TprCell) -> Element {
    match cell {
        TprCell::Value(text) => rsx! {
            td { class: "tpr-table__value", "{text}" }
        },
        TprCell::Missing => rsx! {
            td { class: "tpr-table__value tpr-table__value--missing", "{PLACEHOLDER}" }
        },
    }
}
