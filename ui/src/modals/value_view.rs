use dioxus::prelude::*;

use crate::core::masking::segments;
use crate::core::value::ValueNode;
use crate::t;

/// Render a presentation tree. `level` only feeds the nesting class.
pub fn render_node(node: &ValueNode, level: usize) -> Element {
    match node {
        ValueNode::Empty => rsx! {
            span { class: "json-empty", {t!("modal-no-data")} }
        },
        ValueNode::Fields(fields) => rsx! {
            div { class: "json-object json-level-{level}",
                for (key, child) in fields.iter() {
                    div { class: "json-field", key: "{key}",
                        span { class: "json-key", "{key}:" }
                        span { class: "json-value", {render_node(child, level + 1)} }
                    }
                }
            }
        },
        ValueNode::Table { columns, rows } => rsx! {
            div { class: "json-table-wrapper",
                table { class: "json-table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (index, row) in rows.iter().enumerate() {
                            tr { key: "{index}",
                                for cell in row.iter() {
                                    td { {render_node(cell, level + 1)} }
                                }
                            }
                        }
                    }
                }
            }
        },
        ValueNode::List(items) => rsx! {
            div { class: "json-array",
                for (index, item) in items.iter().enumerate() {
                    div { class: "json-array-item", key: "{index}",
                        span { class: "json-index", "[{index}]" }
                        {render_node(item, level + 1)}
                    }
                }
            }
        },
        ValueNode::Text { lines, masked } => rsx! {
            span { class: "json-text",
                for (index, line) in lines.iter().enumerate() {
                    if index > 0 {
                        br {}
                    }
                    {render_line(line, *masked)}
                }
            }
        },
    }
}

/// One text line, with `<비식별화:...>` tokens highlighted when `masked`.
pub fn render_line(line: &str, masked: bool) -> Element {
    if !masked {
        return rsx! { "{line}" };
    }
    rsx! {
        for segment in segments(line) {
            if segment.masked {
                span { class: "deidentified-token", "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}
