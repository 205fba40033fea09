use dioxus::prelude::*;
use serde_json::Value;

use crate::core::records::navigator_items;
use crate::core::tpr::{build_grid, is_tpr_block};
use crate::core::value::{decode, ValueNode};
use crate::t;

use super::frame::ModalFrame;
use super::navigator::{navigator_labels, render_navigator};
use super::tpr_view::render_tpr;
use super::value_view::render_node;

/// Read-only detail view of one cell.
#[component]
pub fn DataModal(title: String, content: Value, on_close: EventHandler<()>) -> Element {
    let mut show_raw = use_signal(|| false);
    let selected = use_signal(|| 0usize);

    let decoded = decode(&content);

    let body = if show_raw() {
        let pretty = serde_json::to_string_pretty(&decoded).unwrap_or_default();
        rsx! {
            pre { class: "json-raw", "{pretty}" }
        }
    } else if is_tpr_block(&decoded) {
        render_tpr(&build_grid(&decoded))
    } else if let Some(items) = navigator_items(&decoded) {
        let index = selected().min(items.len() - 1);
        let detail = ValueNode::build(&items[index]);
        rsx! {
            div { class: "modal-split",
                {render_navigator(navigator_labels(&items), selected)}
                div { class: "modal-detail", {render_node(&detail, 0)} }
            }
        }
    } else {
        render_node(&ValueNode::build(&decoded), 0)
    };

    rsx! {
        ModalFrame { title, class: "data-modal", on_close,
            div { class: "modal-toolbar",
                button {
                    r#type: "button",
                    class: "modal-toggle",
                    onclick: move |_| {
                        let raw = show_raw();
                        show_raw.set(!raw);
                    },
                    if show_raw() {
                        {t!("modal-show-formatted")}
                    } else {
                        {t!("modal-show-raw")}
                    }
                }
            }
            div { class: "modal-body", {body} }
        }
    }
}
