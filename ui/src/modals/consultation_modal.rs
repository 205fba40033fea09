use dioxus::prelude::*;
use serde_json::Value;

use crate::core::consultation::{ConsultationDraft, EDITABLE_FIELDS};
use crate::core::records::MASKED_TEXT_FIELDS;
use crate::core::value::{display_scalar, ValueNode};
use crate::t;

use super::frame::ModalFrame;
use super::navigator::{navigator_labels, render_navigator};
use super::value_view::render_node;

/// Consultation records of a de-identified row, with in-place editing of the request and
/// reply text.
#[component]
pub fn ConsultationModal(
    title: String,
    content: Value,
    on_close: EventHandler<()>,
    on_save: EventHandler<Value>,
) -> Element {
    let draft = use_signal(|| ConsultationDraft::new(content.clone()));
    let mut editing = use_signal(|| false);
    let mut show_raw = use_signal(|| false);
    let selected = use_signal(|| 0usize);

    let items = draft.read().items();

    let body = if show_raw() {
        let raw = draft.read().save_value();
        let pretty = serde_json::to_string_pretty(&raw).unwrap_or_default();
        rsx! {
            pre { class: "json-raw", "{pretty}" }
        }
    } else if items.is_empty() {
        render_node(
            &ValueNode::build_masked(draft.read().content(), &MASKED_TEXT_FIELDS),
            0,
        )
    } else {
        let index = selected().min(items.len() - 1);
        let detail = if editing() {
            render_editor(&items[index], index, draft)
        } else {
            render_node(&ValueNode::build_masked(&items[index], &MASKED_TEXT_FIELDS), 0)
        };
        rsx! {
            div { class: "modal-split",
                {render_navigator(navigator_labels(&items), selected)}
                div { class: "modal-detail", {detail} }
            }
        }
    };

    let can_edit = !items.is_empty();

    rsx! {
        ModalFrame { title, class: "consultation-modal", on_close,
            div { class: "modal-toolbar",
                if can_edit {
                    button {
                        r#type: "button",
                        class: "modal-toggle",
                        onclick: move |_| {
                            let on = editing();
                            editing.set(!on);
                        },
                        if editing() {
                            {t!("modal-view-mode")}
                        } else {
                            {t!("modal-edit-mode")}
                        }
                    }
                }
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
                span { class: "deidentified-badge", {t!("table-deidentified-badge")} }
            }
            div { class: "modal-body", {body} }
            div { class: "modal-footer",
                button {
                    r#type: "button",
                    class: "modal-button modal-button--secondary",
                    onclick: move |_| on_close.call(()),
                    {t!("modal-cancel")}
                }
                button {
                    r#type: "button",
                    class: "modal-button modal-button--primary",
                    onclick: move |_| {
                        let value = draft.read().save_value();
                        on_save.call(value);
                    },
                    {t!("modal-save")}
                }
            }
        }
    }
}

/// Field list of the selected item with the editable fields as text areas.
fn render_editor(item: &Value, selected: usize, mut draft: Signal<ConsultationDraft>) -> Element {
    let Some(fields) = item.as_object() else {
        return render_node(&ValueNode::build(item), 0);
    };

    rsx! {
        div { class: "json-object consultation-editor",
            for (key, value) in fields.iter() {
                div { class: "json-field", key: "{key}",
                    span { class: "json-key", "{key}:" }
                    if EDITABLE_FIELDS.contains(&key.as_str()) {
                        textarea {
                            class: "consultation-textarea",
                            rows: "6",
                            value: display_scalar(value),
                            oninput: {
                                let field = key.clone();
                                move |evt: FormEvent| {
                                    draft.write().set_field(selected, &field, evt.value());
                                }
                            },
                        }
                    } else {
                        span { class: "json-value", {render_node(&ValueNode::build(value), 1)} }
                    }
                }
            }
        }
    }
}
