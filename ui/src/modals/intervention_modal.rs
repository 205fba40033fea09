use dioxus::prelude::*;

use crate::core::intervention::{toggle_category, INTERVENTION_CATEGORIES};
use crate::t;

use super::frame::ModalFrame;

/// Multi-select picker over the fixed category enumeration.
#[component]
pub fn InterventionModal(
    selected: Vec<i64>,
    on_close: EventHandler<()>,
    on_save: EventHandler<Vec<i64>>,
) -> Element {
    let mut codes = use_signal(|| selected.clone());
    let current = codes();

    rsx! {
        ModalFrame { title: t!("intervention-title"), class: "intervention-modal", on_close,
            ul { class: "intervention-options",
                for category in INTERVENTION_CATEGORIES {
                    li { key: "{category.code}", class: "intervention-option",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: current.contains(&category.code),
                                onchange: move |_| {
                                    let next = toggle_category(&codes(), category.code);
                                    codes.set(next);
                                },
                            }
                            span { class: "intervention-option__code", "{category.code}" }
                            span { class: "intervention-option__label", "{category.label}" }
                        }
                    }
                }
            }
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
                    onclick: move |_| on_save.call(codes()),
                    {t!("modal-save")}
                }
            }
        }
    }
}
