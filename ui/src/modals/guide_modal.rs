use dioxus::prelude::*;

use crate::t;

use super::frame::ModalFrame;

#[component]
pub fn GuideModal(
    title: String,
    initial: String,
    on_close: EventHandler<()>,
    on_save: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| initial.clone());

    rsx! {
        ModalFrame { title, class: "guide-modal", on_close,
            textarea {
                class: "guide-textarea",
                rows: "12",
                value: "{text}",
                placeholder: t!("guide-placeholder"),
                oninput: move |evt| text.set(evt.value()),
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
                    onclick: move |_| on_save.call(text()),
                    {t!("modal-save")}
                }
            }
        }
    }
}
