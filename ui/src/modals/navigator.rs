use dioxus::prelude::*;
use serde_json::Value;

use crate::core::records::item_label;
use crate::t;

/// Labels for navigator entries, numbering the ones without a natural label.
pub fn navigator_labels(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item_label(item).unwrap_or_else(|| {
                let number: usize = index + 1;
                t!("modal-item", index = number)
            })
        })
        .collect()
}

/// Left-hand list of items; clicking one selects it.
pub fn render_navigator(labels: Vec<String>, mut selected: Signal<usize>) -> Element {
    let current = selected();
    let count = labels.len();

    rsx! {
        div { class: "navigator",
            div { class: "navigator-title", {t!("modal-list-title", count = count)} }
            ul { class: "navigator-list",
                for (index, label) in labels.into_iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if index == current { "navigator-item navigator-item--active" } else { "navigator-item" },
                        onclick: move |_| selected.set(index),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unlabelled_items_are_numbered_from_one() {
        crate::i18n::init();
        let _ = crate::i18n::set_language("en-US");
        let labels = navigator_labels(&[
            json!({ "처방적용일": "20240101", "처방명": "반코마이신" }),
            json!({ "memo": "a note that is far too long to be used as a label" }),
        ]);
        assert_eq!(labels, vec!["20240101 반코마이신".to_string(), "Item 2".to_string()]);
    }
}
