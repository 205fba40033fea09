use dioxus::prelude::*;

use crate::core::format::page_label;
use crate::t;

#[component]
pub fn Pagination(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    let label = page_label(page, total_pages);
    let at_first = page <= 1;
    let at_last = page >= total_pages;

    rsx! {
        div { class: "pagination",
            button {
                r#type: "button",
                class: "pagination__button",
                disabled: at_first,
                onclick: move |_| on_change.call(page.saturating_sub(1)),
                {t!("page-prev")}
            }
            span { class: "pagination__label", "{label}" }
            button {
                r#type: "button",
                class: "pagination__button",
                disabled: at_last,
                onclick: move |_| on_change.call(page + 1),
                {t!("page-next")}
            }
        }
    }
}
