use dioxus::prelude::*;

use crate::t;

/// Institutions the backend knows. Values are sent verbatim.
const INSTITUTIONS: [&str; 2] = ["본원", "칠곡"];

/// Text facets submitted together. Blank facets are dropped from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub institution: String,
    pub patient_no: String,
    pub intervention_type: String,
    pub antibiotic: String,
    pub consultation: String,
}

#[component]
pub fn SearchBar(
    initial: SearchFilters,
    show_institution: bool,
    on_search: EventHandler<SearchFilters>,
) -> Element {
    let mut institution = use_signal(|| initial.institution.clone());
    let mut patient_no = use_signal(|| initial.patient_no.clone());
    let mut intervention_type = use_signal(|| initial.intervention_type.clone());
    let mut antibiotic = use_signal(|| initial.antibiotic.clone());
    let mut consultation = use_signal(|| initial.consultation.clone());

    let submit = move || {
        on_search.call(SearchFilters {
            institution: institution(),
            patient_no: patient_no(),
            intervention_type: intervention_type(),
            antibiotic: antibiotic(),
            consultation: consultation(),
        })
    };

    let on_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            submit();
        }
    };

    let reset = move |_: MouseEvent| {
        institution.set(String::new());
        patient_no.set(String::new());
        intervention_type.set(String::new());
        antibiotic.set(String::new());
        consultation.set(String::new());
        on_search.call(SearchFilters::default());
    };

    rsx! {
        div { class: "search-bar",
            div { class: "search-bar__container",
                if show_institution {
                    div { class: "search-bar__field",
                        label { r#for: "search-institution", {t!("search-institution")} }
                        select {
                            id: "search-institution",
                            value: "{institution}",
                            onchange: move |evt| institution.set(evt.value()),
                            option { value: "", {t!("search-institution-all")} }
                            for name in INSTITUTIONS {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    }
                }
                div { class: "search-bar__field",
                    label { r#for: "search-patient-no", {t!("search-patient-no")} }
                    input {
                        id: "search-patient-no",
                        r#type: "text",
                        value: "{patient_no}",
                        placeholder: t!("search-patient-no-placeholder"),
                        oninput: move |evt| patient_no.set(evt.value()),
                        onkeydown: on_key,
                    }
                }
                div { class: "search-bar__field",
                    label { r#for: "search-intervention-type", {t!("search-intervention-type")} }
                    input {
                        id: "search-intervention-type",
                        r#type: "text",
                        value: "{intervention_type}",
                        placeholder: t!("search-intervention-type-placeholder"),
                        oninput: move |evt| intervention_type.set(evt.value()),
                        onkeydown: on_key,
                    }
                }
                div { class: "search-bar__field",
                    label { r#for: "search-antibiotic", {t!("search-antibiotic")} }
                    input {
                        id: "search-antibiotic",
                        r#type: "text",
                        value: "{antibiotic}",
                        placeholder: t!("search-antibiotic-placeholder"),
                        oninput: move |evt| antibiotic.set(evt.value()),
                        onkeydown: on_key,
                    }
                }
                div { class: "search-bar__field",
                    label { r#for: "search-consultation", {t!("search-consultation")} }
                    input {
                        id: "search-consultation",
                        r#type: "text",
                        value: "{consultation}",
                        placeholder: t!("search-consultation-placeholder"),
                        oninput: move |evt| consultation.set(evt.value()),
                        onkeydown: on_key,
                    }
                }
                div { class: "search-bar__buttons",
                    button {
                        r#type: "button",
                        class: "search-bar__button search-bar__button--search",
                        onclick: move |_| submit(),
                        {t!("search-submit")}
                    }
                    button {
                        r#type: "button",
                        class: "search-bar__button search-bar__button--reset",
                        onclick: reset,
                        {t!("search-reset")}
                    }
                }
            }
        }
    }
}
