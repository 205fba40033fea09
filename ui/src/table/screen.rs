use api::{ApiClient, DataView};
use dioxus::prelude::*;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::components::{ErrorMessage, Loading};
use crate::core::intervention::{parse_categories, to_value, INTERVENTION_COLUMN};
use crate::core::platform;
use crate::core::records::{CONSULTATION_COLUMN, GUIDE_COLUMN};
use crate::core::value::display_scalar;
use crate::modals::{ConsultationModal, DataModal, GuideModal, InterventionModal};
use crate::t;

use super::{
    use_api_client, CellAction, DataTable, EditError, Pagination, SearchBar, SearchFilters,
    TableState,
};

/// Which modal is open, with the values it was opened on.
#[derive(Debug, Clone, PartialEq)]
enum ActiveModal {
    Closed,
    Detail { title: String, content: Value },
    Intervention { row: usize, selected: Vec<i64> },
    Guide { row: usize, title: String, text: String },
    Consultation { row: usize, title: String, content: Value },
}

#[component]
pub fn TableScreen(view: DataView) -> Element {
    let client = use_api_client();
    let mut state = use_signal(|| TableState::new(view));
    let mut modal = use_signal(|| ActiveModal::Closed);

    // Column metadata is fetched once per mount.
    let metadata_client = client.clone();
    use_future(move || {
        let client = metadata_client.clone();
        async move {
            match client.metadata(view).await {
                Ok(metadata) => state.write().set_metadata(metadata),
                Err(err) => error!(%err, ?view, "failed to load column metadata"),
            }
        }
    });

    // Every page/filter change (or reload request) issues a fresh fetch. Responses are
    // applied as they arrive.
    let request = use_memo(move || {
        let current = state.read();
        (current.query.clone(), current.reload_token)
    });
    let data_client = client.clone();
    use_effect(move || {
        let (query, _) = request();
        state.write().begin_load();
        let client = data_client.clone();
        spawn(async move {
            match client.data(view, &query).await {
                Ok(response) => state.write().apply_page(response),
                Err(err) => {
                    error!(%err, ?view, page = query.page, "failed to load records");
                    state.write().fail_load(t!("error-load"));
                }
            }
        });
    });

    let open = move |action: CellAction| {
        let next = match action {
            CellAction::Detail { title, content } => ActiveModal::Detail { title, content },
            CellAction::Intervention { row } => ActiveModal::Intervention {
                row,
                selected: cell_value(state, row, INTERVENTION_COLUMN)
                    .map(|value| parse_categories(&value))
                    .unwrap_or_default(),
            },
            CellAction::Guide { row, title } => ActiveModal::Guide {
                row,
                title,
                text: cell_value(state, row, GUIDE_COLUMN)
                    .map(|value| display_scalar(&value))
                    .unwrap_or_default(),
            },
            CellAction::Consultation { row, title } => ActiveModal::Consultation {
                row,
                title,
                content: cell_value(state, row, CONSULTATION_COLUMN).unwrap_or(Value::Null),
            },
        };
        modal.set(next);
    };

    let close = move |_: ()| modal.set(ActiveModal::Closed);

    let snapshot = state.read().clone();

    let active = match modal() {
        ActiveModal::Closed => rsx! {},
        ActiveModal::Detail { title, content } => rsx! {
            DataModal { title, content, on_close: close }
        },
        ActiveModal::Intervention { row, selected } => {
            let client = client.clone();
            rsx! {
                InterventionModal {
                    selected,
                    on_close: close,
                    on_save: move |codes: Vec<i64>| {
                        modal.set(ActiveModal::Closed);
                        commit_edit(state, client.clone(), row, INTERVENTION_COLUMN, to_value(&codes));
                    },
                }
            }
        }
        ActiveModal::Guide { row, title, text } => {
            let client = client.clone();
            rsx! {
                GuideModal {
                    title,
                    initial: text,
                    on_close: close,
                    on_save: move |text: String| {
                        modal.set(ActiveModal::Closed);
                        commit_edit(state, client.clone(), row, GUIDE_COLUMN, Value::String(text));
                    },
                }
            }
        }
        ActiveModal::Consultation { row, title, content } => {
            let client = client.clone();
            rsx! {
                ConsultationModal {
                    title,
                    content,
                    on_close: close,
                    on_save: move |value: Value| {
                        modal.set(ActiveModal::Closed);
                        commit_edit(state, client.clone(), row, CONSULTATION_COLUMN, value);
                    },
                }
            }
        }
    };

    rsx! {
        div { class: "table-screen",
            SearchBar {
                initial: snapshot.filters(),
                show_institution: view == DataView::Identified,
                on_search: move |filters: SearchFilters| state.write().apply_search(filters),
            }
            if snapshot.loading {
                Loading {}
            } else if let Some(message) = snapshot.error.clone() {
                ErrorMessage { message }
            } else {
                DataTable { state, on_open: open }
                Pagination {
                    page: snapshot.query.page,
                    total_pages: snapshot.total_pages,
                    on_change: move |page: u32| state.write().go_to_page(page),
                }
            }
            {active}
        }
    }
}

fn cell_value(state: Signal<TableState>, row: usize, column: &str) -> Option<Value> {
    state
        .read()
        .records
        .get(row)
        .and_then(|record| record.get(column))
        .cloned()
}

/// Apply an edit locally, then push it to the backend. Failures alert and keep the local
/// value.
fn commit_edit(
    mut state: Signal<TableState>,
    client: ApiClient,
    row: usize,
    column: &'static str,
    value: Value,
) {
    let staged = state.write().stage_edit(row, column, value);
    let update = match staged {
        Ok(update) => update,
        Err(EditError::MissingPatientKey) => {
            warn!(row, column, "edit has no patient number or intervention date");
            platform::alert(&t!("alert-missing-patient"));
            return;
        }
        Err(EditError::RowOutOfRange { row }) => {
            warn!(row, column, "edit for a row that is no longer shown");
            return;
        }
    };

    spawn(async move {
        match update.send(&client).await {
            Ok(_) => {
                info!(row, column, "cell saved");
                if update.reloads_after_save() {
                    state.write().request_reload();
                }
            }
            Err(err) => {
                error!(%err, row, column, "cell save failed");
                platform::alert(&t!("alert-save-failed"));
            }
        }
    });
}
