//! Paged table screen: view-model plus the components that render it.

mod data_table;
mod pagination;
mod screen;
mod search_bar;

pub use data_table::{CellAction, DataTable};
pub use pagination::Pagination;
pub use screen::TableScreen;
pub use search_bar::{SearchBar, SearchFilters};

use api::{
    ApiClient, ApiConfig, ApiResult, ColumnMetadata, DataQuery, DataResponse, DataView, Record,
    UpdateByPatient, UpdateCell, UpdateResponse,
};
use dioxus::prelude::*;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::records::{patient_key, resolve_columns, Column};

/// Everything the table screen renders, independent of Dioxus.
///
/// Fetches are not tagged: whichever page response is applied last is what the table
/// shows, even if it answers an older request.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub view: DataView,
    pub metadata: Vec<ColumnMetadata>,
    pub records: Vec<Record>,
    pub query: DataQuery,
    pub total: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped to force a re-fetch of the current query.
    pub reload_token: u64,
}

impl TableState {
    pub fn new(view: DataView) -> Self {
        Self {
            view,
            metadata: Vec::new(),
            records: Vec::new(),
            query: DataQuery::default(),
            total: 0,
            total_pages: 1,
            loading: true,
            error: None,
            reload_token: 0,
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        resolve_columns(&self.metadata, &self.records)
    }

    pub fn set_metadata(&mut self, metadata: Vec<ColumnMetadata>) {
        self.metadata = metadata;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_page(&mut self, response: DataResponse) {
        debug!(
            view = ?self.view,
            rows = response.data.len(),
            page = response.page,
            total_pages = response.total_pages,
            "page applied"
        );
        self.records = response.data;
        self.total = response.total;
        self.total_pages = response.total_pages;
        self.loading = false;
    }

    pub fn fail_load(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Request `page`. The number is not clamped to the known page count.
    pub fn go_to_page(&mut self, page: u32) {
        self.query.page = page;
    }

    /// Submit search facets: replaces the filters, returns to page 1, always re-fetches.
    pub fn apply_search(&mut self, filters: SearchFilters) {
        let SearchFilters {
            institution,
            patient_no,
            intervention_type,
            antibiotic,
            consultation,
        } = filters;
        self.query = DataQuery {
            page: 1,
            page_size: self.query.page_size,
            institution,
            patient_no,
            intervention_type,
            antibiotic,
            consultation,
        };
        self.request_reload();
    }

    pub fn request_reload(&mut self) {
        self.reload_token = self.reload_token.wrapping_add(1);
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            institution: self.query.institution.clone(),
            patient_no: self.query.patient_no.clone(),
            intervention_type: self.query.intervention_type.clone(),
            antibiotic: self.query.antibiotic.clone(),
            consultation: self.query.consultation.clone(),
        }
    }

    /// Write `value` into the in-memory row and build the matching backend update.
    ///
    /// The local write happens first and is kept even when the update cannot be built
    /// or later fails.
    pub fn stage_edit(
        &mut self,
        row: usize,
        column: &str,
        value: Value,
    ) -> Result<PendingUpdate, EditError> {
        let record = self
            .records
            .get_mut(row)
            .ok_or(EditError::RowOutOfRange { row })?;
        record.insert(column.to_string(), value.clone());

        match self.view {
            DataView::Identified => Ok(PendingUpdate::Cell(UpdateCell {
                row_index: row,
                column_name: column.to_string(),
                value,
            })),
            DataView::Deidentified => {
                let (patient_no, intervention_date) =
                    patient_key(record).ok_or(EditError::MissingPatientKey)?;
                Ok(PendingUpdate::ByPatient(UpdateByPatient {
                    patient_no,
                    intervention_date,
                    column_name: column.to_string(),
                    value,
                }))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    RowOutOfRange { row: usize },
    /// De-identified rows are addressed by patient number and intervention date.
    MissingPatientKey,
}

/// An update ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingUpdate {
    Cell(UpdateCell),
    ByPatient(UpdateByPatient),
}

impl PendingUpdate {
    pub async fn send(&self, client: &ApiClient) -> ApiResult<UpdateResponse> {
        match self {
            Self::Cell(update) => client.update_cell(update).await,
            Self::ByPatient(update) => client.update_by_patient(update).await,
        }
    }

    /// De-identified saves re-fetch the page once they succeed.
    pub fn reloads_after_save(&self) -> bool {
        matches!(self, Self::ByPatient(_))
    }
}

/// Shared API client: taken from context when a launcher provided one, else built from
/// the environment.
pub fn use_api_client() -> ApiClient {
    use_hook(|| {
        try_consume_context::<ApiClient>().unwrap_or_else(|| {
            let config = ApiConfig::from_env();
            info!(base_url = config.base_url(), "api client created from environment");
            ApiClient::new(config)
        })
    })
}
