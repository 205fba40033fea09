use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    ColumnMetadata, DataQuery, DataResponse, DataView, MetadataResponse, UpdateByPatient,
    UpdateCell, UpdateResponse,
};

const UPDATE_PATH: &str = "/data/update/";
const UPDATE_BY_PATIENT_PATH: &str = "/data/deidentified/update-by-patient/";

/// Thin async wrapper over the backend REST contract.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Column metadata for a view, in display order.
    pub async fn metadata(&self, view: DataView) -> ApiResult<Vec<ColumnMetadata>> {
        let url = self.config.endpoint(view.metadata_path());
        debug!(%url, "fetching column metadata");
        let response = self.http.get(&url).send().await?;
        let body: MetadataResponse = decode(response).await?;
        if !body.success {
            return Err(ApiError::rejected(body.error));
        }
        Ok(body.data)
    }

    /// One page of records. The requested page is forwarded unchanged.
    pub async fn data(&self, view: DataView, query: &DataQuery) -> ApiResult<DataResponse> {
        let url = self.config.endpoint(view.data_path());
        let params = query.params();
        debug!(%url, ?params, "fetching records");
        let response = self.http.get(&url).query(&params).send().await?;
        let body: DataResponse = decode(response).await?;
        if !body.success {
            return Err(ApiError::rejected(body.error));
        }
        Ok(body)
    }

    pub async fn update_cell(&self, update: &UpdateCell) -> ApiResult<UpdateResponse> {
        debug!(
            row_index = update.row_index,
            column = %update.column_name,
            "updating cell by row index"
        );
        self.post_update(UPDATE_PATH, update).await
    }

    pub async fn update_by_patient(&self, update: &UpdateByPatient) -> ApiResult<UpdateResponse> {
        debug!(
            patient_no = %update.patient_no,
            intervention_date = %update.intervention_date,
            column = %update.column_name,
            "updating cell by patient key"
        );
        self.post_update(UPDATE_BY_PATIENT_PATH, update).await
    }

    async fn post_update<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<UpdateResponse> {
        let url = self.config.endpoint(path);
        let response = self.http.post(&url).json(body).send().await?;
        let body: UpdateResponse = decode(response).await?;
        if !body.success {
            return Err(ApiError::rejected(body.error));
        }
        Ok(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Decode a JSON body regardless of status code: the backend reports failures as
/// `{success: false, error}` with a 4xx/5xx status, and that message is worth keeping.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    match serde_json::from_slice::<T>(&bytes) {
        Ok(body) => Ok(body),
        Err(_) if !status.is_success() => {
            warn!(%status, "non-JSON error response");
            Err(ApiError::Rejected {
                message: format!("HTTP {status}"),
            })
        }
        Err(err) => Err(ApiError::Decode(err)),
    }
}
