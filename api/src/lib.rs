//! REST client for the clinical data viewer backend.
//!
//! The backend owns storage and filtering; this crate only knows the wire contract:
//! - `GET  /metadata/` and `/metadata/deidentified/` (column metadata)
//! - `GET  /data/` and `/data/deidentified/` (paginated, filtered records)
//! - `POST /data/update/` (edit a cell by row position)
//! - `POST /data/deidentified/update-by-patient/` (edit a cell by patient number + intervention date)

mod client;
mod config;
mod error;
mod types;

pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use types::{
    ColumnMetadata, DataQuery, DataResponse, DataView, MetadataResponse, Record, UpdateByPatient,
    UpdateCell, UpdateResponse, DEFAULT_PAGE_SIZE,
};
