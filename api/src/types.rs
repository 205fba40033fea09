//! Wire types for the data viewer REST contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row as delivered by the backend. Columns are not known statically.
pub type Record = serde_json::Map<String, Value>;

/// Rows per page requested by both screens.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Which backend collection a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataView {
    Identified,
    Deidentified,
}

impl DataView {
    pub fn metadata_path(self) -> &'static str {
        match self {
            Self::Identified => "/metadata/",
            Self::Deidentified => "/metadata/deidentified/",
        }
    }

    pub fn data_path(self) -> &'static str {
        match self {
            Self::Identified => "/data/",
            Self::Deidentified => "/data/deidentified/",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnMetadata {
    pub col_id: String,
    #[serde(default)]
    pub col_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<Value>,
}

impl ColumnMetadata {
    pub fn new(col_id: impl Into<String>, col_name: impl Into<String>) -> Self {
        Self {
            col_id: col_id.into(),
            col_name: Some(col_name.into()),
            desc: None,
            hide: None,
        }
    }

    /// `hide: "Y"` (or a literal `true`) removes the column from rendering.
    pub fn is_hidden(&self) -> bool {
        match &self.hide {
            Some(Value::String(flag)) => flag == "Y",
            Some(Value::Bool(flag)) => *flag,
            _ => false,
        }
    }

    /// Display label, falling back to the stable id when no name is given.
    pub fn display_name(&self) -> &str {
        match self.col_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.col_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetadataResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<ColumnMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DataResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Page request plus the optional search facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    pub page: u32,
    pub page_size: u32,
    pub institution: String,
    pub patient_no: String,
    pub intervention_type: String,
    pub antibiotic: String,
    pub consultation: String,
}

impl DataQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Query-string pairs. Blank facets are left out entirely; the page number is sent
    /// as given, even when it lies past the last known page.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        let facets = [
            ("institution", &self.institution),
            ("patient_no", &self.patient_no),
            ("intervention_type", &self.intervention_type),
            ("antibiotic", &self.antibiotic),
            ("consultation", &self.consultation),
        ];
        for (key, value) in facets {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_string()));
            }
        }
        params
    }
}

impl Default for DataQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            institution: String::new(),
            patient_no: String::new(),
            intervention_type: String::new(),
            antibiotic: String::new(),
            consultation: String::new(),
        }
    }
}

/// `POST /data/update/` body. The row is addressed by its position in the
/// backend's record list, so any re-sort or re-page invalidates the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCell {
    pub row_index: usize,
    pub column_name: String,
    pub value: Value,
}

/// `POST /data/deidentified/update-by-patient/` body, addressed by natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateByPatient {
    pub patient_no: String,
    pub intervention_date: String,
    pub column_name: String,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_skip_blank_facets() {
        let query = DataQuery {
            patient_no: "00123".into(),
            antibiotic: "   ".into(),
            ..DataQuery::page(3)
        };
        assert_eq!(
            query.params(),
            vec![
                ("page", "3".to_string()),
                ("page_size", "50".to_string()),
                ("patient_no", "00123".to_string()),
            ]
        );
    }

    #[test]
    fn out_of_range_page_is_not_clamped() {
        let query = DataQuery::page(999);
        assert_eq!(query.params()[0], ("page", "999".to_string()));
    }

    #[test]
    fn metadata_hide_flag_and_name_fallback() {
        let response: MetadataResponse = serde_json::from_value(json!({
            "success": true,
            "data": [
                { "col_id": "환자번호", "col_name": "환자번호", "desc": "", "hide": "N" },
                { "col_id": "진료과", "col_name": "", "hide": "Y" },
                { "col_id": "병동" }
            ]
        }))
        .unwrap();

        assert!(!response.data[0].is_hidden());
        assert!(response.data[1].is_hidden());
        assert_eq!(response.data[1].display_name(), "진료과");
        assert_eq!(response.data[2].display_name(), "병동");
    }

    #[test]
    fn failure_body_decodes_with_defaults() {
        let response: DataResponse =
            serde_json::from_value(json!({ "success": false, "error": "boom" })).unwrap();
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.error.as_deref(), Some("boom"));
    }

    #[test]
    fn update_bodies_use_backend_field_names() {
        let body = serde_json::to_value(UpdateByPatient {
            patient_no: "00123".into(),
            intervention_date: "20240105".into(),
            column_name: "중재가이드작성".into(),
            value: json!("recheck vancomycin trough"),
        })
        .unwrap();
        assert_eq!(body["patient_no"], "00123");
        assert_eq!(body["intervention_date"], "20240105");
        assert_eq!(body["column_name"], "중재가이드작성");
    }
}
