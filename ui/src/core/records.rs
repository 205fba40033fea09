//! Column resolution, per-cell presentation kinds and the item ordering used by the
//! detail navigators.

use std::cmp::Ordering;

use api::{ColumnMetadata, DataView, Record};
use serde_json::Value;

use super::intervention::INTERVENTION_COLUMN;
use super::value::{display_scalar, has_data, is_truthy, numeric};

pub const GUIDE_COLUMN: &str = "중재가이드작성";
pub const CONSULTATION_COLUMN: &str = "협진기록";
pub const PATIENT_NO_COLUMN: &str = "환자번호";
pub const INTERVENTION_DATE_COLUMN: &str = "중재일자";

const PLAIN_COLUMNS: [&str; 3] = [PATIENT_NO_COLUMN, "환자순번", INTERVENTION_DATE_COLUMN];
const DEIDENTIFIED_PLAIN_COLUMNS: [&str; 4] = ["기관", "입원일자", "진료과", "병동"];
const DEIDENTIFIED_PLAIN_PREFIX: &str = "중재활동분류_";

/// Headers that carry the "de-identified" badge in the de-identified table.
pub const MASKED_HEADER_COLUMNS: [&str; 2] = [CONSULTATION_COLUMN, PATIENT_NO_COLUMN];

/// Fields whose text may contain de-identification tokens.
pub const MASKED_TEXT_FIELDS: [&str; 2] = ["의뢰내용", "회신내용"];

const PRESCRIPTION_DATE: &str = "처방적용일";
const PRESCRIPTION_NAME: &str = "처방명";
const BASE_DATE: &str = "기준일자";
const BASE_TIME: &str = "기준시간";
const LABEL_MAX_CHARS: usize = 30;

/// A rendered column: stable id plus header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub name: String,
}

/// Visible columns: non-hidden metadata in metadata order when metadata exists, else
/// the first record's keys (a literal `"null"` key is skipped), else nothing.
pub fn resolve_columns(metadata: &[ColumnMetadata], records: &[Record]) -> Vec<Column> {
    if !metadata.is_empty() {
        return metadata
            .iter()
            .filter(|meta| !meta.is_hidden())
            .map(|meta| Column {
                id: meta.col_id.clone(),
                name: meta.display_name().to_string(),
            })
            .collect();
    }

    records
        .first()
        .map(|first| {
            first
                .keys()
                .filter(|key| key.as_str() != "null")
                .map(|key| Column {
                    id: key.clone(),
                    name: key.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// How a table cell is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Intervention,
    Guide,
    Consultation,
    Plain,
    Detail,
    Empty,
}

pub fn cell_kind(view: DataView, column: &str, value: Option<&Value>) -> CellKind {
    if column == INTERVENTION_COLUMN {
        return CellKind::Intervention;
    }
    if column == GUIDE_COLUMN {
        return CellKind::Guide;
    }
    if view == DataView::Deidentified && column == CONSULTATION_COLUMN {
        return CellKind::Consultation;
    }
    if is_plain_column(view, column) {
        return CellKind::Plain;
    }
    if has_data(value) {
        CellKind::Detail
    } else {
        CellKind::Empty
    }
}

fn is_plain_column(view: DataView, column: &str) -> bool {
    if PLAIN_COLUMNS.contains(&column) {
        return true;
    }
    view == DataView::Deidentified
        && (DEIDENTIFIED_PLAIN_COLUMNS.contains(&column)
            || column.starts_with(DEIDENTIFIED_PLAIN_PREFIX))
}

/// Plain text for a cell; missing and null read as empty.
pub fn cell_text(record: &Record, column: &str) -> String {
    record.get(column).map(display_scalar).unwrap_or_default()
}

/// Natural key of a de-identified record, when both halves are present.
pub fn patient_key(record: &Record) -> Option<(String, String)> {
    let patient_no = record.get(PATIENT_NO_COLUMN);
    let date = record.get(INTERVENTION_DATE_COLUMN);
    if !is_truthy(patient_no) || !is_truthy(date) {
        return None;
    }
    Some((
        patient_no.map(display_scalar).unwrap_or_default(),
        date.map(display_scalar).unwrap_or_default(),
    ))
}

/// Sort navigator items newest first.
///
/// When any item has a `처방적용일`, all items are ordered by it; otherwise, when any has
/// a `기준일자`, by `기준일자`+`기준시간`; otherwise the order is left alone. Items lacking
/// the key read as 0. The sort is stable.
pub fn sort_items_newest_first(items: Vec<Value>) -> Vec<Value> {
    let order = newest_first_order(&items);
    let mut slots: Vec<Option<Value>> = items.into_iter().map(Some).collect();
    order.into_iter().filter_map(|index| slots[index].take()).collect()
}

/// Source positions of `items` in navigator order, so a shown item can be traced back
/// to where it lives in the stored array.
pub fn newest_first_order(items: &[Value]) -> Vec<usize> {
    let key: fn(&Value) -> f64 = if items.iter().any(|i| is_truthy(i.get(PRESCRIPTION_DATE))) {
        |item| numeric(item.get(PRESCRIPTION_DATE))
    } else if items.iter().any(|i| is_truthy(i.get(BASE_DATE))) {
        date_time_key
    } else {
        return (0..items.len()).collect();
    };

    let mut keyed: Vec<(f64, usize)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (key(item), index))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| descending(*a, *b));
    keyed.into_iter().map(|(_, index)| index).collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// `기준일자` and `기준시간` concatenated and read as a number (`"0"` for missing halves).
pub fn date_time_key(item: &Value) -> f64 {
    let part = |field: &str| match item.get(field) {
        Some(value) if is_truthy(Some(value)) => display_scalar(value),
        _ => "0".to_string(),
    };
    let joined = format!("{}{}", part(BASE_DATE), part(BASE_TIME));
    numeric(Some(&Value::String(joined)))
}

/// Navigator label for an item, or `None` when the caller should fall back to a
/// numbered label.
pub fn item_label(item: &Value) -> Option<String> {
    let fields = item.as_object()?;

    if is_truthy(fields.get(PRESCRIPTION_DATE)) {
        let date = fields.get(PRESCRIPTION_DATE).map(display_scalar).unwrap_or_default();
        let name = fields
            .get(PRESCRIPTION_NAME)
            .filter(|v| is_truthy(Some(*v)))
            .map(display_scalar)
            .unwrap_or_default();
        return Some(format!("{date} {name}").trim().to_string());
    }

    if is_truthy(fields.get(BASE_DATE)) && is_truthy(fields.get(BASE_TIME)) {
        let date = fields.get(BASE_DATE).map(display_scalar).unwrap_or_default();
        let time = fields.get(BASE_TIME).map(display_scalar).unwrap_or_default();
        return Some(format!("{date} {time}"));
    }

    let (_, first) = fields.iter().next()?;
    if !is_truthy(Some(first)) {
        return None;
    }
    let text = display_scalar(first);
    (text.chars().count() < LABEL_MAX_CHARS).then_some(text)
}

/// Navigator items for a cell: present only when the decoded content is a non-empty
/// array made entirely of objects.
pub fn navigator_items(content: &Value) -> Option<Vec<Value>> {
    match content {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            Some(sort_items_newest_first(items.clone()))
        }
        _ => None,
    }
}
