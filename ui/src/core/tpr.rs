//! TPR (nursing vitals) pivot.
//!
//! Source shape: `{ category: { measurement: [ { 기록일시, 결과 }, ... ] } }`.
//! The grid has one row per (category, measurement) and one column per distinct
//! record time across the whole block, ascending.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Physiological categories in display order. Anything else in the block is ignored.
pub const TPR_CATEGORIES: [&str; 7] = [
    "활력징후",
    "중환자간호",
    "호흡",
    "섭취배설",
    "튜브라인",
    "신경계",
    "인공호흡기",
];

const TIME_KEYS: [&str; 3] = ["기록일시", "recorded_at", "record_time"];
const VALUE_KEYS: [&str; 3] = ["결과", "value", "값"];

#[derive(Debug, Clone, PartialEq)]
pub enum TprCell {
    Value(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TprRow {
    pub category: String,
    pub measurement: String,
    pub cells: Vec<TprCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TprGrid {
    pub columns: Vec<String>,
    pub rows: Vec<TprRow>,
}

impl TprGrid {
    /// True when no record time was found anywhere ("no time-series data").
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rows grouped by category, preserving row order, for rendering a rowspan header.
    pub fn category_spans(&self) -> Vec<(&str, usize)> {
        let mut spans: Vec<(&str, usize)> = Vec::new();
        for row in &self.rows {
            match spans.last_mut() {
                Some((category, count)) if *category == row.category => *count += 1,
                _ => spans.push((row.category.as_str(), 1)),
            }
        }
        spans
    }
}

/// Does this value look like a TPR block (an object holding at least one known category)?
pub fn is_tpr_block(value: &Value) -> bool {
    match value {
        Value::Object(map) => TPR_CATEGORIES.iter().any(|c| map.contains_key(*c)),
        _ => false,
    }
}

/// Pivot a TPR block. Malformed parts are skipped; this never fails.
pub fn build_grid(record: &Value) -> TprGrid {
    let Some(block) = record.as_object() else {
        return TprGrid::default();
    };

    let series = collect_series(block);

    let times: BTreeSet<&str> = series
        .iter()
        .flat_map(|&(_, _, entries)| entries.iter().filter_map(record_time))
        .collect();
    let columns: Vec<String> = times.into_iter().map(str::to_owned).collect();

    let rows = series
        .iter()
        .map(|&(category, measurement, entries)| TprRow {
            category: category.to_string(),
            measurement: measurement.to_string(),
            cells: columns
                .iter()
                .map(|column| lookup(entries, column))
                .collect(),
        })
        .collect();

    TprGrid { columns, rows }
}

type Series<'a> = (&'a str, &'a str, &'a [Value]);

fn collect_series(block: &Map<String, Value>) -> Vec<Series<'_>> {
    let mut series = Vec::new();
    for category in TPR_CATEGORIES {
        let Some(Value::Object(measurements)) = block.get(category) else {
            continue;
        };
        for (name, entries) in measurements {
            if let Value::Array(entries) = entries {
                series.push((category, name.as_str(), entries.as_slice()));
            }
        }
    }
    series
}

fn record_time(entry: &Value) -> Option<&str> {
    let entry = entry.as_object()?;
    TIME_KEYS
        .iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str))
}

fn lookup(entries: &[Value], column: &str) -> TprCell {
    entries
        .iter()
        .find(|entry| record_time(entry) == Some(column))
        .and_then(|entry| {
            let entry = entry.as_object()?;
            VALUE_KEYS.iter().find_map(|key| entry.get(*key))
        })
        .map(|value| TprCell::Value(cell_text(value)))
        .unwrap_or(TprCell::Missing)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Split `YYYYMMDDHHMMSS` into (`MM/DD`, `HH:MM`). Other shapes pass through as the date
/// fragment with an empty time fragment.
pub fn split_timestamp(stamp: &str) -> (String, String) {
    if stamp.len() != 14 || !stamp.is_ascii() {
        return (stamp.to_string(), String::new());
    }
    (
        format!("{}/{}", &stamp[4..6], &stamp[6..8]),
        format!("{}:{}", &stamp[8..10], &stamp[10..12]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const T1: &str = "20240105080000";
    const T2: &str = "20240105120000";

    #[test]
    fn two_categories_two_columns() {
        let block = json!({
            "호흡": { "SpO2": [ { "기록일시": T2, "결과": "97" } ] },
            "활력징후": {
                "체온": [
                    { "기록일시": T1, "결과": "36.8" },
                    { "기록일시": T2, "결과": "37.4" }
                ]
            }
        });

        let grid = build_grid(&block);
        assert_eq!(grid.columns, vec![T1.to_string(), T2.to_string()]);
        assert_eq!(grid.rows.len(), 2);

        // allowlist order, not source order
        assert_eq!(grid.rows[0].category, "활력징후");
        assert_eq!(
            grid.rows[0].cells,
            vec![TprCell::Value("36.8".into()), TprCell::Value("37.4".into())]
        );
        assert_eq!(grid.rows[1].measurement, "SpO2");
        assert_eq!(
            grid.rows[1].cells,
            vec![TprCell::Missing, TprCell::Value("97".into())]
        );
    }

    #[test]
    fn first_matching_entry_wins_and_numbers_are_stringified() {
        let block = json!({
            "활력징후": {
                "맥박": [
                    { "기록일시": T1, "결과": 88 },
                    { "기록일시": T1, "결과": 120 }
                ]
            }
        });
        let grid = build_grid(&block);
        assert_eq!(grid.rows[0].cells, vec![TprCell::Value("88".into())]);
    }

    #[test]
    fn non_sequence_measurements_and_unknown_categories_are_skipped() {
        let block = json!({
            "활력징후": { "비고": "n/a", "체온": [ { "기록일시": T1, "결과": "36.5" } ] },
            "기타": { "x": [ { "기록일시": T2, "결과": "1" } ] }
        });
        let grid = build_grid(&block);
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.columns, vec![T1.to_string()]);
    }

    #[test]
    fn malformed_input_degrades_to_empty() {
        assert!(build_grid(&json!("garbage")).is_empty());
        assert!(build_grid(&json!({ "활력징후": { "체온": [] } })).is_empty());
        assert!(!is_tpr_block(&json!({ "foo": 1 })));
        assert!(is_tpr_block(&json!({ "신경계": {} })));
    }

    #[test]
    fn category_spans_group_rows() {
        let block = json!({
            "활력징후": {
                "체온": [ { "기록일시": T1, "결과": "36.5" } ],
                "맥박": [ { "기록일시": T1, "결과": "80" } ]
            },
            "신경계": { "GCS": [ { "기록일시": T1, "결과": "15" } ] }
        });
        let grid = build_grid(&block);
        assert_eq!(grid.category_spans(), vec![("활력징후", 2), ("신경계", 1)]);
    }

    #[test]
    fn timestamp_split() {
        assert_eq!(
            split_timestamp("20240105083000"),
            ("01/05".to_string(), "08:30".to_string())
        );
        assert_eq!(
            split_timestamp("2024-01-05"),
            ("2024-01-05".to_string(), String::new())
        );
    }
}
