//! Intervention classification (`중재활동분류`) parsing and editing helpers.
//!
//! The backend stores the classification loosely: spreadsheet imports leave a bare
//! number, edits round-trip as `"4, 5"`, and some rows carry a JSON array literal.
//! Everything funnels through [`parse_categories`] before display or editing.

use serde_json::Value;

/// Column id of the classification field.
pub const INTERVENTION_COLUMN: &str = "중재활동분류";

/// Fixed category enumeration shown in the picker, in display order.
pub const INTERVENTION_CATEGORIES: [InterventionCategory; 9] = [
    InterventionCategory { code: 1, label: "중재필요없음" },
    InterventionCategory { code: 2, label: "병합처방 중재" },
    InterventionCategory { code: 3, label: "장기투여 중재" },
    InterventionCategory { code: 4, label: "경구전환" },
    InterventionCategory { code: 5, label: "하강치료" },
    InterventionCategory { code: 6, label: "미생물 검사 기반 중재" },
    InterventionCategory { code: 7, label: "가이드라인에 맞는 처방" },
    InterventionCategory { code: 8, label: "치료약물 모니터링" },
    InterventionCategory { code: 9, label: "기타" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterventionCategory {
    pub code: i64,
    pub label: &'static str,
}

/// Normalize a raw cell value into category codes.
///
/// Order is preserved and duplicates are kept; nothing here sorts.
pub fn parse_categories(raw: &Value) -> Vec<i64> {
    match raw {
        Value::Null | Value::Bool(_) | Value::Object(_) => Vec::new(),
        Value::Number(n) => integral(n).into_iter().collect(),
        Value::Array(items) => codes_from_array(items),
        Value::String(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> Vec<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // "5", "5, 6", "1,2,3" (a bare "12" is one code, not two)
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace())
    {
        return trimmed.split(',').filter_map(leading_integer).collect();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => codes_from_array(&items),
        _ => Vec::new(),
    }
}

/// Integer formed by the leading digits of a token; `"4 5"` reads as 4.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

fn codes_from_array(items: &[Value]) -> Vec<i64> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Number(n) => integral(n),
            _ => None,
        })
        .collect()
}

fn integral(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

/// `[4, 5]` -> `"4, 5"`; empty input yields an empty string (callers show a dash).
pub fn display_text(codes: &[i64]) -> String {
    codes
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picker toggle: remove when present, otherwise insert and keep ascending order.
pub fn toggle_category(selected: &[i64], code: i64) -> Vec<i64> {
    if selected.contains(&code) {
        selected.iter().copied().filter(|c| *c != code).collect()
    } else {
        let mut next = selected.to_vec();
        next.push(code);
        next.sort_unstable();
        next
    }
}

/// Label for a known code.
pub fn category_label(code: i64) -> Option<&'static str> {
    INTERVENTION_CATEGORIES
        .iter()
        .find(|category| category.code == code)
        .map(|category| category.label)
}

/// Value written back to the record and sent to the backend.
pub fn to_value(codes: &[i64]) -> Value {
    Value::Array(codes.iter().map(|c| Value::from(*c)).collect())
}
