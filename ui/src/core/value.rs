//! Presentation tree for arbitrary JSON cell values.
//!
//! Cells arrive as objects, arrays, scalars or JSON text. [`ValueNode::build`] decides how
//! each piece should be shown; the Dioxus side only walks the tree. Nothing here fails:
//! undecodable text is shown as text.

use serde_json::{Map, Value};

/// Column that orders embedded rows: rows marked `주` come before the rest.
const PRIMARY_FLAG_KEY: &str = "주/부";
const PRIMARY_FLAG: &str = "주";

#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// null, missing or empty text.
    Empty,
    Fields(Vec<(String, ValueNode)>),
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<ValueNode>>,
    },
    List(Vec<ValueNode>),
    Text {
        lines: Vec<String>,
        /// Lines may contain `<비식별화:...>` tokens that should be highlighted.
        masked: bool,
    },
}

impl ValueNode {
    pub fn build(value: &Value) -> Self {
        Self::build_with(value, None, &[])
    }

    /// Like [`ValueNode::build`], but text found under any of `masked_fields` is flagged
    /// for de-identification highlighting.
    pub fn build_masked(value: &Value, masked_fields: &[&str]) -> Self {
        Self::build_with(value, None, masked_fields)
    }

    fn build_with(value: &Value, field: Option<&str>, masked_fields: &[&str]) -> Self {
        match decode(value) {
            Value::Null => Self::Empty,
            Value::Object(map) => Self::Fields(
                map.iter()
                    .map(|(key, child)| {
                        (key.clone(), Self::build_with(child, Some(key.as_str()), masked_fields))
                    })
                    .collect(),
            ),
            Value::Array(items) => match object_rows(&items) {
                Some(rows) => table(rows, masked_fields),
                None => Self::List(
                    items
                        .iter()
                        .map(|item| Self::build_with(item, None, masked_fields))
                        .collect(),
                ),
            },
            scalar => Self::Text {
                lines: split_lines(&display_scalar(&scalar)),
                masked: field.is_some_and(|f| masked_fields.contains(&f)),
            },
        }
    }
}

fn object_rows(items: &[Value]) -> Option<Vec<&Map<String, Value>>> {
    if items.is_empty() {
        return None;
    }
    items.iter().map(Value::as_object).collect()
}

fn table(mut rows: Vec<&Map<String, Value>>, masked_fields: &[&str]) -> ValueNode {
    let columns = union_keys(&rows);

    if columns.iter().any(|c| c == PRIMARY_FLAG_KEY) {
        // stable: relative order inside each group is kept
        rows.sort_by_key(|row| {
            row.get(PRIMARY_FLAG_KEY).and_then(Value::as_str) != Some(PRIMARY_FLAG)
        });
    }

    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match row.get(column) {
                    Some(cell) => {
                        ValueNode::build_with(cell, Some(column.as_str()), masked_fields)
                    }
                    None => ValueNode::Empty,
                })
                .collect()
        })
        .collect();

    ValueNode::Table { columns, rows }
}

/// Union of object keys in first-seen order.
pub fn union_keys(rows: &[&Map<String, Value>]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

/// Decode JSON text into a value; non-JSON text stays a string. Empty text becomes null.
pub fn decode(value: &Value) -> Value {
    match value {
        Value::String(text) if text.is_empty() => Value::Null,
        Value::String(text) => {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
        }
        other => other.clone(),
    }
}

/// Does the cell hold anything worth opening? (`null`, `""` and `"{}"` do not.)
pub fn has_data(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty() && text != "{}",
        Some(_) => true,
    }
}

/// JavaScript-style truthiness, used where the backend's optional fields are probed.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Text form of a scalar; containers fall back to compact JSON.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Numeric reading of a loosely typed field. Unparseable input reads as 0.
pub fn numeric(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) if text.trim().is_empty() => 0.0,
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        _ => 0.0,
    };
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

/// Turn literal `\r\n`, `\n` and `\r` escape sequences into line breaks and split.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\\r", "\n");
    normalized
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escaped_newlines_become_lines() {
        let node = ValueNode::build(&json!("a\\nb"));
        assert_eq!(
            node,
            ValueNode::Text {
                lines: vec!["a".into(), "b".into()],
                masked: false
            }
        );
        assert_eq!(split_lines("x\\r\\ny\\rz"), vec!["x", "y", "z"]);
    }

    #[test]
    fn homogeneous_objects_become_a_table() {
        let node = ValueNode::build(&json!([
            { "x": 1, "y": "a" },
            { "x": 2, "y": "b" },
            { "y": "c", "x": 3 }
        ]));
        let ValueNode::Table { columns, rows } = node else {
            panic!("expected a table");
        };
        assert_eq!(columns, vec!["x", "y"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[2][0],
            ValueNode::Text {
                lines: vec!["3".into()],
                masked: false
            }
        );
    }

    #[test]
    fn primary_rows_sort_first_and_stay_stable() {
        let node = ValueNode::build(&json!([
            { "진단명": "B", "주/부": "부" },
            { "진단명": "A", "주/부": "주" },
            { "진단명": "C", "주/부": "부" }
        ]));
        let ValueNode::Table { rows, .. } = node else {
            panic!("expected a table");
        };
        let names: Vec<_> = rows
            .iter()
            .map(|row| match &row[0] {
                ValueNode::Text { lines, .. } => lines[0].clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_table_cells_are_empty() {
        let node = ValueNode::build(&json!([{ "x": 1 }, { "y": 2 }]));
        let ValueNode::Table { columns, rows } = node else {
            panic!("expected a table");
        };
        assert_eq!(columns, vec!["x", "y"]);
        assert_eq!(rows[0][1], ValueNode::Empty);
    }

    #[test]
    fn mixed_arrays_become_lists_and_json_text_is_decoded() {
        let node = ValueNode::build(&json!("[1, {\"k\": null}]"));
        assert_eq!(
            node,
            ValueNode::List(vec![
                ValueNode::Text {
                    lines: vec!["1".into()],
                    masked: false
                },
                ValueNode::Fields(vec![("k".into(), ValueNode::Empty)]),
            ])
        );
    }

    #[test]
    fn malformed_text_degrades_to_raw() {
        assert_eq!(
            ValueNode::build(&json!("{not json")),
            ValueNode::Text {
                lines: vec!["{not json".into()],
                masked: false
            }
        );
        assert_eq!(ValueNode::build(&json!("")), ValueNode::Empty);
    }

    #[test]
    fn masked_fields_are_flagged() {
        let node = ValueNode::build_masked(
            &json!({ "의뢰내용": "환자 <비식별화:이름>", "작성자": "kim" }),
            &["의뢰내용"],
        );
        let ValueNode::Fields(fields) = node else {
            panic!("expected fields");
        };
        assert!(matches!(fields[0].1, ValueNode::Text { masked: true, .. }));
        assert!(matches!(fields[1].1, ValueNode::Text { masked: false, .. }));
    }

    #[test]
    fn has_data_rules() {
        assert!(!has_data(None));
        assert!(!has_data(Some(&Value::Null)));
        assert!(!has_data(Some(&json!(""))));
        assert!(!has_data(Some(&json!("{}"))));
        assert!(has_data(Some(&json!(0))));
        assert!(has_data(Some(&json!({}))));
    }

    #[test]
    fn numeric_reading() {
        assert_eq!(numeric(Some(&json!("20240105"))), 20240105.0);
        assert_eq!(numeric(Some(&json!("abc"))), 0.0);
        assert_eq!(numeric(None), 0.0);
    }
}
