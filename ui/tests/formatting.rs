//! End-to-end checks of the formatting core through the crate's public API.

use api::{DataQuery, DataResponse, DataView};
use serde_json::{json, Value};
use ui::core::intervention::{display_text, parse_categories};
use ui::core::records::navigator_items;
use ui::core::tpr::{build_grid, TprCell};
use ui::core::value::ValueNode;
use ui::table::{SearchFilters, TableState};

#[test]
fn intervention_inputs_normalize() {
    assert_eq!(parse_categories(&json!(5)), vec![5]);
    assert_eq!(parse_categories(&json!("5, 6")), vec![5, 6]);
    assert_eq!(parse_categories(&json!("12")), vec![12]);
    assert_eq!(parse_categories(&json!("[1,2,3]")), vec![1, 2, 3]);
    assert_eq!(parse_categories(&Value::Null), Vec::<i64>::new());
    assert_eq!(parse_categories(&json!("")), Vec::<i64>::new());
    assert_eq!(display_text(&parse_categories(&json!("[4,5]"))), "4, 5");
}

#[test]
fn vitals_pivot_aligns_times() {
    let block = json!({
        "활력징후": { "체온": [ { "기록일시": "20240105080000", "결과": "36.9" } ] },
        "섭취배설": { "소변량": [ { "기록일시": "20240105160000", "결과": "350" } ] }
    });
    let grid = build_grid(&block);
    assert_eq!(grid.columns, vec!["20240105080000", "20240105160000"]);
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[0].cells[1], TprCell::Missing);
    assert_eq!(grid.rows[1].cells[1], TprCell::Value("350".into()));
}

#[test]
fn nested_values_render_as_tables_and_lines() {
    let text = ValueNode::build(&json!("line one\\nline two"));
    assert!(matches!(text, ValueNode::Text { ref lines, .. } if lines.len() == 2));

    let table = ValueNode::build(&json!([
        { "x": 1, "y": 2 },
        { "x": 3, "y": 4 },
        { "x": 5, "y": 6 }
    ]));
    match table {
        ValueNode::Table { columns, rows } => {
            assert_eq!(columns, vec!["x", "y"]);
            assert_eq!(rows.len(), 3);
        }
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn prescriptions_are_listed_newest_first() {
    let items = navigator_items(&json!([
        { "처방적용일": "20240102", "처방명": "세프트리악손" },
        { "처방적용일": "20240110", "처방명": "반코마이신" }
    ]))
    .expect("object array");
    assert_eq!(items[0]["처방명"], "반코마이신");
}

#[test]
fn later_page_request_is_forwarded_unchanged() {
    let mut state = TableState::new(DataView::Identified);
    state.apply_page(DataResponse {
        success: true,
        total_pages: 2,
        ..DataResponse::default()
    });
    state.go_to_page(5);
    let params = state.query.params();
    assert!(params.contains(&("page", "5".to_string())));
    assert_eq!(state.query, DataQuery::page(5));
}

#[test]
fn latest_resolved_filter_response_is_shown() {
    let mut state = TableState::new(DataView::Deidentified);
    state.apply_search(SearchFilters {
        antibiotic: "vancomycin".into(),
        ..SearchFilters::default()
    });
    state.apply_search(SearchFilters {
        antibiotic: "meropenem".into(),
        ..SearchFilters::default()
    });

    let response = |name: &str| DataResponse {
        success: true,
        data: vec![json!({ "항생제": name }).as_object().cloned().unwrap_or_default()],
        total: 1,
        page: 1,
        page_size: 50,
        total_pages: 1,
        error: None,
    };
    state.apply_page(response("vancomycin"));
    state.apply_page(response("meropenem"));
    assert_eq!(state.records[0]["항생제"], "meropenem");
}
