#![cfg(test)]
//! Theme selector lint for the desktop build.
//!
//! Desktop builds inline `ui/assets/theme/main.css`. The components in `ui` rely on the
//! class names below; a rename in one place without the other would silently unstyle a
//! packaged build. A substring check is enough as an early warning.
//!
//! When a component's class changes, update both the markup and this list.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".loading",
    ".error-message",
    // Search bar
    ".search-bar__container",
    ".search-bar__field",
    ".search-bar__button--search",
    ".search-bar__button--reset",
    // Data table
    ".data-table",
    ".row-number",
    ".header-with-badge",
    ".deidentified-badge-header",
    ".intervention-cell",
    ".guide-button",
    ".cell-button",
    ".patient-id",
    ".pagination__button:disabled",
    // Modals
    ".modal-overlay",
    ".modal-content",
    ".modal-header",
    ".modal-footer",
    ".modal-split",
    ".navigator-item--active",
    // Nested values & masking
    ".json-table",
    ".json-text",
    ".json-raw",
    ".deidentified-token",
    // Vitals grid
    ".tpr-table",
    ".tpr-table__category",
    ".tpr-table__value--missing",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn masking_highlight_uses_theme_colors() {
    // The token highlight and the header badge must stay visually distinct.
    let token = THEME_CSS
        .split(".deidentified-token {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    assert!(
        token.contains("var(--color-masked-bg)") && token.contains("var(--color-masked-text)"),
        "`.deidentified-token` should use the masked-text palette, got: {token}"
    );
}
