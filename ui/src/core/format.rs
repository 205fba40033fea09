//! Small text formatting helpers for table chrome.

/// Shown for empty classification cells.
pub const PLACEHOLDER: &str = "-";

/// One-based row number across pages: `(page - 1) * page_size + index + 1`.
pub fn row_number(page: u32, page_size: u32, index: usize) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size) + index as u64 + 1
}

/// `P / T` pagination label.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("{page} / {total_pages}")
}

/// Text or the placeholder when blank.
pub fn or_placeholder(text: &str) -> &str {
    if text.is_empty() {
        PLACEHOLDER
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_numbers_continue_across_pages() {
        assert_eq!(row_number(1, 50, 0), 1);
        assert_eq!(row_number(3, 50, 4), 105);
    }

    #[test]
    fn labels() {
        assert_eq!(page_label(2, 7), "2 / 7");
        assert_eq!(or_placeholder(""), "-");
        assert_eq!(or_placeholder("4, 5"), "4, 5");
    }
}
