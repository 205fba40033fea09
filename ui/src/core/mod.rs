//! Pure formatting core: parsing, pivoting and presentation helpers with no Dioxus state.

pub mod consultation;
pub mod format;
pub mod intervention;
pub mod masking;
pub mod platform;
pub mod records;
pub mod tpr;
pub mod value;
