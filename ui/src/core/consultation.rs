//! Draft state for the consultation-record editor.
//!
//! The navigator shows items newest first, but edits must land on the item at its
//! original position, so the sort's source positions are kept alongside.

use serde_json::Value;
use tracing::warn;

use super::records::{newest_first_order, sort_items_newest_first};
use super::value::decode;

/// Fields that become editable in edit mode.
pub const EDITABLE_FIELDS: [&str; 2] = ["의뢰내용", "회신내용"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationDraft {
    initial: Value,
    original: Value,
    edited: Option<Vec<Value>>,
}

impl ConsultationDraft {
    pub fn new(initial: Value) -> Self {
        let original = decode(&initial);
        Self {
            initial,
            original,
            edited: None,
        }
    }

    /// Decoded original content.
    pub fn content(&self) -> &Value {
        &self.original
    }

    pub fn is_edited(&self) -> bool {
        self.edited.is_some()
    }

    /// Items in navigator order, reflecting any edits made so far.
    pub fn items(&self) -> Vec<Value> {
        match (&self.edited, &self.original) {
            (Some(edited), _) => sort_items_newest_first(edited.clone()),
            (None, Value::Array(items)) => sort_items_newest_first(items.clone()),
            (None, _) => Vec::new(),
        }
    }

    /// Set `field` on the item shown at `selected` (a navigator index). Returns false and
    /// leaves the draft untouched when the item cannot be matched back.
    pub fn set_field(&mut self, selected: usize, field: &str, text: String) -> bool {
        let mut base = match (&self.edited, &self.original) {
            (Some(edited), _) => edited.clone(),
            (None, Value::Array(items)) => items.clone(),
            (None, _) => return false,
        };

        let Some(source) = newest_first_order(&base).get(selected).copied() else {
            warn!(selected, "consultation edit for an item that is not shown");
            return false;
        };
        let Some(fields) = base.get_mut(source).and_then(Value::as_object_mut) else {
            warn!(selected, source, "consultation item is not an object");
            return false;
        };
        fields.insert(field.to_string(), Value::String(text));
        self.edited = Some(base);
        true
    }

    /// Value to persist: the edited array, else the decoded original, else whatever the
    /// cell held initially.
    pub fn save_value(&self) -> Value {
        if let Some(edited) = &self.edited {
            return Value::Array(edited.clone());
        }
        match &self.original {
            Value::Null => self.initial.clone(),
            original => original.clone(),
        }
    }
}
