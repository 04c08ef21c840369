//! Reading per-cell markers.
//!
//! Cells declare their editing configuration through namespaced attributes,
//! e.g. `inlineEdit-type="percentage"` or `inlineEdit-name="discount"`. The
//! [`AttributeReader`] is the only place that reads those attributes, so every
//! value downstream is trimmed the same way and the type marker is always
//! lowercase.

use inline_edit_core::{Document, DocumentResult, ElementId};

/// Marker names, appended to the configured attribute prefix.
pub mod markers {
    /// Column type (required for a cell to be editable).
    pub const TYPE: &str = "type";
    /// Payload field name.
    pub const NAME: &str = "name";
    /// Widget style class override.
    pub const CLASS: &str = "class";
    /// Data source name for select columns.
    pub const DATA: &str = "data";
    /// Date-picker hook name for date columns.
    pub const DATE_PICKER: &str = "datePicker";
    /// Validator name.
    pub const VALIDATOR: &str = "validator";
}

/// Extracts and normalizes namespaced markers from elements.
#[derive(Debug, Clone)]
pub struct AttributeReader {
    prefix: String,
}

impl AttributeReader {
    /// Creates a reader for markers starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The attribute prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Read a marker from `element`.
    ///
    /// The value is trimmed; the type marker is also lowercased. An absent or
    /// blank marker reads as `None`.
    pub fn read(
        &self,
        doc: &dyn Document,
        element: ElementId,
        marker: &str,
    ) -> DocumentResult<Option<String>> {
        let marker = marker.trim();
        let Some(raw) = doc.attribute(element, &format!("{}{}", self.prefix, marker))? else {
            return Ok(None);
        };

        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if marker == markers::TYPE {
            return Ok(Some(value.to_lowercase()));
        }
        Ok(Some(value.to_string()))
    }
}
