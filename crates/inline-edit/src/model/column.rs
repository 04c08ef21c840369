//! Per-cell column model.

use std::fmt;
use std::str::FromStr;

use inline_edit_core::{ContentSnapshot, ElementId};

use super::row::RowId;
use crate::error::UnsupportedColumnType;

/// The kind of editor generated for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Date input, optionally decorated by a date-picker hook.
    Date,
    /// Hidden input appended next to the visible content.
    Hidden,
    /// Numeric input.
    Number,
    /// Numeric input; the displayed value carries a trailing `%`.
    Percentage,
    /// Dropdown populated from a data source.
    Select,
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
}

impl ColumnType {
    /// Every supported column type.
    pub const ALL: [ColumnType; 7] = [
        ColumnType::Date,
        ColumnType::Hidden,
        ColumnType::Number,
        ColumnType::Percentage,
        ColumnType::Select,
        ColumnType::Text,
        ColumnType::Textarea,
    ];

    /// The marker value naming this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Hidden => "hidden",
            Self::Number => "number",
            Self::Percentage => "percentage",
            Self::Select => "select",
            Self::Text => "text",
            Self::Textarea => "textarea",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = UnsupportedColumnType;

    /// Parses an already normalized (trimmed, lowercased) type marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnsupportedColumnType(s.to_string()))
    }
}

/// Configuration and snapshot state for one editable cell.
///
/// Built once when the table is scanned. Only the original-value snapshot and
/// the live widget handle change afterwards.
#[derive(Debug, Clone)]
pub struct ColumnModel {
    element: ElementId,
    column_type: ColumnType,
    name: Option<String>,
    css_class: Option<String>,
    data_source: Option<String>,
    date_picker: Option<String>,
    validator: Option<String>,
    original_value: Option<String>,
    original_content: Option<ContentSnapshot>,
    index_in_row: usize,
    row: RowId,
    widget: Option<ElementId>,
}

impl ColumnModel {
    /// Creates a column for `element` with no optional markers.
    pub fn new(element: ElementId, column_type: ColumnType) -> Self {
        Self {
            element,
            column_type,
            name: None,
            css_class: None,
            data_source: None,
            date_picker: None,
            validator: None,
            original_value: None,
            original_content: None,
            index_in_row: 0,
            row: RowId::default(),
            widget: None,
        }
    }

    /// Sets the field name used in the save payload.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the style class override for the generated widget.
    pub fn with_css_class(mut self, css_class: Option<String>) -> Self {
        self.css_class = css_class;
        self
    }

    /// Sets the registered data source name (select columns).
    pub fn with_data_source(mut self, data_source: Option<String>) -> Self {
        self.data_source = data_source;
        self
    }

    /// Sets the registered date-picker hook name (date columns).
    pub fn with_date_picker(mut self, date_picker: Option<String>) -> Self {
        self.date_picker = date_picker;
        self
    }

    /// Sets the registered validator name.
    pub fn with_validator(mut self, validator: Option<String>) -> Self {
        self.validator = validator;
        self
    }

    /// Sets the position among the row's children.
    pub fn with_index_in_row(mut self, index: usize) -> Self {
        self.index_in_row = index;
        self
    }

    /// The cell element this column renders into.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The declared column type.
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// The payload field name, if declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The style class override, if declared.
    pub fn css_class(&self) -> Option<&str> {
        self.css_class.as_deref()
    }

    /// The data source name, if declared.
    pub fn data_source(&self) -> Option<&str> {
        self.data_source.as_deref()
    }

    /// The date-picker hook name, if declared.
    pub fn date_picker(&self) -> Option<&str> {
        self.date_picker.as_deref()
    }

    /// The validator name, if declared.
    pub fn validator(&self) -> Option<&str> {
        self.validator.as_deref()
    }

    /// The cell's rendered text captured when the row last entered edit
    /// mode.
    ///
    /// `None` until the row is edited for the first time.
    pub fn original_value(&self) -> Option<&str> {
        self.original_value.as_deref()
    }

    /// The cell's markup (own text and child elements) held while the row is
    /// in edit mode.
    pub fn original_content(&self) -> Option<&ContentSnapshot> {
        self.original_content.as_ref()
    }

    /// Position among the row's children.
    pub fn index_in_row(&self) -> usize {
        self.index_in_row
    }

    /// The owning row.
    pub fn row(&self) -> RowId {
        self.row
    }

    /// The live editing widget while the row is in edit mode.
    pub fn widget(&self) -> Option<ElementId> {
        self.widget
    }

    pub(crate) fn set_row(&mut self, row: RowId) {
        self.row = row;
    }

    pub(crate) fn capture_original(&mut self, text: String, content: ContentSnapshot) {
        self.original_value = Some(text);
        self.original_content = Some(content);
    }

    pub(crate) fn take_original_content(&mut self) -> Option<ContentSnapshot> {
        self.original_content.take()
    }

    pub(crate) fn set_widget(&mut self, widget: Option<ElementId>) {
        self.widget = widget;
    }
}
