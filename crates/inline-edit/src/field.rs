//! Editing widgets for columns.
//!
//! When a row enters edit mode every column gets a widget built from its
//! type. Building happens in two steps: [`FieldFactory::describe`] decides
//! what the widget looks like (a [`WidgetDescriptor`]) without touching the
//! document, and [`FieldFactory::install`] materializes the descriptor into
//! the cell.
//!
//! | type | widget | placement |
//! |---|---|---|
//! | text | `input type="text"` | replaces the cell content |
//! | hidden | `input type="hidden"` | appended, visible content stays |
//! | number | `input type="number"` | replaces |
//! | percentage | `input type="number"`, trailing `%` stripped | replaces |
//! | select | `select` filled from the column's data source | replaces |
//! | textarea | `textarea` | replaces |
//! | date | `input`, decorated by a date-picker hook | inserted before decoration |

use inline_edit_core::{Document, DocumentResult, ElementId};

use crate::config::InlineEditOptions;
use crate::model::{ColumnModel, ColumnType};
use crate::registry::{DatePickerHook, HandlerRegistry, SelectOption};

/// The `type` of an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Hidden,
    Number,
    Date,
}

impl InputType {
    /// The `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Hidden => "hidden",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// The element a widget is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// `input` of the given type.
    Input(InputType),
    /// `select` with options.
    Select,
    /// Multi-line `textarea`.
    Textarea,
}

impl WidgetKind {
    /// The element tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Select => "select",
            Self::Textarea => "textarea",
        }
    }
}

/// Where the widget goes in its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The widget replaces the cell content.
    Replace,
    /// The widget is added after the existing content.
    Append,
    /// The widget replaces the cell content before any date-picker hook runs,
    /// so the hook sees a live element.
    PreInserted,
}

/// A widget to be installed into a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub kind: WidgetKind,
    /// Field name, copied from the column.
    pub name: Option<String>,
    /// Style class: the column's override or the configured default.
    pub class: String,
    /// Initial value (for selects, the value of the pre-selected option).
    pub value: String,
    /// Options of a select, in order.
    pub options: Vec<SelectOption>,
    /// Index into `options` of the option to pre-select.
    pub selected: Option<usize>,
    pub placement: Placement,
}

/// Builds and installs editing widgets.
#[derive(Clone, Copy)]
pub struct FieldFactory<'a> {
    options: &'a InlineEditOptions,
    handlers: &'a HandlerRegistry,
    date_picker: Option<&'a DatePickerHook>,
}

impl<'a> FieldFactory<'a> {
    /// Creates a factory using the given class defaults, handler registry and
    /// global date-picker hook.
    pub fn new(
        options: &'a InlineEditOptions,
        handlers: &'a HandlerRegistry,
        date_picker: Option<&'a DatePickerHook>,
    ) -> Self {
        Self {
            options,
            handlers,
            date_picker,
        }
    }

    /// Describe the widget for `column`, whose cell displayed `original`.
    #[tracing::instrument(skip_all, target = "inline_edit::field", level = "trace", fields(column_type = %column.column_type()))]
    pub fn describe(&self, column: &ColumnModel, original: &str) -> WidgetDescriptor {
        let trimmed = original.trim();
        let class_or = |default: &str| column.css_class().unwrap_or(default).to_string();

        let mut descriptor = WidgetDescriptor {
            kind: WidgetKind::Input(InputType::Text),
            name: column.name().map(str::to_string),
            class: class_or(&self.options.input_field_class),
            value: trimmed.to_string(),
            options: Vec::new(),
            selected: None,
            placement: Placement::Replace,
        };

        match column.column_type() {
            ColumnType::Text => {}
            // The picker decides the final input type once the element is live.
            ColumnType::Date => descriptor.placement = Placement::PreInserted,
            ColumnType::Hidden => {
                descriptor.kind = WidgetKind::Input(InputType::Hidden);
                descriptor.placement = Placement::Append;
            }
            ColumnType::Number => descriptor.kind = WidgetKind::Input(InputType::Number),
            ColumnType::Percentage => {
                descriptor.kind = WidgetKind::Input(InputType::Number);
                descriptor.value = strip_percent(trimmed).to_string();
            }
            ColumnType::Select => {
                descriptor.kind = WidgetKind::Select;
                descriptor.class = class_or(&self.options.select_field_class);
                descriptor.options = self.select_options(column);
                descriptor.selected = descriptor
                    .options
                    .iter()
                    .position(|option| option.label == trimmed);
                descriptor.value = descriptor
                    .selected
                    .and_then(|index| descriptor.options.get(index))
                    .or(descriptor.options.first())
                    .map(|option| option.value.clone())
                    .unwrap_or_default();
            }
            ColumnType::Textarea => {
                descriptor.kind = WidgetKind::Textarea;
                descriptor.class = class_or(&self.options.textarea_field_class);
            }
        }

        descriptor
    }

    /// Materialize `descriptor` into `column`'s cell and return the widget.
    pub fn install(
        &self,
        doc: &mut dyn Document,
        column: &ColumnModel,
        descriptor: &WidgetDescriptor,
    ) -> DocumentResult<ElementId> {
        let widget = doc.create_element(descriptor.kind.tag());
        if let WidgetKind::Input(input_type) = descriptor.kind {
            doc.set_attribute(widget, "type", input_type.as_str())?;
        }
        doc.set_attribute(widget, "class", &descriptor.class)?;
        if let Some(name) = &descriptor.name {
            doc.set_attribute(widget, "name", name)?;
        }

        if descriptor.kind == WidgetKind::Select {
            for (index, option) in descriptor.options.iter().enumerate() {
                let element = doc.create_element("option");
                doc.set_attribute(element, "value", &option.value)?;
                doc.set_content(element, &option.label)?;
                if descriptor.selected == Some(index) {
                    doc.set_attribute(element, "selected", "selected")?;
                }
                doc.append_child(widget, element)?;
            }
        } else {
            doc.set_value(widget, &descriptor.value)?;
        }

        let cell = column.element();
        match descriptor.placement {
            Placement::Replace => doc.replace_content(cell, widget)?,
            Placement::Append => doc.append_child(cell, widget)?,
            Placement::PreInserted => {
                doc.replace_content(cell, widget)?;
                self.attach_date_picker(doc, column, widget)?;
            }
        }

        tracing::trace!(
            target: "inline_edit::field",
            ?cell,
            ?widget,
            kind = ?descriptor.kind,
            "installed widget"
        );
        Ok(widget)
    }

    /// Describe and install the widget for `column` in one go.
    pub fn create_field(
        &self,
        doc: &mut dyn Document,
        column: &ColumnModel,
        original: &str,
    ) -> DocumentResult<ElementId> {
        let descriptor = self.describe(column, original);
        self.install(doc, column, &descriptor)
    }

    fn select_options(&self, column: &ColumnModel) -> Vec<SelectOption> {
        let name = column.data_source().unwrap_or_default();
        match self.handlers.data_source(name) {
            Some(source) => source(),
            None => {
                tracing::warn!(
                    target: "inline_edit::field",
                    data_source = name,
                    "data source is not registered, select left empty"
                );
                Vec::new()
            }
        }
    }

    /// Resolve the date picker: the column's own hook first, then the global
    /// one, then the native date input.
    fn attach_date_picker(
        &self,
        doc: &mut dyn Document,
        column: &ColumnModel,
        input: ElementId,
    ) -> DocumentResult<()> {
        let own = column
            .date_picker()
            .and_then(|name| self.handlers.date_picker(name));

        if let Some(hook) = own.or(self.date_picker) {
            hook(doc, input, column);
            return Ok(());
        }

        tracing::warn!(
            target: "inline_edit::field",
            date_picker = column.date_picker().unwrap_or_default(),
            "no date picker available, using native date input"
        );
        doc.set_attribute(input, "type", InputType::Date.as_str())
    }
}

/// Remove a trailing `%` (and whitespace before it) from a displayed
/// percentage.
fn strip_percent(value: &str) -> &str {
    match value.strip_suffix('%') {
        Some(number) => number.trim_end(),
        None => value,
    }
}
