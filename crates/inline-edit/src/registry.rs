//! Named handlers referenced from cell markers.
//!
//! A cell names its data source, date picker and validator by string. The
//! [`HandlerRegistry`] maps those names to typed handlers; the host fills it
//! in before attaching a table and the controller looks names up at the
//! moment it needs them. An unregistered name is not an error, just `None`.
//!
//! # Example
//!
//! ```
//! use inline_edit::registry::{HandlerRegistry, SelectOption};
//! use inline_edit::validator::RequiredValidator;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register_data_source("priorities", || {
//!     vec![SelectOption::new("1", "Low"), SelectOption::new("2", "High")]
//! });
//! registry.register_validator("required", RequiredValidator);
//!
//! assert_eq!(registry.data_source("priorities").map(|ds| ds().len()), Some(2));
//! assert!(registry.validator("missing").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use inline_edit_core::{Document, ElementId};

use crate::model::ColumnModel;
use crate::validator::Validator;

/// One entry of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    /// The submitted value.
    pub value: String,
    /// The displayed label.
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Produces the options of a select column, in display order.
pub type DataSource = Arc<dyn Fn() -> Vec<SelectOption> + Send + Sync>;

/// Decorates a freshly inserted date input, e.g. by attaching a picker.
///
/// Called with the document, the input element (already in the cell) and
/// the column being edited.
pub type DatePickerHook = Arc<dyn Fn(&mut dyn Document, ElementId, &ColumnModel) + Send + Sync>;

/// Maps marker names to data sources, date-picker hooks and validators.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    data_sources: HashMap<String, DataSource>,
    date_pickers: HashMap<String, DatePickerHook>,
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a data source for select columns, replacing any previous one
    /// with the same name.
    pub fn register_data_source<F>(&mut self, name: impl Into<String>, source: F) -> &mut Self
    where
        F: Fn() -> Vec<SelectOption> + Send + Sync + 'static,
    {
        self.data_sources.insert(name.into(), Arc::new(source));
        self
    }

    /// Register a date-picker hook for date columns.
    pub fn register_date_picker<F>(&mut self, name: impl Into<String>, hook: F) -> &mut Self
    where
        F: Fn(&mut dyn Document, ElementId, &ColumnModel) + Send + Sync + 'static,
    {
        self.date_pickers.insert(name.into(), Arc::new(hook));
        self
    }

    /// Register a validator.
    pub fn register_validator<V>(&mut self, name: impl Into<String>, validator: V) -> &mut Self
    where
        V: Validator + 'static,
    {
        self.validators.insert(name.into(), Arc::new(validator));
        self
    }

    /// Look up a data source.
    pub fn data_source(&self, name: &str) -> Option<&DataSource> {
        self.data_sources.get(name)
    }

    /// Look up a date-picker hook.
    pub fn date_picker(&self, name: &str) -> Option<&DatePickerHook> {
        self.date_pickers.get(name)
    }

    /// Look up a validator.
    pub fn validator(&self, name: &str) -> Option<&Arc<dyn Validator>> {
        self.validators.get(name)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("data_sources", &sorted_names(&self.data_sources))
            .field("date_pickers", &sorted_names(&self.date_pickers))
            .field("validators", &sorted_names(&self.validators))
            .finish()
    }
}

fn sorted_names<V>(map: &HashMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

static_assertions::assert_impl_all!(HandlerRegistry: Send, Sync, Clone);
