//! Configuration for an editable table.
//!
//! [`InlineEditOptions`] holds the plain settings (marker prefix, save URL,
//! trigger and widget class names) and can be loaded from TOML or JSON.
//! [`InlineEditConfig`] wraps the options together with everything that only
//! exists in code: the handler registry, the global date-picker hook and the
//! save callbacks.
//!
//! # Example
//!
//! ```
//! use inline_edit::InlineEditConfig;
//!
//! let config = InlineEditConfig::from_toml_str(r#"
//!     save_button_url = "/orders/save"
//!     edit_button_class = "btn-edit"
//! "#)
//! .unwrap()
//! .on_save_successful(|event| println!("row {:?} saved", event.row));
//!
//! assert_eq!(config.options().save_button_url, "/orders/save");
//! assert_eq!(config.options().attribute_prefix, "inlineEdit-");
//! ```
//!
//! Option names may also be written in camelCase
//! (`attributePrefix`, `saveButtonURL`, ...). Unknown names are rejected.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use inline_edit_core::{Document, ElementId, Slot};
use serde::{Deserialize, Serialize};

use crate::controller::{SaveEvent, TransportFailure};
use crate::error::ConfigError;
use crate::model::ColumnModel;
use crate::registry::{DatePickerHook, HandlerRegistry};

/// Serializable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlineEditOptions {
    /// Prefix of the per-cell marker attributes.
    #[serde(alias = "attributePrefix")]
    pub attribute_prefix: String,
    /// Endpoint rows are saved to.
    #[serde(alias = "saveButtonURL")]
    pub save_button_url: String,
    /// Class of the elements that start editing a row.
    #[serde(alias = "editButtonClass")]
    pub edit_button_class: String,
    /// Class of the elements that save a row.
    #[serde(alias = "saveButtonClass")]
    pub save_button_class: String,
    /// Class of the elements that cancel editing.
    #[serde(alias = "cancelButtonClass")]
    pub cancel_button_class: String,
    /// Class of the group shown while a row is viewed.
    #[serde(alias = "editContainerClass")]
    pub edit_container_class: String,
    /// Class of the group shown while a row is edited.
    #[serde(alias = "saveContainerClass")]
    pub save_container_class: String,
    /// Default class of generated inputs.
    #[serde(alias = "inputFieldClass")]
    pub input_field_class: String,
    /// Default class of generated selects.
    #[serde(alias = "selectFieldClass")]
    pub select_field_class: String,
    /// Default class of generated textareas.
    #[serde(alias = "textareaFieldClass")]
    pub textarea_field_class: String,
}

impl Default for InlineEditOptions {
    fn default() -> Self {
        Self {
            attribute_prefix: "inlineEdit-".to_string(),
            save_button_url: "#".to_string(),
            edit_button_class: "inlineEdit-action-edit".to_string(),
            save_button_class: "inlineEdit-action-save".to_string(),
            cancel_button_class: "inlineEdit-action-cancel".to_string(),
            edit_container_class: "inlineEdit-edit-container".to_string(),
            save_container_class: "inlineEdit-save-container".to_string(),
            input_field_class: "inlineEdit-input".to_string(),
            select_field_class: "inlineEdit-select".to_string(),
            textarea_field_class: "inlineEdit-textarea".to_string(),
        }
    }
}

/// Complete configuration of an editable table.
#[derive(Clone, Default)]
pub struct InlineEditConfig {
    options: InlineEditOptions,
    handlers: HandlerRegistry,
    date_picker: Option<DatePickerHook>,
    on_save_successful: Option<Slot<SaveEvent>>,
    on_save_failed: Option<Slot<SaveEvent>>,
    on_ajax_failed: Option<Slot<TransportFailure>>,
}

impl InlineEditConfig {
    /// Creates a configuration with default options and no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from loaded options.
    pub fn from_options(options: InlineEditOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_options(toml::from_str(source)?))
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_options(serde_json::from_str(source)?))
    }

    /// Load options from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_config(path.as_ref())?)
    }

    /// Load options from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_config(path.as_ref())?)
    }

    /// Replace the options.
    pub fn with_options(mut self, options: InlineEditOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the save endpoint.
    pub fn with_save_url(mut self, url: impl Into<String>) -> Self {
        self.options.save_button_url = url.into();
        self
    }

    /// Set the marker attribute prefix.
    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.attribute_prefix = prefix.into();
        self
    }

    /// Replace the handler registry.
    pub fn with_handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    /// Set the date-picker hook used for date columns that do not name a
    /// registered hook of their own.
    pub fn with_date_picker<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut dyn Document, ElementId, &ColumnModel) + Send + Sync + 'static,
    {
        self.date_picker = Some(Arc::new(hook));
        self
    }

    /// Called after a save the application accepted has been applied.
    pub fn on_save_successful<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SaveEvent) + Send + Sync + 'static,
    {
        self.on_save_successful = Some(Arc::new(callback));
        self
    }

    /// Called when the application rejects a save.
    pub fn on_save_failed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SaveEvent) + Send + Sync + 'static,
    {
        self.on_save_failed = Some(Arc::new(callback));
        self
    }

    /// Called when a save could not be completed.
    pub fn on_ajax_failed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TransportFailure) + Send + Sync + 'static,
    {
        self.on_ajax_failed = Some(Arc::new(callback));
        self
    }

    /// The serializable options.
    pub fn options(&self) -> &InlineEditOptions {
        &self.options
    }

    /// Mutable access to the serializable options.
    pub fn options_mut(&mut self) -> &mut InlineEditOptions {
        &mut self.options
    }

    /// The handler registry.
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Mutable access to the handler registry.
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// The global date-picker hook.
    pub fn date_picker(&self) -> Option<&DatePickerHook> {
        self.date_picker.as_ref()
    }

    pub(crate) fn save_successful_callback(&self) -> Option<Slot<SaveEvent>> {
        self.on_save_successful.clone()
    }

    pub(crate) fn save_failed_callback(&self) -> Option<Slot<SaveEvent>> {
        self.on_save_failed.clone()
    }

    pub(crate) fn ajax_failed_callback(&self) -> Option<Slot<TransportFailure>> {
        self.on_ajax_failed.clone()
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl fmt::Debug for InlineEditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineEditConfig")
            .field("options", &self.options)
            .field("handlers", &self.handlers)
            .field("date_picker", &self.date_picker.is_some())
            .field("on_save_successful", &self.on_save_successful.is_some())
            .field("on_save_failed", &self.on_save_failed.is_some())
            .field("on_ajax_failed", &self.on_ajax_failed.is_some())
            .finish()
    }
}
