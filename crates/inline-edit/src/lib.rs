//! Inline editing for table rows.
//!
//! Cells opt into editing with namespaced markers such as
//! `inlineEdit-type="percentage"`. Once a table is attached, clicking a row's
//! edit trigger swaps each marked cell for an editing widget; cancel restores
//! the original content, and save validates the widgets, hands the named
//! fields to a [`SaveTransport`] and writes the new values back when the
//! save is accepted.
//!
//! # Modules
//!
//! - [`attribute`]: Reading and normalizing cell markers
//! - [`model`]: Row and column models, table scan
//! - [`registry`]: Named data sources, date pickers and validators
//! - [`validator`]: Validation states and built-in validators
//! - [`field`]: Widget generation per column type
//! - [`persistence`]: Save requests, responses and transports
//! - [`controller`]: The edit lifecycle ([`InlineEdit`])
//!
//! # Example
//!
//! ```
//! use inline_edit::prelude::*;
//! use inline_edit_core::{Document, ElementTree};
//! use serde_json::json;
//!
//! let mut doc = ElementTree::new();
//! let table = doc.create_element("table");
//! let row = doc.append_element(table, "tr").unwrap();
//! let cell = doc.append_element(row, "td").unwrap();
//! doc.set_attribute(cell, "inlineEdit-type", "percentage").unwrap();
//! doc.set_attribute(cell, "inlineEdit-name", "discount").unwrap();
//! doc.set_content(cell, "42%").unwrap();
//!
//! let transport = ManualTransport::new();
//! let config = InlineEditConfig::new().with_save_url("/discounts/save");
//! let mut table_edit = InlineEdit::attach(doc, table, config, transport.clone()).unwrap();
//!
//! let id = table_edit.rows()[0].id();
//! table_edit.edit(id).unwrap();
//! let widget = table_edit.rows()[0].columns()[0].widget().unwrap();
//! table_edit.document_mut().set_value(widget, "50").unwrap();
//! table_edit.save(id).unwrap();
//!
//! let pending = transport.next().unwrap();
//! assert_eq!(pending.request.payload.get("discount"), Some("50"));
//! pending.respond(SaveResponse::from_json(json!({"success": true})));
//!
//! table_edit.process_completions().unwrap();
//! assert_eq!(table_edit.document().content(cell).unwrap(), "50%");
//! ```

pub mod attribute;
pub mod config;
pub mod controller;
mod error;
pub mod field;
pub mod model;
pub mod persistence;
pub mod prelude;
pub mod registry;
pub mod validator;

pub use attribute::AttributeReader;
pub use config::{InlineEditConfig, InlineEditOptions};
pub use controller::{EditOutcome, IgnoreReason, InlineEdit, SaveEvent, TransportFailure};
pub use error::{ConfigError, InlineEditError, Result, UnsupportedColumnType};
pub use field::{FieldFactory, InputType, Placement, WidgetDescriptor, WidgetKind};
pub use model::{ColumnModel, ColumnType, RowId, RowModel, RowState};
pub use persistence::{
    ManualTransport, Payload, PendingSave, SaveCompletion, SaveReply, SaveRequest, SaveResponse,
    SaveTicket, SaveTransport, TransportError,
};
pub use registry::{DataSource, DatePickerHook, HandlerRegistry, SelectOption};
pub use validator::{ValidationFailure, ValidationState, Validator};
