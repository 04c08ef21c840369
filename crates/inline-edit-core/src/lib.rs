//! Core systems for inline table editing.
//!
//! This crate provides the foundational pieces the edit lifecycle is built on:
//!
//! - **Document Model**: The [`Document`] capability trait and the arena-backed
//!   [`ElementTree`] implementation
//! - **Signal/Slot System**: Type-safe callbacks for save notifications
//! - **Diagnostics**: Tracing targets and element tree visualization
//!
//! # Signal/Slot Example
//!
//! ```
//! use inline_edit_core::Signal;
//!
//! let saved = Signal::<u32>::new();
//! let conn_id = saved.connect(|row| println!("Row {} saved", row));
//! saved.emit(3);
//! saved.disconnect(conn_id);
//! ```

pub mod document;
mod error;
pub mod logging;
pub mod signal;

pub use document::{ContentSnapshot, Document, ElementId, ElementTree};
pub use error::{DocumentError, DocumentResult};
pub use logging::{DocumentTreeDebug, TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionId, Signal, Slot};
