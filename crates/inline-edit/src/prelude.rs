//! Commonly used types.
//!
//! ```
//! use inline_edit::prelude::*;
//! ```

// ============================================================================
// Lifecycle
// ============================================================================

pub use crate::controller::{EditOutcome, IgnoreReason, InlineEdit, SaveEvent, TransportFailure};
pub use crate::model::{ColumnModel, ColumnType, RowId, RowModel, RowState};

// ============================================================================
// Configuration and Handlers
// ============================================================================

pub use crate::config::{InlineEditConfig, InlineEditOptions};
pub use crate::registry::{HandlerRegistry, SelectOption};
pub use crate::validator::{
    DoubleValidator, FnValidator, IntValidator, RegexValidator, RequiredValidator,
    ValidationState, Validator,
};

// ============================================================================
// Persistence
// ============================================================================

pub use crate::persistence::{
    ManualTransport, Payload, SaveRequest, SaveResponse, SaveTicket, SaveTransport, TransportError,
};
