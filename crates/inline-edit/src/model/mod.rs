//! Row and column models for an editable table.
//!
//! The models are the system of record for the edit lifecycle: a
//! [`RowModel`] owns the [`ColumnModel`]s of its editable cells and knows
//! whether the row is being viewed or edited. The document is only a
//! rendering of that state.
//!
//! Models are built exactly once by [`scan`] when a table is attached and
//! live as long as the table view; only their edit state and original-value
//! snapshots change afterwards.

mod column;
mod row;
mod scan;

pub use column::{ColumnModel, ColumnType};
pub use row::{RowId, RowModel, RowState};
pub use scan::scan;
