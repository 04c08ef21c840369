//! Per-row edit state.

use inline_edit_core::ElementId;

use super::column::ColumnModel;
use crate::persistence::SaveTicket;

/// Position of a row among the scanned rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(usize);

impl RowId {
    /// Creates a row id from a scan position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The scan position.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Display mode of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RowState {
    /// Cells show their display content.
    #[default]
    Viewing,
    /// Cells hold editing widgets.
    Editing,
}

/// Groups the editable columns of one table row and tracks its mode.
///
/// All columns of a row switch between viewing and editing together.
#[derive(Debug, Clone)]
pub struct RowModel {
    element: ElementId,
    id: RowId,
    columns: Vec<ColumnModel>,
    state: RowState,
    pending_save: Option<SaveTicket>,
}

impl RowModel {
    /// Creates an empty row in viewing mode.
    pub fn new(element: ElementId, id: RowId) -> Self {
        Self {
            element,
            id,
            columns: Vec::new(),
            state: RowState::Viewing,
            pending_save: None,
        }
    }

    /// Adds a column, linking it back to this row.
    pub fn push_column(&mut self, mut column: ColumnModel) {
        column.set_row(self.id);
        self.columns.push(column);
    }

    /// The row element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// This row's id (its scan position).
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The editable columns in cell order.
    pub fn columns(&self) -> &[ColumnModel] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [ColumnModel] {
        &mut self.columns
    }

    /// Find the column rendered into `cell`.
    pub fn column_for_cell(&self, cell: ElementId) -> Option<&ColumnModel> {
        self.columns.iter().find(|c| c.element() == cell)
    }

    /// Find the first column with the given payload name.
    pub fn column_named(&self, name: &str) -> Option<&ColumnModel> {
        self.columns.iter().find(|c| c.name() == Some(name))
    }

    /// The current display mode.
    pub fn state(&self) -> RowState {
        self.state
    }

    /// Check if the row is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.state == RowState::Editing
    }

    /// The outstanding save, if one has been submitted and not yet answered.
    pub fn pending_save(&self) -> Option<SaveTicket> {
        self.pending_save
    }

    /// Check if a save is outstanding.
    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub(crate) fn set_state(&mut self, state: RowState) {
        self.state = state;
    }

    pub(crate) fn set_pending_save(&mut self, ticket: Option<SaveTicket>) {
        self.pending_save = ticket;
    }
}
