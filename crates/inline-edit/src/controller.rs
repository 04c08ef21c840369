//! The row edit lifecycle.
//!
//! [`InlineEdit`] owns a document, scans one table in it and then drives each
//! row through its two states:
//!
//! ```text
//!            edit                         save (validated, submitted)
//! Viewing ─────────▶ Editing ────────────────────────────▶ Editing + save in flight
//!    ▲                │   ▲                                         │
//!    │     cancel     │   │   rejected by application / transport   │
//!    └────────────────┘   └─────────────────────────────────────────┤
//!    ▲                                                              │
//!    └───────────────────── accepted by application ────────────────┘
//! ```
//!
//! Requests that do not fit the row's state (editing a row twice, saving a
//! row that is not being edited, ...) are ignored and reported as
//! [`EditOutcome::Ignored`]. Only a document that no longer contains the
//! elements the models point at produces an error.
//!
//! # Threading
//!
//! The controller is used from one (UI) thread. Saves are asynchronous: the
//! transport answers through a channel and the answers are applied when the
//! host calls [`InlineEdit::process_completions`] or
//! [`InlineEdit::wait_for_completion`].
//!
//! # Example
//!
//! ```
//! use inline_edit::prelude::*;
//! use inline_edit_core::{Document, ElementTree};
//!
//! let mut doc = ElementTree::new();
//! let table = doc.create_element("table");
//! let row = doc.append_element(table, "tr").unwrap();
//! let cell = doc.append_element(row, "td").unwrap();
//! doc.set_attribute(cell, "inlineEdit-type", "text").unwrap();
//! doc.set_attribute(cell, "inlineEdit-name", "title").unwrap();
//! doc.set_content(cell, "Widget").unwrap();
//!
//! let transport = ManualTransport::new();
//! let mut table_edit =
//!     InlineEdit::attach(doc, table, InlineEditConfig::new(), transport.clone()).unwrap();
//!
//! let id = table_edit.rows()[0].id();
//! assert_eq!(table_edit.edit(id).unwrap(), EditOutcome::Entered);
//! assert!(matches!(table_edit.save(id).unwrap(), EditOutcome::Submitted(_)));
//! assert_eq!(transport.pending_count(), 1);
//! ```

use std::fmt;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use inline_edit_core::{Document, DocumentResult, DocumentTreeDebug, ElementId, Signal};

use crate::attribute::AttributeReader;
use crate::config::{InlineEditConfig, InlineEditOptions};
use crate::error::Result;
use crate::field::{FieldFactory, Placement};
use crate::model::{ColumnModel, ColumnType, RowId, RowModel, RowState, scan};
use crate::persistence::{
    Payload, SaveCompletion, SaveReply, SaveRequest, SaveResponse, SaveTicket, SaveTransport,
    TransportError,
};
use crate::validator::{ValidationFailure, validate_row};

/// Arguments of the save success and save failure signals.
#[derive(Debug, Clone)]
pub struct SaveEvent {
    /// The row that was saved.
    pub row: RowId,
    /// The application's answer.
    pub response: SaveResponse,
}

/// Arguments of the transport failure signal.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    /// The row that was being saved.
    pub row: RowId,
    /// What went wrong.
    pub error: TransportError,
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Edit requested on a row that is already being edited.
    AlreadyEditing,
    /// Save or cancel requested on a row that is not being edited.
    NotEditing,
    /// Save or cancel requested while the row's save is outstanding.
    SaveInFlight,
    /// The request does not belong to any scanned row.
    UnknownRow,
    /// The clicked element is not inside an edit, save or cancel trigger.
    NotATrigger,
}

/// What a lifecycle request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The row switched to edit mode.
    Entered,
    /// The row switched back to view mode with its original content.
    Cancelled,
    /// The row passed validation and its save was handed to the transport.
    Submitted(SaveTicket),
    /// A column failed validation; the row stays in edit mode.
    ValidationFailed(ValidationFailure),
    /// The request did not apply.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Edit,
    Save,
    Cancel,
}

/// Inline editing for the rows of one table.
pub struct InlineEdit<D: Document> {
    document: D,
    root: ElementId,
    config: InlineEditConfig,
    rows: Vec<RowModel>,
    transport: Box<dyn SaveTransport>,
    completion_tx: Sender<SaveCompletion>,
    completion_rx: Receiver<SaveCompletion>,
    next_ticket: u64,
    save_succeeded: Signal<SaveEvent>,
    save_failed: Signal<SaveEvent>,
    transport_failed: Signal<TransportFailure>,
}

impl<D: Document> InlineEdit<D> {
    /// Make the rows under `root` editable.
    ///
    /// Shows every edit container and hides every save container under the
    /// root, then scans the rows once. Callbacks set on the configuration are
    /// connected to the corresponding signals.
    pub fn attach<T>(document: D, root: ElementId, config: InlineEditConfig, transport: T) -> Result<Self>
    where
        T: SaveTransport + 'static,
    {
        let mut document = document;
        let options = config.options();

        for container in document.find_by_class(root, &options.save_container_class)? {
            document.set_visible(container, false)?;
        }
        for container in document.find_by_class(root, &options.edit_container_class)? {
            document.set_visible(container, true)?;
        }

        let reader = AttributeReader::new(options.attribute_prefix.clone());
        let rows = scan(&document, root, &reader)?;

        let (completion_tx, completion_rx) = crossbeam_channel::unbounded();
        let save_succeeded = Signal::new();
        let save_failed = Signal::new();
        let transport_failed = Signal::new();
        if let Some(callback) = config.save_successful_callback() {
            save_succeeded.connect_shared(callback);
        }
        if let Some(callback) = config.save_failed_callback() {
            save_failed.connect_shared(callback);
        }
        if let Some(callback) = config.ajax_failed_callback() {
            transport_failed.connect_shared(callback);
        }

        tracing::debug!(
            target: "inline_edit::controller",
            rows = rows.len(),
            editable_columns = rows.iter().map(|r| r.columns().len()).sum::<usize>(),
            "attached to table"
        );

        Ok(Self {
            document,
            root,
            config,
            rows,
            transport: Box::new(transport),
            completion_tx,
            completion_rx,
            next_ticket: 1,
            save_succeeded,
            save_failed,
            transport_failed,
        })
    }

    /// Handle a click on `target`.
    ///
    /// The click bubbles from the target through its ancestors to the first
    /// element carrying the edit, save or cancel trigger class, and acts on the
    /// row containing that trigger.
    #[tracing::instrument(skip(self), target = "inline_edit::controller", level = "trace")]
    pub fn handle_click(&mut self, target: ElementId) -> Result<EditOutcome> {
        let Some((trigger, element)) = self.find_trigger(target)? else {
            return Ok(EditOutcome::Ignored(IgnoreReason::NotATrigger));
        };

        let row = self
            .document
            .closest(element, "tr")?
            .and_then(|row_element| self.row_for_element(row_element))
            .map(RowModel::id);
        let Some(row) = row else {
            tracing::debug!(target: "inline_edit::controller", ?trigger, "trigger outside any scanned row");
            return Ok(EditOutcome::Ignored(IgnoreReason::UnknownRow));
        };

        match trigger {
            Trigger::Edit => self.edit(row),
            Trigger::Save => self.save(row),
            Trigger::Cancel => self.cancel(row),
        }
    }

    /// Switch a row to edit mode.
    ///
    /// Either every column gets its widget or none does: if the document
    /// fails partway, the columns already opened are restored and the row
    /// stays in view mode.
    pub fn edit(&mut self, row: RowId) -> Result<EditOutcome> {
        let Self {
            document,
            config,
            rows,
            ..
        } = self;
        let Some(row_model) = rows.get_mut(row.index()) else {
            return Ok(ignored(row, IgnoreReason::UnknownRow));
        };
        if row_model.is_editing() {
            return Ok(ignored(row, IgnoreReason::AlreadyEditing));
        }

        let factory = FieldFactory::new(config.options(), config.handlers(), config.date_picker());
        let opened = row_model
            .columns_mut()
            .iter_mut()
            .try_for_each(|column| open_column(document, &factory, column));
        if let Err(err) = opened {
            tracing::warn!(target: "inline_edit::controller", row = row.index(), %err, "edit aborted, row left in view mode");
            for column in row_model.columns_mut() {
                if let Err(restore_err) = close_column(document, column) {
                    tracing::warn!(
                        target: "inline_edit::controller",
                        row = row.index(),
                        column = column.index_in_row(),
                        %restore_err,
                        "cell not restored"
                    );
                }
            }
            return Err(err.into());
        }

        row_model.set_state(RowState::Editing);
        show_affordances(document, config.options(), row_model.element(), RowState::Editing)?;

        tracing::debug!(target: "inline_edit::controller", row = row.index(), "row entered edit mode");
        trace_row(document, row_model.element());
        Ok(EditOutcome::Entered)
    }

    /// Leave edit mode, restoring every cell to its content from before the
    /// edit.
    pub fn cancel(&mut self, row: RowId) -> Result<EditOutcome> {
        let Self {
            document,
            config,
            rows,
            ..
        } = self;
        let Some(row_model) = rows.get_mut(row.index()) else {
            return Ok(ignored(row, IgnoreReason::UnknownRow));
        };
        if !row_model.is_editing() {
            return Ok(ignored(row, IgnoreReason::NotEditing));
        }
        if row_model.is_saving() {
            return Ok(ignored(row, IgnoreReason::SaveInFlight));
        }

        for column in row_model.columns_mut() {
            close_column(document, column)?;
        }

        row_model.set_state(RowState::Viewing);
        show_affordances(document, config.options(), row_model.element(), RowState::Viewing)?;

        tracing::debug!(target: "inline_edit::controller", row = row.index(), "edit cancelled");
        Ok(EditOutcome::Cancelled)
    }

    /// Validate a row and hand its fields to the transport.
    ///
    /// The row stays in edit mode until the answer is processed. While the
    /// save is outstanding the row's save triggers are disabled and further
    /// save or cancel requests are ignored.
    pub fn save(&mut self, row: RowId) -> Result<EditOutcome> {
        let Self {
            document,
            config,
            rows,
            transport,
            completion_tx,
            next_ticket,
            ..
        } = self;
        let Some(row_model) = rows.get_mut(row.index()) else {
            return Ok(ignored(row, IgnoreReason::UnknownRow));
        };
        if !row_model.is_editing() {
            return Ok(ignored(row, IgnoreReason::NotEditing));
        }
        if row_model.is_saving() {
            return Ok(ignored(row, IgnoreReason::SaveInFlight));
        }

        if let Some(failure) = validate_row(document, row_model, config.handlers())? {
            tracing::debug!(
                target: "inline_edit::controller",
                row = row.index(),
                column = failure.column,
                validator = %failure.validator,
                state = %failure.state,
                "validation failed, row not saved"
            );
            return Ok(EditOutcome::ValidationFailed(failure));
        }

        let payload = build_payload(document, row_model)?;
        let ticket = SaveTicket::new(*next_ticket);
        *next_ticket += 1;

        row_model.set_pending_save(Some(ticket));
        for trigger in document.find_by_class(row_model.element(), &config.options().save_button_class)? {
            document.set_attribute(trigger, "disabled", "disabled")?;
        }

        tracing::debug!(
            target: "inline_edit::controller",
            row = row.index(),
            %ticket,
            fields = payload.len(),
            "submitting save"
        );
        let request = SaveRequest {
            endpoint: config.options().save_button_url.clone(),
            payload,
        };
        transport.save(request, SaveReply::new(ticket, row, completion_tx.clone()));

        Ok(EditOutcome::Submitted(ticket))
    }

    /// Apply every save answer that has arrived, without blocking.
    ///
    /// Returns the number of answers applied to their rows.
    pub fn process_completions(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if self.apply_completion(completion)? {
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Wait up to `timeout` for a save answer, then apply everything that has
    /// arrived.
    ///
    /// Returns the number of answers applied; zero if the wait timed out.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> Result<usize> {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => {
                let first = usize::from(self.apply_completion(completion)?);
                Ok(first + self.process_completions()?)
            }
            // The controller holds a sender, so the channel never disconnects.
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => Ok(0),
        }
    }

    fn apply_completion(&mut self, completion: SaveCompletion) -> Result<bool> {
        let SaveCompletion { ticket, row, result } = completion;
        let Self {
            document,
            config,
            rows,
            save_succeeded,
            save_failed,
            transport_failed,
            ..
        } = self;

        let Some(row_model) = rows.get_mut(row.index()) else {
            tracing::debug!(target: "inline_edit::controller", %ticket, "answer for unknown row dropped");
            return Ok(false);
        };
        if row_model.pending_save() != Some(ticket) {
            tracing::debug!(
                target: "inline_edit::controller",
                row = row.index(),
                %ticket,
                "stale save answer dropped"
            );
            return Ok(false);
        }

        row_model.set_pending_save(None);
        for trigger in document.find_by_class(row_model.element(), &config.options().save_button_class)? {
            document.remove_attribute(trigger, "disabled")?;
        }

        match result {
            Ok(response) if response.success => {
                reconcile(document, row_model)?;
                row_model.set_state(RowState::Viewing);
                show_affordances(document, config.options(), row_model.element(), RowState::Viewing)?;
                tracing::debug!(target: "inline_edit::controller", row = row.index(), %ticket, "row saved");
                save_succeeded.emit(SaveEvent { row, response });
            }
            Ok(response) => {
                tracing::debug!(target: "inline_edit::controller", row = row.index(), %ticket, "save rejected");
                save_failed.emit(SaveEvent { row, response });
            }
            Err(error) => {
                tracing::warn!(target: "inline_edit::controller", row = row.index(), %ticket, %error, "save transport failed");
                transport_failed.emit(TransportFailure { row, error });
            }
        }
        Ok(true)
    }

    fn find_trigger(&self, target: ElementId) -> Result<Option<(Trigger, ElementId)>> {
        let options = self.config.options();
        let mut path = vec![target];
        path.extend(self.document.ancestors(target)?);

        for element in path {
            let trigger = if self.document.has_class(element, &options.edit_button_class)? {
                Trigger::Edit
            } else if self.document.has_class(element, &options.save_button_class)? {
                Trigger::Save
            } else if self.document.has_class(element, &options.cancel_button_class)? {
                Trigger::Cancel
            } else {
                continue;
            };
            return Ok(Some((trigger, element)));
        }
        Ok(None)
    }

    /// The scanned rows, in document order.
    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    /// Get a row by id.
    pub fn row(&self, id: RowId) -> Option<&RowModel> {
        self.rows.get(id.index())
    }

    /// Get the row model of a `tr` element.
    pub fn row_for_element(&self, element: ElementId) -> Option<&RowModel> {
        self.rows.iter().find(|row| row.element() == element)
    }

    /// The table root.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the document, e.g. to type into a widget.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Give the document back.
    pub fn into_document(self) -> D {
        self.document
    }

    /// The configuration.
    pub fn config(&self) -> &InlineEditConfig {
        &self.config
    }

    /// Emitted after an accepted save has been applied to the row.
    pub fn save_succeeded(&self) -> &Signal<SaveEvent> {
        &self.save_succeeded
    }

    /// Emitted when the application rejects a save.
    pub fn save_failed(&self) -> &Signal<SaveEvent> {
        &self.save_failed
    }

    /// Emitted when a save could not be completed.
    pub fn transport_failed(&self) -> &Signal<TransportFailure> {
        &self.transport_failed
    }
}

impl<D: Document> fmt::Debug for InlineEdit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineEdit")
            .field("root", &self.root)
            .field("rows", &self.rows.len())
            .field("config", &self.config)
            .field("next_ticket", &self.next_ticket)
            .finish_non_exhaustive()
    }
}

fn ignored(row: RowId, reason: IgnoreReason) -> EditOutcome {
    tracing::debug!(target: "inline_edit::controller", row = row.index(), ?reason, "request ignored");
    EditOutcome::Ignored(reason)
}

/// Show the affordance group matching `state` in one row and hide the other.
fn show_affordances(
    document: &mut dyn Document,
    options: &InlineEditOptions,
    row: ElementId,
    state: RowState,
) -> Result<()> {
    let editing = state == RowState::Editing;
    for container in document.find_by_class(row, &options.edit_container_class)? {
        document.set_visible(container, !editing)?;
    }
    for container in document.find_by_class(row, &options.save_container_class)? {
        document.set_visible(container, editing)?;
    }
    Ok(())
}

/// Capture a cell's content and put its editing widget in place.
fn open_column(
    document: &mut dyn Document,
    factory: &FieldFactory<'_>,
    column: &mut ColumnModel,
) -> DocumentResult<()> {
    let cell = column.element();
    let original = document.text_content(cell)?;
    let snapshot = document.snapshot_content(cell)?;
    let descriptor = factory.describe(column, &original);
    column.capture_original(original, snapshot);

    // Replaced markup is kept alive off-tree until cancel or save.
    if descriptor.placement != Placement::Append {
        document.detach_children(cell)?;
    }
    let widget = factory.install(document, column, &descriptor)?;
    column.set_widget(Some(widget));
    Ok(())
}

/// Drop a column's widget and put its captured content back. Columns that
/// were never opened are left untouched.
fn close_column(document: &mut dyn Document, column: &mut ColumnModel) -> DocumentResult<()> {
    column.set_widget(None);
    match column.take_original_content() {
        Some(snapshot) => document.restore_content(column.element(), &snapshot),
        None => Ok(()),
    }
}

/// Collect the named columns' widget values, in column order.
fn build_payload(document: &dyn Document, row: &RowModel) -> Result<Payload> {
    let mut payload = Payload::new();
    for column in row.columns() {
        let (Some(name), Some(widget)) = (column.name(), column.widget()) else {
            continue;
        };
        // A select without options has no value to submit.
        if let Some(value) = document.value(widget)? {
            payload.push(name, value);
        }
    }
    Ok(payload)
}

/// Replace every widget of an accepted row with its value as display text.
fn reconcile(document: &mut dyn Document, row: &mut RowModel) -> Result<()> {
    for column in row.columns_mut() {
        let mut text = match column.widget() {
            Some(widget) if column.column_type() == ColumnType::Select => {
                match document.selected_option(widget)? {
                    Some(option) => document.content(option)?,
                    None => String::new(),
                }
            }
            Some(widget) => document.value(widget)?.unwrap_or_default(),
            None => String::new(),
        };
        if column.column_type() == ColumnType::Percentage {
            text.push('%');
        }

        document.set_content(column.element(), &text)?;
        column.set_widget(None);
        if let Some(snapshot) = column.take_original_content() {
            document.release_snapshot(&snapshot)?;
        }
    }
    Ok(())
}

fn trace_row(document: &dyn Document, row: ElementId) {
    if !tracing::enabled!(target: "inline_edit::controller", tracing::Level::TRACE) {
        return;
    }
    match DocumentTreeDebug::new().format(document, row) {
        Ok(tree) => tracing::trace!(target: "inline_edit::controller", "row after edit:\n{tree}"),
        Err(err) => tracing::trace!(target: "inline_edit::controller", %err, "row not printable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::ManualTransport;
    use inline_edit_core::ElementTree;
    use serde_json::json;

    struct Fixture {
        table: InlineEdit<ElementTree>,
        transport: ManualTransport,
        cell: ElementId,
        edit_button: ElementId,
        save_button: ElementId,
        cancel_button: ElementId,
    }

    fn fixture() -> Fixture {
        let mut doc = ElementTree::new();
        let table = doc.create_element("table");
        let tr = doc.append_element(table, "tr").unwrap();
        let cell = doc.append_element(tr, "td").unwrap();
        doc.set_attribute(cell, "inlineEdit-type", "text").unwrap();
        doc.set_attribute(cell, "inlineEdit-name", "title").unwrap();
        doc.set_content(cell, " Widget ").unwrap();

        let actions = doc.append_element(tr, "td").unwrap();
        let edit_group = doc.append_element(actions, "span").unwrap();
        doc.set_attribute(edit_group, "class", "inlineEdit-edit-container").unwrap();
        let edit_button = doc.append_element(edit_group, "button").unwrap();
        doc.set_attribute(edit_button, "class", "inlineEdit-action-edit").unwrap();
        let save_group = doc.append_element(actions, "span").unwrap();
        doc.set_attribute(save_group, "class", "inlineEdit-save-container").unwrap();
        let save_button = doc.append_element(save_group, "button").unwrap();
        doc.set_attribute(save_button, "class", "inlineEdit-action-save").unwrap();
        let cancel_button = doc.append_element(save_group, "button").unwrap();
        doc.set_attribute(cancel_button, "class", "inlineEdit-action-cancel").unwrap();

        let transport = ManualTransport::new();
        let table = InlineEdit::attach(doc, table, InlineEditConfig::new(), transport.clone()).unwrap();
        Fixture {
            table,
            transport,
            cell,
            edit_button,
            save_button,
            cancel_button,
        }
    }

    #[test]
    fn test_attach_hides_save_containers() {
        let f = fixture();
        let doc = f.table.document();
        assert!(doc.is_visible(doc.parent(f.edit_button).unwrap().unwrap()).unwrap());
        assert!(!doc.is_visible(doc.parent(f.save_button).unwrap().unwrap()).unwrap());
        assert_eq!(f.table.rows().len(), 1);
        assert_eq!(f.table.rows()[0].columns().len(), 1);
    }

    #[test]
    fn test_click_bubbles_to_trigger() {
        let mut f = fixture();
        let icon = f.table.document_mut().append_element(f.edit_button, "i").unwrap();

        assert_eq!(f.table.handle_click(icon).unwrap(), EditOutcome::Entered);
        assert_eq!(
            f.table.handle_click(f.cell).unwrap(),
            EditOutcome::Ignored(IgnoreReason::NotATrigger)
        );

        let doc = f.table.document();
        assert!(!doc.is_visible(doc.parent(f.edit_button).unwrap().unwrap()).unwrap());
        assert!(doc.is_visible(doc.parent(f.save_button).unwrap().unwrap()).unwrap());
    }

    #[test]
    fn test_double_submit_is_guarded() {
        let mut f = fixture();
        f.table.handle_click(f.edit_button).unwrap();

        let first = f.table.handle_click(f.save_button).unwrap();
        assert!(matches!(first, EditOutcome::Submitted(_)));
        assert_eq!(
            f.table.document().attribute(f.save_button, "disabled").unwrap().as_deref(),
            Some("disabled")
        );
        assert_eq!(
            f.table.handle_click(f.save_button).unwrap(),
            EditOutcome::Ignored(IgnoreReason::SaveInFlight)
        );
        assert_eq!(
            f.table.handle_click(f.cancel_button).unwrap(),
            EditOutcome::Ignored(IgnoreReason::SaveInFlight)
        );
        assert_eq!(f.transport.submitted_count(), 1);

        f.transport
            .next()
            .unwrap()
            .respond(SaveResponse::from_json(json!({"success": false})));
        assert_eq!(f.table.process_completions().unwrap(), 1);
        assert_eq!(f.table.document().attribute(f.save_button, "disabled").unwrap(), None);
        assert!(f.table.rows()[0].is_editing());
        assert!(!f.table.rows()[0].is_saving());
    }

    #[test]
    fn test_stale_answer_is_dropped() {
        let mut f = fixture();
        let row = f.table.rows()[0].id();
        f.table.edit(row).unwrap();
        f.table.save(row).unwrap();

        f.table
            .completion_tx
            .send(SaveCompletion {
                ticket: SaveTicket::new(99),
                row,
                result: Ok(SaveResponse::succeeded(json!({"success": true}))),
            })
            .unwrap();

        assert_eq!(f.table.process_completions().unwrap(), 0);
        assert!(f.table.rows()[0].is_saving());
    }

    #[test]
    fn test_unknown_row() {
        let mut f = fixture();
        assert_eq!(
            f.table.edit(RowId::new(5)).unwrap(),
            EditOutcome::Ignored(IgnoreReason::UnknownRow)
        );

        let stray = f.table.document_mut().create_element("button");
        f.table
            .document_mut()
            .set_attribute(stray, "class", "inlineEdit-action-edit")
            .unwrap();
        assert_eq!(
            f.table.handle_click(stray).unwrap(),
            EditOutcome::Ignored(IgnoreReason::UnknownRow)
        );
    }

    #[test]
    fn test_wait_for_completion_times_out() {
        let mut f = fixture();
        assert_eq!(f.table.wait_for_completion(Duration::from_millis(10)).unwrap(), 0);
    }
}
