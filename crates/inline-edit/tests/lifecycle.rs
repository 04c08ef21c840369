//! Integration tests for the row edit lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use inline_edit::InlineEditError;
use inline_edit::prelude::*;
use inline_edit_core::{Document, DocumentError, DocumentResult, ElementId, ElementTree};
use parking_lot::Mutex;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An orders table with one editable row and one header row.
struct Orders {
    table: InlineEdit<ElementTree>,
    transport: ManualTransport,
    row: RowId,
    id_cell: ElementId,
    title_cell: ElementId,
    qty_cell: ElementId,
    discount_cell: ElementId,
    priority_cell: ElementId,
    notes_cell: ElementId,
    untracked_cell: ElementId,
    edit_group: ElementId,
    save_group: ElementId,
    save_button: ElementId,
}

fn editable_cell(
    doc: &mut ElementTree,
    row: ElementId,
    column_type: &str,
    name: Option<&str>,
    content: &str,
) -> ElementId {
    let cell = doc.append_element(row, "td").unwrap();
    doc.set_attribute(cell, "inlineEdit-type", column_type).unwrap();
    if let Some(name) = name {
        doc.set_attribute(cell, "inlineEdit-name", name).unwrap();
    }
    doc.set_content(cell, content).unwrap();
    cell
}

fn orders(config: InlineEditConfig) -> Orders {
    orders_with_notes_validator(config, None)
}

fn orders_with_notes_validator(config: InlineEditConfig, notes_validator: Option<&str>) -> Orders {
    init_tracing();

    let mut doc = ElementTree::new();
    let table = doc.create_element("table");
    let header = doc.append_element(table, "tr").unwrap();
    for title in ["Id", "Title", "Qty", "Discount", "Priority", "Notes", "Ref", ""] {
        let th = doc.append_element(header, "th").unwrap();
        doc.set_content(th, title).unwrap();
    }

    let tbody = doc.append_element(table, "tbody").unwrap();
    let tr = doc.append_element(tbody, "tr").unwrap();
    let id_cell = editable_cell(&mut doc, tr, "hidden", Some("id"), "17");
    let title_cell = editable_cell(&mut doc, tr, "text", Some("title"), " Widget ");
    doc.set_attribute(title_cell, "inlineEdit-validator", "required").unwrap();
    let qty_cell = editable_cell(&mut doc, tr, "number", Some("qty"), "3");
    doc.set_attribute(qty_cell, "inlineEdit-validator", "quantity").unwrap();
    let discount_cell = editable_cell(&mut doc, tr, "percentage", Some("discount"), "42%");
    let priority_cell = editable_cell(&mut doc, tr, "select", Some("priority"), "High");
    doc.set_attribute(priority_cell, "inlineEdit-data", "priorities").unwrap();
    let notes_cell = editable_cell(&mut doc, tr, "textarea", Some("notes"), "fragile");
    if let Some(validator) = notes_validator {
        doc.set_attribute(notes_cell, "inlineEdit-validator", validator).unwrap();
    }
    let untracked_cell = editable_cell(&mut doc, tr, "text", None, "REF-1");

    let actions = doc.append_element(tr, "td").unwrap();
    let edit_group = doc.append_element(actions, "div").unwrap();
    doc.set_attribute(edit_group, "class", "inlineEdit-edit-container").unwrap();
    let edit_button = doc.append_element(edit_group, "a").unwrap();
    doc.set_attribute(edit_button, "class", "inlineEdit-action-edit").unwrap();
    let save_group = doc.append_element(actions, "div").unwrap();
    doc.set_attribute(save_group, "class", "inlineEdit-save-container").unwrap();
    let save_button = doc.append_element(save_group, "a").unwrap();
    doc.set_attribute(save_button, "class", "inlineEdit-action-save").unwrap();

    let mut config = config.with_save_url("/orders/save");
    config
        .handlers_mut()
        .register_data_source("priorities", || {
            vec![SelectOption::new("1", "Low"), SelectOption::new("2", "High")]
        })
        .register_validator("required", RequiredValidator)
        .register_validator("quantity", IntValidator::new(1, 99));

    let transport = ManualTransport::new();
    let table = InlineEdit::attach(doc, table, config, transport.clone()).unwrap();
    let row = table.row_for_element(tr).unwrap().id();

    Orders {
        table,
        transport,
        row,
        id_cell,
        title_cell,
        qty_cell,
        discount_cell,
        priority_cell,
        notes_cell,
        untracked_cell,
        edit_group,
        save_group,
        save_button,
    }
}

impl Orders {
    fn widget(&self, cell: ElementId) -> ElementId {
        self.table
            .row(self.row)
            .and_then(|row| row.column_for_cell(cell))
            .and_then(ColumnModel::widget)
            .unwrap()
    }

    fn type_into(&mut self, cell: ElementId, value: &str) {
        let widget = self.widget(cell);
        self.table.document_mut().set_value(widget, value).unwrap();
    }

    fn content(&self, cell: ElementId) -> String {
        self.table.document().content(cell).unwrap()
    }

    fn is_editing(&self) -> bool {
        self.table.row(self.row).unwrap().is_editing()
    }
}

#[test]
fn test_scan_builds_models_once() {
    let orders = orders(InlineEditConfig::new());

    // Header row, then the data row.
    assert_eq!(orders.table.rows().len(), 2);
    assert!(orders.table.rows()[0].columns().is_empty());

    let row = orders.table.row(orders.row).unwrap();
    let types: Vec<ColumnType> = row.columns().iter().map(ColumnModel::column_type).collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Hidden,
            ColumnType::Text,
            ColumnType::Number,
            ColumnType::Percentage,
            ColumnType::Select,
            ColumnType::Textarea,
            ColumnType::Text,
        ]
    );
    assert!(row.columns().iter().all(|c| c.original_value().is_none()));
    assert_eq!(row.state(), RowState::Viewing);
}

#[test]
fn test_edit_captures_originals_and_installs_widgets() {
    let mut orders = orders(InlineEditConfig::new());
    assert_eq!(orders.table.edit(orders.row).unwrap(), EditOutcome::Entered);
    assert!(orders.is_editing());

    let row = orders.table.row(orders.row).unwrap();
    let originals: Vec<&str> = row.columns().iter().filter_map(ColumnModel::original_value).collect();
    assert_eq!(originals, vec!["17", " Widget ", "3", "42%", "High", "fragile", "REF-1"]);

    let doc = orders.table.document();
    let title = orders.widget(orders.title_cell);
    assert_eq!(doc.tag(title).unwrap(), "input");
    assert_eq!(doc.value(title).unwrap().as_deref(), Some("Widget"));
    assert_eq!(doc.attribute(title, "class").unwrap().as_deref(), Some("inlineEdit-input"));

    let qty = orders.widget(orders.qty_cell);
    assert_eq!(doc.attribute(qty, "type").unwrap().as_deref(), Some("number"));

    let notes = orders.widget(orders.notes_cell);
    assert_eq!(doc.tag(notes).unwrap(), "textarea");
    assert_eq!(doc.value(notes).unwrap().as_deref(), Some("fragile"));

    // Affordances swapped.
    assert!(!doc.is_visible(orders.edit_group).unwrap());
    assert!(doc.is_visible(orders.save_group).unwrap());
}

#[test]
fn test_edit_twice_is_ignored() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    let widget = orders.widget(orders.title_cell);

    assert_eq!(
        orders.table.edit(orders.row).unwrap(),
        EditOutcome::Ignored(IgnoreReason::AlreadyEditing)
    );
    assert_eq!(orders.widget(orders.title_cell), widget);
    assert_eq!(
        orders.table.document().value(widget).unwrap().as_deref(),
        Some("Gadget")
    );
    let row = orders.table.row(orders.row).unwrap();
    assert_eq!(row.column_for_cell(orders.title_cell).unwrap().original_value(), Some(" Widget "));
}

#[test]
fn test_cancel_restores_original_content() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    orders.type_into(orders.discount_cell, "99");
    orders.type_into(orders.priority_cell, "1");

    assert_eq!(orders.table.cancel(orders.row).unwrap(), EditOutcome::Cancelled);
    assert!(!orders.is_editing());

    assert_eq!(orders.content(orders.title_cell), " Widget ");
    assert_eq!(orders.content(orders.discount_cell), "42%");
    assert_eq!(orders.content(orders.priority_cell), "High");
    assert_eq!(orders.content(orders.id_cell), "17");
    for cell in [orders.title_cell, orders.discount_cell, orders.id_cell] {
        assert!(orders.table.document().children(cell).unwrap().is_empty());
    }

    let doc = orders.table.document();
    assert!(doc.is_visible(orders.edit_group).unwrap());
    assert!(!doc.is_visible(orders.save_group).unwrap());

    // The row can be edited again from the restored content.
    assert_eq!(orders.table.edit(orders.row).unwrap(), EditOutcome::Entered);
}

/// Wraps the title in `<b>` and the priority label in `<span>`.
fn markup_cells(orders: &mut Orders) -> (ElementId, ElementId) {
    let doc = orders.table.document_mut();
    doc.set_content(orders.title_cell, "").unwrap();
    let bold = doc.append_element(orders.title_cell, "b").unwrap();
    doc.set_content(bold, "Widget").unwrap();
    doc.set_content(orders.priority_cell, " ").unwrap();
    let label = doc.append_element(orders.priority_cell, "span").unwrap();
    doc.set_content(label, "High").unwrap();
    (bold, label)
}

#[test]
fn test_cancel_restores_markup_cells() {
    let mut orders = orders(InlineEditConfig::new());
    let (bold, label) = markup_cells(&mut orders);

    orders.table.edit(orders.row).unwrap();

    let title = orders.widget(orders.title_cell);
    let select = orders.widget(orders.priority_cell);
    let doc = orders.table.document();
    assert_eq!(doc.value(title).unwrap().as_deref(), Some("Widget"));
    assert_eq!(doc.value(select).unwrap().as_deref(), Some("2"));
    assert_eq!(doc.children(orders.title_cell).unwrap(), vec![title]);
    assert!(doc.contains(bold));
    let row = orders.table.row(orders.row).unwrap();
    assert_eq!(row.column_for_cell(orders.title_cell).unwrap().original_value(), Some("Widget"));

    orders.table.cancel(orders.row).unwrap();

    let doc = orders.table.document();
    assert!(!doc.contains(title));
    assert_eq!(doc.children(orders.title_cell).unwrap(), vec![bold]);
    assert_eq!(doc.parent(bold).unwrap(), Some(orders.title_cell));
    assert_eq!(doc.content(bold).unwrap(), "Widget");
    assert_eq!(doc.children(orders.priority_cell).unwrap(), vec![label]);
    assert_eq!(doc.content(orders.priority_cell).unwrap(), " ");
    assert_eq!(doc.text_content(orders.priority_cell).unwrap(), " High");
}

#[test]
fn test_accepted_save_discards_replaced_markup() {
    let mut orders = orders(InlineEditConfig::new());
    let (bold, label) = markup_cells(&mut orders);
    let before = orders.table.document().len();

    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    orders.table.save(orders.row).unwrap();
    orders
        .transport
        .next()
        .unwrap()
        .respond(SaveResponse::succeeded(json!({"success": true})));
    orders.table.process_completions().unwrap();

    let doc = orders.table.document();
    assert_eq!(orders.content(orders.title_cell), "Gadget");
    assert_eq!(orders.content(orders.priority_cell), "High");
    assert!(!doc.contains(bold));
    assert!(!doc.contains(label));
    assert_eq!(doc.len(), before - 2);
}

#[test]
fn test_failed_edit_leaves_every_cell_as_it_was() {
    let mut orders = orders(InlineEditConfig::new());
    let (bold, _) = markup_cells(&mut orders);
    // The notes cell comes after the title and priority columns.
    orders.table.document_mut().destroy(orders.notes_cell).unwrap();
    let before = orders.table.document().len();

    let result = orders.table.edit(orders.row);
    assert!(matches!(
        result,
        Err(InlineEditError::Document(DocumentError::InvalidElementId))
    ));

    assert!(!orders.is_editing());
    let row = orders.table.row(orders.row).unwrap();
    assert!(row.columns().iter().all(|c| c.widget().is_none()));

    let doc = orders.table.document();
    assert_eq!(doc.len(), before);
    assert_eq!(doc.children(orders.title_cell).unwrap(), vec![bold]);
    assert_eq!(orders.content(orders.id_cell), "17");
    assert!(doc.children(orders.id_cell).unwrap().is_empty());
    assert_eq!(orders.content(orders.discount_cell), "42%");
    assert!(doc.children(orders.discount_cell).unwrap().is_empty());
    assert!(doc.is_visible(orders.edit_group).unwrap());
    assert!(!doc.is_visible(orders.save_group).unwrap());
}

#[test]
fn test_save_and_cancel_require_edit_mode() {
    let mut orders = orders(InlineEditConfig::new());
    assert_eq!(
        orders.table.save(orders.row).unwrap(),
        EditOutcome::Ignored(IgnoreReason::NotEditing)
    );
    assert_eq!(
        orders.table.cancel(orders.row).unwrap(),
        EditOutcome::Ignored(IgnoreReason::NotEditing)
    );
    assert_eq!(orders.transport.submitted_count(), 0);
    assert_eq!(orders.content(orders.title_cell), " Widget ");
}

#[test]
fn test_failing_validator_blocks_save() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.qty_cell, "250");

    let outcome = orders.table.save(orders.row).unwrap();
    let EditOutcome::ValidationFailed(failure) = outcome else {
        panic!("expected validation failure, got {outcome:?}");
    };
    assert_eq!(failure.name.as_deref(), Some("qty"));
    assert_eq!(failure.validator, "quantity");
    assert_eq!(failure.state, ValidationState::Invalid);

    assert!(orders.is_editing());
    assert_eq!(orders.transport.submitted_count(), 0);
    assert_eq!(orders.table.document().attribute(orders.save_button, "disabled").unwrap(), None);
}

#[test]
fn test_validation_stops_at_first_failure() {
    let later_calls = Arc::new(AtomicUsize::new(0));
    let counter = later_calls.clone();
    let mut config = InlineEditConfig::new();
    config.handlers_mut().register_validator(
        "counted",
        FnValidator::new(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }),
    );

    let mut orders = orders_with_notes_validator(config, Some("counted"));
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "   ");

    assert!(matches!(orders.table.save(orders.row).unwrap(), EditOutcome::ValidationFailed(_)));
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);

    orders.type_into(orders.title_cell, "Gadget");
    assert!(matches!(orders.table.save(orders.row).unwrap(), EditOutcome::Submitted(_)));
    assert_eq!(later_calls.load(Ordering::SeqCst), 1);
    assert_eq!(orders.transport.submitted_count(), 1);
}

/// Records the `name` of every widget it is asked about.
struct WidgetNames(Arc<Mutex<Vec<String>>>);

impl Validator for WidgetNames {
    fn validate(&self, _input: &str) -> ValidationState {
        ValidationState::Invalid
    }

    fn validate_widget(&self, doc: &dyn Document, widget: ElementId) -> DocumentResult<ValidationState> {
        let name = doc.attribute(widget, "name")?.unwrap_or_default();
        self.0.lock().push(name);
        Ok(ValidationState::Acceptable)
    }
}

#[test]
fn test_validator_sees_live_widget() {
    let names = Arc::new(Mutex::new(Vec::new()));
    let mut config = InlineEditConfig::new();
    config
        .handlers_mut()
        .register_validator("widget_names", WidgetNames(names.clone()));

    let mut orders = orders_with_notes_validator(config, Some("widget_names"));
    orders.table.edit(orders.row).unwrap();

    assert!(matches!(orders.table.save(orders.row).unwrap(), EditOutcome::Submitted(_)));
    assert_eq!(*names.lock(), vec!["notes".to_string()]);
}

#[test]
fn test_unregistered_validator_is_skipped() {
    let mut orders = orders_with_notes_validator(InlineEditConfig::new(), Some("nonexistent"));
    orders.table.edit(orders.row).unwrap();

    assert!(matches!(orders.table.save(orders.row).unwrap(), EditOutcome::Submitted(_)));
}

#[test]
fn test_save_submits_named_fields_once() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    orders.type_into(orders.untracked_cell, "REF-2");

    let EditOutcome::Submitted(ticket) = orders.table.save(orders.row).unwrap() else {
        panic!("save was not submitted");
    };
    assert_eq!(orders.transport.submitted_count(), 1);

    let pending = orders.transport.next().unwrap();
    assert_eq!(pending.reply.ticket(), ticket);
    assert_eq!(pending.request.endpoint, "/orders/save");
    let fields: Vec<(&str, &str)> = pending.request.payload.iter().collect();
    assert_eq!(
        fields,
        vec![
            ("id", "17"),
            ("title", "Gadget"),
            ("qty", "3"),
            ("discount", "42"),
            ("priority", "2"),
            ("notes", "fragile"),
        ]
    );

    // Still editing until the answer is processed.
    assert!(orders.is_editing());
    assert_eq!(
        orders.table.document().attribute(orders.save_button, "disabled").unwrap().as_deref(),
        Some("disabled")
    );
}

#[test]
fn test_accepted_save_writes_back_display_values() {
    let saved = Arc::new(Mutex::new(Vec::new()));
    let sink = saved.clone();
    let config = InlineEditConfig::new().on_save_successful(move |event| {
        sink.lock().push((event.row, event.response.data.clone()));
    });

    let mut orders = orders(config);
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    orders.type_into(orders.discount_cell, "50");
    orders.type_into(orders.priority_cell, "1");
    orders.table.save(orders.row).unwrap();

    orders
        .transport
        .next()
        .unwrap()
        .respond(SaveResponse::from_json(json!({"success": true, "id": 17})));
    assert_eq!(orders.table.process_completions().unwrap(), 1);

    assert!(!orders.is_editing());
    assert_eq!(orders.content(orders.title_cell), "Gadget");
    assert_eq!(orders.content(orders.discount_cell), "50%");
    assert_eq!(orders.content(orders.priority_cell), "Low");
    assert_eq!(orders.content(orders.notes_cell), "fragile");
    assert_eq!(orders.content(orders.id_cell), "17");
    assert!(orders.table.document().children(orders.title_cell).unwrap().is_empty());

    let doc = orders.table.document();
    assert!(doc.is_visible(orders.edit_group).unwrap());
    assert!(!doc.is_visible(orders.save_group).unwrap());
    assert_eq!(doc.attribute(orders.save_button, "disabled").unwrap(), None);

    assert_eq!(*saved.lock(), vec![(orders.row, json!({"success": true, "id": 17}))]);
}

#[test]
fn test_rejected_save_keeps_row_editing() {
    let rejected = Arc::new(AtomicUsize::new(0));
    let counter = rejected.clone();
    let config = InlineEditConfig::new().on_save_failed(move |event| {
        assert!(!event.response.success);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut orders = orders(config);
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.discount_cell, "50");
    orders.table.save(orders.row).unwrap();

    orders
        .transport
        .next()
        .unwrap()
        .respond(SaveResponse::from_json(json!({"success": false, "error": "locked"})));
    orders.table.process_completions().unwrap();

    assert_eq!(rejected.load(Ordering::SeqCst), 1);
    assert!(orders.is_editing());
    let widget = orders.widget(orders.discount_cell);
    assert_eq!(orders.table.document().children(orders.discount_cell).unwrap(), vec![widget]);
    assert_eq!(orders.table.document().value(widget).unwrap().as_deref(), Some("50"));

    // The user can fix things up and try again.
    assert!(matches!(orders.table.save(orders.row).unwrap(), EditOutcome::Submitted(_)));
}

#[test]
fn test_transport_failure_keeps_row_editing() {
    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = failures.clone();
    let config = InlineEditConfig::new().on_ajax_failed(move |failure| {
        sink.lock().push(failure.error.clone());
    });

    let mut orders = orders(config);
    orders.table.edit(orders.row).unwrap();
    orders.type_into(orders.title_cell, "Gadget");
    orders.table.save(orders.row).unwrap();

    orders
        .transport
        .next()
        .unwrap()
        .fail(TransportError::with_status(503, "Service Unavailable"));
    orders.table.process_completions().unwrap();

    assert_eq!(
        *failures.lock(),
        vec![TransportError::with_status(503, "Service Unavailable")]
    );
    assert!(orders.is_editing());
    let widget = orders.widget(orders.title_cell);
    assert_eq!(orders.table.document().value(widget).unwrap().as_deref(), Some("Gadget"));
    assert_eq!(orders.content(orders.title_cell), "");
}

#[test]
fn test_unanswered_save_counts_as_transport_failure() {
    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = failures.clone();
    let config = InlineEditConfig::new().on_ajax_failed(move |failure| {
        sink.lock().push(failure.error.clone());
    });

    let mut orders = orders(config);
    orders.table.edit(orders.row).unwrap();
    orders.table.save(orders.row).unwrap();

    // A transport that loses the request without answering it.
    drop(orders.transport.next().unwrap());
    assert_eq!(orders.table.process_completions().unwrap(), 1);

    assert_eq!(
        *failures.lock(),
        vec![TransportError::new("save abandoned without an answer")]
    );
    assert!(orders.is_editing());
    assert!(!orders.table.row(orders.row).unwrap().is_saving());
    assert_eq!(orders.table.document().attribute(orders.save_button, "disabled").unwrap(), None);
    assert_eq!(orders.table.cancel(orders.row).unwrap(), EditOutcome::Cancelled);
    assert_eq!(orders.content(orders.title_cell), " Widget ");
}

#[test]
fn test_signals_can_be_connected_after_attach() {
    let mut orders = orders(InlineEditConfig::new());
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    orders.table.save_succeeded().connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    orders.table.edit(orders.row).unwrap();
    orders.table.save(orders.row).unwrap();
    orders
        .transport
        .next()
        .unwrap()
        .respond(SaveResponse::succeeded(json!({"success": true})));
    orders.table.process_completions().unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn test_percentage_round_trip() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();

    let widget = orders.widget(orders.discount_cell);
    assert_eq!(orders.table.document().value(widget).unwrap().as_deref(), Some("42"));

    orders.type_into(orders.discount_cell, "50");
    orders.table.save(orders.row).unwrap();
    orders
        .transport
        .next()
        .unwrap()
        .respond(SaveResponse::from_json(json!({"success": true})));
    orders.table.process_completions().unwrap();

    assert_eq!(orders.content(orders.discount_cell), "50%");
}

#[test]
fn test_select_preselects_displayed_label() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();

    let select = orders.widget(orders.priority_cell);
    let doc = orders.table.document();
    assert_eq!(doc.tag(select).unwrap(), "select");
    let selected = doc.selected_option(select).unwrap().unwrap();
    assert_eq!(doc.content(selected).unwrap(), "High");
    assert_eq!(doc.attribute(selected, "value").unwrap().as_deref(), Some("2"));
    assert_eq!(doc.value(select).unwrap().as_deref(), Some("2"));
}

#[test]
fn test_hidden_column_keeps_visible_content() {
    let mut orders = orders(InlineEditConfig::new());
    orders.table.edit(orders.row).unwrap();

    assert_eq!(orders.content(orders.id_cell), "17");
    let hidden = orders.widget(orders.id_cell);
    assert_eq!(
        orders.table.document().attribute(hidden, "type").unwrap().as_deref(),
        Some("hidden")
    );

    orders.table.save(orders.row).unwrap();
    let pending = orders.transport.next().unwrap();
    assert_eq!(pending.request.payload.get("id"), Some("17"));
}

#[test]
fn test_rows_are_independent() {
    init_tracing();
    let mut doc = ElementTree::new();
    let table = doc.create_element("table");
    let mut cells = Vec::new();
    for name in ["first", "second"] {
        let tr = doc.append_element(table, "tr").unwrap();
        cells.push(editable_cell(&mut doc, tr, "text", Some(name), name));
    }

    let transport = ManualTransport::new();
    let mut table = InlineEdit::attach(doc, table, InlineEditConfig::new(), transport.clone()).unwrap();
    let (first, second) = (table.rows()[0].id(), table.rows()[1].id());

    table.edit(first).unwrap();
    table.edit(second).unwrap();
    table.save(first).unwrap();
    table.cancel(second).unwrap();

    assert!(table.row(first).unwrap().is_saving());
    assert!(!table.row(second).unwrap().is_editing());
    assert_eq!(table.document().content(cells[1]).unwrap(), "second");

    let pending = transport.next().unwrap();
    assert_eq!(pending.request.payload.names(), vec!["first"]);
    pending.respond(SaveResponse::succeeded(json!({"success": true})));
    table.process_completions().unwrap();
    assert_eq!(table.document().content(cells[0]).unwrap(), "first");
    assert!(!table.row(first).unwrap().is_editing());
}
