//! Orders Table Example
//!
//! Walks one row of an orders table through the edit lifecycle:
//! - Enter edit mode by clicking the row's edit trigger
//! - Type new values into the generated widgets
//! - Save, with the answer coming from a worker thread
//! - Print the row before and after
//!
//! Run with: cargo run -p inline-edit --example orders_table

use std::thread;
use std::time::Duration;

use inline_edit::prelude::*;
use inline_edit_core::{Document, DocumentTreeDebug, ElementId, ElementTree};
use serde_json::json;

struct Table {
    doc: ElementTree,
    root: ElementId,
    row: ElementId,
    edit_button: ElementId,
    save_button: ElementId,
}

fn build_table() -> Table {
    let mut doc = ElementTree::new();
    let root = doc.create_element("table");
    let row = doc.append_element(root, "tr").unwrap();

    let cells = [
        ("hidden", "id", "1042"),
        ("text", "title", "Espresso beans"),
        ("number", "qty", "12"),
        ("percentage", "discount", "5%"),
        ("select", "priority", "Low"),
    ];
    for (column_type, name, content) in cells {
        let cell = doc.append_element(row, "td").unwrap();
        doc.set_attribute(cell, "inlineEdit-type", column_type).unwrap();
        doc.set_attribute(cell, "inlineEdit-name", name).unwrap();
        doc.set_content(cell, content).unwrap();
        match name {
            "priority" => doc.set_attribute(cell, "inlineEdit-data", "priorities").unwrap(),
            "qty" => doc.set_attribute(cell, "inlineEdit-validator", "quantity").unwrap(),
            _ => {}
        }
    }

    let actions = doc.append_element(row, "td").unwrap();
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

    Table {
        doc,
        root,
        row,
        edit_button,
        save_button,
    }
}

fn print_row(label: &str, table: &InlineEdit<ElementTree>, row: ElementId) {
    let tree = DocumentTreeDebug::new().format(table.document(), row).unwrap();
    println!("--- {label} ---\n{tree}");
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let Table {
        doc,
        root,
        row,
        edit_button,
        save_button,
    } = build_table();

    let mut config = InlineEditConfig::new()
        .with_save_url("https://shop.example/orders/save")
        .on_save_successful(|event| tracing::info!(row = event.row.index(), body = %event.response.data, "saved"))
        .on_save_failed(|event| tracing::info!(row = event.row.index(), body = %event.response.data, "rejected"))
        .on_ajax_failed(|failure| tracing::info!(row = failure.row.index(), error = %failure.error, "not saved"));
    config
        .handlers_mut()
        .register_data_source("priorities", || {
            vec![
                SelectOption::new("1", "Low"),
                SelectOption::new("2", "Normal"),
                SelectOption::new("3", "Rush"),
            ]
        })
        .register_validator("quantity", IntValidator::new(1, 500));

    let transport = ManualTransport::new();
    let mut table = InlineEdit::attach(doc, root, config, transport.clone()).unwrap();
    print_row("viewing", &table, row);

    table.handle_click(edit_button).unwrap();
    let widgets: Vec<(String, ElementId)> = table
        .row_for_element(row)
        .unwrap()
        .columns()
        .iter()
        .filter_map(|column| Some((column.name()?.to_string(), column.widget()?)))
        .collect();
    for (name, widget) in widgets {
        let value = match name.as_str() {
            "qty" => "24",
            "discount" => "10",
            "priority" => "3",
            _ => continue,
        };
        table.document_mut().set_value(widget, value).unwrap();
    }
    print_row("editing", &table, row);

    let outcome = table.handle_click(save_button).unwrap();
    tracing::info!(?outcome, "save clicked");

    // Answer from another thread, the way a network transport would.
    let server = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        for pending in transport.drain() {
            let fields: Vec<String> = pending
                .request
                .payload
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            tracing::info!(endpoint = %pending.request.endpoint, fields = %fields.join("&"), "request received");
            pending.respond(SaveResponse::from_json(json!({"success": true})));
        }
    });

    let applied = table.wait_for_completion(Duration::from_secs(1)).unwrap();
    server.join().unwrap();
    tracing::info!(applied, "answers applied");
    print_row("saved", &table, row);
}
