//! Building row and column models from a table.

use inline_edit_core::{Document, DocumentResult, ElementId};

use super::column::{ColumnModel, ColumnType};
use super::row::{RowId, RowModel};
use crate::attribute::{AttributeReader, markers};

/// Scan every row under `root` and build its row model.
///
/// Rows are all `tr` descendants of the root in document order. A cell (a
/// direct child of a row) becomes an editable column only if it carries a
/// supported type marker; every other cell is skipped silently. Rows without
/// editable cells are still returned so row ids match document order.
pub fn scan(
    doc: &dyn Document,
    root: ElementId,
    reader: &AttributeReader,
) -> DocumentResult<Vec<RowModel>> {
    let mut rows = Vec::new();

    for (index, row_element) in doc.find_by_tag(root, "tr")?.into_iter().enumerate() {
        let mut row = RowModel::new(row_element, RowId::new(index));
        for column in scan_row(doc, row_element, reader)? {
            row.push_column(column);
        }
        tracing::trace!(
            target: "inline_edit::scan",
            row = index,
            editable_columns = row.columns().len(),
            "scanned row"
        );
        rows.push(row);
    }

    tracing::debug!(target: "inline_edit::scan", rows = rows.len(), "table scanned");
    Ok(rows)
}

fn scan_row(
    doc: &dyn Document,
    row: ElementId,
    reader: &AttributeReader,
) -> DocumentResult<Vec<ColumnModel>> {
    let mut columns = Vec::new();

    for (index, cell) in doc.children(row)?.into_iter().enumerate() {
        let Some(marker) = reader.read(doc, cell, markers::TYPE)? else {
            continue;
        };
        let column_type = match marker.parse::<ColumnType>() {
            Ok(column_type) => column_type,
            Err(err) => {
                tracing::debug!(target: "inline_edit::scan", cell = index, "{err}, cell left read-only");
                continue;
            }
        };

        columns.push(
            ColumnModel::new(cell, column_type)
                .with_css_class(reader.read(doc, cell, markers::CLASS)?)
                .with_data_source(reader.read(doc, cell, markers::DATA)?)
                .with_date_picker(reader.read(doc, cell, markers::DATE_PICKER)?)
                .with_name(reader.read(doc, cell, markers::NAME)?)
                .with_validator(reader.read(doc, cell, markers::VALIDATOR)?)
                .with_index_in_row(index),
        );
    }

    Ok(columns)
}
