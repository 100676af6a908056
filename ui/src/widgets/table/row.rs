use egui_extras::TableRow;
use podium_business::{CellEdit, CellEditor, CellRenderer, ColumnDef, VisibleRow};

use super::cells::{render_editable_cell, render_row_number_cell};

/// Renders every column of one record, collecting committed edits.
#[inline]
pub fn render_athlete_row(
    row: &mut TableRow<'_, '_>,
    data: &VisibleRow,
    columns: &[ColumnDef],
    editor: &mut CellEditor,
    committed: &mut Vec<CellEdit>,
) {
    for column in columns {
        row.col(|ui| match column.renderer {
            CellRenderer::RowNumber => render_row_number_cell(ui, data.index),
            CellRenderer::EditableText(field) => {
                let value = data.record.get(field);
                render_editable_cell(ui, editor, data.index, field, value, committed);
            }
        });
    }
}
