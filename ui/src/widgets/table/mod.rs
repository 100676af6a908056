//! The athlete table.
//!
//! - `columns`: widths
//! - `header`: header row from the controller's header groups
//! - `row`: one record per row
//! - `cells`: the row-number and editable text cells

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Layout, Ui};
use egui_extras::TableBuilder;
use log::warn;
use podium_business::{CellEditor, TableController};
use podium_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_athlete_row;

/// Shown in place of the rows when the current page is empty.
pub const NO_RECORDS: &str = "No Record Found!";

/// Renders the current page and applies any edits committed this frame.
pub fn athlete_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let controller = state_ctx.state::<TableController>();
    let rows = controller.page_rows().to_vec();
    let columns = controller.columns().to_vec();
    let header_groups = controller.header_groups().to_vec();

    // Edits are collected while the editor is borrowed and applied afterwards.
    let mut edits = Vec::new();
    let editor = state_ctx.state_mut::<CellEditor>();

    let mut builder = TableBuilder::new(ui)
        .id_salt("athlete_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(egui::Align::Center));
    for column in table_columns(columns.len()) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, &header_groups);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let data = &rows[row.index()];
                render_athlete_row(&mut row, data, &columns, editor, &mut edits);
            });
        });

    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(NO_RECORDS);
        });
    }

    let controller = state_ctx.state_mut::<TableController>();
    for edit in edits {
        if let Err(err) = controller.apply_edit(edit) {
            warn!("athlete_table: edit rejected: {err}");
        }
    }
}
