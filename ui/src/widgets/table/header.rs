use egui::Ui;
use egui_extras::TableRow;
use podium_business::HeaderGroup;

/// One header cell per column of every header group, in order.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, groups: &[HeaderGroup]) {
    for group in groups {
        for column in &group.headers {
            header.col(|ui| {
                render_header_cell(ui, column.label.as_str());
            });
        }
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
