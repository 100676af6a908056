//! Column widths for the athlete table.

use egui_extras::Column;

pub const ROW_NUMBER_WIDTH: f32 = 48.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// A narrow fixed column for "S.No", then `count - 1` flexible data columns.
#[inline]
pub fn table_columns(count: usize) -> Vec<Column> {
    std::iter::once(Column::exact(ROW_NUMBER_WIDTH))
        .chain(std::iter::repeat_n(
            Column::remainder().at_least(80.0),
            count.saturating_sub(1),
        ))
        .collect()
}
