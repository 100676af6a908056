use egui::{Response, Ui};
use podium_states::StateCtx;

use super::{pagination_bar, search_bar, table};

/// Search bar, table and pagination bar, top to bottom.
pub fn athlete_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        search_bar(state_ctx, ui);
        ui.add_space(8.0);
        table::athlete_table(state_ctx, ui);
        ui.separator();
        pagination_bar(state_ctx, ui);
    })
    .response
}
