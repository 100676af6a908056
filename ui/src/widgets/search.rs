use egui::{Response, TextEdit, Ui};
use podium_business::{DebouncedInput, TableController};
use podium_states::{StateCtx, Time};

pub const SEARCH_HINT: &str = "Search all columns...";

/// Global search box.
///
/// Keystrokes go to [`DebouncedInput`]; the controller's filter only changes
/// once the draft has been quiet for the configured period of `Time`.
pub fn search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let now = state_ctx.state::<Time>().now();
    let external = state_ctx
        .state::<TableController>()
        .global_filter()
        .to_owned();

    let input = state_ctx.state_mut::<DebouncedInput>();
    input.sync_external(&external);
    let mut draft = input.draft().to_owned();

    let response = ui
        .horizontal(|ui| {
            let label = ui.label("Search");
            ui.add(
                TextEdit::singleline(&mut draft)
                    .id_salt("global_search")
                    .hint_text(SEARCH_HINT)
                    .desired_width(240.0),
            )
            .labelled_by(label.id)
        })
        .inner;

    if response.changed() {
        input.keystroke(draft, now);
    }
    let released = input.poll(now);
    let remaining = input.remaining(now);

    if let Some(term) = released {
        state_ctx
            .state_mut::<TableController>()
            .set_global_filter(term);
    }
    if let Some(left) = remaining {
        ui.ctx().request_repaint_after(left);
    }

    response
}
