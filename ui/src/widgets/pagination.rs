use std::any::Any;

use egui::{Button, ComboBox, Response, TextEdit, Ui};
use log::warn;
use podium_business::TableController;
use podium_states::{State, StateCtx, state_assign_impl};

/// Text of the "Go to page" box. Kept between frames.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageJumpInput {
    pub draft: String,
}

impl State for PageJumpInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Show the current page in the box unless the user is typing in it.
pub fn sync_page_jump(draft: &mut String, page_index: usize, focused: bool) {
    if !focused {
        let current = (page_index + 1).to_string();
        if *draft != current {
            *draft = current;
        }
    }
}

/// 1-based page number typed by the user to a page index.
///
/// Empty or unparsable input means the first page.
pub fn parse_page_jump(text: &str) -> usize {
    text.trim()
        .parse::<usize>()
        .map(|page| page.saturating_sub(1))
        .unwrap_or(0)
}

enum PageAction {
    Previous,
    Next,
    Jump(usize),
    Resize(usize),
}

/// `<` / `>`, "Page X of N", "Go to page" and the "Show N" selector.
pub fn pagination_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let controller = state_ctx.state::<TableController>();
    let pagination = controller.pagination();
    let page_count = controller.page_count();
    let can_previous = controller.can_previous_page();
    let can_next = controller.can_next_page();
    let page_sizes = controller.page_sizes().to_vec();

    let jump = &mut state_ctx.state_mut::<PageJumpInput>().draft;
    let mut action = None;

    let response = ui
        .horizontal(|ui| {
            if ui.add_enabled(can_previous, Button::new("<")).clicked() {
                action = Some(PageAction::Previous);
            }
            if ui.add_enabled(can_next, Button::new(">")).clicked() {
                action = Some(PageAction::Next);
            }

            ui.label(format!(
                "Page {} of {}",
                pagination.page_index + 1,
                page_count
            ));

            ui.separator();
            let label = ui.label("Go to page");
            let jump_id = ui.make_persistent_id("page_jump");
            let focused = ui.memory(|mem| mem.has_focus(jump_id));
            sync_page_jump(jump, pagination.page_index, focused);
            let edit = ui
                .add(TextEdit::singleline(jump).id(jump_id).desired_width(48.0))
                .labelled_by(label.id);
            if edit.changed() {
                action = Some(PageAction::Jump(parse_page_jump(jump)));
            }

            let mut selected = pagination.page_size;
            ComboBox::from_id_salt("page_size")
                .selected_text(format!("Show {selected}"))
                .show_ui(ui, |ui| {
                    for size in &page_sizes {
                        ui.selectable_value(&mut selected, *size, format!("Show {size}"));
                    }
                });
            if selected != pagination.page_size {
                action = Some(PageAction::Resize(selected));
            }
        })
        .response;

    let controller = state_ctx.state_mut::<TableController>();
    match action {
        Some(PageAction::Previous) => controller.previous_page(),
        Some(PageAction::Next) => controller.next_page(),
        Some(PageAction::Jump(page_index)) => controller.set_page_index(page_index),
        Some(PageAction::Resize(page_size)) => {
            if let Err(err) = controller.set_page_size(page_size) {
                warn!("pagination_bar: {err}");
            }
        }
        None => {}
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_jump_is_one_based() {
        assert_eq!(parse_page_jump("1"), 0);
        assert_eq!(parse_page_jump(" 3 "), 2);
    }

    #[test]
    fn page_jump_follows_current_page_when_idle() {
        let mut draft = String::new();
        sync_page_jump(&mut draft, 0, false);
        assert_eq!(draft, "1");

        sync_page_jump(&mut draft, 2, false);
        assert_eq!(draft, "3");
    }

    #[test]
    fn page_jump_keeps_typed_text_while_focused() {
        let mut draft = String::new();
        sync_page_jump(&mut draft, 4, true);
        assert_eq!(draft, "");

        let mut draft = "7".to_owned();
        sync_page_jump(&mut draft, 0, true);
        assert_eq!(draft, "7");
    }

    #[test]
    fn page_jump_defaults_to_first_page() {
        assert_eq!(parse_page_jump(""), 0);
        assert_eq!(parse_page_jump("0"), 0);
        assert_eq!(parse_page_jump("abc"), 0);
    }
}
