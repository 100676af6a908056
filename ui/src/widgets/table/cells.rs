//! Cell renderers for the athlete table.

use egui::{Key, KeyboardShortcut, Modifiers, RichText, TextEdit, Ui};
use podium_business::{CellEdit, CellEditor, CellValue, EditKey, Field, KeyOutcome};

/// "S.No": the 1-based store ordinal.
#[inline]
pub fn render_row_number_cell(ui: &mut Ui, index: usize) {
    ui.label(RichText::new(format!("{}", index + 1)).monospace());
}

/// Frameless single-line edit bound to one field of one row.
///
/// Shows the editor's draft while this cell is being edited, the stored
/// value otherwise. Edits committed this frame are pushed to `committed`:
/// this cell's own, or the draft of a cell that focus just moved away from.
pub fn render_editable_cell(
    ui: &mut Ui,
    editor: &mut CellEditor,
    row_index: usize,
    field: Field,
    value: &CellValue,
    committed: &mut Vec<CellEdit>,
) {
    let stored = value.to_string();
    let mut text = editor
        .draft_for(row_index, field)
        .map_or_else(|| stored.clone(), str::to_owned);

    let return_key = match editor.key(EditKey::Enter) {
        KeyOutcome::Suppressed => None,
        KeyOutcome::PassThrough => Some(KeyboardShortcut::new(Modifiers::NONE, Key::Enter)),
    };

    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(("athlete_cell", row_index, field))
            .frame(false)
            .return_key(return_key)
            .desired_width(f32::INFINITY),
    );

    if response.gained_focus() || (response.changed() && !editor.is_editing(row_index, field)) {
        committed.extend(editor.begin(row_index, field, stored.as_str()));
    }
    if response.changed() {
        committed.extend(editor.input(text));
    }

    // egui drops focus on Escape before the frame starts, so the key is checked first.
    let escaped = ui.input(|i| i.key_pressed(Key::Escape));
    if !editor.is_editing(row_index, field) {
        return;
    }
    if escaped && (response.has_focus() || response.lost_focus()) {
        committed.extend(editor.abort());
        response.surrender_focus();
    } else if response.lost_focus() {
        committed.extend(editor.focus_lost());
    }
}
