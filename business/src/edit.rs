//! Cell editing: the single active draft and when it turns into a commit.
//!
//! What counts as "the user is done editing" is a caller decision, so the
//! trigger is configurable and [`CellEditor::commit`] is always available.

use std::any::Any;

use podium_states::{State, state_assign_impl};

use crate::record::Field;

/// Event that turns a draft into a [`CellEdit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitTrigger {
    /// The cell lost focus: a click elsewhere, Tab, or focus moving to another
    /// cell. Escape ends the session without committing.
    #[default]
    FocusLost,
    /// The abort-style signal (Escape).
    Abort,
    /// Every change of the draft text.
    EveryChange,
}

/// Keys the editor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key's default action (newline insertion) must not run.
    Suppressed,
    PassThrough,
}

/// A finished edit, ready for `TableController::apply_edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row_index: usize,
    pub field: Field,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveCell {
    row_index: usize,
    field: Field,
    /// Text the store holds for this cell.
    original: String,
    draft: String,
}

impl ActiveCell {
    fn to_edit(&self) -> CellEdit {
        CellEdit {
            row_index: self.row_index,
            field: self.field,
            text: self.draft.clone(),
        }
    }

    fn is_dirty(&self) -> bool {
        self.draft != self.original
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditor {
    trigger: CommitTrigger,
    active: Option<ActiveCell>,
}

impl CellEditor {
    pub fn new(trigger: CommitTrigger) -> Self {
        Self {
            trigger,
            active: None,
        }
    }

    pub fn trigger(&self) -> CommitTrigger {
        self.trigger
    }

    /// Start editing a cell with its current text.
    ///
    /// A draft still open on another cell ends as a focus loss, so its edit is
    /// returned when the trigger is [`CommitTrigger::FocusLost`]. Beginning the
    /// cell already being edited keeps its draft.
    pub fn begin(
        &mut self,
        row_index: usize,
        field: Field,
        text: impl Into<String>,
    ) -> Option<CellEdit> {
        if self.is_editing(row_index, field) {
            return None;
        }
        let previous = self.focus_lost();
        let text = text.into();
        self.active = Some(ActiveCell {
            row_index,
            field,
            original: text.clone(),
            draft: text,
        });
        previous
    }

    pub fn is_editing(&self, row_index: usize, field: Field) -> bool {
        self.active
            .as_ref()
            .is_some_and(|cell| cell.row_index == row_index && cell.field == field)
    }

    /// Draft text for the given cell, if it is the one being edited.
    pub fn draft_for(&self, row_index: usize, field: Field) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|cell| cell.row_index == row_index && cell.field == field)
            .map(|cell| cell.draft.as_str())
    }

    /// Replace the draft text.
    pub fn input(&mut self, text: impl Into<String>) -> Option<CellEdit> {
        let cell = self.active.as_mut()?;
        cell.draft = text.into();
        if self.trigger != CommitTrigger::EveryChange || !cell.is_dirty() {
            return None;
        }
        cell.original = cell.draft.clone();
        Some(cell.to_edit())
    }

    /// Enter never commits; it only suppresses the newline.
    pub fn key(&self, key: EditKey) -> KeyOutcome {
        match key {
            EditKey::Enter => KeyOutcome::Suppressed,
            EditKey::Other => KeyOutcome::PassThrough,
        }
    }

    /// Ends the session. Commits only under [`CommitTrigger::FocusLost`] and
    /// only a draft that differs from the stored text.
    pub fn focus_lost(&mut self) -> Option<CellEdit> {
        self.finish(CommitTrigger::FocusLost)
    }

    /// Ends the session. Commits only under [`CommitTrigger::Abort`].
    pub fn abort(&mut self) -> Option<CellEdit> {
        self.finish(CommitTrigger::Abort)
    }

    /// Ends the session and commits, whatever the trigger.
    pub fn commit(&mut self) -> Option<CellEdit> {
        self.active.take().map(|cell| cell.to_edit())
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    fn finish(&mut self, event: CommitTrigger) -> Option<CellEdit> {
        let cell = self.active.take()?;
        (self.trigger == event && cell.is_dirty()).then(|| cell.to_edit())
    }
}

impl State for CellEditor {
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
