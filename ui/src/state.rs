use podium_business::{CellEditor, DebouncedInput, RecordsFetch, TableConfig, TableController};
use podium_states::{StateCtx, Time};

use crate::widgets::PageJumpInput;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(TableConfig::default())
    }
}

impl State {
    /// Register every table state, built from `config`.
    pub fn with_config(config: TableConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(RecordsFetch::default());
        ctx.add_state(TableController::new(&config));
        ctx.add_state(DebouncedInput::new(config.quiet_period));
        ctx.add_state(CellEditor::new(config.commit_trigger));
        ctx.add_state(PageJumpInput::default());
        ctx.add_state(config);

        Self { ctx }
    }
}
