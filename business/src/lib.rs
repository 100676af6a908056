//! Table logic for the athlete browser: loading, storing, editing, filtering
//! and paging rows. Nothing here knows about egui.

mod columns;
mod config;
mod controller;
mod debounce;
mod edit;
mod engine;
mod error;
mod http;
mod loader;
mod record;
mod store;

pub use columns::{CellRenderer, ColumnDef, Header, HeaderGroup, default_columns, header_groups};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZES, DEFAULT_QUIET_PERIOD, TableConfig};
pub use controller::TableController;
pub use debounce::DebouncedInput;
pub use edit::{CellEdit, CellEditor, CommitTrigger, EditKey, KeyOutcome};
pub use engine::{
    Matcher, PaginationState, RowModel, RowModelEngine, RowModelInput, SubstringEngine,
    VisibleRow, includes_ignore_case,
};
pub use error::{LoadError, TableError, TableResult};
pub use loader::{FetchStatus, RecordsFetch, apply_loaded, cancel_load, fetch_records, load_records};
pub use record::{CellValue, Field, Record, project_records};
pub use store::RowStore;
