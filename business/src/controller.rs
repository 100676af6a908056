//! The table's filter and pagination state, and the row model derived from it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use log::debug;
use podium_states::{State, state_assign_impl};

use crate::columns::{ColumnDef, HeaderGroup, default_columns};
use crate::config::TableConfig;
use crate::edit::CellEdit;
use crate::engine::{
    PaginationState, RowModel, RowModelEngine, RowModelInput, SubstringEngine, VisibleRow,
};
use crate::error::{TableError, TableResult};
use crate::record::{CellValue, Field, Record};
use crate::store::RowStore;

/// Owns the rows, the filter term and the page state.
///
/// All writes go through named methods, and each one re-derives the row model
/// before returning, so every getter reads a model that matches the current
/// state.
pub struct TableController {
    store: RowStore,
    columns: Vec<ColumnDef>,
    global_filter: String,
    pagination: PaginationState,
    page_sizes: Vec<usize>,
    engine: Box<dyn RowModelEngine>,
    model: RowModel,
}

impl fmt::Debug for TableController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("rows", &self.store.len())
            .field("global_filter", &self.global_filter)
            .field("pagination", &self.pagination)
            .field("page_count", &self.model.page_count)
            .finish_non_exhaustive()
    }
}

impl Default for TableController {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl TableController {
    pub fn new(config: &TableConfig) -> Self {
        Self::with_engine(config, SubstringEngine::default())
    }

    pub fn with_engine(config: &TableConfig, engine: impl RowModelEngine + 'static) -> Self {
        let columns = default_columns();
        let pagination = PaginationState::new(config.page_size());
        let mut controller = Self {
            store: RowStore::new(),
            model: RowModel::empty(&columns, pagination),
            columns,
            global_filter: String::new(),
            pagination,
            page_sizes: config.page_sizes.clone(),
            engine: Box::new(engine),
        };
        controller.derive();
        controller
    }

    fn derive(&mut self) {
        self.model = self.engine.derive(RowModelInput {
            rows: self.store.records(),
            columns: &self.columns,
            global_filter: &self.global_filter,
            pagination: self.pagination,
        });
        self.pagination = self.model.pagination;
    }

    pub fn records(&self) -> &Arc<[Arc<Record>]> {
        self.store.records()
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn model(&self) -> &RowModel {
        &self.model
    }

    pub fn page_rows(&self) -> &[VisibleRow] {
        &self.model.rows
    }

    pub fn header_groups(&self) -> &[HeaderGroup] {
        &self.model.header_groups
    }

    pub fn page_count(&self) -> usize {
        self.model.page_count
    }

    pub fn filtered_row_count(&self) -> usize {
        self.model.filtered_count
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn can_next_page(&self) -> bool {
        self.model.can_next_page
    }

    pub fn can_previous_page(&self) -> bool {
        self.model.can_previous_page
    }

    pub fn set_global_filter(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.global_filter {
            return;
        }
        debug!("TableController: filter {:?} -> {:?}", self.global_filter, term);
        self.global_filter = term;
        self.derive();
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.pagination.page_index += 1;
            self.derive();
        }
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.pagination.page_index -= 1;
            self.derive();
        }
    }

    /// Jump to `page_index`, clamped to the last page.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
        self.derive();
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> TableResult<()> {
        if !self.page_sizes.contains(&page_size) {
            return Err(TableError::UnsupportedPageSize(page_size));
        }
        let top_row = self.pagination.page_index * self.pagination.page_size;
        self.pagination = PaginationState {
            page_index: top_row / page_size,
            page_size,
        };
        self.derive();
        Ok(())
    }

    /// Swap in a freshly loaded row set.
    pub fn replace_rows(&mut self, records: Vec<Record>) {
        self.store.replace(records);
        self.derive();
    }

    pub fn set_field(
        &mut self,
        row_index: usize,
        field: Field,
        value: CellValue,
    ) -> TableResult<()> {
        self.store.set_field(row_index, field, value)?;
        self.derive();
        Ok(())
    }

    /// Store an edit's text verbatim, whatever the field's previous type.
    pub fn apply_edit(&mut self, edit: CellEdit) -> TableResult<()> {
        self.set_field(edit.row_index, edit.field, CellValue::Text(edit.text))
    }
}

impl State for TableController {
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
