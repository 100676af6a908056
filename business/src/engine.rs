//! Row-model derivation: records + columns + filter + page state in, visible page out.
//!
//! The controller only talks to [`RowModelEngine`]. [`SubstringEngine`] is the
//! built-in implementation; its matching rule can be swapped with
//! [`SubstringEngine::with_matcher`], or the whole engine replaced.

use std::fmt;
use std::sync::Arc;

use crate::columns::{ColumnDef, HeaderGroup, header_groups};
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Pages needed for `row_count` rows. Zero rows means zero pages.
    pub fn page_count(&self, row_count: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        row_count.div_ceil(self.page_size)
    }

    /// Same state with `page_index` pulled into `[0, max(page_count, 1) - 1]`.
    pub fn clamped(self, page_count: usize) -> Self {
        Self {
            page_index: self.page_index.min(page_count.saturating_sub(1)),
            ..self
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A row on the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    /// Ordinal in the row store; the row's only identity.
    pub index: usize,
    pub record: Arc<Record>,
}

pub struct RowModelInput<'a> {
    pub rows: &'a [Arc<Record>],
    pub columns: &'a [ColumnDef],
    pub global_filter: &'a str,
    pub pagination: PaginationState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub header_groups: Vec<HeaderGroup>,
    pub rows: Vec<VisibleRow>,
    pub filtered_count: usize,
    pub page_count: usize,
    /// Pagination after clamping; the controller adopts it.
    pub pagination: PaginationState,
    pub can_previous_page: bool,
    pub can_next_page: bool,
}

impl RowModel {
    pub fn empty(columns: &[ColumnDef], pagination: PaginationState) -> Self {
        Self {
            header_groups: header_groups(columns),
            rows: Vec::new(),
            filtered_count: 0,
            page_count: 0,
            pagination: pagination.clamped(0),
            can_previous_page: false,
            can_next_page: false,
        }
    }
}

pub trait RowModelEngine {
    fn derive(&self, input: RowModelInput<'_>) -> RowModel;
}

/// Decides whether a cell's displayed text matches the filter term.
pub type Matcher = fn(cell_text: &str, term: &str) -> bool;

/// Case-insensitive substring match.
pub fn includes_ignore_case(cell_text: &str, term: &str) -> bool {
    cell_text.to_lowercase().contains(&term.to_lowercase())
}

/// Global filter over every filterable column, then slice out one page.
#[derive(Clone, Copy)]
pub struct SubstringEngine {
    matcher: Matcher,
}

impl Default for SubstringEngine {
    fn default() -> Self {
        Self {
            matcher: includes_ignore_case,
        }
    }
}

impl fmt::Debug for SubstringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstringEngine").finish_non_exhaustive()
    }
}

impl SubstringEngine {
    pub fn with_matcher(matcher: Matcher) -> Self {
        Self { matcher }
    }

    fn row_matches(&self, index: usize, record: &Record, columns: &[ColumnDef], term: &str) -> bool {
        columns
            .iter()
            .filter(|column| column.can_global_filter())
            .filter(|column| {
                column
                    .data_field()
                    .is_some_and(|field| !record.get(field).is_empty())
            })
            .any(|column| (self.matcher)(&column.cell_text(index, record), term))
    }
}

impl RowModelEngine for SubstringEngine {
    fn derive(&self, input: RowModelInput<'_>) -> RowModel {
        let term = input.global_filter;
        let filtered: Vec<VisibleRow> = input
            .rows
            .iter()
            .enumerate()
            .filter(|(index, record)| {
                term.is_empty() || self.row_matches(*index, record, input.columns, term)
            })
            .map(|(index, record)| VisibleRow {
                index,
                record: Arc::clone(record),
            })
            .collect();

        let filtered_count = filtered.len();
        let page_count = input.pagination.page_count(filtered_count);
        let pagination = input.pagination.clamped(page_count);

        let start = pagination.page_index * pagination.page_size;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(pagination.page_size)
            .collect();

        RowModel {
            header_groups: header_groups(input.columns),
            rows,
            filtered_count,
            page_count,
            pagination,
            can_previous_page: pagination.page_index > 0,
            can_next_page: pagination.page_index + 1 < page_count,
        }
    }
}
