//! Column definitions and the header structure derived from them.

use ustr::Ustr;

use crate::record::{Field, Record};

/// How a column's cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// 1-based ordinal of the row in the store ("S.No").
    RowNumber,
    /// Editable text bound to one record field.
    EditableText(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: Ustr,
    pub header: Ustr,
    pub renderer: CellRenderer,
}

impl ColumnDef {
    pub fn row_number() -> Self {
        Self {
            id: Ustr::from("S.No"),
            header: Ustr::from("S.No"),
            renderer: CellRenderer::RowNumber,
        }
    }

    pub fn field(field: Field) -> Self {
        Self {
            id: Ustr::from(field.as_str()),
            header: Ustr::from(field.header()),
            renderer: CellRenderer::EditableText(field),
        }
    }

    pub fn data_field(&self) -> Option<Field> {
        match self.renderer {
            CellRenderer::EditableText(field) => Some(field),
            CellRenderer::RowNumber => None,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.data_field().is_some()
    }

    /// Only data columns take part in the global filter.
    pub fn can_global_filter(&self) -> bool {
        self.data_field().is_some()
    }

    /// Text shown for the row at store ordinal `index`.
    pub fn cell_text(&self, index: usize, record: &Record) -> String {
        match self.renderer {
            CellRenderer::RowNumber => (index + 1).to_string(),
            CellRenderer::EditableText(field) => record.get(field).to_string(),
        }
    }
}

/// `S.No`, then the four record fields in wire order.
pub fn default_columns() -> Vec<ColumnDef> {
    std::iter::once(ColumnDef::row_number())
        .chain(Field::ALL.into_iter().map(ColumnDef::field))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: Ustr,
    pub label: Ustr,
    /// Position of the column in the definition list.
    pub column_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: usize,
    pub headers: Vec<Header>,
}

/// Flat column lists produce a single header group.
pub fn header_groups(columns: &[ColumnDef]) -> Vec<HeaderGroup> {
    vec![HeaderGroup {
        id: 0,
        headers: columns
            .iter()
            .enumerate()
            .map(|(column_index, column)| Header {
                id: column.id,
                label: column.header,
                column_index,
            })
            .collect(),
    }]
}
