//! The in-memory row sequence.

use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::record::{CellValue, Field, Record};

/// Ordered, fetch-order sequence of records.
///
/// Mutations never write through the shared sequence: they build a new one
/// that reuses every untouched row and swap it in, so `Arc::ptr_eq` on
/// [`RowStore::records`] tells observers whether anything changed.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Arc<[Arc<Record>]>,
    revision: u64,
}

impl Default for RowStore {
    fn default() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
            revision: 0,
        }
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut store = Self::new();
        store.replace(records);
        store
    }

    pub fn records(&self) -> &Arc<[Arc<Record>]> {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Record>> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole contents, keeping the given order.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.rows = records.into_iter().map(Arc::new).collect();
        self.revision += 1;
    }

    /// Overwrite one field of one row.
    ///
    /// An out-of-range index is rejected and the store is left as it was.
    pub fn set_field(
        &mut self,
        row_index: usize,
        field: Field,
        value: CellValue,
    ) -> TableResult<()> {
        let Some(target) = self.rows.get(row_index) else {
            return Err(TableError::RowOutOfRange {
                index: row_index,
                len: self.rows.len(),
            });
        };
        let replacement = Arc::new(target.with_field(field, value));

        self.rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if index == row_index {
                    Arc::clone(&replacement)
                } else {
                    Arc::clone(row)
                }
            })
            .collect();
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RowStore {
        RowStore::from_records(vec![
            Record::new("Michael Phelps", 2008, "United States", 23),
            Record::new("Natalie Coughlin", 2008, "United States", 25),
            Record::new("Aleksey Nemov", 2000, "Russia", 24),
        ])
    }

    #[test]
    fn starts_empty() {
        let store = RowStore::new();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn set_field_touches_only_target() {
        let mut store = sample();
        let before = Arc::clone(store.records());

        store
            .set_field(1, Field::Age, CellValue::from("26"))
            .unwrap();

        let after = store.records();
        assert!(!Arc::ptr_eq(&before, after), "sequence is replaced");
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));

        assert_eq!(after[1].age, CellValue::Text("26".into()));
        assert_eq!(after[1].athlete, before[1].athlete);
        assert_eq!(after[1].year, before[1].year);
        assert_eq!(after[1].country, before[1].country);
        assert_eq!(before[1].age, CellValue::Integer(25), "old row untouched");
    }

    #[test]
    fn set_field_keeps_order_and_length() {
        let mut store = sample();
        store
            .set_field(0, Field::Athlete, CellValue::from("M. Phelps"))
            .unwrap();

        let names: Vec<String> = store
            .records()
            .iter()
            .map(|r| r.athlete.to_string())
            .collect();
        assert_eq!(names, ["M. Phelps", "Natalie Coughlin", "Aleksey Nemov"]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut store = sample();
        let before = Arc::clone(store.records());
        let revision = store.revision();

        let err = store
            .set_field(3, Field::Year, CellValue::from("1999"))
            .unwrap_err();

        assert_eq!(err, TableError::RowOutOfRange { index: 3, len: 3 });
        assert!(Arc::ptr_eq(&before, store.records()));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn replace_bumps_revision() {
        let mut store = sample();
        let revision = store.revision();

        store.replace(vec![Record::new("A", 2000, "X", 20)]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), revision + 1);
    }
}
