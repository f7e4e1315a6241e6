use super::error::StoreError;
use super::index::ColumnIndex;
use super::row::RowStore;
use super::schema::TableDefinition;

use std::fmt::Display;

use indexmap::IndexMap;
use log::trace;

/// A single table: one [`RowStore`] and one [`ColumnIndex`] per column name
/// ever used against it.
///
/// [`Table`] is the dumb class. It does not lock anything; the owning
/// [`super::Database`] decides who gets to touch it and when.
pub struct Table {
    name: String,
    rows: RowStore,
    columns: IndexMap<String, ColumnIndex>,
}

impl Table {
    pub fn new(definition: &TableDefinition) -> Table {
        //! Create an empty table. Every declared column starts out with an
        //! empty index, so lookups on it succeed with no rows.

        let columns = definition
            .columns
            .iter()
            .map(|column| (column.clone(), ColumnIndex::new()))
            .collect();

        Table {
            name: definition.name.clone(),
            rows: RowStore::new(),
            columns,
        }
    }

    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn get(&self, column: &str, value: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        //! Fetch copies of every row whose `column` was inserted with `value`,
        //! in insertion order.
        //!
        //! A value nobody inserted is not an error, it simply yields no rows.

        let index = self
            .columns
            .get(column)
            .ok_or_else(|| StoreError::ColumnNotFound(column.to_string()))?;

        let positions = index.get(value).unwrap_or_default();

        Ok(positions
            .iter()
            .filter_map(|&position| self.rows.get(position))
            .map(<[u8]>::to_vec)
            .collect())
    }

    pub fn insert<C, V>(
        &mut self,
        cols: &[C],
        vals: &[V],
        data: Vec<u8>,
    ) -> Result<usize, StoreError>
    where
        C: AsRef<str>,
        V: AsRef<str>,
    {
        //! Append `data` as a new row and index it under each (col, val) pair.
        //! Columns that were never seen before get an index on the spot.
        //!
        //! Returns the position of the new row.

        if cols.len() != vals.len() {
            return Err(StoreError::ArgumentMismatch(format!(
                "length of cols ({}) must match vals ({})",
                cols.len(),
                vals.len()
            )));
        }

        let position = self.rows.push(data);

        for (col, val) in cols.iter().zip(vals) {
            let col = col.as_ref();
            if !self.columns.contains_key(col) {
                trace!("table {}: indexing new column {:?}", self.name, col);
            }

            self.columns
                .entry(col.to_string())
                .or_default()
                .insert(val.as_ref(), position);
        }

        Ok(position)
    }

    pub fn update(&mut self, column: &str, value: &str, data: &[u8]) -> Result<usize, StoreError> {
        //! Overwrite EVERY row indexed under `column = value` with `data`.
        //!
        //! Returns the number of rows rewritten.

        let index = self
            .columns
            .get(column)
            .ok_or_else(|| StoreError::ColumnNotFound(column.to_string()))?;

        let positions = index
            .get(value)
            .ok_or_else(|| StoreError::ValueNotFound(value.to_string()))?;

        for &position in positions {
            let written = self.rows.overwrite(position, data);
            debug_assert!(written, "index points past the row store");
        }

        Ok(positions.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|(name, index)| format!("{} ({} values)", name, index.n_values()))
            .collect();

        write!(
            f,
            "{} | {} row(s) | {}",
            self.name,
            self.rows.len(),
            columns.join(", ")
        )
    }
}
