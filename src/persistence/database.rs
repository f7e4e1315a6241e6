use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use log::debug;

use super::context::Context;
use super::error::StoreError;
use super::schema::TableDefinition;
use super::table::Table;

/// The collective of multiple [`Table`] objects.
///
/// A [`Database`] is the smart class: it validates every request, takes the
/// lock and only then hands the request to the [`Table`] it names. The set of
/// tables is fixed when the database is built.
///
/// A single [`RwLock`] covers ALL tables. Reads on any table run side by side,
/// while an insert or update on one table blocks every other call, including
/// reads on unrelated tables. Callers needing more write throughput should
/// shard across several databases.
///
/// Every call accepts a [`Context`] but none of them observe it; an operation
/// always runs to completion.
///
/// Example
/// ```
/// use ferrum_store::persistence::{Context, Database, TableDefinition};
///
/// let db = Database::new(vec![
///     TableDefinition::with_columns("imports", &["csid", "id"]),
///     TableDefinition::with_columns("profiles", &["id"]),
/// ]);
///
/// let ctx = Context::background();
/// db.insert(&ctx, "imports", &["csid"], &["A"], b"b1".to_vec()).unwrap();
/// assert_eq!(db.get(&ctx, "imports", "csid", "A").unwrap(), vec![b"b1".to_vec()]);
/// ```
pub struct Database {
    tables: RwLock<IndexMap<String, Table>>,
}

impl Database {
    pub fn new(definitions: Vec<TableDefinition>) -> Database {
        //! Create a database holding one empty table per definition. A name
        //! declared twice keeps the last definition.

        let mut tables = IndexMap::new();
        for definition in definitions.iter() {
            debug!("registering table {}", definition);
            tables.insert(definition.name.clone(), Table::new(definition));
        }

        Database {
            tables: RwLock::new(tables),
        }
    }

    // Writers validate everything before they mutate, so the guarded state is
    // consistent even if a holder panicked.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Table>> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Table>> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(
        &self,
        _ctx: &Context,
        table: &str,
        where_col: &str,
        id: &str,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        //! Fetch every row of `table` indexed under `where_col = id`, in
        //! insertion order. An unknown `id` yields an empty result.

        let tables = self.read();
        let table = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        table.get(where_col, id)
    }

    pub fn insert<C, V>(
        &self,
        _ctx: &Context,
        table: &str,
        cols: &[C],
        vals: &[V],
        data: Vec<u8>,
    ) -> Result<(), StoreError>
    where
        C: AsRef<str>,
        V: AsRef<str>,
    {
        //! Append `data` as a new row of `table`, indexing it under each
        //! (col, val) pair. Unseen columns are indexed on first use.

        if cols.len() != vals.len() {
            return Err(StoreError::ArgumentMismatch(format!(
                "length of cols ({}) must match vals ({})",
                cols.len(),
                vals.len()
            )));
        }

        let mut tables = self.write();
        let table_ref = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        let position = table_ref.insert(cols, vals, data)?;
        debug!("inserted row {} into {}", position, table);

        Ok(())
    }

    pub fn update(
        &self,
        _ctx: &Context,
        table: &str,
        col: &str,
        val: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        //! Overwrite every row of `table` indexed under `col = val` with
        //! `data`. This fans out to ALL matching rows, not just one.

        if col.is_empty() || val.is_empty() {
            return Err(StoreError::ArgumentMismatch(
                "column and value must be provided".to_string(),
            ));
        }

        let mut tables = self.write();
        let table_ref = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;

        let n_updated = table_ref.update(col, val, data)?;
        debug!("updated {} row(s) of {} where {} = {:?}", n_updated, table, col, val);

        Ok(())
    }

    pub fn table_names(&self) -> Vec<String> {
        //! Names of all tables, in the order they were declared.

        self.read().keys().cloned().collect()
    }

    pub fn contains_table(&self, table_name: &str) -> bool {
        self.read().contains_key(table_name)
    }

    pub fn row_count(&self, table_name: &str) -> Result<usize, StoreError> {
        self.read()
            .get(table_name)
            .map(Table::row_count)
            .ok_or_else(|| StoreError::TableNotFound(table_name.to_string()))
    }

    pub fn column_names(&self, table_name: &str) -> Result<Vec<String>, StoreError> {
        //! Names of every indexed column of the table: the declared ones
        //! first, then the ones picked up from inserts.

        self.read()
            .get(table_name)
            .map(Table::column_names)
            .ok_or_else(|| StoreError::TableNotFound(table_name.to_string()))
    }

    pub fn describe(&self) -> Vec<String> {
        //! One line summary per table.

        self.read().values().map(|table| table.to_string()).collect()
    }
}
