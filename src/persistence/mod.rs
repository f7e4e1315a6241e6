//! Persistence as tables needs to have the following components
//! - Row Store (append-only blobs, addressed by the position they landed at)
//! - Column Index (column value to row positions, one per column name)
//! - Table (one Row Store plus its Column Indexes)
//! - Database (fixed set of Tables behind a single read/write lock)
//!

//  All modules of this lib
mod context;
mod database;
mod error;
mod index;
mod row;
mod schema;
mod store;
mod table;

//  External API
pub use context::Context;
pub use database::Database;
pub use error::StoreError;
pub use row::RowStore;
pub use schema::TableDefinition;
pub use store::Store;
pub use table::Table;
