use std::sync::Arc;

use super::context::Context;
use super::database::Database;
use super::error::StoreError;

/// The three calls a service built on top of the store is allowed to make.
///
/// Implemented by [`Database`], and by references and [`Arc`]s to any store so
/// several services can share one database.
pub trait Store {
    fn insert(
        &self,
        ctx: &Context,
        table: &str,
        cols: &[&str],
        vals: &[&str],
        data: Vec<u8>,
    ) -> Result<(), StoreError>;

    fn update(
        &self,
        ctx: &Context,
        table: &str,
        col: &str,
        val: &str,
        data: &[u8],
    ) -> Result<(), StoreError>;

    fn get(
        &self,
        ctx: &Context,
        table: &str,
        where_col: &str,
        id: &str,
    ) -> Result<Vec<Vec<u8>>, StoreError>;
}

impl Store for Database {
    fn insert(
        &self,
        ctx: &Context,
        table: &str,
        cols: &[&str],
        vals: &[&str],
        data: Vec<u8>,
    ) -> Result<(), StoreError> {
        Database::insert(self, ctx, table, cols, vals, data)
    }

    fn update(
        &self,
        ctx: &Context,
        table: &str,
        col: &str,
        val: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        Database::update(self, ctx, table, col, val, data)
    }

    fn get(
        &self,
        ctx: &Context,
        table: &str,
        where_col: &str,
        id: &str,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        Database::get(self, ctx, table, where_col, id)
    }
}

impl<T: Store + ?Sized> Store for &T {
    fn insert(
        &self,
        ctx: &Context,
        table: &str,
        cols: &[&str],
        vals: &[&str],
        data: Vec<u8>,
    ) -> Result<(), StoreError> {
        (**self).insert(ctx, table, cols, vals, data)
    }

    fn update(
        &self,
        ctx: &Context,
        table: &str,
        col: &str,
        val: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        (**self).update(ctx, table, col, val, data)
    }

    fn get(
        &self,
        ctx: &Context,
        table: &str,
        where_col: &str,
        id: &str,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        (**self).get(ctx, table, where_col, id)
    }
}

impl<T: Store + ?Sized> Store for Arc<T> {
    fn insert(
        &self,
        ctx: &Context,
        table: &str,
        cols: &[&str],
        vals: &[&str],
        data: Vec<u8>,
    ) -> Result<(), StoreError> {
        self.as_ref().insert(ctx, table, cols, vals, data)
    }

    fn update(
        &self,
        ctx: &Context,
        table: &str,
        col: &str,
        val: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        self.as_ref().update(ctx, table, col, val, data)
    }

    fn get(
        &self,
        ctx: &Context,
        table: &str,
        where_col: &str,
        id: &str,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        self.as_ref().get(ctx, table, where_col, id)
    }
}
