use thiserror::Error;

/// Everything that can go wrong inside the store.
///
/// Errors are returned straight to the caller. Nothing is retried and no call
/// is ever partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("table {0:?} not found")]
    TableNotFound(String),

    #[error("column {0:?} not found")]
    ColumnNotFound(String),

    #[error("val {0:?} not found")]
    ValueNotFound(String),

    #[error("invalid arguments: {0}")]
    ArgumentMismatch(String),
}
