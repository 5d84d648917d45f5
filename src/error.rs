//! Error types for table construction and the strict insert/delete API.

use std::collections::TryReserveError;

/// Hard failures. Nothing is partially applied when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table capacity must be at least 1")]
    InvalidCapacity,
    #[error("memory allocation failed")]
    AllocationFailure,
}

impl From<TryReserveError> for TableError {
    fn from(_: TryReserveError) -> Self {
        TableError::AllocationFailure
    }
}

/// Soft outcomes the default API swallows silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("table is full")]
    TableFull,
    #[error("key not found")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("insert rejected: {0}")]
    Rejected(#[from] Rejected),
    #[error(transparent)]
    Table(#[from] TableError),
}
