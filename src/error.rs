//! Error types for tripstore
//!
//! Provides a unified error type for store, cursor and export operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for tripstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Cursor Errors
    // -------------------------------------------------------------------------
    /// The store was mutated outside this cursor since it was opened
    #[error("Stale cursor: store generation is {actual}, cursor was stamped at {expected}")]
    StaleCursor { expected: u64, actual: u64 },

    #[error("Cursor exhausted: no remaining elements")]
    ExhaustedCursor,

    /// `remove_last` without a preceding successful `advance`
    #[error("Illegal cursor state: nothing to remove")]
    IllegalCursorState,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True for the errors a cursor raises on misuse or drift
    pub fn is_cursor_error(&self) -> bool {
        matches!(
            self,
            StoreError::StaleCursor { .. }
                | StoreError::ExhaustedCursor
                | StoreError::IllegalCursorState
        )
    }
}
