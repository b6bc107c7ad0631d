//! Storage layer error types.

use thiserror::Error;

/// Errors that can occur in the storage layer.
///
/// An absent value is never an error; reads return `Ok(None)` for keys
/// that do not exist.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Engine operation failed
    #[error("Engine error: {0}")]
    Engine(#[from] rocksdb::Error),

    /// Key encoding/decoding error
    #[error("Key error: {0}")]
    Key(String),
}
