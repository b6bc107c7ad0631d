//! Storage layer for the RawKV service.
//!
//! Provides:
//! - Column-family key encoding over a flat ordered keyspace (`keys`)
//! - Write intents and atomic batches (`modify`)
//! - The narrow engine capability traits (`storage`)
//! - The standalone RocksDB-backed implementation (`standalone`)
//!
//! Logical column families exist only through the key codec; the engine
//! itself sees a single ordered keyspace. Any engine offering snapshot
//! reads, ordered cursors, and atomic batch commit can back the traits.

pub mod error;
pub mod keys;
pub mod modify;
pub mod standalone;
pub mod storage;

pub use error::StorageError;
pub use modify::{Batch, Modify};
pub use standalone::{StandaloneStorage, StorageStats};
pub use storage::{CfIterator, Storage, StorageReader};
