//! Narrow capability traits over the embedded engine.
//!
//! Any ordered key-value engine offering snapshot reads, ordered cursors,
//! and atomic batch commit can implement these; request handlers depend
//! only on the traits. Readers and cursors are scoped borrows: dropping
//! them releases the underlying snapshot/cursor on every exit path,
//! including early error returns.

use crate::error::StorageError;
use crate::modify::Batch;

/// Handle to an open store. Constructed once at startup and shared for the
/// process lifetime; must tolerate concurrent reader creation and writes.
pub trait Storage: Send + Sync {
    /// Snapshot-scoped read view tied to the storage borrow.
    type Reader<'a>: StorageReader
    where
        Self: 'a;

    /// Begin a new read-only snapshot. The view is fixed at creation and
    /// unaffected by concurrent or subsequent writes.
    fn reader(&self) -> Result<Self::Reader<'_>, StorageError>;

    /// Apply every entry of `batch` in order and commit atomically. If any
    /// step fails the whole batch is discarded; no partial effect is ever
    /// visible.
    fn write(&self, batch: Batch) -> Result<(), StorageError>;

    /// Flush buffered writes to durable storage.
    fn flush(&self) -> Result<(), StorageError>;
}

/// A bounded-lifetime snapshot view supporting point lookups and ordered
/// iteration within one column family.
pub trait StorageReader {
    /// Cursor tied to the reader borrow.
    type Iter<'r>: CfIterator
    where
        Self: 'r;

    /// Point lookup. Absent is `Ok(None)`, a valid non-error outcome.
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Ordered cursor scoped to one column family; never surfaces entries
    /// from other column families.
    fn iter_cf(&self, cf: &str) -> Result<Self::Iter<'_>, StorageError>;
}

/// Cursor over the ordered (key, value) pairs of one column family.
pub trait CfIterator {
    /// Position at the first key >= `key` (logical, within the cursor's CF).
    fn seek(&mut self, key: &[u8]);

    /// Whether the cursor is on an entry of its column family.
    fn valid(&self) -> bool;

    /// Advance to the next entry.
    fn next(&mut self);

    /// Current (key, value) pair with the CF prefix stripped, returned as
    /// independent copies; `None` when the cursor is not valid.
    fn item(&self) -> Option<(Vec<u8>, Vec<u8>)>;

    /// Deferred engine error, if iteration stopped because of one rather
    /// than normal exhaustion.
    fn status(&self) -> Result<(), StorageError>;
}
