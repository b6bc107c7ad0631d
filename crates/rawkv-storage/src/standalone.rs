//! Standalone single-node storage backed by RocksDB.
//!
//! All data lives in one ordered keyspace; logical column families exist
//! only through the key codec. Readers wrap engine snapshots, writes go
//! through a single atomic `WriteBatch` commit.

use rocksdb::{DBRawIterator, Options, Snapshot, WriteBatch, DB};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::keys;
use crate::modify::Batch;
use crate::storage::{CfIterator, Storage, StorageReader};

/// Single-node storage over an embedded RocksDB instance.
///
/// Opened once at process start and shared (via `Arc`) for the process
/// lifetime. The engine serializes concurrent writes and gives each
/// snapshot a consistent view; this layer adds no locking of its own.
/// The store closes when the value is dropped.
pub struct StandaloneStorage {
    db: DB,
}

impl StandaloneStorage {
    /// Open or create the store at `path`.
    ///
    /// Failure here is a startup fault: the instance cannot serve any
    /// request and the caller should abort initialization.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        info!("Opening storage at {:?}", path);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);

        let db = DB::open(&db_opts, path)?;
        Ok(Self { db })
    }

    /// Trigger manual full-range compaction.
    pub fn compact(&self) {
        info!("Starting full compaction...");
        self.db.compact_range::<&[u8], &[u8]>(None, None);
        info!("Compaction complete");
    }

    /// Count entries per column family and measure disk usage.
    ///
    /// Walks the whole keyspace; intended for admin use, not the hot path.
    pub fn stats(&self) -> Result<StorageStats, StorageError> {
        let mut entries_per_cf: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_entries = 0u64;

        let mut iter = self.db.raw_iterator();
        iter.seek_to_first();
        while iter.valid() {
            if let Some(physical) = iter.key() {
                let (cf, _) = keys::decode_key(physical)?;
                *entries_per_cf.entry(cf).or_insert(0) += 1;
                total_entries += 1;
            }
            iter.next();
        }
        iter.status()?;

        Ok(StorageStats {
            entries_per_cf,
            total_entries,
            disk_usage_bytes: self.disk_usage(),
        })
    }

    fn disk_usage(&self) -> u64 {
        let mut total_size = 0u64;
        if let Ok(entries) = std::fs::read_dir(self.db.path()) {
            for entry in entries.flatten() {
                if let Ok(metadata) = entry.metadata() {
                    total_size += metadata.len();
                }
            }
        }
        total_size
    }
}

impl Storage for StandaloneStorage {
    type Reader<'a>
        = StandaloneReader<'a>
    where
        Self: 'a;

    fn reader(&self) -> Result<StandaloneReader<'_>, StorageError> {
        Ok(StandaloneReader {
            snapshot: self.db.snapshot(),
        })
    }

    fn write(&self, batch: Batch) -> Result<(), StorageError> {
        // Encode everything up front: an encode error discards the whole
        // batch before the engine sees any of it.
        let mut wb = WriteBatch::default();
        for modify in batch.iter() {
            let physical = keys::encode_key(modify.cf(), modify.key())?;
            match modify.value() {
                Some(value) => wb.put(&physical, value),
                None => wb.delete(&physical),
            }
        }

        let entries = batch.len();
        self.db.write(wb)?;
        debug!(entries, "Committed write batch");
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

/// Snapshot-scoped reader. Dropping it releases the engine snapshot, so
/// every exit path of a request closes its reader exactly once.
pub struct StandaloneReader<'db> {
    snapshot: Snapshot<'db>,
}

impl<'db> StorageReader for StandaloneReader<'db> {
    type Iter<'r>
        = StandaloneIter<'r>
    where
        Self: 'r;

    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let physical = keys::encode_key(cf, key)?;
        Ok(self.snapshot.get(physical)?)
    }

    fn iter_cf(&self, cf: &str) -> Result<StandaloneIter<'_>, StorageError> {
        let prefix = keys::cf_prefix(cf)?;
        let mut inner = self.snapshot.raw_iterator();
        inner.seek(&prefix);
        Ok(StandaloneIter { inner, prefix })
    }
}

/// Cursor over one column family's contiguous physical-key run.
pub struct StandaloneIter<'r> {
    inner: DBRawIterator<'r>,
    prefix: Vec<u8>,
}

impl<'r> CfIterator for StandaloneIter<'r> {
    fn seek(&mut self, key: &[u8]) {
        let mut target = Vec::with_capacity(self.prefix.len() + key.len());
        target.extend_from_slice(&self.prefix);
        target.extend_from_slice(key);
        self.inner.seek(target);
    }

    fn valid(&self) -> bool {
        // Past the last key of this CF the engine cursor may still be valid
        // but positioned on another CF's run.
        self.inner.valid()
            && self
                .inner
                .key()
                .is_some_and(|physical| physical.starts_with(&self.prefix))
    }

    fn next(&mut self) {
        if self.inner.valid() {
            self.inner.next();
        }
    }

    fn item(&self) -> Option<(Vec<u8>, Vec<u8>)> {
        if !self.valid() {
            return None;
        }
        let physical = self.inner.key()?;
        let value = self.inner.value()?;
        Some((physical[self.prefix.len()..].to_vec(), value.to_vec()))
    }

    fn status(&self) -> Result<(), StorageError> {
        self.inner.status()?;
        Ok(())
    }
}

/// Statistics about the store, for admin commands.
#[derive(Debug, Default)]
pub struct StorageStats {
    /// Entry count per column family
    pub entries_per_cf: BTreeMap<String, u64>,
    /// Total entries across all column families
    pub total_entries: u64,
    /// Total on-disk size of the store directory in bytes
    pub disk_usage_bytes: u64,
}
