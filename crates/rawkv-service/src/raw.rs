//! The four raw operations: get, put, delete, scan.
//!
//! Handlers translate requests into storage calls and fold storage errors
//! into the response's `error` field, logging them as they pass through.
//! Readers and cursors are scoped borrows, so every exit path (success,
//! not-found, or error) releases them.

use std::sync::Arc;

use tracing::error;

use rawkv_storage::{Batch, CfIterator, Storage, StorageError, StorageReader};
use rawkv_types::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};

/// Raw key-value API over an injected storage handle.
///
/// Generic over the storage traits: any ordered, snapshot-capable engine
/// implementation can back it. Handlers may run concurrently; the engine
/// serializes writes and snapshots reads.
pub struct RawKvService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> RawKvService<S> {
    /// Create a new service over the given storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Point lookup of `key` in column family `cf`.
    ///
    /// An absent key sets `not_found`; it is a valid outcome, never an
    /// error.
    pub fn raw_get(&self, req: &RawGetRequest) -> RawGetResponse {
        match self.get_value(&req.cf, &req.key) {
            Ok(Some(value)) => RawGetResponse::with_value(value),
            Ok(None) => RawGetResponse::not_found(),
            Err(err) => {
                error!(cf = %req.cf, %err, "raw_get failed");
                RawGetResponse::from_error(err)
            }
        }
    }

    /// Store one key-value pair.
    ///
    /// A single-entry batch still goes through the full atomic write path,
    /// so extending to multi-key batches needs no new guarantee.
    pub fn raw_put(&self, req: &RawPutRequest) -> RawPutResponse {
        let mut batch = Batch::new();
        batch.put(req.cf.clone(), req.key.clone(), req.value.clone());

        match self.storage.write(batch) {
            Ok(()) => RawPutResponse::ok(),
            Err(err) => {
                error!(cf = %req.cf, %err, "raw_put failed");
                RawPutResponse::from_error(err)
            }
        }
    }

    /// Delete one key. Deleting an absent key succeeds (idempotent).
    pub fn raw_delete(&self, req: &RawDeleteRequest) -> RawDeleteResponse {
        let mut batch = Batch::new();
        batch.delete(req.cf.clone(), req.key.clone());

        match self.storage.write(batch) {
            Ok(()) => RawDeleteResponse::ok(),
            Err(err) => {
                error!(cf = %req.cf, %err, "raw_delete failed");
                RawDeleteResponse::from_error(err)
            }
        }
    }

    /// Ascending scan of up to `limit` pairs starting at the first key
    /// >= `start_key`.
    ///
    /// `limit = 0` or a start past the last key yields an empty, non-error
    /// result. A mid-iteration engine error discards any collected pairs
    /// and surfaces the error.
    pub fn raw_scan(&self, req: &RawScanRequest) -> RawScanResponse {
        match self.scan_pairs(&req.cf, &req.start_key, req.limit) {
            Ok(kvs) => RawScanResponse::with_pairs(kvs),
            Err(err) => {
                error!(cf = %req.cf, %err, "raw_scan failed");
                RawScanResponse::from_error(err)
            }
        }
    }

    fn get_value(&self, cf: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let reader = self.storage.reader()?;
        reader.get_cf(cf, key)
    }

    fn scan_pairs(
        &self,
        cf: &str,
        start_key: &[u8],
        limit: u32,
    ) -> Result<Vec<KvPair>, StorageError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let reader = self.storage.reader()?;
        let mut iter = reader.iter_cf(cf)?;
        iter.seek(start_key);

        let mut kvs = Vec::new();
        while iter.valid() && (kvs.len() as u32) < limit {
            if let Some((key, value)) = iter.item() {
                kvs.push(KvPair { key, value });
            }
            iter.next();
        }
        // Distinguish exhaustion from an engine error; on error the pairs
        // collected so far are discarded with this early return.
        iter.status()?;

        Ok(kvs)
    }
}
