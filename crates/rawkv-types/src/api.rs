//! Request and response types for the raw key-value API.
//!
//! These mirror the wire contract of the four operations. Keys and values
//! are opaque byte sequences; the `error` field carries the in-band error
//! string when a storage operation fails, and `not_found` distinguishes
//! an absent key from a failure.

use serde::{Deserialize, Serialize};

/// A single key-value pair returned by scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Request for a point lookup in one column family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGetRequest {
    /// Column family name
    pub cf: String,
    /// Logical key within the column family
    pub key: Vec<u8>,
}

/// Response for a point lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGetResponse {
    /// Value bytes; empty when `not_found` is set or on error
    pub value: Vec<u8>,
    /// True when the key does not exist (a valid outcome, not a failure)
    pub not_found: bool,
    /// Stringified storage error, if the lookup failed
    pub error: Option<String>,
}

impl RawGetResponse {
    /// Successful lookup carrying the value.
    pub fn with_value(value: Vec<u8>) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// The key does not exist.
    pub fn not_found() -> Self {
        Self {
            not_found: true,
            ..Default::default()
        }
    }

    /// Failed lookup carrying the error string.
    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Default::default()
        }
    }
}

/// Request to store one key-value pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPutRequest {
    pub cf: String,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Response for put; carries only the error, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPutResponse {
    pub error: Option<String>,
}

impl RawPutResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            error: Some(err.to_string()),
        }
    }
}

/// Request to delete one key. Deleting an absent key is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDeleteRequest {
    pub cf: String,
    pub key: Vec<u8>,
}

/// Response for delete; carries only the error, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDeleteResponse {
    pub error: Option<String>,
}

impl RawDeleteResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            error: Some(err.to_string()),
        }
    }
}

/// Request for an ascending range scan within one column family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScanRequest {
    pub cf: String,
    /// Scan starts at the first key >= start_key
    pub start_key: Vec<u8>,
    /// Maximum number of pairs to return; 0 yields an empty result
    pub limit: u32,
}

/// Response for scan: pairs in ascending logical-key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScanResponse {
    pub kvs: Vec<KvPair>,
    pub error: Option<String>,
}

impl RawScanResponse {
    pub fn with_pairs(kvs: Vec<KvPair>) -> Self {
        Self { kvs, error: None }
    }

    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            kvs: Vec::new(),
            error: Some(err.to_string()),
        }
    }
}
