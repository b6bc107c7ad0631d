//! Column-family key encoding.
//!
//! Physical key format: `[cf_len: u8][cf bytes][logical key bytes]`
//!
//! The one-byte length prefix keeps the mapping injective over the whole
//! (cf, key) domain: two distinct pairs can never produce the same physical
//! key, even when one CF name is a prefix of another. For a fixed CF the
//! prefix is constant, so physical-key order equals logical-key byte order
//! and all keys of one CF form a contiguous run in the engine.

use crate::error::StorageError;

/// Maximum column family name length in bytes.
pub const MAX_CF_NAME_LEN: usize = u8::MAX as usize;

/// Encode a (cf, key) pair into a single physical key.
pub fn encode_key(cf: &str, key: &[u8]) -> Result<Vec<u8>, StorageError> {
    let cf_bytes = cf.as_bytes();
    if cf_bytes.len() > MAX_CF_NAME_LEN {
        return Err(StorageError::Key(format!(
            "column family name too long: {} bytes (max {})",
            cf_bytes.len(),
            MAX_CF_NAME_LEN
        )));
    }

    let mut physical = Vec::with_capacity(1 + cf_bytes.len() + key.len());
    physical.push(cf_bytes.len() as u8);
    physical.extend_from_slice(cf_bytes);
    physical.extend_from_slice(key);
    Ok(physical)
}

/// Decode a physical key back into its (cf, key) pair.
pub fn decode_key(physical: &[u8]) -> Result<(String, Vec<u8>), StorageError> {
    let (&cf_len, rest) = physical
        .split_first()
        .ok_or_else(|| StorageError::Key("empty physical key".to_string()))?;
    let cf_len = cf_len as usize;

    if rest.len() < cf_len {
        return Err(StorageError::Key(format!(
            "truncated physical key: expected {} cf bytes, found {}",
            cf_len,
            rest.len()
        )));
    }

    let (cf_bytes, key) = rest.split_at(cf_len);
    let cf = std::str::from_utf8(cf_bytes)
        .map_err(|e| StorageError::Key(format!("invalid cf name: {}", e)))?;

    Ok((cf.to_string(), key.to_vec()))
}

/// The prefix shared by every physical key of one column family.
///
/// Used as the seek lower bound and the cursor scoping check.
pub fn cf_prefix(cf: &str) -> Result<Vec<u8>, StorageError> {
    encode_key(cf, &[])
}
