//! # rawkv-types
//!
//! Shared types for the RawKV service:
//! - Request/response types for the four raw operations (get, put, delete, scan)
//! - Layered configuration loading
//! - Service-level error type

pub mod api;
pub mod config;
pub mod error;

pub use api::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};
pub use config::Settings;
pub use error::KvError;
