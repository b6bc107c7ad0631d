//! Raw API handlers for the RawKV service.
//!
//! A thin translation layer between the external request/response types
//! and the storage traits. Each handler is stateless across calls; all
//! shared state is the injected storage handle.

pub mod raw;

pub use raw::RawKvService;
