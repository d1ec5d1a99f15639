//! Allow-list cache and payload decoding.

pub mod cache;
pub mod decoder;

pub use cache::{AllowListCache, RefreshOutcome};
pub use decoder::PayloadDecoder;
