//! Key-value persistence backends
//!
//! The whole graph lives under a single key as one JSON blob. Backends only
//! move opaque strings; encoding and decoding happen in the manager.

mod file;
mod memory;
mod rest;

use async_trait::async_trait;

use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use rest::RestKvStore;

/// Key the graph blob is stored under unless configured otherwise
pub const DEFAULT_GRAPH_KEY: &str = "knowledge_graph";

/// Asynchronous key-value service holding serialized graphs.
///
/// `get` returns `Ok(None)` for a key that was never written.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Short backend name for logs
    fn kind(&self) -> &'static str;
}
