//! KV Memory Graph
//!
//! A small knowledge graph of named entities with free-text observations and
//! typed directed relations between them, persisted as one JSON blob under a
//! single key of a key-value store.
//!
//! # Modules
//!
//! - `types`: Core data structures (Entity, Relation, KnowledgeGraph)
//! - `store`: `GraphStore` trait with memory, file and REST key-value backends
//! - `knowledge_base`: `KnowledgeGraphManager`, the CRUD and query engine
//! - `api`: Axum HTTP boundary
//! - `config`: Environment configuration
//! - `error`: Error types
//! - `utils`: Atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kv_memory_graph::{Entity, KnowledgeGraphManager, MemoryStore};
//!
//! # async fn run() -> Result<(), kv_memory_graph::GraphError> {
//! let kb = KnowledgeGraphManager::new(Arc::new(MemoryStore::new()));
//! kb.create_entities(vec![Entity::new("Alice", "Person")]).await?;
//! let found = kb.search_nodes("alice").await?;
//! assert_eq!(found.entity_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod knowledge_base;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{GraphError, GraphResult, StoreError};
pub use knowledge_base::KnowledgeGraphManager;
pub use store::{FileStore, GraphStore, MemoryStore, RestKvStore};
pub use types::{
    Entity, KnowledgeGraph, Observation, ObservationDeletion, ObservationResult, Relation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
