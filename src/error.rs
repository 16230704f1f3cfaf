//! Error types for the storage backends and the graph manager

use thiserror::Error;

/// Failure reported by a [`GraphStore`](crate::store::GraphStore) backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("malformed backend response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend<T: Into<String>>(msg: T) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Errors raised by [`KnowledgeGraphManager`](crate::knowledge_base::KnowledgeGraphManager)
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Entity with name {0} not found")]
    EntityNotFound(String),
    #[error("failed to persist graph: {0}")]
    Persistence(#[from] StoreError),
    #[error("failed to encode graph: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
