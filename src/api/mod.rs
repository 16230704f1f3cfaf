//! HTTP boundary for the knowledge graph manager
//!
//! Translates requests into [`KnowledgeGraphManager`](crate::knowledge_base::KnowledgeGraphManager)
//! calls and results into status codes. Request shape is validated here,
//! before the manager runs.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
