//! Shared application state

use std::sync::Arc;

use crate::knowledge_base::KnowledgeGraphManager;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeGraphManager>,
}

impl AppState {
    pub fn new(kb: Arc<KnowledgeGraphManager>) -> Self {
        Self { kb }
    }
}
