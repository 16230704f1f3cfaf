//! Knowledge graph manager - core data engine
//!
//! Every operation loads the full graph from the store, works on that copy,
//! and (for mutations) writes the full graph back. Nothing is cached between
//! calls.
//!
//! Mutations in one process are serialized by `write_lock`, so concurrent
//! requests cannot overwrite each other's saves. Separate processes sharing a
//! backend key are not coordinated and can still lose updates.

mod crud;
mod query;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::error::{GraphError, GraphResult};
use crate::store::{GraphStore, DEFAULT_GRAPH_KEY};
use crate::types::{
    Entity, KnowledgeGraph, Observation, ObservationDeletion, ObservationResult, Relation,
};

/// Owns the load/save cycle and all graph mutation and query logic
pub struct KnowledgeGraphManager {
    pub(crate) store: Arc<dyn GraphStore>,
    pub(crate) key: String,
    pub(crate) write_lock: Mutex<()>,
}

impl KnowledgeGraphManager {
    /// Create a manager over `store` using the default graph key
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self::with_key(store, DEFAULT_GRAPH_KEY)
    }

    /// Create a manager over `store` persisting under a custom key
    pub fn with_key(store: Arc<dyn GraphStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Key the graph is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted graph.
    ///
    /// Never fails: an absent key, a backend error or an undecodable blob all
    /// yield the empty graph so reads stay available.
    pub(crate) async fn load_graph(&self) -> KnowledgeGraph {
        match self.store.get(&self.key).await {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(graph) => graph,
                Err(e) => {
                    error!(key = %self.key, error = %e, "stored graph is not decodable, using empty graph");
                    KnowledgeGraph::default()
                }
            },
            Ok(None) => KnowledgeGraph::default(),
            Err(e) => {
                warn!(key = %self.key, backend = self.store.kind(), error = %e, "failed to load graph, using empty graph");
                KnowledgeGraph::default()
            }
        }
    }

    /// Persist the full graph. Backend failures propagate.
    pub(crate) async fn save_graph(&self, graph: &KnowledgeGraph) -> GraphResult<()> {
        let blob = serde_json::to_string(graph)?;
        self.store.set(&self.key, blob).await.map_err(|e| {
            error!(key = %self.key, backend = self.store.kind(), error = %e, "failed to save graph");
            GraphError::Persistence(e)
        })
    }
}

impl KnowledgeGraphManager {
    // Mutations (from crud.rs)

    /// Create entities whose names are not in the graph yet
    ///
    /// Entities colliding with an existing name, or with a name accepted
    /// earlier in the same call, are dropped without merging.
    ///
    /// # Arguments
    ///
    /// * `entities` - Candidate entities
    ///
    /// # Returns
    ///
    /// Exactly the entities that were added.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let created = kb.create_entities(vec![Entity::new("Alice", "Person")]).await?;
    /// assert_eq!(created.len(), 1);
    /// ```
    pub async fn create_entities(&self, entities: Vec<Entity>) -> GraphResult<Vec<Entity>> {
        crud::create_entities(self, entities).await
    }

    /// Create relations whose `(from, to, relationType)` triple is new.
    ///
    /// Endpoints are not required to name existing entities.
    pub async fn create_relations(&self, relations: Vec<Relation>) -> GraphResult<Vec<Relation>> {
        crud::create_relations(self, relations).await
    }

    /// Append observations to existing entities
    ///
    /// # Arguments
    ///
    /// * `observations` - One item per entity, each with candidate contents
    ///
    /// # Errors
    ///
    /// [`GraphError::EntityNotFound`] for the first unknown entity name. The
    /// batch is then abandoned and nothing is saved.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let added = kb
    ///     .add_observations(vec![Observation::new("Alice", vec!["x".into(), "x".into()])])
    ///     .await?;
    /// assert_eq!(added[0].added_observations, vec!["x"]);
    /// ```
    pub async fn add_observations(
        &self,
        observations: Vec<Observation>,
    ) -> GraphResult<Vec<ObservationResult>> {
        crud::add_observations(self, observations).await
    }

    /// Delete entities and every relation with one of them as an endpoint
    pub async fn delete_entities(&self, entity_names: Vec<String>) -> GraphResult<()> {
        crud::delete_entities(self, entity_names).await
    }

    pub async fn delete_observations(&self, deletions: Vec<ObservationDeletion>) -> GraphResult<()> {
        crud::delete_observations(self, deletions).await
    }

    /// Delete relations matching an input triple exactly
    pub async fn delete_relations(&self, relations: Vec<Relation>) -> GraphResult<()> {
        crud::delete_relations(self, relations).await
    }

    // Queries (from query.rs)

    /// Read the full graph
    pub async fn read_graph(&self) -> GraphResult<KnowledgeGraph> {
        query::read_graph(self).await
    }

    /// Case-insensitive substring search over names, types and observations
    ///
    /// # Arguments
    ///
    /// * `query` - Substring to look for; `""` matches every entity
    ///
    /// # Returns
    ///
    /// Matching entities plus the relations whose both endpoints matched.
    pub async fn search_nodes(&self, query: &str) -> GraphResult<KnowledgeGraph> {
        query::search_nodes(self, query).await
    }

    /// Same subgraph shape as [`search_nodes`](Self::search_nodes), selecting by exact name
    pub async fn open_nodes(&self, names: Vec<String>) -> GraphResult<KnowledgeGraph> {
        query::open_nodes(self, names).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn manager() -> (Arc<MemoryStore>, KnowledgeGraphManager) {
        let store = Arc::new(MemoryStore::new());
        let kb = KnowledgeGraphManager::new(store.clone());
        (store, kb)
    }

    #[tokio::test]
    async fn test_load_absent_key_is_empty() {
        let (_, kb) = manager();
        assert!(kb.load_graph().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_is_masked() {
        let (store, kb) = manager();
        store.put_raw(DEFAULT_GRAPH_KEY, r#"{"entities":[{"name":"A","entityType":"T"}]}"#);
        store.fail_reads(true);
        assert!(kb.load_graph().await.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_blob_is_masked() {
        let (store, kb) = manager();
        store.put_raw(DEFAULT_GRAPH_KEY, "not json");
        assert!(kb.load_graph().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_propagates() {
        let (store, kb) = manager();
        store.fail_writes(true);
        let err = kb.save_graph(&KnowledgeGraph::new()).await.unwrap_err();
        assert!(matches!(err, GraphError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (store, kb) = manager();
        let graph = KnowledgeGraph::with_data(
            vec![Entity::new("A", "T")],
            vec![Relation::new("A", "A", "self")],
        );
        kb.save_graph(&graph).await.unwrap();

        assert_eq!(kb.load_graph().await, graph);
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_key() {
        let store = Arc::new(MemoryStore::new());
        let kb = KnowledgeGraphManager::with_key(store.clone(), "team_graph");
        kb.save_graph(&KnowledgeGraph::new()).await.unwrap();

        assert_eq!(kb.key(), "team_graph");
        assert!(store.raw("team_graph").is_some());
        assert!(store.raw(DEFAULT_GRAPH_KEY).is_none());
    }
}
