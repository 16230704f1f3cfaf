//! Query operations for the knowledge graph manager
//!
//! All lookups are linear scans over the loaded graph.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::error::GraphResult;
use crate::types::{Entity, KnowledgeGraph};

use super::KnowledgeGraphManager;

/// Threshold for using parallel search (entities count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Read the full graph
pub async fn read_graph(kb: &KnowledgeGraphManager) -> GraphResult<KnowledgeGraph> {
    Ok(kb.load_graph().await)
}

/// Case-insensitive substring search over names, types and observations.
///
/// The empty query is a substring of everything and therefore matches every
/// entity.
pub async fn search_nodes(kb: &KnowledgeGraphManager, query: &str) -> GraphResult<KnowledgeGraph> {
    let graph = kb.load_graph().await;
    let needle = query.to_lowercase();

    let matching_entities: Vec<Entity> = if graph.entities.len() > PARALLEL_SEARCH_THRESHOLD {
        graph
            .entities
            .into_par_iter()
            .filter(|e| e.matches(&needle))
            .collect()
    } else {
        graph
            .entities
            .into_iter()
            .filter(|e| e.matches(&needle))
            .collect()
    };

    Ok(KnowledgeGraph::subgraph(matching_entities, graph.relations))
}

/// Open specific nodes by exact name
pub async fn open_nodes(
    kb: &KnowledgeGraphManager,
    names: Vec<String>,
) -> GraphResult<KnowledgeGraph> {
    let graph = kb.load_graph().await;
    let name_set: HashSet<String> = names.into_iter().collect();

    let matching_entities: Vec<Entity> = graph
        .entities
        .into_iter()
        .filter(|e| name_set.contains(&e.name))
        .collect();

    Ok(KnowledgeGraph::subgraph(matching_entities, graph.relations))
}
