//! Mutation operations for the knowledge graph manager
//!
//! Each operation holds the manager's write lock across its whole
//! load -> mutate -> save cycle.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::types::{Entity, Observation, ObservationDeletion, ObservationResult, Relation};

use super::KnowledgeGraphManager;

/// Drop repeated strings, keeping the first occurrence of each
fn dedup_preserving_order(values: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(values.len());
    values.retain(|v| seen.insert(v.clone()));
}

/// Create entities whose names are not taken yet; returns the ones added
pub async fn create_entities(
    kb: &KnowledgeGraphManager,
    entities: Vec<Entity>,
) -> GraphResult<Vec<Entity>> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;
    let mut taken: HashSet<String> = graph.entities.iter().map(|e| e.name.clone()).collect();

    let mut created = Vec::new();
    for mut entity in entities {
        if taken.insert(entity.name.clone()) {
            dedup_preserving_order(&mut entity.observations);
            created.push(entity.clone());
            graph.entities.push(entity);
        }
    }

    kb.save_graph(&graph).await?;
    debug!(created = created.len(), total = graph.entity_count(), "create_entities");
    Ok(created)
}

/// Create relations whose triple is not present yet; returns the ones added
pub async fn create_relations(
    kb: &KnowledgeGraphManager,
    relations: Vec<Relation>,
) -> GraphResult<Vec<Relation>> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;
    let mut existing: HashSet<Relation> = graph.relations.iter().cloned().collect();

    let mut created = Vec::new();
    for relation in relations {
        if existing.insert(relation.clone()) {
            created.push(relation.clone());
            graph.relations.push(relation);
        }
    }

    kb.save_graph(&graph).await?;
    debug!(created = created.len(), total = graph.relation_count(), "create_relations");
    Ok(created)
}

/// Append new observations to existing entities.
///
/// Fails with [`GraphError::EntityNotFound`] on the first unknown entity; in
/// that case nothing is saved, including items processed before it.
pub async fn add_observations(
    kb: &KnowledgeGraphManager,
    observations: Vec<Observation>,
) -> GraphResult<Vec<ObservationResult>> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;

    let mut results = Vec::with_capacity(observations.len());
    for obs in observations {
        let entity = graph
            .entities
            .iter_mut()
            .find(|e| e.name == obs.entity_name)
            .ok_or_else(|| GraphError::EntityNotFound(obs.entity_name.clone()))?;

        let mut seen: HashSet<String> = entity.observations.iter().cloned().collect();
        let added: Vec<String> = obs
            .contents
            .into_iter()
            .filter(|content| seen.insert(content.clone()))
            .collect();
        entity.observations.extend(added.iter().cloned());

        results.push(ObservationResult {
            entity_name: obs.entity_name,
            added_observations: added,
        });
    }

    kb.save_graph(&graph).await?;
    debug!(items = results.len(), "add_observations");
    Ok(results)
}

/// Delete entities and every relation touching them. Unknown names are ignored.
pub async fn delete_entities(
    kb: &KnowledgeGraphManager,
    entity_names: Vec<String>,
) -> GraphResult<()> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;
    let names_to_delete: HashSet<String> = entity_names.into_iter().collect();

    graph
        .entities
        .retain(|e| !names_to_delete.contains(&e.name));
    graph
        .relations
        .retain(|r| !names_to_delete.contains(&r.from) && !names_to_delete.contains(&r.to));

    kb.save_graph(&graph).await?;
    debug!(requested = names_to_delete.len(), remaining = graph.entity_count(), "delete_entities");
    Ok(())
}

/// Remove listed observations. Unknown entities and observations are ignored.
pub async fn delete_observations(
    kb: &KnowledgeGraphManager,
    deletions: Vec<ObservationDeletion>,
) -> GraphResult<()> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;

    for deletion in deletions {
        if let Some(entity) = graph
            .entities
            .iter_mut()
            .find(|e| e.name == deletion.entity_name)
        {
            let to_remove: HashSet<String> = deletion.observations.into_iter().collect();
            entity.observations.retain(|o| !to_remove.contains(o));
        }
    }

    kb.save_graph(&graph).await
}

/// Delete relations matching an input triple exactly
pub async fn delete_relations(
    kb: &KnowledgeGraphManager,
    relations: Vec<Relation>,
) -> GraphResult<()> {
    let _guard = kb.write_lock.lock().await;
    let mut graph = kb.load_graph().await;
    let to_delete: HashSet<Relation> = relations.into_iter().collect();

    graph.relations.retain(|r| !to_delete.contains(r));

    kb.save_graph(&graph).await?;
    debug!(remaining = graph.relation_count(), "delete_relations");
    Ok(())
}
