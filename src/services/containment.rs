//! Containment Tracker
//!
//! The single write path through which a node becomes contained in a folder
//! or is detached from one. Every mutation updates the direct index first and
//! then fans the recursive index out over the folder's ancestor chain, in
//! that order, strictly sequentially.
//!
//! There is no cross-operation lock here. Concurrent adds to sibling folders
//! are safe because set union is commutative and idempotent; structural
//! mutations that change a folder's ancestor chain are serialized one level
//! up, in `NodeService`.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::db::{DirectIndex, KeyValueStore, NodeStore, RecursiveIndex};
use crate::services::error::GraphServiceError;

/// Orchestrates the node store and both containment indexes.
pub struct ContainmentTracker {
    nodes: Arc<NodeStore>,
    direct: DirectIndex,
    recursive: RecursiveIndex,
}

impl ContainmentTracker {
    pub fn new(user_id: &str, kv: Arc<dyn KeyValueStore>, nodes: Arc<NodeStore>) -> Self {
        Self {
            direct: DirectIndex::new(user_id, kv.clone()),
            recursive: RecursiveIndex::new(user_id, kv, nodes.clone()),
            nodes,
        }
    }

    /// Record `node_id` inside `folder_id`: direct membership, then
    /// recursive membership at the folder and every ancestor.
    pub async fn add_to_folder(
        &self,
        folder_id: &str,
        node_id: &str,
    ) -> Result<(), GraphServiceError> {
        info!(%folder_id, %node_id, "adding node to folder indexes");
        self.direct.add(folder_id, node_id).await?;
        self.recursive.add(folder_id, node_id).await?;
        Ok(())
    }

    /// Detach `node_id` from `folder_id`, mirroring `add_to_folder`.
    pub async fn remove_from_folder(
        &self,
        folder_id: &str,
        node_id: &str,
    ) -> Result<(), GraphServiceError> {
        info!(%folder_id, %node_id, "removing node from folder indexes");
        self.direct.remove(folder_id, node_id).await?;
        self.recursive.remove(folder_id, node_id).await?;
        Ok(())
    }

    /// Immediate member IDs of `folder_id`.
    pub async fn list_direct(&self, folder_id: &str) -> Result<Vec<String>, GraphServiceError> {
        Ok(self.direct.list(folder_id).await?)
    }

    /// All descendant IDs of `folder_id`, any depth.
    pub async fn list_recursive(&self, folder_id: &str) -> Result<Vec<String>, GraphServiceError> {
        Ok(self.recursive.list(folder_id).await?)
    }

    /// Ancestor folder IDs of `node_id`, immediate parent first, root
    /// included, the node itself excluded.
    ///
    /// Read-path variant of the chain walk: a broken link or a revisited
    /// node logs a warning and returns the partial chain collected so far
    /// instead of failing, so corruption cannot take down read paths.
    pub async fn get_parent_chain(&self, node_id: &str) -> Result<Vec<String>, GraphServiceError> {
        let mut chain = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(node_id.to_string());
        let mut current_id = node_id.to_string();

        loop {
            let Some(node) = self.nodes.get(&current_id).await? else {
                warn!(%node_id, missing = %current_id, "parent chain walk hit a missing node; returning partial chain");
                break;
            };
            let Some(parent) = node.parent else {
                break;
            };
            if !visited.insert(parent.parent_id.clone()) {
                warn!(%node_id, repeated = %parent.parent_id, "parent chain walk revisited a node; returning partial chain");
                break;
            }
            chain.push(parent.parent_id.clone());
            current_id = parent.parent_id;
        }
        Ok(chain)
    }

    /// Wipe both index families for the user.
    pub async fn clear_all_indexes(&self) -> Result<(), GraphServiceError> {
        self.direct.clear_all().await?;
        self.recursive.clear_all().await?;
        Ok(())
    }
}
