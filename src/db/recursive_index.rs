//! Recursive Containment Index
//!
//! One set per folder holding every descendant node ID at any depth. When a
//! node enters folder F it must appear in the recursive set of F and of every
//! ancestor of F up to the root; removal mirrors the same fan-out. The
//! ancestor chain is found by walking parent links through the node store,
//! which makes each add/remove O(depth) in key-value calls.
//!
//! The walk happens entirely before the first set mutation and fails closed:
//! a missing intermediate node or a cycle aborts the operation, because a
//! partially indexed chain would answer containment queries wrong. Mutations
//! already applied by an aborted *retry* are harmless since set add/remove
//! are idempotent; callers retry the whole operation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::db::error::{IndexError, KvError};
use crate::db::keys;
use crate::db::kv::KeyValueStore;
use crate::db::node_store::NodeStore;

/// Per-folder set of all transitive descendant node IDs.
pub struct RecursiveIndex {
    user_id: String,
    kv: Arc<dyn KeyValueStore>,
    nodes: Arc<NodeStore>,
}

impl RecursiveIndex {
    pub fn new(
        user_id: impl Into<String>,
        kv: Arc<dyn KeyValueStore>,
        nodes: Arc<NodeStore>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            kv,
            nodes,
        }
    }

    /// The folder itself plus every ancestor up to the root, in walk order.
    ///
    /// Fails with [`IndexError::MissingAncestor`] on a broken link and
    /// [`IndexError::CycleDetected`] if an ID repeats. Explicit loop with a
    /// visited set; never recursion.
    async fn chain_to_root(&self, folder_id: &str) -> Result<Vec<String>, IndexError> {
        let mut chain = vec![folder_id.to_string()];
        let mut visited: HashSet<String> = chain.iter().cloned().collect();
        let mut current_id = folder_id.to_string();

        loop {
            let node = self.nodes.get(&current_id).await?.ok_or_else(|| {
                IndexError::MissingAncestor {
                    folder_id: folder_id.to_string(),
                    missing_id: current_id.clone(),
                }
            })?;

            let Some(parent) = node.parent else {
                break;
            };
            if !visited.insert(parent.parent_id.clone()) {
                return Err(IndexError::CycleDetected {
                    node_id: parent.parent_id,
                });
            }
            chain.push(parent.parent_id.clone());
            current_id = parent.parent_id;
        }
        Ok(chain)
    }

    /// Add `node_id` to the recursive set of `folder_id` and of every
    /// ancestor of `folder_id`.
    pub async fn add(&self, folder_id: &str, node_id: &str) -> Result<(), IndexError> {
        let chain = self.chain_to_root(folder_id).await?;
        debug!(%folder_id, %node_id, depth = chain.len(), "recursive index add");
        for ancestor_id in &chain {
            let key = keys::recursive_key(&self.user_id, ancestor_id);
            self.kv.set_add(&key, node_id).await.map_err(IndexError::Kv)?;
        }
        Ok(())
    }

    /// Remove `node_id` from the recursive sets along the same chain.
    pub async fn remove(&self, folder_id: &str, node_id: &str) -> Result<(), IndexError> {
        let chain = self.chain_to_root(folder_id).await?;
        debug!(%folder_id, %node_id, depth = chain.len(), "recursive index remove");
        for ancestor_id in &chain {
            let key = keys::recursive_key(&self.user_id, ancestor_id);
            self.kv
                .set_remove(&key, node_id)
                .await
                .map_err(IndexError::Kv)?;
        }
        Ok(())
    }

    /// Current recursive members of `folder_id`, order not guaranteed.
    pub async fn list(&self, folder_id: &str) -> Result<Vec<String>, KvError> {
        let key = keys::recursive_key(&self.user_id, folder_id);
        self.kv.set_members(&key).await
    }

    /// Remove every recursive-index set for the user.
    pub async fn clear_all(&self) -> Result<(), KvError> {
        let prefix = keys::recursive_prefix(&self.user_id);
        let matched = self.kv.scan_keys(&prefix).await?;
        for key in &matched {
            self.kv.delete_key(key).await?;
        }
        info!(user_id = %self.user_id, cleared = matched.len(), "cleared recursive indexes");
        Ok(())
    }
}
