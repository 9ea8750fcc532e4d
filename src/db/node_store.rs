//! Node Store
//!
//! CRUD for individual graph nodes over the key-value capability. Each user's
//! nodes live in one hash keyed by [`keys::node_key`]; the node ID is the
//! hash field and the value is the node serialized as JSON.
//!
//! `put` is an idempotent upsert and `get` never fails for an unknown ID, so
//! higher layers can retry whole containment operations safely.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::db::error::KvError;
use crate::db::keys;
use crate::db::kv::KeyValueStore;
use crate::models::GraphNode;

/// Per-user node persistence.
pub struct NodeStore {
    user_id: String,
    kv: Arc<dyn KeyValueStore>,
}

impl NodeStore {
    pub fn new(user_id: impl Into<String>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            user_id: user_id.into(),
            kv,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Persist or overwrite a node by its ID.
    pub async fn put(&self, node: &GraphNode) -> Result<(), KvError> {
        let key = keys::node_key(&self.user_id);
        let json = serde_json::to_string(node)?;
        debug!(node_id = %node.node_id, object_type = %node.object_type, "storing node");
        self.kv.hash_set(&key, &node.node_id, &json).await
    }

    /// Load a node by ID. Unknown IDs yield `Ok(None)`.
    pub async fn get(&self, node_id: &str) -> Result<Option<GraphNode>, KvError> {
        let key = keys::node_key(&self.user_id);
        match self.kv.hash_get(&key, node_id).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Remove a node record. Indexes are not touched here.
    pub async fn delete(&self, node_id: &str) -> Result<(), KvError> {
        let key = keys::node_key(&self.user_id);
        self.kv.hash_delete(&key, node_id).await
    }

    /// Every stored node for the user. Unbounded cost; maintenance and
    /// search paths only. Corrupt entries are skipped with a warning rather
    /// than failing the whole listing.
    pub async fn list_all(&self) -> Result<Vec<GraphNode>, KvError> {
        let key = keys::node_key(&self.user_id);
        let values = self.kv.hash_values(&key).await?;

        let mut nodes = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_str::<GraphNode>(&value) {
                Ok(node) => nodes.push(node),
                Err(err) => {
                    warn!(user_id = %self.user_id, error = %err, "skipping unparsable node record");
                }
            }
        }
        Ok(nodes)
    }

    /// Delete every key belonging to the user, nodes and indexes alike.
    /// Irreversible; reset and test contexts only.
    pub async fn clear_all(&self) -> Result<(), KvError> {
        let prefix = keys::user_prefix(&self.user_id);
        let matched = self.kv.scan_keys(&prefix).await?;
        for key in &matched {
            self.kv.delete_key(key).await?;
        }
        info!(user_id = %self.user_id, cleared = matched.len(), "cleared all user keys");
        Ok(())
    }
}
