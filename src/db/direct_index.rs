//! Direct Containment Index
//!
//! One set per folder holding the IDs of its immediate members. Membership
//! means exactly "the node's parent is this folder"; the set is maintained by
//! the containment tracker, not derived on read. Add and remove are set
//! toggles, so retries and duplicate calls are harmless.

use std::sync::Arc;

use tracing::{debug, info};

use crate::db::error::KvError;
use crate::db::keys;
use crate::db::kv::KeyValueStore;

/// Per-folder set of immediate member node IDs.
pub struct DirectIndex {
    user_id: String,
    kv: Arc<dyn KeyValueStore>,
}

impl DirectIndex {
    pub fn new(user_id: impl Into<String>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            user_id: user_id.into(),
            kv,
        }
    }

    /// Record `node_id` as a direct member of `folder_id`.
    pub async fn add(&self, folder_id: &str, node_id: &str) -> Result<(), KvError> {
        let key = keys::direct_key(&self.user_id, folder_id);
        debug!(%folder_id, %node_id, "direct index add");
        self.kv.set_add(&key, node_id).await
    }

    /// Drop `node_id` from the direct members of `folder_id`.
    pub async fn remove(&self, folder_id: &str, node_id: &str) -> Result<(), KvError> {
        let key = keys::direct_key(&self.user_id, folder_id);
        debug!(%folder_id, %node_id, "direct index remove");
        self.kv.set_remove(&key, node_id).await
    }

    /// Current direct members of `folder_id`, order not guaranteed.
    pub async fn list(&self, folder_id: &str) -> Result<Vec<String>, KvError> {
        let key = keys::direct_key(&self.user_id, folder_id);
        self.kv.set_members(&key).await
    }

    /// Remove every direct-index set for the user.
    pub async fn clear_all(&self) -> Result<(), KvError> {
        let prefix = keys::direct_prefix(&self.user_id);
        let matched = self.kv.scan_keys(&prefix).await?;
        for key in &matched {
            self.kv.delete_key(key).await?;
        }
        info!(user_id = %self.user_id, cleared = matched.len(), "cleared direct indexes");
        Ok(())
    }
}
