//! Key-Value Capability
//!
//! The flat key-value primitives this crate is built on: hash get/set by
//! key+field, set add/remove/members, key enumeration by prefix. No
//! atomicity spans keys; every multi-key operation in the crate is designed
//! to be idempotent so a failed fan-out can simply be retried.
//!
//! [`MemoryKvStore`] is the in-process implementation used by tests and
//! embeddable callers; production deployments supply their own backend
//! behind the same trait.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::error::KvError;

/// The external key-value capability.
///
/// All calls are suspension points; implementations must be safe for
/// concurrent use without additional locking by callers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Set one field of a hash, creating the hash if absent.
    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), KvError>;

    /// Read one field of a hash. Absent key or field yields `None`.
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, KvError>;

    /// All values of a hash, unordered. Absent key yields an empty list.
    async fn hash_values(&self, key: &str) -> Result<Vec<String>, KvError>;

    /// Delete one field of a hash. Deleting an absent field is a no-op.
    async fn hash_delete(&self, key: &str, field: &str) -> Result<(), KvError>;

    /// Add a member to a set. Adding an existing member is a no-op.
    async fn set_add(&self, key: &str, member: &str) -> Result<(), KvError>;

    /// Remove a member from a set. Removing an absent member is a no-op.
    async fn set_remove(&self, key: &str, member: &str) -> Result<(), KvError>;

    /// All members of a set, order not guaranteed.
    async fn set_members(&self, key: &str) -> Result<Vec<String>, KvError>;

    /// All keys starting with `prefix`, across hashes and sets.
    async fn scan_keys(&self, prefix: &str) -> Result<Vec<String>, KvError>;

    /// Delete a whole key (hash or set). Absent key is a no-op.
    async fn delete_key(&self, key: &str) -> Result<(), KvError>;
}

#[derive(Default)]
struct MemoryInner {
    hashes: HashMap<String, HashMap<String, String>>,
    sets: HashMap<String, HashSet<String>>,
}

/// In-memory [`KeyValueStore`] backed by `tokio::sync::RwLock` maps.
#[derive(Default)]
pub struct MemoryKvStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), KvError> {
        let mut inner = self.inner.write().await;
        inner
            .hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, KvError> {
        let inner = self.inner.read().await;
        Ok(inner
            .hashes
            .get(key)
            .and_then(|hash| hash.get(field))
            .cloned())
    }

    async fn hash_values(&self, key: &str) -> Result<Vec<String>, KvError> {
        let inner = self.inner.read().await;
        Ok(inner
            .hashes
            .get(key)
            .map(|hash| hash.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn hash_delete(&self, key: &str, field: &str) -> Result<(), KvError> {
        let mut inner = self.inner.write().await;
        if let Some(hash) = inner.hashes.get_mut(key) {
            hash.remove(field);
        }
        Ok(())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), KvError> {
        let mut inner = self.inner.write().await;
        inner
            .sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), KvError> {
        let mut inner = self.inner.write().await;
        if let Some(set) = inner.sets.get_mut(key) {
            set.remove(member);
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, KvError> {
        let inner = self.inner.read().await;
        let mut members: Vec<String> = inner
            .sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        // Deterministic order keeps enumeration-order tie-breaks stable.
        members.sort();
        Ok(members)
    }

    async fn scan_keys(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let inner = self.inner.read().await;
        let mut keys: Vec<String> = inner
            .hashes
            .keys()
            .chain(inner.sets.keys())
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    async fn delete_key(&self, key: &str) -> Result<(), KvError> {
        let mut inner = self.inner.write().await;
        inner.hashes.remove(key);
        inner.sets.remove(key);
        Ok(())
    }
}
