//! Storage Layer Error Types
//!
//! Error types for the key-value capability and the containment indexes.
//! Backend failures are propagated, never retried here; retry policy belongs
//! to the caller because every index mutation is idempotent.

use thiserror::Error;

/// Key-value backend errors.
#[derive(Error, Debug)]
pub enum KvError {
    /// Backend call failed or timed out.
    #[error("Key-value backend unavailable: {context}")]
    Unavailable { context: String },

    /// Stored payload could not be (de)serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KvError {
    /// Create a backend-unavailable error with context.
    pub fn unavailable(context: impl Into<String>) -> Self {
        Self::Unavailable {
            context: context.into(),
        }
    }
}

/// Containment index errors.
///
/// The recursive index walks the parent chain of the target folder before it
/// touches any set. A broken or cyclic chain aborts the whole fan-out: a
/// partially indexed ancestor chain would silently answer queries wrong,
/// which is worse than failing the operation.
#[derive(Error, Debug)]
pub enum IndexError {
    /// An ancestor-chain walk hit a node missing from the node store.
    #[error("Ancestor chain of folder {folder_id} references missing node {missing_id}")]
    MissingAncestor {
        folder_id: String,
        missing_id: String,
    },

    /// An ancestor-chain walk revisited a node.
    #[error("Cycle detected in parent chain at node {node_id}")]
    CycleDetected { node_id: String },

    /// Underlying key-value failure.
    #[error(transparent)]
    Kv(#[from] KvError),
}
