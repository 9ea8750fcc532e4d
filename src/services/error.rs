//! Service Layer Error Types
//!
//! High-level errors for every caller-facing operation. Each variant carries
//! the IDs involved so a failed containment operation can be retried whole
//! (all index mutations are idempotent, so retry is always safe).

use thiserror::Error;

use crate::db::{IndexError, KvError};
use crate::models::ValidationError;

/// Errors surfaced by the graph services.
#[derive(Error, Debug)]
pub enum GraphServiceError {
    /// Referenced node does not exist.
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    /// Referenced folder does not exist or is not a folder.
    #[error("Folder not found: {id}")]
    FolderNotFound { id: String },

    /// Referenced parent does not exist.
    #[error("Parent node not found: {id}")]
    ParentNotFound { id: String },

    /// A folder with this caption already exists for the user.
    #[error("Folder '{name}' already exists")]
    DuplicateFolderName { name: String },

    /// The fixed root folder already exists; bootstrap refused.
    #[error("Root folder already exists")]
    RootAlreadyExists,

    /// Schema-level validation failed; nothing was applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A parent-chain walk revisited a node. Data-integrity error, never
    /// silently truncated.
    #[error("Cycle detected in parent chain at node {id}")]
    CycleDetected { id: String },

    /// Recursive-index maintenance hit a missing node on the ancestor chain.
    /// The in-flight fan-out was aborted; the caller should retry the whole
    /// containment operation.
    #[error("Index inconsistency: ancestor chain of folder {folder_id} references missing node {missing_id}")]
    IndexInconsistency {
        folder_id: String,
        missing_id: String,
    },

    /// Key-value backend failure, propagated without internal retry.
    #[error(transparent)]
    Backend(#[from] KvError),
}

impl GraphServiceError {
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn folder_not_found(id: impl Into<String>) -> Self {
        Self::FolderNotFound { id: id.into() }
    }

    pub fn parent_not_found(id: impl Into<String>) -> Self {
        Self::ParentNotFound { id: id.into() }
    }

    pub fn duplicate_folder_name(name: impl Into<String>) -> Self {
        Self::DuplicateFolderName { name: name.into() }
    }

    pub fn cycle_detected(id: impl Into<String>) -> Self {
        Self::CycleDetected { id: id.into() }
    }
}

impl From<IndexError> for GraphServiceError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::MissingAncestor {
                folder_id,
                missing_id,
            } => Self::IndexInconsistency {
                folder_id,
                missing_id,
            },
            IndexError::CycleDetected { node_id } => Self::CycleDetected { id: node_id },
            IndexError::Kv(kv) => Self::Backend(kv),
        }
    }
}
