//! Graph Node Data Structures
//!
//! This module defines the core `GraphNode` struct shared by every object
//! type in the user's graph (folders, goals, plans, thoughts, ...).
//!
//! # Architecture
//!
//! - **Universal node**: a single struct represents all object types
//! - **Typed properties**: entity-specific fields live in `extra_properties`,
//!   validated against the type's schema at write time
//! - **Single parent**: each node carries at most one `ParentRef`; absence
//!   marks a root. The parent relation must form a forest.
//! - **Labeled children**: `children` maps an edge label to an ordered list
//!   of `ChildRef`s (insertion order is user-visible)
//!
//! The root of a user's graph is a folder with the fixed ID [`ROOT_NODE_ID`]
//! and no parent.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Fixed, well-known ID of the per-user root folder.
pub const ROOT_NODE_ID: &str = "User";

/// Object type tag of containment folders.
pub const FOLDER_TYPE: &str = "FOLDER";

/// Edge label recorded on a node whose parent is a folder.
pub const CHILD_OF_LABEL: &str = "CHILD_OF";

/// Edge label under which a folder lists its members.
pub const CHILDREN_LABEL: &str = "CHILDREN";

/// Validation errors for node mutations.
///
/// These cover schema-level failures: an edge label the parent type does not
/// allow, an unknown property field, or a value outside its declared
/// range/options. A validation failure is surfaced before any state changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Edge label '{label}' is not allowed for parent type '{object_type}'")]
    InvalidEdgeLabel { object_type: String, label: String },

    #[error("Unknown {kind} field '{field}' for type '{object_type}'")]
    UnknownField {
        object_type: String,
        kind: &'static str,
        field: String,
    },

    #[error("Value '{value}' is not a valid option for radio field '{field}'")]
    InvalidOption { field: String, value: String },

    #[error("Value {value} for field '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: i64,
        max: i64,
    },

    #[error("Node {id} is not a folder (type: {object_type})")]
    NotAFolder { id: String, object_type: String },

    #[error("Node {id} is a folder; labeled children attach to typed nodes only")]
    FolderParent { id: String },
}

/// Reference from a node to its single parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub edge_label: String,
    pub parent_id: String,
}

/// Reference from a parent to one child under a labeled edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    pub edge_label: String,
    pub child_id: String,
}

/// A typed node in the user's graph.
///
/// Persisted as one JSON value per node inside the user-scoped node hash.
/// `object_type` accepts the legacy wire name `node_type` on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Opaque unique ID, stable for the node's lifetime and never reused.
    pub node_id: String,

    /// Object type tag (e.g. "FOLDER", "GOAL", "PLAN").
    #[serde(alias = "node_type")]
    pub object_type: String,

    /// Display caption, mutable.
    pub caption: String,

    /// Entity-specific fields, schema determined by `object_type`.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra_properties: Map<String, Value>,

    /// Edge label -> ordered list of children under that label.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Vec<ChildRef>>,

    /// At most one parent; `None` marks a root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,

    /// Epoch seconds, set once at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,

    /// RFC 3339 timestamp of the last mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl GraphNode {
    /// Create a node with the given ID, no parent and no properties.
    pub fn new(node_id: String, object_type: String, caption: String) -> Self {
        Self {
            node_id,
            object_type,
            caption,
            extra_properties: Map::new(),
            children: BTreeMap::new(),
            parent: None,
            creation_time: Some(Utc::now().timestamp()),
            updated_at: None,
        }
    }

    /// Create a folder node with a generated UUID, optionally parented.
    pub fn new_folder(caption: String, parent_id: Option<String>) -> Self {
        let mut node = Self::new(
            Uuid::new_v4().to_string(),
            FOLDER_TYPE.to_string(),
            caption,
        );
        if let Some(parent_id) = parent_id {
            node.parent = Some(ParentRef {
                edge_label: CHILD_OF_LABEL.to_string(),
                parent_id,
            });
        }
        node
    }

    /// Whether this node is a containment folder.
    pub fn is_folder(&self) -> bool {
        self.object_type == FOLDER_TYPE
    }

    /// Whether this node is a root (has no recorded parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Append a child reference under `edge_label`, preserving insertion
    /// order within the label's list.
    pub fn attach_child(&mut self, edge_label: &str, child_id: String) {
        self.children
            .entry(edge_label.to_string())
            .or_default()
            .push(ChildRef {
                edge_label: edge_label.to_string(),
                child_id,
            });
    }

    /// Children recorded under one edge label, in insertion order.
    pub fn children_under(&self, edge_label: &str) -> &[ChildRef] {
        self.children
            .get(edge_label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Record a mutation timestamp. Called by every update path.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now().to_rfc3339());
    }
}
