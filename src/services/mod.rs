//! Graph Services
//!
//! The business layer on top of the storage primitives:
//!
//! - `ContainmentTracker` - the single write path keeping both containment
//!   indexes in lockstep with the node graph
//! - `PathResolver` - node-to-root traversal with cycle protection
//! - `NodeService` - caller-facing operations (create, read, update, list,
//!   search, reset)
//! - `SubtreeSearch` - type-scoped fuzzy ranking over a folder's subtree

pub mod containment;
pub mod error;
pub mod node_service;
pub mod path;
pub mod search;

pub use containment::ContainmentTracker;
pub use error::GraphServiceError;
pub use node_service::NodeService;
pub use path::{PathResolver, PathStep};
pub use search::{partial_ratio, SearchResultNode, SubtreeSearch};
