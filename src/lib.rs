//! Urlife Core
//!
//! Per-user node-graph storage with dual containment indexes, built on flat
//! key-value primitives (hash get/set, set add/remove, prefix scan).
//!
//! # Architecture
//!
//! - **Universal node**: one `GraphNode` struct for every object type, with
//!   type-specific fields validated against an injected schema provider
//! - **Dual indexes**: a direct-membership set per folder plus a recursive
//!   set per ancestor, kept in lockstep by a single containment write path
//! - **Forest invariant**: one parent per node, a fixed `"User"` root, and
//!   cycle-guarded traversal everywhere parent links are walked
//! - **Idempotent mutations**: the backend offers no cross-key atomicity,
//!   so every index operation is an idempotent set toggle and failed
//!   fan-outs are repaired by retrying the whole operation
//!
//! # Modules
//!
//! - [`models`] - `GraphNode`, type schemas, the bootstrap folder layout
//! - [`db`] - the key-value capability, node store and both indexes
//! - [`services`] - containment tracker, path resolver, node service, search

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::{KeyValueStore, MemoryKvStore, NodeStore};
pub use models::{GraphNode, StandardSchemaProvider, TypeSchemaProvider};
pub use services::{GraphServiceError, NodeService, SearchResultNode};
