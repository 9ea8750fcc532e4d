//! Storage Layer
//!
//! Everything that talks to the key-value backend:
//!
//! - [`KeyValueStore`] - the flat hash/set/scan capability the crate consumes
//! - [`NodeStore`] - node CRUD over the per-user node hash
//! - [`DirectIndex`] / [`RecursiveIndex`] - the dual containment indexes
//!
//! No cross-key atomicity exists at this layer. Every multi-key operation is
//! idempotent so a failed fan-out is fixed by retrying the whole operation.

mod direct_index;
mod error;
pub mod keys;
mod kv;
mod node_store;
mod recursive_index;

pub use direct_index::DirectIndex;
pub use error::{IndexError, KvError};
pub use kv::{KeyValueStore, MemoryKvStore};
pub use node_store::NodeStore;
pub use recursive_index::RecursiveIndex;
