//! Path Resolver
//!
//! Walks parent links from any node up to the root, yielding the edge label
//! and full node of every ancestor, immediate parent first. The walk is an
//! explicit loop with a visited set: corrupted data must produce a
//! `CycleDetected` error, never an infinite loop, and a broken link is a
//! hard `NodeNotFound` rather than a truncated-but-successful result.

use std::collections::HashSet;
use std::sync::Arc;

use crate::db::NodeStore;
use crate::models::GraphNode;
use crate::services::error::GraphServiceError;

/// One ancestor step: the edge label on the child's parent link and the
/// ancestor node itself.
pub type PathStep = (String, GraphNode);

/// Resolves node-to-root paths through the node store.
pub struct PathResolver {
    nodes: Arc<NodeStore>,
}

impl PathResolver {
    pub fn new(nodes: Arc<NodeStore>) -> Self {
        Self { nodes }
    }

    /// Ordered `(edge_label, ancestor)` pairs from the node's immediate
    /// parent up to the root. Empty iff the node is a root.
    pub async fn path_to_root(&self, node_id: &str) -> Result<Vec<PathStep>, GraphServiceError> {
        let mut path = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(node_id.to_string());

        let mut current = self
            .nodes
            .get(node_id)
            .await?
            .ok_or_else(|| GraphServiceError::node_not_found(node_id))?;

        while let Some(parent_ref) = current.parent.clone() {
            if !visited.insert(parent_ref.parent_id.clone()) {
                return Err(GraphServiceError::cycle_detected(parent_ref.parent_id));
            }
            let parent = self
                .nodes
                .get(&parent_ref.parent_id)
                .await?
                .ok_or_else(|| GraphServiceError::node_not_found(&parent_ref.parent_id))?;

            path.push((parent_ref.edge_label, parent.clone()));
            current = parent;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KeyValueStore, MemoryKvStore};
    use crate::models::{ParentRef, CHILD_OF_LABEL};

    async fn setup() -> (Arc<NodeStore>, PathResolver) {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKvStore::new());
        let nodes = Arc::new(NodeStore::new("test_user", kv));
        let resolver = PathResolver::new(nodes.clone());
        (nodes, resolver)
    }

    async fn put_node(nodes: &NodeStore, id: &str, parent: Option<(&str, &str)>) {
        let mut node = GraphNode::new(id.to_string(), "FOLDER".to_string(), id.to_string());
        node.parent = parent.map(|(label, parent_id)| ParentRef {
            edge_label: label.to_string(),
            parent_id: parent_id.to_string(),
        });
        nodes.put(&node).await.unwrap();
    }

    #[tokio::test]
    async fn immediate_parent_comes_first() {
        let (nodes, resolver) = setup().await;
        put_node(&nodes, "root", None).await;
        put_node(&nodes, "a", Some((CHILD_OF_LABEL, "root"))).await;
        put_node(&nodes, "b", Some((CHILD_OF_LABEL, "a"))).await;
        put_node(&nodes, "n", Some(("Parts", "b"))).await;

        let path = resolver.path_to_root("n").await.unwrap();
        let ids: Vec<_> = path.iter().map(|(_, node)| node.node_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "root"]);
        assert_eq!(path[0].0, "Parts");
        assert_eq!(path[1].0, CHILD_OF_LABEL);
    }

    #[tokio::test]
    async fn root_has_empty_path() {
        let (nodes, resolver) = setup().await;
        put_node(&nodes, "root", None).await;
        assert!(resolver.path_to_root("root").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn broken_link_is_not_found() {
        let (nodes, resolver) = setup().await;
        put_node(&nodes, "n", Some((CHILD_OF_LABEL, "ghost"))).await;

        let err = resolver.path_to_root("n").await.unwrap_err();
        assert!(matches!(err, GraphServiceError::NodeNotFound { ref id } if id == "ghost"));
    }

    #[tokio::test]
    async fn cycle_is_detected_not_looped() {
        let (nodes, resolver) = setup().await;
        put_node(&nodes, "a", Some((CHILD_OF_LABEL, "b"))).await;
        put_node(&nodes, "b", Some((CHILD_OF_LABEL, "a"))).await;

        let err = resolver.path_to_root("a").await.unwrap_err();
        assert!(matches!(err, GraphServiceError::CycleDetected { .. }));
    }
}
