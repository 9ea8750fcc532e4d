//! Node Service
//!
//! The caller-facing operation set: node and folder creation, labeled
//! children, field updates, containment listings, path resolution and
//! subtree search. This layer owns the ordering guarantees the indexes rely
//! on: every structural mutation (anything that creates a node or changes
//! parent/child links) runs behind a per-user advisory lock so no two
//! mutations can compute ancestor chains against each other's intermediate
//! state. Reads take no lock.
//!
//! Field updates validate against the injected [`TypeSchemaProvider`] before
//! anything is written, so a validation failure is never partially applied.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{KeyValueStore, NodeStore};
use crate::models::folder_structure::{standard_setup, SetupFolder};
use crate::models::{
    GraphNode, ParentRef, TypeSchemaProvider, ValidationError, CHILDREN_LABEL, CHILD_OF_LABEL,
    FOLDER_TYPE, ROOT_NODE_ID,
};
use crate::services::containment::ContainmentTracker;
use crate::services::error::GraphServiceError;
use crate::services::path::{PathResolver, PathStep};
use crate::services::search::{SearchResultNode, SubtreeSearch};

/// Per-user graph operations over the key-value backend.
pub struct NodeService {
    user_id: String,
    nodes: Arc<NodeStore>,
    tracker: ContainmentTracker,
    resolver: PathResolver,
    search: SubtreeSearch,
    schemas: Arc<dyn TypeSchemaProvider>,
    /// Serializes structural mutations; see module docs.
    structural: Mutex<()>,
}

impl NodeService {
    pub fn new(
        user_id: impl Into<String>,
        kv: Arc<dyn KeyValueStore>,
        schemas: Arc<dyn TypeSchemaProvider>,
    ) -> Self {
        let user_id = user_id.into();
        let nodes = Arc::new(NodeStore::new(user_id.clone(), kv.clone()));
        Self {
            tracker: ContainmentTracker::new(&user_id, kv, nodes.clone()),
            resolver: PathResolver::new(nodes.clone()),
            search: SubtreeSearch::new(nodes.clone()),
            schemas,
            nodes,
            user_id,
            structural: Mutex::new(()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The containment tracker, for callers that work with raw ID sets.
    pub fn tracker(&self) -> &ContainmentTracker {
        &self.tracker
    }

    //
    // CREATION
    //

    /// Create a folder, optionally inside a parent folder. Folder captions
    /// are unique per user; the new folder is linked into the parent's
    /// children and both containment indexes.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<String, GraphServiceError> {
        let _guard = self.structural.lock().await;

        if self.find_folder_by_name(name).await?.is_some() {
            return Err(GraphServiceError::duplicate_folder_name(name));
        }
        if let Some(parent_id) = parent_id {
            if self.nodes.get(parent_id).await?.is_none() {
                return Err(GraphServiceError::parent_not_found(parent_id));
            }
        }

        let mut folder = GraphNode::new_folder(name.to_string(), parent_id.map(str::to_string));
        folder
            .extra_properties
            .insert("entry_method".to_string(), "USER".into());
        let folder_id = folder.node_id.clone();
        self.nodes.put(&folder).await?;

        if let Some(parent_id) = parent_id {
            self.link_into_folder(parent_id, &folder_id).await?;
        }
        info!(%folder_id, %name, "created folder");
        Ok(folder_id)
    }

    /// Create a typed node inside a folder, with the type's default
    /// properties materialized from the schema provider.
    pub async fn create_in_folder(
        &self,
        folder_id: &str,
        object_type: &str,
        caption: &str,
    ) -> Result<GraphNode, GraphServiceError> {
        let _guard = self.structural.lock().await;

        let folder = self
            .nodes
            .get(folder_id)
            .await?
            .ok_or_else(|| GraphServiceError::folder_not_found(folder_id))?;
        if !folder.is_folder() {
            return Err(ValidationError::NotAFolder {
                id: folder_id.to_string(),
                object_type: folder.object_type,
            }
            .into());
        }

        let mut node = GraphNode::new(
            generated_node_id(),
            object_type.to_string(),
            caption.to_string(),
        );
        node.extra_properties = self.schemas.schema_for(object_type).default_properties();
        node.parent = Some(ParentRef {
            edge_label: CHILD_OF_LABEL.to_string(),
            parent_id: folder_id.to_string(),
        });
        self.nodes.put(&node).await?;

        self.link_into_folder(folder_id, &node.node_id).await?;
        info!(node_id = %node.node_id, %folder_id, %object_type, "created node in folder");
        Ok(node)
    }

    /// Create a typed node under a non-folder parent via a labeled edge.
    /// The label must be permitted by the parent type's schema. Labeled
    /// children hang off typed nodes, not folders, so they are not tracked
    /// by the containment indexes.
    pub async fn create_as_child(
        &self,
        parent_id: &str,
        edge_label: &str,
        object_type: &str,
        caption: &str,
    ) -> Result<GraphNode, GraphServiceError> {
        let _guard = self.structural.lock().await;

        let mut parent = self
            .nodes
            .get(parent_id)
            .await?
            .ok_or_else(|| GraphServiceError::parent_not_found(parent_id))?;
        if parent.is_folder() {
            return Err(ValidationError::FolderParent {
                id: parent_id.to_string(),
            }
            .into());
        }

        let parent_schema = self.schemas.schema_for(&parent.object_type);
        if !parent_schema.allows_edge_label(edge_label) {
            return Err(ValidationError::InvalidEdgeLabel {
                object_type: parent.object_type,
                label: edge_label.to_string(),
            }
            .into());
        }

        let mut node = GraphNode::new(
            generated_node_id(),
            object_type.to_string(),
            caption.to_string(),
        );
        node.extra_properties = self.schemas.schema_for(object_type).default_properties();
        node.parent = Some(ParentRef {
            edge_label: edge_label.to_string(),
            parent_id: parent_id.to_string(),
        });
        self.nodes.put(&node).await?;

        parent.attach_child(edge_label, node.node_id.clone());
        self.nodes.put(&parent).await?;
        info!(node_id = %node.node_id, %parent_id, %edge_label, "created labeled child");
        Ok(node)
    }

    /// Create the standard folder layout for a fresh user. Fails if the
    /// fixed root already exists.
    pub async fn initialize_user_folders(&self) -> Result<(), GraphServiceError> {
        let _guard = self.structural.lock().await;

        if self.nodes.get(ROOT_NODE_ID).await?.is_some() {
            return Err(GraphServiceError::RootAlreadyExists);
        }

        let setup = standard_setup();
        let root = GraphNode::new(
            ROOT_NODE_ID.to_string(),
            FOLDER_TYPE.to_string(),
            setup.name.to_string(),
        );
        self.nodes.put(&root).await?;

        // Explicit stack instead of async recursion.
        let mut pending: Vec<(&SetupFolder, String)> = setup
            .children
            .iter()
            .map(|child| (child, ROOT_NODE_ID.to_string()))
            .collect();
        while let Some((entry, parent_id)) = pending.pop() {
            let mut folder =
                GraphNode::new_folder(entry.name.to_string(), Some(parent_id.clone()));
            folder
                .extra_properties
                .insert("entry_method".to_string(), "SYSTEM".into());
            self.nodes.put(&folder).await?;
            self.link_into_folder(&parent_id, &folder.node_id).await?;

            for child in &entry.children {
                pending.push((child, folder.node_id.clone()));
            }
        }
        info!(user_id = %self.user_id, "initialized standard folder layout");
        Ok(())
    }

    /// Record `node_id` in `folder_id`'s children list and both indexes.
    /// Callers hold the structural lock.
    async fn link_into_folder(
        &self,
        folder_id: &str,
        node_id: &str,
    ) -> Result<(), GraphServiceError> {
        let mut folder = self
            .nodes
            .get(folder_id)
            .await?
            .ok_or_else(|| GraphServiceError::folder_not_found(folder_id))?;
        folder.attach_child(CHILDREN_LABEL, node_id.to_string());
        self.nodes.put(&folder).await?;
        self.tracker.add_to_folder(folder_id, node_id).await
    }

    //
    // READS
    //

    /// Load a node by ID.
    pub async fn get_node(&self, node_id: &str) -> Result<GraphNode, GraphServiceError> {
        self.nodes
            .get(node_id)
            .await?
            .ok_or_else(|| GraphServiceError::node_not_found(node_id))
    }

    /// Children of a node under one edge label, in insertion order. Child
    /// refs whose nodes fail to load are skipped with a warning.
    pub async fn children_by_label(
        &self,
        node_id: &str,
        edge_label: &str,
    ) -> Result<Vec<GraphNode>, GraphServiceError> {
        let parent = self.get_node(node_id).await?;
        let mut children = Vec::new();
        for child_ref in parent.children_under(edge_label) {
            match self.nodes.get(&child_ref.child_id).await? {
                Some(child) => children.push(child),
                None => {
                    warn!(%node_id, child_id = %child_ref.child_id, "skipping broken child ref");
                }
            }
        }
        Ok(children)
    }

    /// Folder ID for a human-readable caption, if any folder carries it.
    pub async fn find_folder_by_name(
        &self,
        name: &str,
    ) -> Result<Option<String>, GraphServiceError> {
        let all = self.nodes.list_all().await?;
        Ok(all
            .into_iter()
            .find(|node| node.is_folder() && node.caption == name)
            .map(|node| node.node_id))
    }

    /// The fixed root folder ID, verifying the root exists.
    pub async fn root_folder_id(&self) -> Result<String, GraphServiceError> {
        self.nodes
            .get(ROOT_NODE_ID)
            .await?
            .map(|node| node.node_id)
            .ok_or_else(|| GraphServiceError::folder_not_found(ROOT_NODE_ID))
    }

    /// Full nodes directly inside a folder. IDs whose nodes fail to load are
    /// skipped with a warning; index corruption must not break listings.
    pub async fn list_direct(
        &self,
        folder_id: &str,
    ) -> Result<Vec<GraphNode>, GraphServiceError> {
        let ids = self.tracker.list_direct(folder_id).await?;
        self.load_existing(&ids).await
    }

    /// Full nodes anywhere underneath a folder.
    pub async fn list_recursive(
        &self,
        folder_id: &str,
    ) -> Result<Vec<GraphNode>, GraphServiceError> {
        let ids = self.tracker.list_recursive(folder_id).await?;
        self.load_existing(&ids).await
    }

    async fn load_existing(&self, ids: &[String]) -> Result<Vec<GraphNode>, GraphServiceError> {
        let mut nodes = Vec::with_capacity(ids.len());
        for id in ids {
            match self.nodes.get(id).await? {
                Some(node) => nodes.push(node),
                None => warn!(node_id = %id, "indexed node missing from store; skipping"),
            }
        }
        Ok(nodes)
    }

    /// Ordered (edge label, ancestor) path from a node to the root.
    pub async fn path_to_root(&self, node_id: &str) -> Result<Vec<PathStep>, GraphServiceError> {
        self.resolver.path_to_root(node_id).await
    }

    /// Type-scoped fuzzy search over a folder's whole subtree.
    pub async fn search(
        &self,
        root_id: &str,
        object_type: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultNode>, GraphServiceError> {
        self.search
            .search(&self.tracker, root_id, object_type, query, limit)
            .await
    }

    //
    // UPDATES
    //

    /// Replace a node's caption.
    pub async fn update_caption(
        &self,
        node_id: &str,
        new_caption: &str,
    ) -> Result<(), GraphServiceError> {
        let mut node = self.get_node(node_id).await?;
        node.caption = new_caption.to_string();
        node.touch();
        self.nodes.put(&node).await?;
        Ok(())
    }

    /// Set a checkbox field. The field must exist in the node type's schema.
    pub async fn update_checkbox(
        &self,
        node_id: &str,
        field: &str,
        value: bool,
    ) -> Result<(), GraphServiceError> {
        let mut node = self.get_node(node_id).await?;
        let schema = self.schemas.schema_for(&node.object_type);
        if schema.checkbox(field).is_none() {
            return Err(ValidationError::UnknownField {
                object_type: node.object_type,
                kind: "checkbox",
                field: field.to_string(),
            }
            .into());
        }
        node.extra_properties
            .insert(field.to_string(), value.into());
        node.touch();
        self.nodes.put(&node).await?;
        Ok(())
    }

    /// Set a radio field to one of its declared options.
    pub async fn update_radio(
        &self,
        node_id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), GraphServiceError> {
        let mut node = self.get_node(node_id).await?;
        let schema = self.schemas.schema_for(&node.object_type);
        let Some(radio) = schema.radio(field) else {
            return Err(ValidationError::UnknownField {
                object_type: node.object_type,
                kind: "radio",
                field: field.to_string(),
            }
            .into());
        };
        if !radio.options.iter().any(|opt| opt.value == value) {
            return Err(ValidationError::InvalidOption {
                field: field.to_string(),
                value: value.to_string(),
            }
            .into());
        }
        node.extra_properties
            .insert(field.to_string(), value.into());
        node.touch();
        self.nodes.put(&node).await?;
        Ok(())
    }

    /// Set a number field within its declared range.
    pub async fn update_number(
        &self,
        node_id: &str,
        field: &str,
        value: f64,
    ) -> Result<(), GraphServiceError> {
        let mut node = self.get_node(node_id).await?;
        let schema = self.schemas.schema_for(&node.object_type);
        let Some(number) = schema.number(field) else {
            return Err(ValidationError::UnknownField {
                object_type: node.object_type,
                kind: "number",
                field: field.to_string(),
            }
            .into());
        };
        if value < number.min_value as f64 || value > number.max_value as f64 {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                value,
                min: number.min_value,
                max: number.max_value,
            }
            .into());
        }
        node.extra_properties
            .insert(field.to_string(), value.into());
        node.touch();
        self.nodes.put(&node).await?;
        Ok(())
    }

    //
    // MAINTENANCE
    //

    /// Delete every node and every index entry for the user. Irreversible;
    /// resets and tests only.
    pub async fn clear_all_user_data(&self) -> Result<(), GraphServiceError> {
        let _guard = self.structural.lock().await;
        self.nodes.clear_all().await?;
        self.tracker.clear_all_indexes().await?;
        Ok(())
    }
}

/// Generated node IDs are 32 hex chars, matching the historical format.
fn generated_node_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryKvStore;
    use crate::models::StandardSchemaProvider;

    fn service() -> NodeService {
        NodeService::new(
            "test_user",
            Arc::new(MemoryKvStore::new()),
            Arc::new(StandardSchemaProvider),
        )
    }

    #[tokio::test]
    async fn folder_tree_scenario() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let projects_id = svc
            .create_folder("Projects", Some(&root_id))
            .await
            .unwrap();
        let business_id = svc
            .create_folder("Business", Some(&projects_id))
            .await
            .unwrap();

        let recursive: Vec<String> = svc
            .tracker()
            .list_recursive(&root_id)
            .await
            .unwrap();
        assert!(recursive.contains(&projects_id));
        assert!(recursive.contains(&business_id));

        let direct = svc.tracker().list_direct(&root_id).await.unwrap();
        assert_eq!(direct, vec![projects_id.clone()]);
    }

    #[tokio::test]
    async fn duplicate_folder_name_is_rejected() {
        let svc = service();
        svc.create_folder("Inbox", None).await.unwrap();
        let err = svc.create_folder("Inbox", None).await.unwrap_err();
        assert!(matches!(err, GraphServiceError::DuplicateFolderName { .. }));
    }

    #[tokio::test]
    async fn create_in_folder_indexes_and_links() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let node = svc
            .create_in_folder(&root_id, "GOAL", "Ship the release")
            .await
            .unwrap();

        // Parent link and children list stay in sync.
        assert_eq!(node.parent.as_ref().unwrap().parent_id, root_id);
        let folder = svc.get_node(&root_id).await.unwrap();
        assert!(folder
            .children_under(CHILDREN_LABEL)
            .iter()
            .any(|c| c.child_id == node.node_id));

        // Both indexes see the node.
        let direct = svc.tracker().list_direct(&root_id).await.unwrap();
        assert!(direct.contains(&node.node_id));
        let recursive = svc.tracker().list_recursive(&root_id).await.unwrap();
        assert!(recursive.contains(&node.node_id));
    }

    #[tokio::test]
    async fn create_in_folder_sets_default_properties() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();

        let goal = svc
            .create_in_folder(&root_id, "GOAL", "Goal Node")
            .await
            .unwrap();
        assert_eq!(goal.extra_properties["status"], "open");
        assert_eq!(goal.extra_properties["attention"], 0);
        assert_eq!(goal.extra_properties["Active"], false);

        let event = svc
            .create_in_folder(&root_id, "EVENT", "Event Node")
            .await
            .unwrap();
        assert_eq!(event.extra_properties["evaluation"], "positive");
        assert_eq!(event.extra_properties["event_size"], "small");

        let thought = svc
            .create_in_folder(&root_id, "THOUGHT", "Thought Node")
            .await
            .unwrap();
        assert!(thought.extra_properties.is_empty());
    }

    #[tokio::test]
    async fn create_in_missing_folder_fails() {
        let svc = service();
        let err = svc
            .create_in_folder("nope", "GOAL", "Goal")
            .await
            .unwrap_err();
        assert!(matches!(err, GraphServiceError::FolderNotFound { .. }));
    }

    #[tokio::test]
    async fn labeled_child_requires_valid_edge_label() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let goal = svc
            .create_in_folder(&root_id, "GOAL", "Goal")
            .await
            .unwrap();

        let err = svc
            .create_as_child(&goal.node_id, "Payments", "THOUGHT", "Nope")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GraphServiceError::Validation(ValidationError::InvalidEdgeLabel { .. })
        ));

        let note = svc
            .create_as_child(&goal.node_id, "Notes", "THOUGHT", "A note")
            .await
            .unwrap();
        assert_eq!(note.parent.as_ref().unwrap().edge_label, "Notes");

        let children = svc
            .children_by_label(&goal.node_id, "Notes")
            .await
            .unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].node_id, note.node_id);
    }

    #[tokio::test]
    async fn labeled_child_rejects_folder_parents() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let err = svc
            .create_as_child(&root_id, "Notes", "THOUGHT", "Nope")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GraphServiceError::Validation(ValidationError::FolderParent { .. })
        ));
    }

    #[tokio::test]
    async fn field_updates_validate_against_schema() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let goal = svc
            .create_in_folder(&root_id, "GOAL", "Goal")
            .await
            .unwrap();
        let id = &goal.node_id;

        svc.update_checkbox(id, "Active", true).await.unwrap();
        svc.update_radio(id, "status", "closed").await.unwrap();
        svc.update_number(id, "attention", 40.0).await.unwrap();

        let node = svc.get_node(id).await.unwrap();
        assert_eq!(node.extra_properties["Active"], true);
        assert_eq!(node.extra_properties["status"], "closed");
        assert_eq!(node.extra_properties["attention"], 40.0);
        assert!(node.updated_at.is_some());

        let err = svc.update_radio(id, "status", "done").await.unwrap_err();
        assert!(matches!(
            err,
            GraphServiceError::Validation(ValidationError::InvalidOption { .. })
        ));

        let err = svc.update_number(id, "attention", 500.0).await.unwrap_err();
        assert!(matches!(
            err,
            GraphServiceError::Validation(ValidationError::OutOfRange { .. })
        ));

        let err = svc.update_checkbox(id, "Bogus", true).await.unwrap_err();
        assert!(matches!(
            err,
            GraphServiceError::Validation(ValidationError::UnknownField { .. })
        ));

        // Failed updates were not partially applied.
        let node = svc.get_node(id).await.unwrap();
        assert_eq!(node.extra_properties["status"], "closed");
        assert_eq!(node.extra_properties["attention"], 40.0);
    }

    #[tokio::test]
    async fn update_caption_touches_timestamp() {
        let svc = service();
        let root_id = svc.create_folder("User", None).await.unwrap();
        let node = svc
            .create_in_folder(&root_id, "THOUGHT", "Before")
            .await
            .unwrap();

        svc.update_caption(&node.node_id, "After").await.unwrap();
        let node = svc.get_node(&node.node_id).await.unwrap();
        assert_eq!(node.caption, "After");
        assert!(node.updated_at.is_some());
    }

    #[tokio::test]
    async fn initialize_user_folders_builds_standard_layout() {
        let svc = service();
        svc.initialize_user_folders().await.unwrap();

        assert_eq!(svc.root_folder_id().await.unwrap(), ROOT_NODE_ID);

        let projects_id = svc
            .find_folder_by_name("Projects")
            .await
            .unwrap()
            .expect("Projects folder");
        let business_id = svc
            .find_folder_by_name("Business")
            .await
            .unwrap()
            .expect("Business folder");

        let direct_root = svc.tracker().list_direct(ROOT_NODE_ID).await.unwrap();
        assert_eq!(direct_root.len(), 4);
        assert!(direct_root.contains(&projects_id));
        assert!(!direct_root.contains(&business_id));

        let recursive_root = svc.tracker().list_recursive(ROOT_NODE_ID).await.unwrap();
        assert!(recursive_root.contains(&business_id));
        // 4 top-level + 7 under Projects.
        assert_eq!(recursive_root.len(), 11);

        let err = svc.initialize_user_folders().await.unwrap_err();
        assert!(matches!(err, GraphServiceError::RootAlreadyExists));
    }

    #[tokio::test]
    async fn search_ranks_by_caption_similarity() {
        let svc = service();
        svc.initialize_user_folders().await.unwrap();
        let root_id = svc.root_folder_id().await.unwrap();

        for caption in ["Health Plan", "Healthy Habits", "Unrelated"] {
            svc.create_in_folder(&root_id, "GOAL", caption)
                .await
                .unwrap();
        }
        // Same caption, different type: must be filtered out.
        svc.create_in_folder(&root_id, "THOUGHT", "Health Plan")
            .await
            .unwrap();

        let results = svc.search(&root_id, "GOAL", "health", 10).await.unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.object_type == "GOAL"));

        let captions: Vec<_> = results.iter().map(|r| r.caption.as_str()).collect();
        assert!(captions[..2].contains(&"Health Plan"));
        assert!(captions[..2].contains(&"Healthy Habits"));
        assert_eq!(captions[2], "Unrelated");
        assert!(results[0].match_score > results[2].match_score);

        let limited = svc.search(&root_id, "GOAL", "health", 2).await.unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[tokio::test]
    async fn bulk_clear_wipes_nodes_and_indexes() {
        let svc = service();
        svc.initialize_user_folders().await.unwrap();
        let root_id = svc.root_folder_id().await.unwrap();
        svc.create_in_folder(&root_id, "GOAL", "Goal")
            .await
            .unwrap();

        svc.clear_all_user_data().await.unwrap();

        assert!(svc.list_direct(&root_id).await.unwrap().is_empty());
        assert!(svc.list_recursive(&root_id).await.unwrap().is_empty());
        assert!(matches!(
            svc.root_folder_id().await.unwrap_err(),
            GraphServiceError::FolderNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn path_to_root_through_service() {
        let svc = service();
        svc.initialize_user_folders().await.unwrap();
        let projects_id = svc
            .find_folder_by_name("Projects")
            .await
            .unwrap()
            .unwrap();
        let goal = svc
            .create_in_folder(&projects_id, "GOAL", "Goal")
            .await
            .unwrap();

        let path = svc.path_to_root(&goal.node_id).await.unwrap();
        let ids: Vec<_> = path.iter().map(|(_, n)| n.node_id.as_str()).collect();
        assert_eq!(ids, vec![projects_id.as_str(), ROOT_NODE_ID]);
        assert!(path.iter().all(|(label, _)| label == CHILD_OF_LABEL));
    }

    #[tokio::test]
    async fn parent_chain_matches_path() {
        let svc = service();
        svc.initialize_user_folders().await.unwrap();
        let business_id = svc
            .find_folder_by_name("Business")
            .await
            .unwrap()
            .unwrap();
        let projects_id = svc
            .find_folder_by_name("Projects")
            .await
            .unwrap()
            .unwrap();

        let chain = svc
            .tracker()
            .get_parent_chain(&business_id)
            .await
            .unwrap();
        assert_eq!(chain, vec![projects_id, ROOT_NODE_ID.to_string()]);
    }
}
