//! End-to-end containment flow over the public API: bootstrap the standard
//! folder layout, grow a subtree, and verify that both indexes, path
//! resolution and search all agree with the node graph.

use std::sync::Arc;

use urlife_core::{MemoryKvStore, NodeService, StandardSchemaProvider};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn service(user_id: &str) -> NodeService {
    NodeService::new(
        user_id,
        Arc::new(MemoryKvStore::new()),
        Arc::new(StandardSchemaProvider),
    )
}

#[tokio::test]
async fn full_lifecycle() {
    init_tracing();
    let svc = service("it_user");

    svc.initialize_user_folders().await.unwrap();
    let root_id = svc.root_folder_id().await.unwrap();
    let projects_id = svc
        .find_folder_by_name("Projects")
        .await
        .unwrap()
        .expect("Projects exists after bootstrap");

    // Grow a subtree: a goal in Projects, a note hanging off the goal.
    let goal = svc
        .create_in_folder(&projects_id, "GOAL", "Launch the beta")
        .await
        .unwrap();
    let note = svc
        .create_as_child(&goal.node_id, "Notes", "THOUGHT", "Remember the changelog")
        .await
        .unwrap();

    // Direct membership stops at the immediate folder; recursive membership
    // reaches the root.
    let direct_projects = svc.tracker().list_direct(&projects_id).await.unwrap();
    assert!(direct_projects.contains(&goal.node_id));
    let direct_root = svc.tracker().list_direct(&root_id).await.unwrap();
    assert!(!direct_root.contains(&goal.node_id));
    let recursive_root = svc.tracker().list_recursive(&root_id).await.unwrap();
    assert!(recursive_root.contains(&goal.node_id));

    // The labeled child is reachable through its edge, not the indexes.
    let notes = svc.children_by_label(&goal.node_id, "Notes").await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].node_id, note.node_id);
    assert!(!recursive_root.contains(&note.node_id));

    // Path from the note walks the labeled edge first, then folders.
    let path = svc.path_to_root(&note.node_id).await.unwrap();
    let labels: Vec<_> = path.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["Notes", "CHILD_OF", "CHILD_OF"]);
    let ids: Vec<_> = path.iter().map(|(_, n)| n.node_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![goal.node_id.as_str(), projects_id.as_str(), root_id.as_str()]
    );

    // Search finds the goal from the root subtree.
    let results = svc.search(&root_id, "GOAL", "launch", 5).await.unwrap();
    assert_eq!(results[0].node_id, goal.node_id);
    assert_eq!(results[0].match_score, 100);

    // Full reset leaves nothing behind.
    svc.clear_all_user_data().await.unwrap();
    assert!(svc.list_recursive(&root_id).await.unwrap().is_empty());
    assert!(svc.find_folder_by_name("Projects").await.unwrap().is_none());
}

#[tokio::test]
async fn users_are_isolated_on_a_shared_backend() {
    init_tracing();
    let kv = Arc::new(MemoryKvStore::new());
    let alice = NodeService::new("alice", kv.clone(), Arc::new(StandardSchemaProvider));
    let bob = NodeService::new("bob", kv, Arc::new(StandardSchemaProvider));

    alice.initialize_user_folders().await.unwrap();
    bob.initialize_user_folders().await.unwrap();

    let alice_root = alice.root_folder_id().await.unwrap();
    alice
        .create_in_folder(&alice_root, "GOAL", "Alice only")
        .await
        .unwrap();

    let bob_root = bob.root_folder_id().await.unwrap();
    let bob_goals = bob.search(&bob_root, "GOAL", "alice", 10).await.unwrap();
    assert!(bob_goals.is_empty());
}
