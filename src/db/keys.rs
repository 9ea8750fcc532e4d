//! Persisted Key Layout
//!
//! Every key is namespaced by user ID: one hash per user holding all nodes
//! (node ID as the hash field), one set per folder for direct membership and
//! one per folder for recursive membership. Bulk clears enumerate by prefix.

/// Key of the per-user node hash.
pub fn node_key(user_id: &str) -> String {
    format!("urlife:{user_id}:node")
}

/// Key of a folder's direct-membership set.
pub fn direct_key(user_id: &str, folder_id: &str) -> String {
    format!("urlife:{user_id}:direct_folder:{folder_id}")
}

/// Key of a folder's recursive-membership set.
pub fn recursive_key(user_id: &str, folder_id: &str) -> String {
    format!("urlife:{user_id}:recursive_folder:{folder_id}")
}

/// Prefix of every key belonging to a user.
pub fn user_prefix(user_id: &str) -> String {
    format!("urlife:{user_id}:")
}

/// Prefix of all direct-membership sets of a user.
pub fn direct_prefix(user_id: &str) -> String {
    format!("urlife:{user_id}:direct_folder:")
}

/// Prefix of all recursive-membership sets of a user.
pub fn recursive_prefix(user_id: &str) -> String {
    format!("urlife:{user_id}:recursive_folder:")
}
