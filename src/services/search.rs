//! Subtree Search
//!
//! Type-scoped fuzzy search over everything underneath a folder. The
//! recursive index supplies the candidate set, candidates are filtered to an
//! exact object type, and surviving captions are ranked against the query by
//! a partial-match similarity score in 0..=100. Cost is O(subtree size) per
//! call; subtrees are bounded by a single user's data, so no cached ranking
//! is kept.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::NodeStore;
use crate::services::containment::ContainmentTracker;
use crate::services::error::GraphServiceError;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultNode {
    pub node_id: String,
    pub caption: String,
    pub object_type: String,
    pub creation_time: Option<i64>,
    /// Partial-match similarity of the caption to the query, 0..=100.
    pub match_score: u8,
}

/// Fuzzy search over the recursive index of a folder.
pub struct SubtreeSearch {
    nodes: Arc<NodeStore>,
}

impl SubtreeSearch {
    pub fn new(nodes: Arc<NodeStore>) -> Self {
        Self { nodes }
    }

    /// Rank descendants of `root_id` whose type equals `object_type`
    /// (case-sensitive, as stored) by caption similarity to `query`.
    /// Ties keep enumeration order; at most `limit` results are returned.
    pub async fn search(
        &self,
        tracker: &ContainmentTracker,
        root_id: &str,
        object_type: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultNode>, GraphServiceError> {
        let node_ids = tracker.list_recursive(root_id).await?;
        debug!(%root_id, candidates = node_ids.len(), %object_type, "subtree search");

        let query_lower = query.to_lowercase();
        let mut scored: Vec<SearchResultNode> = Vec::new();
        for node_id in node_ids {
            let Some(node) = self.nodes.get(&node_id).await? else {
                continue;
            };
            if node.object_type != object_type {
                continue;
            }
            let score = partial_ratio(&query_lower, &node.caption.to_lowercase());
            scored.push(SearchResultNode {
                node_id: node.node_id,
                caption: node.caption,
                object_type: node.object_type,
                creation_time: node.creation_time,
                match_score: score,
            });
        }

        // Stable sort keeps the enumeration order for equal scores.
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);
        Ok(scored)
    }
}

/// Partial-match similarity in 0..=100: the best Levenshtein ratio of the
/// shorter string against every same-length window of the longer one.
/// Both empty scores 100; exactly one empty scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let window = short.len();
    let mut best = 0u8;
    for start in 0..=(long.len() - window) {
        let slice = &long[start..start + window];
        let distance = levenshtein(short, slice);
        let ratio = 100 - (100 * distance / window.max(1)).min(100);
        best = best.max(ratio as u8);
        if best == 100 {
            break;
        }
    }
    best
}

/// Plain dynamic-programming Levenshtein distance over two char slices,
/// keeping two rows.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(partial_ratio("health", "health"), 100);
    }

    #[test]
    fn substring_scores_100() {
        assert_eq!(partial_ratio("health", "health plan"), 100);
        assert_eq!(partial_ratio("health", "my health plan"), 100);
    }

    #[test]
    fn near_match_beats_unrelated() {
        let healthy = partial_ratio("health", "healthy habits");
        let unrelated = partial_ratio("health", "unrelated");
        assert!(healthy > unrelated, "{healthy} vs {unrelated}");
        assert_eq!(healthy, 100); // "health" is a substring of "healthy"
    }

    #[test]
    fn empty_query_scores_zero_against_text() {
        assert_eq!(partial_ratio("", "anything"), 0);
        assert_eq!(partial_ratio("", ""), 100);
    }

    #[test]
    fn levenshtein_basics() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
        assert_eq!(levenshtein(&chars(""), &chars("ab")), 2);
    }
}
