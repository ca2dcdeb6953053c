//! Breadth-first path search over a [`Graph`].
//!
//! The frontier is a [`Frontier`] of [`PathRecord`]s ordered by size, so
//! the next record expanded is always the globally shortest unexpanded
//! route. Each record guards against cycles through its own prefix.
//!
//! # Payload matching
//!
//! [`Graph::find_path_to_payload`] and [`Graph::find_node_with_payload`]
//! compare payloads by identity (`std::ptr::eq`), never by value: only a
//! reference to the very payload stored in the arena matches. Use
//! [`Graph::find_path_to_match`] with a predicate for value matching.

use hashbrown::HashSet;
use tracing::{debug, trace};

use super::{Frontier, Graph};
use crate::model::{NodeId, PathRecord};
use crate::{Error, Result};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for path search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Drop frontier records that a new, no-longer route to the same tip
    /// makes redundant (default: true).
    pub prune_frontier: bool,

    /// Give up with [`Error::ExpansionLimit`] after this many records have
    /// been expanded (default: unbounded).
    pub max_expansions: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            prune_frontier: true,
            max_expansions: None,
        }
    }
}

impl SearchParams {
    /// Create params bounded to `limit` expansions.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
            ..Default::default()
        }
    }

    /// Builder: set frontier pruning.
    #[must_use]
    pub fn prune_frontier(mut self, prune: bool) -> Self {
        self.prune_frontier = prune;
        self
    }

    /// Builder: set expansion limit.
    #[must_use]
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

// ============================================================================
// Search
// ============================================================================

impl<T> Graph<T> {
    /// Shortest route from `start` to `goal`, both ends included.
    pub fn find_path(&self, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        self.find_path_with(start, goal, &SearchParams::default()).ok().flatten()
    }

    pub fn find_path_with(
        &self,
        start: NodeId,
        goal: NodeId,
        params: &SearchParams,
    ) -> Result<Option<Vec<NodeId>>> {
        self.search(start, params, |id, _| id == goal)
    }

    /// Shortest route from `start` to the nearest node whose payload
    /// satisfies `matches`.
    pub fn find_path_to_match<F>(&self, start: NodeId, matches: F) -> Option<Vec<NodeId>>
    where
        F: FnMut(&T) -> bool,
    {
        self.find_path_to_match_with(start, matches, &SearchParams::default())
            .ok()
            .flatten()
    }

    pub fn find_path_to_match_with<F>(
        &self,
        start: NodeId,
        mut matches: F,
        params: &SearchParams,
    ) -> Result<Option<Vec<NodeId>>>
    where
        F: FnMut(&T) -> bool,
    {
        self.search(start, params, |_, data| matches(data))
    }

    /// Nearest node whose payload satisfies `matches`.
    pub fn find_node<F>(&self, start: NodeId, matches: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        self.find_path_to_match(start, matches)?.last().copied()
    }

    /// Shortest route to the node that stores exactly `payload`.
    ///
    /// Identity comparison: `payload` must be a reference obtained from
    /// this graph (e.g. via [`Graph::data`]). An equal value stored
    /// elsewhere does not match.
    pub fn find_path_to_payload(&self, start: NodeId, payload: &T) -> Option<Vec<NodeId>> {
        self.find_path_to_match(start, |data| std::ptr::eq(data, payload))
    }

    /// Node that stores exactly `payload`; see [`Graph::find_path_to_payload`].
    pub fn find_node_with_payload(&self, start: NodeId, payload: &T) -> Option<NodeId> {
        self.find_path_to_payload(start, payload)?.last().copied()
    }

    fn search<F>(
        &self,
        start: NodeId,
        params: &SearchParams,
        mut is_goal: F,
    ) -> Result<Option<Vec<NodeId>>>
    where
        F: FnMut(NodeId, &T) -> bool,
    {
        let start_node = self.node(start).ok_or(Error::NodeNotFound(start))?;
        if is_goal(start, &start_node.data) {
            return Ok(Some(vec![start]));
        }

        let mut frontier = Frontier::new();
        frontier.insert(PathRecord::start(start));
        // Tips already expanded. Records leave the frontier in size order,
        // so any later route to one of these is strictly longer.
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut expansions = 0usize;

        while let Some(record) = frontier.pop_min() {
            let tip = record.tip();
            let Some(node) = self.node(tip) else { continue };

            if is_goal(tip, &node.data) {
                debug!(%start, expansions, len = record.size(), "path found");
                return Ok(Some(record.to_list()));
            }
            if !settled.insert(tip) {
                continue;
            }
            if let Some(limit) = params.max_expansions {
                if expansions >= limit {
                    debug!(%start, limit, frontier = frontier.len(), "expansion limit reached");
                    return Err(Error::ExpansionLimit { limit });
                }
            }
            expansions += 1;
            trace!(%tip, size = record.size(), frontier = frontier.len(), "expand");

            for (_, next) in node.links() {
                let Some(next_node) = self.node(next) else { continue };

                if is_goal(next, &next_node.data) {
                    let mut path = record.to_list();
                    path.push(next);
                    debug!(%start, expansions, len = path.len(), "path found");
                    return Ok(Some(path));
                }
                if record.contains(next) || settled.contains(&next) {
                    continue;
                }

                let candidate = record.extend(next);
                if params.prune_frontier {
                    let pruned = frontier.prune(next, candidate.size());
                    if pruned > 0 {
                        trace!(tip = %next, pruned, "pruned frontier");
                    }
                }
                frontier.insert(candidate);
            }
        }

        debug!(%start, expansions, "no path");
        Ok(None)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    /// A -east- B -east- C -east- D
    fn chain() -> (Graph<&'static str>, Vec<NodeId>) {
        let mut g = Graph::new();
        let ids: Vec<NodeId> = ["A", "B", "C", "D"].into_iter().map(|n| g.add_node(n)).collect();
        for w in ids.windows(2) {
            g.link(w[0], &Direction::east(), w[1], true).unwrap();
        }
        (g, ids)
    }

    #[test]
    fn finds_chain_in_both_directions() {
        let (g, ids) = chain();
        assert_eq!(g.find_path(ids[0], ids[3]), Some(ids.clone()));
        let back: Vec<NodeId> = ids.iter().rev().copied().collect();
        assert_eq!(g.find_path(ids[3], ids[0]), Some(back));
    }

    #[test]
    fn start_is_goal() {
        let (g, ids) = chain();
        assert_eq!(g.find_path(ids[1], ids[1]), Some(vec![ids[1]]));
    }

    #[test]
    fn unknown_start() {
        let (g, ids) = chain();
        assert_eq!(g.find_path(NodeId(404), ids[0]), None);
        let err = g.find_path_with(NodeId(404), ids[0], &SearchParams::default()).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(NodeId(404))));
    }

    #[test]
    fn expansion_limit() {
        let (g, ids) = chain();
        let err = g
            .find_path_with(ids[0], ids[3], &SearchParams::bounded(1))
            .unwrap_err();
        assert!(matches!(err, Error::ExpansionLimit { limit: 1 }));
        // A, B and C are expanded; C sees D one hop early.
        assert!(g.find_path_with(ids[0], ids[3], &SearchParams::bounded(3)).unwrap().is_some());
    }

    #[test]
    fn unpruned_search_agrees() {
        let (g, ids) = chain();
        let params = SearchParams::default().prune_frontier(false);
        assert_eq!(g.find_path_with(ids[0], ids[3], &params).unwrap(), Some(ids));
    }

    #[test]
    fn match_by_predicate() {
        let (g, ids) = chain();
        assert_eq!(g.find_node(ids[0], |n| *n == "C"), Some(ids[2]));
        assert_eq!(g.find_path_to_match(ids[0], |n| *n == "Z"), None);
    }

    #[test]
    fn payload_match_is_identity() {
        let mut g = Graph::new();
        let a = g.add_node(String::from("x"));
        let b = g.add_node(String::from("y"));
        g.link(a, &Direction::north(), b, true).unwrap();

        let equal_but_distinct = String::from("y");
        assert_eq!(g.find_node_with_payload(a, &equal_but_distinct), None);

        let stored = g.data(b).unwrap();
        assert_eq!(g.find_node_with_payload(a, stored), Some(b));
        assert_eq!(g.find_path_to_payload(a, stored), Some(vec![a, b]));
    }
}
