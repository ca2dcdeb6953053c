//! # Node Arena
//!
//! `Graph<T>` owns every node and hands out [`NodeId`]s. Links are stored
//! as ids, so cycles and self-edges are ordinary data and node identity
//! is id identity.
//!
//! ## Consistency
//!
//! `link` and `unlink` take a `keep_consistent` flag. When set and the
//! direction has a backward, the reciprocal slot on the neighbor is
//! written or cleared as well. Custom paired directions built with
//! [`Direction::paired`] are mutual by construction.
//!
//! ## Limitations
//!
//! - **Stale reciprocals**: a consistent `link` that replaces an existing
//!   neighbor leaves that old neighbor's backward slot untouched, so it may
//!   still point at the origin. `unlink` it first to keep pairs mutual.
//! - **No internal locking**: mutation takes `&mut self`, so the borrow
//!   checker already keeps links from changing under an in-flight search
//!   or clone. Shared multi-threaded use needs an external lock.

pub mod clone;
pub mod frontier;
pub mod search;

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::model::{Direction, Node, NodeId};
use crate::{Error, Result};

pub use frontier::Frontier;
pub use search::SearchParams;

// ============================================================================
// Graph
// ============================================================================

/// Arena of directionally-linked nodes carrying payloads of type `T`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: HashMap<NodeId, Node<T>>,
    next_node_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self { nodes: HashMap::new(), next_node_id: 1 }
    }

    /// Insert an unlinked node carrying `data`.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, Node::new(id, data));
        id
    }

    /// Insert an unlinked node carrying `T::default()`.
    pub fn add_default_node(&mut self) -> NodeId
    where
        T: Default,
    {
        self.add_node(T::default())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(&id).map(|n| &n.data)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(&id).map(|n| &mut n.data)
    }

    /// All node ids, ascending.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of populated link slots across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>> {
        self.nodes.get_mut(&id).ok_or(Error::NodeNotFound(id))
    }

    fn ensure(&self, id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(id))
        }
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// Point `from`'s `direction` slot at `to`.
    ///
    /// With `keep_consistent`, `to`'s backward slot is pointed at `from`
    /// unless it already is. A neighbor previously held in either slot is
    /// not otherwise touched.
    pub fn link(
        &mut self,
        from: NodeId,
        direction: &Direction,
        to: NodeId,
        keep_consistent: bool,
    ) -> Result<()> {
        self.ensure(to)?;
        let replaced = self.node_mut(from)?.set_link(direction.clone(), to);
        trace!(%from, %direction, %to, ?replaced, "link");

        if keep_consistent {
            if let Some(back) = direction.backward() {
                if self.neighbor(to, &back) != Some(from) {
                    self.node_mut(to)?.set_link(back, from);
                }
            }
        }
        Ok(())
    }

    /// Clear `from`'s `direction` slot, returning the neighbor it held.
    ///
    /// With `keep_consistent`, the neighbor's backward slot is cleared too
    /// when it still points at `from`.
    pub fn unlink(
        &mut self,
        from: NodeId,
        direction: &Direction,
        keep_consistent: bool,
    ) -> Result<Option<NodeId>> {
        let removed = self.node_mut(from)?.remove_link(direction);
        trace!(%from, %direction, ?removed, "unlink");

        if keep_consistent {
            if let (Some(neighbor), Some(back)) = (removed, direction.backward()) {
                if self.neighbor(neighbor, &back) == Some(from) {
                    self.node_mut(neighbor)?.remove_link(&back);
                }
            }
        }
        Ok(removed)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn neighbor(&self, id: NodeId, direction: &Direction) -> Option<NodeId> {
        self.nodes.get(&id)?.neighbor(direction)
    }

    /// First direction (in link order) from `from` whose slot holds `to`.
    pub fn direction_to(&self, from: NodeId, to: NodeId) -> Option<Direction> {
        self.nodes.get(&from)?.direction_to(to).cloned()
    }

    /// Directions currently populated on `id`, in link order.
    pub fn linked_directions(&self, id: NodeId) -> Vec<Direction> {
        self.nodes
            .get(&id)
            .map(|n| n.linked_directions().cloned().collect())
            .unwrap_or_default()
    }

    /// Ids reachable from `start` by following links, in breadth-first order.
    pub fn reachable(&self, start: NodeId) -> Vec<NodeId> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen.insert(start);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            if let Some(node) = self.nodes.get(&id) {
                for (_, next) in node.links() {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        order
    }
}

// ============================================================================
// Tests
// ============================================================================
