//! Structural cloning of nodes and the components they reach.

use hashbrown::HashMap;
use tracing::debug;

use super::Graph;
use crate::model::{Direction, NodeId};
use crate::{Error, Result};

impl<T: Clone> Graph<T> {
    /// Copy `source` into a fresh node of this graph.
    ///
    /// A shallow clone copies only the payload. A deep clone copies every
    /// node reachable from `source` exactly once and rebuilds the links
    /// between the copies; the copies share no id with the originals.
    /// Returns the id of `source`'s copy.
    pub fn clone_node(&mut self, source: NodeId, deep: bool) -> Result<NodeId> {
        let root = self.copy_payload(source)?;
        if !deep {
            return Ok(root);
        }

        // original -> copy, keyed by id so cycles terminate
        let mut copies: HashMap<NodeId, NodeId> = HashMap::new();
        copies.insert(source, root);
        let mut pending = vec![source];
        let mut edges: Vec<(NodeId, Direction, NodeId)> = Vec::new();

        while let Some(original) = pending.pop() {
            let links: Vec<(Direction, NodeId)> = self
                .node(original)
                .ok_or(Error::NodeNotFound(original))?
                .links()
                .map(|(d, n)| (d.clone(), n))
                .collect();

            for (direction, next) in links {
                if !copies.contains_key(&next) {
                    let created = self.copy_payload(next)?;
                    copies.insert(next, created);
                    pending.push(next);
                }
                edges.push((original, direction, next));
            }
        }

        // Only links read from the originals are written, so the copy has
        // exactly the original edge set. Mutual pairs come out mutual.
        for (from, direction, to) in edges {
            let (from, to) = (copies[&from], copies[&to]);
            self.node_mut(from)?.set_link(direction, to);
        }

        debug!(%source, %root, nodes = copies.len(), "deep clone complete");
        Ok(root)
    }

    fn copy_payload(&mut self, source: NodeId) -> Result<NodeId> {
        let data = self.data(source).ok_or(Error::NodeNotFound(source))?.clone();
        Ok(self.add_node(data))
    }
}
