//! Node in a directionally-linked graph.

use serde::{Deserialize, Serialize};
use super::Direction;

/// Opaque node identifier, unique within one [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex: a payload plus at most one neighbor per direction.
///
/// Link slots are kept in the order they were first populated, which
/// fixes the result of [`Node::direction_to`] and the expansion order of
/// path searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub id: NodeId,
    pub data: T,
    links: Vec<(Direction, NodeId)>,
}

impl<T> Node<T> {
    pub fn new(id: NodeId, data: T) -> Self {
        Self { id, data, links: Vec::new() }
    }

    pub fn neighbor(&self, direction: &Direction) -> Option<NodeId> {
        self.links.iter().find(|(d, _)| d == direction).map(|(_, n)| *n)
    }

    /// First direction whose slot holds `node`.
    pub fn direction_to(&self, node: NodeId) -> Option<&Direction> {
        self.links.iter().find(|(_, n)| *n == node).map(|(d, _)| d)
    }

    pub fn linked_directions(&self) -> impl Iterator<Item = &Direction> {
        self.links.iter().map(|(d, _)| d)
    }

    pub fn links(&self) -> impl Iterator<Item = (&Direction, NodeId)> {
        self.links.iter().map(|(d, n)| (d, *n))
    }

    pub fn degree(&self) -> usize {
        self.links.len()
    }

    pub fn is_linked(&self, direction: &Direction) -> bool {
        self.links.iter().any(|(d, _)| d == direction)
    }

    /// Set the slot for `direction`, returning the neighbor it replaced.
    pub(crate) fn set_link(&mut self, direction: Direction, neighbor: NodeId) -> Option<NodeId> {
        match self.links.iter_mut().find(|(d, _)| *d == direction) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, neighbor)),
            None => {
                self.links.push((direction, neighbor));
                None
            }
        }
    }

    pub(crate) fn remove_link(&mut self, direction: &Direction) -> Option<NodeId> {
        let pos = self.links.iter().position(|(d, _)| d == direction)?;
        Some(self.links.remove(pos).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_neighbor_per_direction() {
        let mut node = Node::new(NodeId(1), "a");
        assert_eq!(node.set_link(Direction::north(), NodeId(2)), None);
        assert_eq!(node.set_link(Direction::north(), NodeId(3)), Some(NodeId(2)));
        assert_eq!(node.degree(), 1);
        assert_eq!(node.neighbor(&Direction::north()), Some(NodeId(3)));
    }

    #[test]
    fn direction_to_returns_first_populated() {
        let mut node = Node::new(NodeId(1), ());
        node.set_link(Direction::east(), NodeId(7));
        node.set_link(Direction::west(), NodeId(7));
        assert_eq!(node.direction_to(NodeId(7)), Some(&Direction::east()));
        assert_eq!(node.direction_to(NodeId(8)), None);

        assert_eq!(node.remove_link(&Direction::east()), Some(NodeId(7)));
        assert_eq!(node.direction_to(NodeId(7)), Some(&Direction::west()));
        assert_eq!(node.remove_link(&Direction::east()), None);
    }
}
