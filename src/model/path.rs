//! PathRecord — one candidate route on a breadth-first search frontier.

use std::cmp::Ordering;
use std::sync::Arc;

use super::NodeId;

/// An immutable visited prefix plus the frontier tip.
///
/// Cloning a record shares its prefix; [`extend`](Self::extend) builds a
/// new one. Records order by [`size`](Self::size) only.
#[derive(Debug, Clone)]
pub struct PathRecord {
    prefix: Arc<[NodeId]>,
    tip: NodeId,
}

impl PathRecord {
    /// Zero-length record seeded at `start`.
    pub fn start(start: NodeId) -> Self {
        Self { prefix: Arc::from(Vec::new()), tip: start }
    }

    pub fn tip(&self) -> NodeId {
        self.tip
    }

    pub fn prefix(&self) -> &[NodeId] {
        &self.prefix
    }

    /// Prefix length + 1.
    pub fn size(&self) -> usize {
        self.prefix.len() + 1
    }

    /// Tip-or-prefix membership.
    pub fn contains(&self, node: NodeId) -> bool {
        self.tip == node || self.prefix.contains(&node)
    }

    /// A new record whose prefix is this route and whose tip is `next`.
    pub fn extend(&self, next: NodeId) -> Self {
        let mut prefix = Vec::with_capacity(self.prefix.len() + 1);
        prefix.extend_from_slice(&self.prefix);
        prefix.push(self.tip);
        Self { prefix: prefix.into(), tip: next }
    }

    /// Materialize prefix + tip.
    pub fn to_list(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.size());
        out.extend_from_slice(&self.prefix);
        out.push(self.tip);
        out
    }
}

impl PartialEq for PathRecord {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
    }
}

impl Eq for PathRecord {}

impl PartialOrd for PathRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size().cmp(&other.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_membership() {
        let r = PathRecord::start(NodeId(1));
        assert_eq!(r.size(), 1);
        assert!(r.contains(NodeId(1)));

        let r = r.extend(NodeId(2)).extend(NodeId(3));
        assert_eq!(r.size(), 3);
        assert_eq!(r.tip(), NodeId(3));
        assert_eq!(r.prefix(), &[NodeId(1), NodeId(2)]);
        assert!(r.contains(NodeId(1)));
        assert!(!r.contains(NodeId(4)));
        assert_eq!(r.to_list(), vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn orders_by_size_only() {
        let short = PathRecord::start(NodeId(9));
        let long = PathRecord::start(NodeId(1)).extend(NodeId(2));
        assert!(short < long);
        assert_eq!(PathRecord::start(NodeId(1)), PathRecord::start(NodeId(2)));
    }
}
