//! Ordered frontier of candidate routes for breadth-first search.
//!
//! Records leave in ascending [`PathRecord::size`] order; ties leave in
//! insertion order. A tip index supports the replace-if-better pruning
//! the search performs before every insert.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::model::{NodeId, PathRecord};

/// (size, insertion sequence)
type Key = (usize, u64);

#[derive(Debug, Default)]
pub struct Frontier {
    records: BTreeMap<Key, PathRecord>,
    by_tip: HashMap<NodeId, Vec<Key>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PathRecord) {
        let key = (record.size(), self.next_seq);
        self.next_seq += 1;
        self.by_tip.entry(record.tip()).or_default().push(key);
        self.records.insert(key, record);
    }

    /// Remove and return the shortest record.
    pub fn pop_min(&mut self) -> Option<PathRecord> {
        let (key, record) = self.records.pop_first()?;
        self.forget(record.tip(), key);
        Some(record)
    }

    /// Drop every record with tip `tip` and size ≥ `min_size`.
    pub fn prune(&mut self, tip: NodeId, min_size: usize) -> usize {
        let Some(keys) = self.by_tip.get_mut(&tip) else {
            return 0;
        };
        let before = keys.len();
        keys.retain(|key| {
            if key.0 >= min_size {
                self.records.remove(key);
                false
            } else {
                true
            }
        });
        let removed = before - keys.len();
        if keys.is_empty() {
            self.by_tip.remove(&tip);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn forget(&mut self, tip: NodeId, key: Key) {
        if let Some(keys) = self.by_tip.get_mut(&tip) {
            keys.retain(|k| *k != key);
            if keys.is_empty() {
                self.by_tip.remove(&tip);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(ids: &[u64]) -> PathRecord {
        let mut r = PathRecord::start(NodeId(ids[0]));
        for id in &ids[1..] {
            r = r.extend(NodeId(*id));
        }
        r
    }

    #[test]
    fn pops_shortest_then_insertion_order() {
        let mut f = Frontier::new();
        f.insert(route(&[1, 2, 3]));
        f.insert(route(&[1, 4]));
        f.insert(route(&[1, 5]));
        assert_eq!(f.len(), 3);

        assert_eq!(f.pop_min().unwrap().tip(), NodeId(4));
        assert_eq!(f.pop_min().unwrap().tip(), NodeId(5));
        assert_eq!(f.pop_min().unwrap().tip(), NodeId(3));
        assert!(f.pop_min().is_none());
        assert!(f.is_empty());
    }

    #[test]
    fn prune_only_drops_same_tip_at_or_above_size() {
        let mut f = Frontier::new();
        f.insert(route(&[1, 9]));
        f.insert(route(&[1, 2, 9]));
        f.insert(route(&[1, 2, 3]));

        assert_eq!(f.prune(NodeId(9), 3), 1);
        assert_eq!(f.len(), 2);
        assert_eq!(f.prune(NodeId(9), 3), 0);
        assert_eq!(f.prune(NodeId(7), 1), 0);

        assert_eq!(f.prune(NodeId(9), 1), 1);
        assert_eq!(f.pop_min().unwrap().tip(), NodeId(3));
    }
}
