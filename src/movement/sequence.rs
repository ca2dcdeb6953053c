//! Sequence — an ordered group of movements.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Movement, Walk, reduce};
use crate::model::Direction;

/// Order matters for [`reverse`](Self::reverse), walking and equality,
/// not for reduction.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub movements: Vec<Movement>,
}

impl Sequence {
    pub fn new(movements: Vec<Movement>) -> Self {
        Self { movements }
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn flip(&self, directions: &[Direction]) -> Sequence {
        self.movements.iter().map(|m| m.flip(directions)).collect()
    }

    /// Reverse child order and reverse each child.
    pub fn reverse(&self) -> Sequence {
        self.movements.iter().rev().map(Movement::reverse).collect()
    }

    pub fn scale(&self, factor: f64) -> Sequence {
        self.movements.iter().map(|m| m.scale(factor)).collect()
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk::sequence(self)
    }

    pub fn shortest_movement(&self) -> Movement {
        reduce::shortest(self.walk())
    }
}

impl FromIterator<Movement> for Sequence {
    fn from_iter<I: IntoIterator<Item = Movement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, m) in self.movements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{m}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::Leg;

    fn leg(d: Direction, m: f64) -> Movement {
        Movement::Leg(Leg::new(d, m))
    }

    #[test]
    fn reverse_reverses_order_and_children() {
        let s = Sequence::new(vec![
            leg(Direction::north(), 1.0),
            leg(Direction::east(), 2.0),
            leg(Direction::north_west(), 3.0),
        ]);
        let r = s.reverse();
        assert_eq!(
            r,
            Sequence::new(vec![
                leg(Direction::south_east(), 3.0),
                leg(Direction::west(), 2.0),
                leg(Direction::south(), 1.0),
            ])
        );
        assert_eq!(r.reverse(), s);
    }

    #[test]
    fn nested_walk_is_flat_and_ordered() {
        let inner = Sequence::new(vec![leg(Direction::east(), 1.0), leg(Direction::west(), 2.0)]);
        let s = Sequence::new(vec![
            leg(Direction::north(), 1.0),
            Movement::Sequence(Sequence::default()),
            Movement::Sequence(inner),
            leg(Direction::south(), 3.0),
        ]);
        let dirs: Vec<String> = s.walk().map(|l| l.direction.to_string()).collect();
        assert_eq!(dirs, vec!["north", "east", "west", "south"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Sequence::new(vec![leg(Direction::north(), 1.0), leg(Direction::east(), 1.0)]);
        let b = Sequence::new(vec![leg(Direction::east(), 1.0), leg(Direction::north(), 1.0)]);
        assert_ne!(a, b);
        assert_eq!(a.shortest_movement(), a.clone().shortest_movement());
    }

    #[test]
    fn display() {
        let s = Sequence::new(vec![leg(Direction::north(), 1.0), leg(Direction::east(), 0.5)]);
        assert_eq!(s.to_string(), "[north 1, east 0.5]");
    }
}
