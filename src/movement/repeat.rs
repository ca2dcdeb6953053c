//! Repeat — a sequence walked a fixed number of times.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Movement, Sequence, Walk};
use crate::model::Direction;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Repeat {
    pub sequence: Sequence,
    /// Zero walks nothing and reduces to [`Movement::none`].
    pub count: u32,
}

impl Repeat {
    pub fn new(sequence: Sequence, count: u32) -> Self {
        Self { sequence, count }
    }

    /// Build from a signed count, rejecting negatives.
    pub fn try_new(sequence: Sequence, count: i64) -> Result<Self> {
        let count = u32::try_from(count).map_err(|_| {
            if count < 0 {
                Error::NegativeRepeatCount(count)
            } else {
                Error::RepeatCountOverflow(count)
            }
        })?;
        Ok(Self::new(sequence, count))
    }

    pub fn flip(&self, directions: &[Direction]) -> Repeat {
        Repeat::new(self.sequence.flip(directions), self.count)
    }

    pub fn reverse(&self) -> Repeat {
        Repeat::new(self.sequence.reverse(), self.count)
    }

    pub fn scale(&self, factor: f64) -> Repeat {
        Repeat::new(self.sequence.scale(factor), self.count)
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk::repeat(&self.sequence, self.count)
    }

    /// The sequence's reduction scaled by the count.
    pub fn shortest_movement(&self) -> Movement {
        if self.count == 0 {
            return Movement::none();
        }
        self.sequence.shortest_movement().scale(f64::from(self.count))
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.count, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::Leg;

    fn square() -> Sequence {
        [Direction::north(), Direction::east(), Direction::south(), Direction::west()]
            .into_iter()
            .map(|d| Movement::Leg(Leg::new(d, 1.0)))
            .collect()
    }

    #[test]
    fn walk_replays_sequence() {
        let r = Repeat::new(square(), 3);
        assert_eq!(r.walk().count(), 12);
        let sq = square();
        let first: Vec<&Leg> = sq.walk().collect();
        let all: Vec<Leg> = r.walk().cloned().collect();
        for chunk in all.chunks(4) {
            let chunk: Vec<&Leg> = chunk.iter().collect();
            assert_eq!(chunk, first);
        }
    }

    #[test]
    fn zero_count() {
        let r = Repeat::new(square(), 0);
        assert_eq!(r.walk().next(), None);
        assert_eq!(r.shortest_movement(), Movement::none());
    }

    #[test]
    fn try_new_rejects_negative() {
        assert!(matches!(Repeat::try_new(square(), -1), Err(Error::NegativeRepeatCount(-1))));
        assert!(matches!(
            Repeat::try_new(square(), i64::from(u32::MAX) + 1),
            Err(Error::RepeatCountOverflow(_))
        ));
        assert_eq!(Repeat::try_new(square(), 2).unwrap().count, 2);
    }

    #[test]
    fn reduction_scales_by_count() {
        let seq = Sequence::new(vec![
            Movement::Leg(Leg::new(Direction::north(), 2.0)),
            Movement::Leg(Leg::new(Direction::south(), 0.5)),
        ]);
        let r = Repeat::new(seq, 4);
        assert_eq!(r.shortest_movement(), Movement::Leg(Leg::new(Direction::north(), 6.0)));
    }

    #[test]
    fn large_count_over_empty_sequence() {
        let r = Repeat::new(Sequence::default(), u32::MAX);
        assert_eq!(r.walk().next(), None);
    }

    #[test]
    fn display() {
        let r = Repeat::new(Sequence::new(vec![Movement::Leg(Leg::new(Direction::east(), 1.0))]), 2);
        assert_eq!(r.to_string(), "2 x [east 1]");
    }
}
