//! # Movement Algebra
//!
//! Compound movements over [`Direction`]s: a single [`Leg`], an ordered
//! [`Sequence`], or a [`Repeat`] of a sequence. All three are peers of
//! one sum type, and every transform returns a new value.
//!
//! | Operation | Leg | Sequence | Repeat |
//! |-----------|-----|----------|--------|
//! | `flip` | backward if its axis is listed | each child | wrapped sequence |
//! | `reverse` | backward direction | reversed order, each child reversed | wrapped sequence |
//! | `scale` | magnitude × factor | each child | wrapped sequence |
//! | `walk` | itself once | children in order | sequence `count` times |
//! | `shortest_movement` | drain + cancel | drain + cancel | sequence's, scaled by `count` |
//!
//! Directions are symbolic; nothing here assigns them coordinates.

pub mod leg;
mod reduce;
pub mod repeat;
pub mod sequence;
pub mod walk;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Direction;

pub use leg::Leg;
pub use sequence::Sequence;
pub use repeat::Repeat;
pub use walk::Walk;

#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub enum Movement {
    Leg(Leg),
    Sequence(Sequence),
    Repeat(Repeat),
}

impl Movement {
    /// Canonical "no movement": a zero-magnitude leg along
    /// [`Direction::stationary`].
    pub fn none() -> Movement {
        Movement::Leg(Leg::new(Direction::stationary(), 0.0))
    }

    pub fn leg(direction: Direction, magnitude: f64) -> Movement {
        Movement::Leg(Leg::new(direction, magnitude))
    }

    pub fn sequence(movements: impl IntoIterator<Item = Movement>) -> Movement {
        Movement::Sequence(movements.into_iter().collect())
    }

    pub fn repeat(sequence: Sequence, count: u32) -> Movement {
        Movement::Repeat(Repeat::new(sequence, count))
    }

    pub fn flip(&self, directions: &[Direction]) -> Movement {
        match self {
            Movement::Leg(l) => Movement::Leg(l.flip(directions)),
            Movement::Sequence(s) => Movement::Sequence(s.flip(directions)),
            Movement::Repeat(r) => Movement::Repeat(r.flip(directions)),
        }
    }

    pub fn reverse(&self) -> Movement {
        match self {
            Movement::Leg(l) => Movement::Leg(l.reverse()),
            Movement::Sequence(s) => Movement::Sequence(s.reverse()),
            Movement::Repeat(r) => Movement::Repeat(r.reverse()),
        }
    }

    pub fn scale(&self, factor: f64) -> Movement {
        match self {
            Movement::Leg(l) => Movement::Leg(l.scale(factor)),
            Movement::Sequence(s) => Movement::Sequence(s.scale(factor)),
            Movement::Repeat(r) => Movement::Repeat(r.scale(factor)),
        }
    }

    /// Lazy, single-pass walk over the flattened legs.
    pub fn walk(&self) -> Walk<'_> {
        match self {
            Movement::Leg(l) => l.walk(),
            Movement::Sequence(s) => s.walk(),
            Movement::Repeat(r) => r.walk(),
        }
    }

    /// Minimal movement with the same net effect: a single leg, or a
    /// sequence of legs whose directions are pairwise distinct and not
    /// opposite, or [`Movement::none`].
    pub fn shortest_movement(&self) -> Movement {
        match self {
            Movement::Leg(l) => l.shortest_movement(),
            Movement::Sequence(s) => s.shortest_movement(),
            Movement::Repeat(r) => r.shortest_movement(),
        }
    }

    /// Materialized walk.
    pub fn legs(&self) -> Vec<Leg> {
        self.walk().cloned().collect()
    }
}

impl From<Leg> for Movement {
    fn from(leg: Leg) -> Self {
        Movement::Leg(leg)
    }
}

impl From<Sequence> for Movement {
    fn from(sequence: Sequence) -> Self {
        Movement::Sequence(sequence)
    }
}

impl From<Repeat> for Movement {
    fn from(repeat: Repeat) -> Self {
        Movement::Repeat(repeat)
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Leg(l) => fmt::Display::fmt(l, f),
            Movement::Sequence(s) => fmt::Display::fmt(s, f),
            Movement::Repeat(r) => fmt::Display::fmt(r, f),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
