//! Leg — one (direction, magnitude) movement unit.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Movement, Walk, reduce};
use crate::model::Direction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub direction: Direction,
    /// May be fractional or negative.
    pub magnitude: f64,
}

impl Leg {
    pub fn new(direction: Direction, magnitude: f64) -> Self {
        Self { direction, magnitude }
    }

    /// Mirror along the axis of each listed direction: the direction is
    /// replaced by its backward when it, or its backward, is listed.
    /// Flipping twice by the same list is the identity.
    pub fn flip(&self, directions: &[Direction]) -> Leg {
        if let Some(back) = self.direction.backward() {
            if directions.contains(&self.direction) || directions.contains(&back) {
                return Leg::new(back, self.magnitude);
            }
        }
        self.clone()
    }

    /// Same magnitude along the backward direction. A direction without a
    /// backward is kept and the magnitude negated instead.
    pub fn reverse(&self) -> Leg {
        match self.direction.backward() {
            Some(back) => Leg::new(back, self.magnitude),
            None => Leg::new(self.direction.clone(), -self.magnitude),
        }
    }

    pub fn scale(&self, factor: f64) -> Leg {
        Leg::new(self.direction.clone(), self.magnitude * factor)
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk::leg(self)
    }

    pub fn shortest_movement(&self) -> Movement {
        reduce::shortest(self.walk())
    }
}

impl Hash for Leg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.direction.hash(state);
        // 0.0 == -0.0, so they must hash alike
        let magnitude = if self.magnitude == 0.0 { 0.0f64 } else { self.magnitude };
        magnitude.to_bits().hash(state);
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.magnitude)
    }
}
