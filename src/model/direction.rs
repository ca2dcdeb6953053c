//! Direction — symbolic edge label with an optional backward counterpart.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

/// Shared storage for a forward description and its optional opposite.
///
/// Both halves of a pair point at the same allocation, so
/// `d.backward().backward() == d` holds without reference cycles.
#[derive(Debug)]
struct DirectionPair {
    forward: Box<str>,
    backward: Option<Box<str>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

/// A symbolic direction.
///
/// Equality, ordering and hashing use the description only; two
/// directions built separately with the same description compare equal.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "DirectionRepr", from = "DirectionRepr")]
pub struct Direction {
    pair: Arc<DirectionPair>,
    side: Side,
}

impl Direction {
    /// Create a direction with no backward counterpart.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            pair: Arc::new(DirectionPair {
                forward: description.into().into_boxed_str(),
                backward: None,
            }),
            side: Side::Forward,
        }
    }

    /// Create two mutually-backward directions.
    pub fn paired(forward: impl Into<String>, backward: impl Into<String>) -> (Self, Self) {
        let pair = Arc::new(DirectionPair {
            forward: forward.into().into_boxed_str(),
            backward: Some(backward.into().into_boxed_str()),
        });
        (
            Self {
                pair: Arc::clone(&pair),
                side: Side::Forward,
            },
            Self {
                pair,
                side: Side::Backward,
            },
        )
    }

    pub fn description(&self) -> &str {
        match self.side {
            Side::Forward => &self.pair.forward,
            // A Backward handle is only ever built from a pair that has one.
            Side::Backward => self.pair.backward.as_deref().unwrap_or(&self.pair.forward),
        }
    }

    /// The paired opposite, if any.
    pub fn backward(&self) -> Option<Direction> {
        match self.side {
            Side::Forward => self.pair.backward.as_ref().map(|_| Direction {
                pair: Arc::clone(&self.pair),
                side: Side::Backward,
            }),
            Side::Backward => Some(Direction {
                pair: Arc::clone(&self.pair),
                side: Side::Forward,
            }),
        }
    }

    pub fn has_backward(&self) -> bool {
        self.side == Side::Backward || self.pair.backward.is_some()
    }

    /// True when `other` is this direction's backward.
    pub fn is_opposite_of(&self, other: &Direction) -> bool {
        self.backward().is_some_and(|b| b == *other)
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// One independent direction per description, none of them paired.
    pub fn create_unidirectional<I, S>(descriptions: I) -> Vec<Direction>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        descriptions.into_iter().map(Direction::new).collect()
    }

    /// Pair descriptions two at a time as (forward, backward).
    ///
    /// The result is flat: `[f0, b0, f1, b1, ...]`. An odd trailing
    /// description becomes a forward-only direction.
    pub fn create_paired<I, S>(descriptions: I) -> Vec<Direction>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Vec::new();
        let mut iter = descriptions.into_iter();
        while let Some(forward) = iter.next() {
            match iter.next() {
                Some(backward) => {
                    let (f, b) = Direction::paired(forward, backward);
                    out.push(f);
                    out.push(b);
                }
                None => out.push(Direction::new(forward)),
            }
        }
        out
    }

    // ========================================================================
    // Compass
    // ========================================================================

    pub fn north() -> Direction {
        COMPASS[0].clone()
    }

    pub fn south() -> Direction {
        COMPASS[1].clone()
    }

    pub fn east() -> Direction {
        COMPASS[2].clone()
    }

    pub fn west() -> Direction {
        COMPASS[3].clone()
    }

    pub fn north_east() -> Direction {
        COMPASS[4].clone()
    }

    pub fn south_west() -> Direction {
        COMPASS[5].clone()
    }

    pub fn north_west() -> Direction {
        COMPASS[6].clone()
    }

    pub fn south_east() -> Direction {
        COMPASS[7].clone()
    }

    /// All eight compass directions, pairs adjacent.
    pub fn compass() -> Vec<Direction> {
        COMPASS.to_vec()
    }

    /// Unpaired direction used by the canonical "no movement" leg.
    pub fn stationary() -> Direction {
        STATIONARY.clone()
    }
}

static COMPASS: LazyLock<Vec<Direction>> = LazyLock::new(|| {
    Direction::create_paired([
        "north", "south",
        "east", "west",
        "north-east", "south-west",
        "north-west", "south-east",
    ])
});

static STATIONARY: LazyLock<Direction> = LazyLock::new(|| Direction::new("none"));

// ============================================================================
// Identity by description
// ============================================================================

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        self.description() == other.description()
    }
}

impl Eq for Direction {}

impl Hash for Direction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description().hash(state);
    }
}

impl PartialOrd for Direction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Direction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description().cmp(other.description())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.backward() {
            Some(b) => write!(f, "Direction({} <-> {})", self.description(), b.description()),
            None => write!(f, "Direction({})", self.description()),
        }
    }
}

// ============================================================================
// Serde representation
// ============================================================================

#[derive(Serialize, Deserialize)]
struct DirectionRepr {
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backward: Option<String>,
}

impl From<Direction> for DirectionRepr {
    fn from(d: Direction) -> Self {
        Self {
            description: d.description().to_string(),
            backward: d.backward().map(|b| b.description().to_string()),
        }
    }
}

impl From<DirectionRepr> for Direction {
    fn from(r: DirectionRepr) -> Self {
        match r.backward {
            Some(b) => Direction::paired(r.description, b).0,
            None => Direction::new(r.description),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_pairs_are_mutual() {
        let n = Direction::north();
        assert_eq!(n.backward(), Some(Direction::south()));
        assert_eq!(Direction::south().backward(), Some(n.clone()));
        assert_eq!(n.backward().unwrap().backward(), Some(n));
        assert_eq!(Direction::north_west().backward(), Some(Direction::south_east()));
        assert_eq!(Direction::compass().len(), 8);
    }

    #[test]
    fn equality_is_by_description() {
        let a = Direction::new("up");
        let (b, _) = Direction::paired("up", "down");
        assert_eq!(a, b);
        assert!(!a.has_backward());
        assert!(b.has_backward());
    }

    #[test]
    fn unidirectional_has_no_backward() {
        let dirs = Direction::create_unidirectional(["in", "out"]);
        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| d.backward().is_none()));
    }

    #[test]
    fn paired_with_odd_trailing() {
        let dirs = Direction::create_paired(["up", "down", "left", "right", "spin"]);
        assert_eq!(dirs.len(), 5);
        assert_eq!(dirs[0].backward(), Some(dirs[1].clone()));
        assert_eq!(dirs[1].backward(), Some(dirs[0].clone()));
        assert_eq!(dirs[3].backward(), Some(dirs[2].clone()));
        assert!(dirs[4].backward().is_none());
        assert!(dirs[2].is_opposite_of(&dirs[3]));
        assert!(!dirs[2].is_opposite_of(&dirs[0]));
    }

    #[test]
    fn serde_keeps_backward() {
        let json = serde_json::to_string(&Direction::east()).unwrap();
        assert_eq!(json, r#"{"description":"east","backward":"west"}"#);
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.backward(), Some(Direction::west()));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Direction::north().to_string(), "north");
        assert_eq!(format!("{:?}", Direction::north()), "Direction(north <-> south)");
        assert_eq!(format!("{:?}", Direction::stationary()), "Direction(none)");
    }
}
