//! # compass-graph — Directional Graphs and Movement Algebra
//!
//! Two halves that share one type, [`Direction`]:
//!
//! 1. **Graph**: an arena of payload-carrying nodes linked by direction,
//!    with optional auto-maintained reciprocal edges, breadth-first
//!    shortest-path search and cycle-safe deep cloning.
//! 2. **Movement**: legs, sequences and repeats over directions that can
//!    be flipped, reversed, scaled, walked lazily and reduced to a
//!    minimal equivalent.
//!
//! ## Design Principles
//!
//! 1. **Ids, not pointers**: nodes are addressed by [`NodeId`]; cycles and
//!    self-edges are plain data
//! 2. **Absence is `Option`**: no neighbor, no backward, no route
//! 3. **Movements are values**: every transform returns a new movement
//!
//! ## Quick Start
//!
//! ```rust
//! use compass_graph::{Direction, Graph, Movement};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.link(a, &Direction::north(), b, true)?;
//! graph.link(b, &Direction::east(), c, true)?;
//!
//! assert_eq!(graph.find_path(c, a), Some(vec![c, b, a]));
//!
//! let route = Movement::sequence([
//!     Movement::leg(Direction::north(), 5.0),
//!     Movement::leg(Direction::south(), 3.0),
//! ]);
//! assert_eq!(route.shortest_movement(), Movement::leg(Direction::north(), 2.0));
//! # Ok::<(), compass_graph::Error>(())
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod graph;
pub mod model;
pub mod movement;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Direction, Node, NodeId, PathRecord};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{Frontier, Graph, SearchParams};

// ============================================================================
// Re-exports: Movement
// ============================================================================

pub use movement::{Leg, Movement, Repeat, Sequence, Walk};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Repeat count must be non-negative, got {0}")]
    NegativeRepeatCount(i64),

    #[error("Repeat count {0} exceeds u32::MAX")]
    RepeatCountOverflow(i64),

    #[error("Search gave up after {limit} expansions")]
    ExpansionLimit { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
