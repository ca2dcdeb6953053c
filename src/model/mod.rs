//! # Graph Model
//!
//! Plain data shared by the graph arena and the movement algebra.
//!
//! Design rule: no traversal logic here. This module is pure data —
//! no I/O, no global mutable state.

pub mod direction;
pub mod node;
pub mod path;

pub use direction::Direction;
pub use node::{Node, NodeId};
pub use path::PathRecord;
