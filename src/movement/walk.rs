//! Lazy, single-pass traversal of a movement's legs.
//!
//! A `Walk` is an explicit state machine: a sequence keeps the walk of
//! its current child plus an iterator over the children not yet started,
//! and a repeat keeps the walk of its current pass plus the number of
//! passes left. Child walks are built only when reached, and no flattened
//! list is ever materialized. Nesting depth, not repeat count, bounds the
//! number of live child walks.
//!
//! A walk cannot be restarted; call `walk()` again for another pass.
//! It borrows the movement and offers no way to remove a leg.

use std::iter::FusedIterator;
use std::slice;

use super::{Leg, Movement, Sequence};

pub struct Walk<'a> {
    state: State<'a>,
}

enum State<'a> {
    Leg(Option<&'a Leg>),
    Sequence {
        current: Option<Box<Walk<'a>>>,
        remaining: slice::Iter<'a, Movement>,
    },
    Repeat {
        sequence: &'a Sequence,
        current: Option<Box<Walk<'a>>>,
        passes_left: u32,
        pass_yielded: bool,
    },
}

impl<'a> Walk<'a> {
    pub(crate) fn leg(leg: &'a Leg) -> Self {
        Self { state: State::Leg(Some(leg)) }
    }

    pub(crate) fn sequence(sequence: &'a Sequence) -> Self {
        Self {
            state: State::Sequence {
                current: None,
                remaining: sequence.movements.iter(),
            },
        }
    }

    pub(crate) fn repeat(sequence: &'a Sequence, count: u32) -> Self {
        Self {
            state: State::Repeat {
                sequence,
                current: None,
                passes_left: count,
                pass_yielded: false,
            },
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Leg;

    fn next(&mut self) -> Option<&'a Leg> {
        match &mut self.state {
            State::Leg(leg) => leg.take(),
            State::Sequence { current, remaining } => loop {
                if let Some(walk) = current {
                    if let Some(leg) = walk.next() {
                        return Some(leg);
                    }
                }
                match remaining.next() {
                    Some(child) => *current = Some(Box::new(child.walk())),
                    None => {
                        *current = None;
                        return None;
                    }
                }
            },
            State::Repeat { sequence, current, passes_left, pass_yielded } => loop {
                if let Some(walk) = current {
                    if let Some(leg) = walk.next() {
                        *pass_yielded = true;
                        return Some(leg);
                    }
                    // an empty pass stays empty on every replay
                    if !*pass_yielded {
                        *passes_left = 0;
                    }
                }
                if *passes_left == 0 {
                    *current = None;
                    return None;
                }
                *passes_left -= 1;
                *pass_yielded = false;
                *current = Some(Box::new(Walk::sequence(*sequence)));
            },
        }
    }
}

impl FusedIterator for Walk<'_> {}

impl std::fmt::Debug for Walk<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.state {
            State::Leg(_) => "Leg",
            State::Sequence { .. } => "Sequence",
            State::Repeat { .. } => "Repeat",
        };
        f.debug_struct("Walk").field("kind", &kind).finish_non_exhaustive()
    }
}
