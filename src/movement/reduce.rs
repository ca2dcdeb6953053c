//! Reduction of a walk to its minimal equivalent movement.
//!
//! Legs are drained into an accumulator where a direction and its
//! backward are never both live keys: a leg along the backward of a
//! live key cancels against it instead of opening a new entry.

use tracing::debug;

use super::{Leg, Movement, Sequence};
use crate::model::Direction;

/// Live (direction, signed magnitude) entries, in first-seen order.
#[derive(Debug, Default)]
struct Accumulator {
    entries: Vec<(Direction, f64)>,
}

impl Accumulator {
    fn add(&mut self, leg: &Leg) {
        let m = leg.magnitude;

        if let Some(slot) = self.entries.iter_mut().find(|(d, _)| *d == leg.direction) {
            slot.1 += m;
            return;
        }

        if let Some(back) = leg.direction.backward() {
            if let Some(pos) = self.entries.iter().position(|(d, _)| *d == back) {
                let u = self.entries[pos].1;
                if u > m {
                    self.entries[pos].1 = u - m;
                } else if u < m {
                    self.entries[pos] = (leg.direction.clone(), m - u);
                } else {
                    self.entries.remove(pos);
                }
                return;
            }
        }

        self.entries.push((leg.direction.clone(), m));
    }

    fn collapse(self) -> Movement {
        let mut entries = self.entries;
        match entries.len() {
            0 => Movement::none(),
            1 => {
                let (direction, magnitude) = entries.remove(0);
                Movement::Leg(Leg::new(direction, magnitude))
            }
            _ => Movement::Sequence(
                entries
                    .into_iter()
                    .map(|(d, m)| Movement::Leg(Leg::new(d, m)))
                    .collect::<Sequence>(),
            ),
        }
    }
}

/// Drain `legs` and collapse the net result.
pub(crate) fn shortest<'a>(legs: impl Iterator<Item = &'a Leg>) -> Movement {
    let mut acc = Accumulator::default();
    let mut drained = 0usize;
    for leg in legs {
        acc.add(leg);
        drained += 1;
    }
    let live = acc.entries.len();
    debug!(drained, live, "reduced movement");
    acc.collapse()
}
