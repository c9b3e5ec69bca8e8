//! Result of a policy run.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::domain::Cylinder;
use crate::head::{Direction, HeadState};

/// Ordered record of head positions produced by a single policy call.
///
/// `visited` starts with the initial head position, followed by every serviced request in visit order.
/// Forced boundary visits of SCAN and C-SCAN appear in `visited` too and their indices are listed in
/// `boundary_visits`. `total_movement` always equals the sum of absolute differences between consecutive
/// visited positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    visited: Vec<Cylinder>,
    total_movement: u64,
    boundary_visits: Vec<usize>,
}

impl Trace {
    /// Returns visited positions, the initial one included.
    pub fn visited(&self) -> &[Cylinder] {
        &self.visited
    }

    /// Returns total head movement.
    pub fn total_movement(&self) -> u64 {
        self.total_movement
    }

    /// Returns indices in [`visited`](Self::visited) of the boundary visits which don't correspond to requests.
    pub fn boundary_visits(&self) -> &[usize] {
        &self.boundary_visits
    }

    /// Returns the position the head started from.
    pub fn initial_position(&self) -> Cylinder {
        self.visited[0]
    }

    /// Returns the position the head ended at.
    pub fn final_position(&self) -> Cylinder {
        self.visited[self.visited.len() - 1]
    }

    /// Returns serviced requests in visit order.
    pub fn serviced(&self) -> impl Iterator<Item = Cylinder> + '_ {
        self.visited
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, _)| !self.boundary_visits.contains(i))
            .map(|(_, &cylinder)| cylinder)
    }

    /// Computes the head movement from visited positions.
    pub fn recompute_movement(&self) -> u64 {
        self.visited
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| from.abs_diff(to))
            .sum()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (total movement: {})",
            self.visited.iter().join(" -> "),
            self.total_movement
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Accumulates a [`Trace`] while a policy moves the head.
pub(crate) struct TraceBuilder {
    head: HeadState,
    visited: Vec<Cylinder>,
    total_movement: u64,
    boundary_visits: Vec<usize>,
}

impl TraceBuilder {
    pub fn new(initial_position: Cylinder, direction: Direction) -> Self {
        Self {
            head: HeadState::new(initial_position, direction),
            visited: vec![initial_position],
            total_movement: 0,
            boundary_visits: Vec::new(),
        }
    }

    pub fn position(&self) -> Cylinder {
        self.head.position
    }

    pub fn direction(&self) -> Direction {
        self.head.direction
    }

    pub fn reverse(&mut self) {
        self.head.reverse();
    }

    /// Moves the head to the request and records the visit.
    pub fn service(&mut self, cylinder: Cylinder) {
        let distance = self.head.move_to(cylinder);
        log::trace!("head {} -> {} (+{})", self.visited[self.visited.len() - 1], cylinder, distance);
        self.total_movement += distance;
        self.visited.push(cylinder);
    }

    /// Moves the head to a disk boundary which is not a request.
    ///
    /// Nothing is recorded if the head is already there.
    pub fn visit_boundary(&mut self, cylinder: Cylinder) {
        if self.head.position == cylinder {
            return;
        }
        self.service(cylinder);
        self.boundary_visits.push(self.visited.len() - 1);
    }

    pub fn build(self) -> Trace {
        Trace {
            visited: self.visited,
            total_movement: self.total_movement,
            boundary_visits: self.boundary_visits,
        }
    }
}
