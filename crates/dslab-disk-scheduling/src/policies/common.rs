use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::{PendingRequests, RequestSet};
use crate::trace::TraceBuilder;

/// Extra head moves on top of one move per request: boundary and wrap visits of SCAN and C-SCAN.
const MAX_BOUNDARY_MOVES: u64 = 2;

/// Checks the initial position first, then the requests in arrival order.
///
/// Also rejects inputs whose worst-case total movement, a full disk span per move, doesn't fit in `u64`.
pub(crate) fn validate_input(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
) -> Result<(), SchedulingError> {
    domain.check(initial_position)?;
    requests.validate(domain)?;
    if requests.is_empty() {
        return Ok(());
    }
    let moves = requests.len() as u64 + MAX_BOUNDARY_MOVES;
    match domain.span().checked_mul(moves) {
        Some(_) => Ok(()),
        None => Err(SchedulingError::MovementOverflow {
            span: domain.span(),
            moves,
        }),
    }
}

/// What the head does once no pending requests are left ahead of it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Turnaround {
    /// Travel on to the disk boundary first (SCAN, C-SCAN).
    AtBoundary,
    /// Turn at the last serviced request (LOOK, C-LOOK).
    AtLastRequest,
}

/// Elevator sweep: service everything ahead, turn around, service everything behind.
pub(crate) fn sweep(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    direction: Direction,
    turnaround: Turnaround,
) -> TraceBuilder {
    let mut pending = PendingRequests::new(requests);
    let mut trace = TraceBuilder::new(initial_position, direction);

    while !pending.is_empty() {
        let position = trace.position();
        let next = match trace.direction() {
            Direction::Up => pending.at_or_above(position),
            Direction::Down => pending.at_or_below(position),
        };
        match next {
            Some(cylinder) => {
                pending.take(cylinder);
                trace.service(cylinder);
            }
            None => {
                if turnaround == Turnaround::AtBoundary {
                    let boundary = match trace.direction() {
                        Direction::Up => domain.upper_bound(),
                        Direction::Down => domain.lower_bound(),
                    };
                    trace.visit_boundary(boundary);
                }
                log::trace!("reversing at {}, {} requests left", trace.position(), pending.len());
                trace.reverse();
            }
        }
    }
    trace
}

/// Circular sweep: always service upwards, jump back to the low end when nothing is left above the head.
pub(crate) fn circular_sweep(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    turnaround: Turnaround,
) -> TraceBuilder {
    let mut pending = PendingRequests::new(requests);
    let mut trace = TraceBuilder::new(initial_position, Direction::Up);

    while let Some(lowest) = pending.lowest() {
        match pending.at_or_above(trace.position()) {
            Some(cylinder) => {
                pending.take(cylinder);
                trace.service(cylinder);
            }
            None => {
                log::trace!("wrapping at {}, {} requests left", trace.position(), pending.len());
                match turnaround {
                    Turnaround::AtBoundary => {
                        trace.visit_boundary(domain.upper_bound());
                        trace.visit_boundary(domain.lower_bound());
                    }
                    Turnaround::AtLastRequest => {
                        pending.take(lowest);
                        trace.service(lowest);
                    }
                }
            }
        }
    }
    trace
}
