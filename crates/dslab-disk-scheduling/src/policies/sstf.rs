//! Shortest Seek Time First.

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::{PendingRequests, RequestSet};
use crate::trace::{Trace, TraceBuilder};

use super::common::validate_input;

/// Repeatedly services the pending request closest to the head.
///
/// Among equally close requests the one with the lowest cylinder is chosen, which makes the result reproducible.
/// This is a greedy nearest-neighbour walk: each step is locally optimal, but the total movement is not
/// necessarily minimal, and far requests can be postponed for as long as closer ones keep coming.
pub fn sstf(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;

    let mut pending = PendingRequests::new(requests);
    let mut trace = TraceBuilder::new(initial_position, direction);
    while let Some(cylinder) = pending.nearest(trace.position()) {
        pending.take(cylinder);
        trace.service(cylinder);
    }
    Ok(trace.build())
}
