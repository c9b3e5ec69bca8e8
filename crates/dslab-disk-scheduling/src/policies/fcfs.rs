//! First-Come-First-Served.

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::RequestSet;
use crate::trace::{Trace, TraceBuilder};

use super::common::validate_input;

/// Services requests in arrival order, duplicates included.
///
/// This is the baseline for the head movement metric, other policies reorder relative to it.
pub fn fcfs(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;

    let mut trace = TraceBuilder::new(initial_position, direction);
    for cylinder in requests.iter() {
        trace.service(cylinder);
    }
    Ok(trace.build())
}
