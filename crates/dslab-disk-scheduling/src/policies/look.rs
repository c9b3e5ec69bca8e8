//! LOOK.

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::RequestSet;
use crate::trace::Trace;

use super::common::{sweep, validate_input, Turnaround};

/// Same as [`scan`](super::scan::scan), but the head reverses at the outermost pending request instead of
/// travelling to the disk boundary.
pub fn look(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;
    Ok(sweep(initial_position, requests, domain, direction, Turnaround::AtLastRequest).build())
}
