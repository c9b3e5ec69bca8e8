//! SCAN (elevator).

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::RequestSet;
use crate::trace::Trace;

use super::common::{sweep, validate_input, Turnaround};

/// Sweeps in `direction` servicing requests on the way, then travels on to the disk boundary, reverses and
/// services the remaining requests.
///
/// The boundary visit is recorded in the trace and counted in the movement. It only happens while requests
/// remain behind the head, the final sweep stops at the last request.
pub fn scan(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;
    Ok(sweep(initial_position, requests, domain, direction, Turnaround::AtBoundary).build())
}
