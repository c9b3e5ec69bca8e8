//! Circular LOOK.

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::RequestSet;
use crate::trace::Trace;

use super::common::{circular_sweep, validate_input, Turnaround};

/// Same as [`c_scan`](super::c_scan::c_scan), but the head turns at the highest serviced request and jumps
/// straight to the lowest pending one.
///
/// No boundary visits are recorded. The jump costs the distance between these two requests.
/// `direction` is accepted for interface uniformity and ignored.
pub fn c_look(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    _direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;
    Ok(circular_sweep(initial_position, requests, domain, Turnaround::AtLastRequest).build())
}
