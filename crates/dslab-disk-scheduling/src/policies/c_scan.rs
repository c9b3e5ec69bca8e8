//! Circular SCAN.

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;
use crate::head::Direction;
use crate::request::RequestSet;
use crate::trace::Trace;

use super::common::{circular_sweep, validate_input, Turnaround};

/// Sweeps up servicing requests, then travels to the upper bound and wraps to the lower bound to service
/// the remaining requests on the next upward sweep.
///
/// Both boundary visits are recorded. The wrap is not free: it adds the full span of the disk to the movement.
/// `direction` is accepted for interface uniformity and ignored.
pub fn c_scan(
    initial_position: Cylinder,
    requests: &RequestSet,
    domain: &DiskDomain,
    _direction: Direction,
) -> Result<Trace, SchedulingError> {
    validate_input(initial_position, requests, domain)?;
    Ok(circular_sweep(initial_position, requests, domain, Turnaround::AtBoundary).build())
}
