//! Error types.

use thiserror::Error;

use crate::domain::Cylinder;

/// An error returned when a disk domain or a scheduling input is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// Lower bound of the disk domain is not below its upper bound.
    #[error("invalid disk domain: lower bound {lower_bound} must be less than upper bound {upper_bound}")]
    InvalidDomain {
        /// Requested lower bound.
        lower_bound: Cylinder,
        /// Requested upper bound.
        upper_bound: Cylinder,
    },
    /// A request or the initial head position lies outside of the disk domain.
    #[error("cylinder {value} is out of disk range [{lower_bound}, {upper_bound}]")]
    OutOfRangeRequest {
        /// The offending cylinder.
        value: Cylinder,
        /// Lower bound of the disk domain.
        lower_bound: Cylinder,
        /// Upper bound of the disk domain.
        upper_bound: Cylinder,
    },
    /// Total head movement may exceed `u64::MAX` for this domain and request count.
    #[error("total movement may overflow: {moves} moves across a disk span of {span}")]
    MovementOverflow {
        /// Span of the disk domain.
        span: u64,
        /// Upper bound on the number of head moves.
        moves: u64,
    },
}

/// An error returned when a policy or direction name can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {name}")]
pub struct ParseNameError {
    pub(crate) kind: &'static str,
    pub(crate) name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    /// Returns the name which failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}
