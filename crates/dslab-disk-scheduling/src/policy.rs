//! Policy selection and dispatch.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

use crate::domain::{Cylinder, DiskDomain};
use crate::error::{ParseNameError, SchedulingError};
use crate::head::Direction;
use crate::policies;
use crate::request::RequestSet;
use crate::trace::Trace;

/// Common signature of all policies.
pub type PolicyFn = fn(Cylinder, &RequestSet, &DiskDomain, Direction) -> Result<Trace, SchedulingError>;

/// Disk-head scheduling policy.
///
/// Serialized as its conventional name, deserialized with the same rules as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoEnumIterator, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Policy {
    /// First-Come-First-Served, see [`fcfs`](crate::policies::fcfs).
    Fcfs,
    /// Shortest Seek Time First, see [`sstf`](crate::policies::sstf).
    Sstf,
    /// Elevator with boundary bounce, see [`scan`](crate::policies::scan).
    Scan,
    /// Circular SCAN, see [`c_scan`](crate::policies::c_scan).
    CScan,
    /// Elevator without boundary bounce, see [`look`](crate::policies::look).
    Look,
    /// Circular LOOK, see [`c_look`](crate::policies::c_look).
    CLook,
}

impl Policy {
    /// Returns all policies in canonical order.
    pub fn all() -> Vec<Policy> {
        Policy::into_enum_iter().collect()
    }

    /// Returns the conventional policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// Checks whether the policy takes the initial direction into account.
    pub fn uses_direction(&self) -> bool {
        matches!(self, Policy::Scan | Policy::Look)
    }

    /// Returns the function implementing the policy.
    pub fn function(&self) -> PolicyFn {
        match self {
            Policy::Fcfs => policies::fcfs,
            Policy::Sstf => policies::sstf,
            Policy::Scan => policies::scan,
            Policy::CScan => policies::c_scan,
            Policy::Look => policies::look,
            Policy::CLook => policies::c_look,
        }
    }

    /// Computes the service order of `requests` for the head starting at `initial_position`.
    ///
    /// Returns [`SchedulingError::OutOfRangeRequest`] if the initial position or any request lies outside
    /// of `domain`. The request set is left untouched.
    pub fn schedule(
        &self,
        initial_position: Cylinder,
        requests: &RequestSet,
        domain: &DiskDomain,
        direction: Direction,
    ) -> Result<Trace, SchedulingError> {
        log::debug!(
            "{}: scheduling {} requests from {} ({})",
            self,
            requests.len(),
            initial_position,
            direction
        );
        let trace = (self.function())(initial_position, requests, domain, direction)?;
        log::debug!("{}: total movement {}", self, trace.total_movement());
        Ok(trace)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ParseNameError;

    /// Parses policy name ignoring case and dashes, so `C-SCAN`, `cscan` and `c_scan` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Policy::into_enum_iter()
            .find(|policy| policy.name().replace('-', "") == normalized)
            .ok_or_else(|| ParseNameError::new("policy", s))
    }
}

impl TryFrom<String> for Policy {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Policy> for &'static str {
    fn from(policy: Policy) -> Self {
        policy.name()
    }
}
