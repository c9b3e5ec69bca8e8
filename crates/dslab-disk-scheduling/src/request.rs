//! Pending cylinder requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Cylinder, DiskDomain};
use crate::error::SchedulingError;

/// Collection of cylinder requests to be serviced, kept in arrival order.
///
/// Duplicate cylinders are kept as separate requests, each of them is serviced by its own visit.
/// Policies never modify the set, they build their own [`PendingRequests`] working copy instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSet {
    requests: Vec<Cylinder>,
}

impl RequestSet {
    /// Creates empty request set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends request to the end of arrival order.
    pub fn push(&mut self, cylinder: Cylinder) {
        self.requests.push(cylinder);
    }

    /// Returns requests in arrival order.
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.requests
    }

    /// Returns an iterator over requests in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = Cylinder> + '_ {
        self.requests.iter().copied()
    }

    /// Returns the number of requests (duplicates included).
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Checks whether there are no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Checks that every request lies within the domain.
    ///
    /// Returns [`SchedulingError::OutOfRangeRequest`] for the first offending request in arrival order.
    pub fn validate(&self, domain: &DiskDomain) -> Result<(), SchedulingError> {
        self.requests.iter().try_for_each(|&cylinder| domain.check(cylinder))
    }
}

impl From<Vec<Cylinder>> for RequestSet {
    fn from(requests: Vec<Cylinder>) -> Self {
        Self { requests }
    }
}

impl From<&[Cylinder]> for RequestSet {
    fn from(requests: &[Cylinder]) -> Self {
        Self {
            requests: requests.to_vec(),
        }
    }
}

impl FromIterator<Cylinder> for RequestSet {
    fn from_iter<T: IntoIterator<Item = Cylinder>>(iter: T) -> Self {
        Self {
            requests: iter.into_iter().collect(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shrinking working set of requests which are not serviced yet.
///
/// An ordered multiset, so each lookup and removal costs `O(log n)`.
#[derive(Debug, Clone, Default)]
pub(crate) struct PendingRequests {
    counts: BTreeMap<Cylinder, usize>,
    len: usize,
}

impl PendingRequests {
    pub fn new(requests: &RequestSet) -> Self {
        let mut pending = Self::default();
        for cylinder in requests.iter() {
            *pending.counts.entry(cylinder).or_insert(0) += 1;
            pending.len += 1;
        }
        pending
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn lowest(&self) -> Option<Cylinder> {
        self.counts.keys().next().copied()
    }

    /// Closest pending request at or above the position.
    pub fn at_or_above(&self, position: Cylinder) -> Option<Cylinder> {
        self.counts.range(position..).next().map(|(&cylinder, _)| cylinder)
    }

    /// Closest pending request at or below the position.
    pub fn at_or_below(&self, position: Cylinder) -> Option<Cylinder> {
        self.counts.range(..=position).next_back().map(|(&cylinder, _)| cylinder)
    }

    /// Closest pending request in either direction, the lower one wins on ties.
    pub fn nearest(&self, position: Cylinder) -> Option<Cylinder> {
        match (self.at_or_below(position), self.at_or_above(position)) {
            (Some(below), Some(above)) => {
                if position.abs_diff(below) <= position.abs_diff(above) {
                    Some(below)
                } else {
                    Some(above)
                }
            }
            (below, above) => below.or(above),
        }
    }

    /// Removes a single occurrence of the cylinder, returns false if it is not pending.
    pub fn take(&mut self, cylinder: Cylinder) -> bool {
        match self.counts.get_mut(&cylinder) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&cylinder);
                }
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_lookups() {
        let pending = PendingRequests::new(&RequestSet::from(vec![98, 183, 37, 122, 14]));
        assert_eq!(pending.len(), 5);
        assert_eq!(pending.lowest(), Some(14));
        assert_eq!(pending.at_or_above(53), Some(98));
        assert_eq!(pending.at_or_above(98), Some(98));
        assert_eq!(pending.at_or_above(184), None);
        assert_eq!(pending.at_or_below(53), Some(37));
        assert_eq!(pending.at_or_below(13), None);
        assert_eq!(pending.nearest(53), Some(37));
        assert_eq!(pending.nearest(110), Some(98));
    }

    #[test]
    fn nearest_prefers_lower_cylinder_on_tie() {
        let pending = PendingRequests::new(&RequestSet::from(vec![60, 40]));
        assert_eq!(pending.nearest(50), Some(40));
    }

    #[test]
    fn duplicates_are_taken_one_by_one() {
        let mut pending = PendingRequests::new(&RequestSet::from(vec![7, 7, 3]));
        assert!(pending.take(7));
        assert_eq!(pending.len(), 2);
        assert_eq!(pending.at_or_above(7), Some(7));
        assert!(pending.take(7));
        assert!(!pending.take(7));
        assert_eq!(pending.at_or_above(4), None);
        assert!(pending.take(3));
        assert!(pending.is_empty());
        assert_eq!(pending.nearest(0), None);
    }

    #[test]
    fn validation_reports_first_offender() {
        let domain = DiskDomain::new(0, 99).unwrap();
        let requests = RequestSet::from(vec![1, 150, -3]);
        assert_eq!(
            requests.validate(&domain),
            Err(SchedulingError::OutOfRangeRequest {
                value: 150,
                lower_bound: 0,
                upper_bound: 99
            })
        );
        assert!(RequestSet::new().validate(&domain).is_ok());
    }
}
