//! Addressable cylinder range of a disk.

use serde::Serialize;

use crate::error::SchedulingError;

/// Cylinder number on the disk.
pub type Cylinder = i64;

/// Represents the addressable cylinder range `[lower_bound, upper_bound]` of a disk.
///
/// The domain is fixed for a simulation run. Sweeping policies use its bounds as the points where the head
/// turns around (SCAN) or wraps (C-SCAN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiskDomain {
    lower_bound: Cylinder,
    upper_bound: Cylinder,
}

impl DiskDomain {
    /// Creates new disk domain.
    ///
    /// Returns [`SchedulingError::InvalidDomain`] if `lower_bound >= upper_bound`.
    pub fn new(lower_bound: Cylinder, upper_bound: Cylinder) -> Result<Self, SchedulingError> {
        if lower_bound >= upper_bound {
            return Err(SchedulingError::InvalidDomain {
                lower_bound,
                upper_bound,
            });
        }
        Ok(Self {
            lower_bound,
            upper_bound,
        })
    }

    /// Returns the lowest addressable cylinder.
    pub fn lower_bound(&self) -> Cylinder {
        self.lower_bound
    }

    /// Returns the highest addressable cylinder.
    pub fn upper_bound(&self) -> Cylinder {
        self.upper_bound
    }

    /// Returns the distance between the bounds, i.e. the cost of a full-disk head move.
    pub fn span(&self) -> u64 {
        self.upper_bound.abs_diff(self.lower_bound)
    }

    /// Checks whether the cylinder lies within the domain (bounds included).
    pub fn validate(&self, value: Cylinder) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }

    /// Same as [`validate`](Self::validate) but returns [`SchedulingError::OutOfRangeRequest`] naming the value.
    pub fn check(&self, value: Cylinder) -> Result<(), SchedulingError> {
        if self.validate(value) {
            Ok(())
        } else {
            Err(SchedulingError::OutOfRangeRequest {
                value,
                lower_bound: self.lower_bound,
                upper_bound: self.upper_bound,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let domain = DiskDomain::new(0, 199).unwrap();
        assert!(domain.validate(0));
        assert!(domain.validate(199));
        assert!(!domain.validate(-1));
        assert!(!domain.validate(200));
        assert_eq!(domain.span(), 199);
    }

    #[test]
    fn empty_or_inverted_domain_is_rejected() {
        assert_eq!(
            DiskDomain::new(10, 10),
            Err(SchedulingError::InvalidDomain {
                lower_bound: 10,
                upper_bound: 10
            })
        );
        assert!(DiskDomain::new(20, 10).is_err());
    }

    #[test]
    fn check_names_offending_value() {
        let domain = DiskDomain::new(5, 50).unwrap();
        assert_eq!(domain.check(5), Ok(()));
        assert_eq!(
            domain.check(51),
            Err(SchedulingError::OutOfRangeRequest {
                value: 51,
                lower_bound: 5,
                upper_bound: 50
            })
        );
    }
}
