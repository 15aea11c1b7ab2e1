// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for region construction.

use crate::region::Constraints;
use thiserror::Error;

/// Two elements supplied to a [`RegionSet`](crate::region::RegionSet) overlap.
///
/// Region sets are assembled from disjoint pieces, so this always indicates a
/// logic defect in the caller rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("overlapping regions {first} and {second} share {shared}")]
pub struct OverlapError {
    pub first: Constraints,
    pub second: Constraints,
    pub shared: Constraints,
}

/// An attribute value range that [`Domain`](crate::region::Domain) cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("empty attribute domain: min {min} is greater than max {max}")]
    Empty { min: i64, max: i64 },

    /// The exclusive bounds `min - 1` and `max + 1` must fit in an `i64`.
    #[error("attribute domain {min}..={max} touches the limits of a 64-bit integer")]
    Unbounded { min: i64, max: i64 },

    #[error("attribute domain {min}..={max} is wider than {limit} values")]
    TooWide { min: i64, max: i64, limit: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_messages() {
        let err = DomainError::Empty { min: 5, max: 4 };
        assert_eq!(err.to_string(), "empty attribute domain: min 5 is greater than max 4");

        let err = DomainError::Unbounded {
            min: i64::MIN,
            max: 0,
        };
        assert!(err.to_string().contains("limits of a 64-bit integer"));
        assert!(!err.to_string().contains("greater than"));
    }
}
