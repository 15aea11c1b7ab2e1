// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Attribute constraint vectors.
//!
//! A [`Constraints`] value holds one [`Interval`] per [`Attribute`] and describes
//! a hyper-rectangle of the attribute space. A part matches it when every one
//! of its values lies in the corresponding interval.
//!
//! If any component is empty the whole vector is normalized to
//! [`Constraints::EMPTY`].

use crate::region::{Attribute, DomainError, Interval, Part, RegionSet, NATTRIBUTES};
use std::fmt;

/// Inclusive range of legal values for every attribute.
///
/// The width is capped at [`Domain::MAX_WIDTH`] so that the number of
/// combinations in the whole space, `width^4`, fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    min: i64,
    max: i64,
}

impl Domain {
    /// The widest legal domain: `65535^4 < 2^64`.
    pub const MAX_WIDTH: u64 = u16::MAX as u64;

    /// Create a domain covering `min..=max`.
    ///
    /// Fails if `min > max`, if either bound is at the edge of `i64` (the
    /// exclusive interval bounds would not be representable), or if the
    /// domain holds more than [`Domain::MAX_WIDTH`] values.
    pub fn new(min: i64, max: i64) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::Empty { min, max });
        }
        if min == i64::MIN || max == i64::MAX {
            return Err(DomainError::Unbounded { min, max });
        }
        if max.abs_diff(min) >= Self::MAX_WIDTH {
            return Err(DomainError::TooWide {
                min,
                max,
                limit: Self::MAX_WIDTH,
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> i64 {
        self.min
    }

    pub fn max(self) -> i64 {
        self.max
    }

    /// The interval matching every legal value.
    pub fn interval(self) -> Interval {
        Interval::new(self.min - 1, self.max + 1)
    }
}

impl Default for Domain {
    /// Ratings run from 1 to 4000.
    fn default() -> Self {
        Self { min: 1, max: 4000 }
    }
}

/// One interval per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints([Interval; NATTRIBUTES]);

impl Constraints {
    /// A vector that matches nothing.
    pub const EMPTY: Constraints = Constraints([Interval::EMPTY; NATTRIBUTES]);

    /// Create a vector from per-attribute intervals (indexed by [`Attribute`]).
    pub fn new(intervals: [Interval; NATTRIBUTES]) -> Self {
        if intervals.iter().any(|i| i.is_empty()) {
            Self::EMPTY
        } else {
            Self(intervals)
        }
    }

    /// A vector matching every legal value of every attribute.
    pub fn match_all(domain: Domain) -> Self {
        Self([domain.interval(); NATTRIBUTES])
    }

    pub fn get(&self, attribute: Attribute) -> Interval {
        self.0[attribute.as_usize()]
    }

    /// A copy with the interval for `attribute` replaced.
    pub fn with(&self, attribute: Attribute, interval: Interval) -> Self {
        let mut intervals = self.0;
        intervals[attribute.as_usize()] = interval;
        Self::new(intervals)
    }

    pub fn matches(&self, part: &Part) -> bool {
        Attribute::all().all(|attribute| self.get(attribute).contains(part.get(attribute)))
    }

    /// The number of attribute combinations matched.
    ///
    /// Exact for vectors inside a [`Domain`]. Wider vectors saturate at
    /// `u64::MAX`.
    pub fn size(&self) -> u64 {
        self.0.iter().fold(1, |size, i| size.saturating_mul(i.size()))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// A vector matching the values that both `self` and `that` match.
    pub fn intersection(&self, that: &Constraints) -> Constraints {
        let mut intervals = self.0;
        for (interval, other) in intervals.iter_mut().zip(that.0.iter()) {
            *interval = interval.intersection(*other);
        }
        Self::new(intervals)
    }

    /// A region set matching every value matched by `self` but not by `that`.
    ///
    /// Attributes are swept in order: piece `k` has attribute `k` outside
    /// `that`, every earlier attribute clamped to the overlap, and every later
    /// attribute as in `self`. Pieces from different sweep steps differ on the
    /// attribute of the earlier step, so the result is disjoint with at most
    /// two pieces per attribute.
    pub fn minus(&self, that: &Constraints) -> RegionSet {
        if self.is_empty() {
            return RegionSet::empty();
        }
        let overlap = self.intersection(that);
        if overlap.is_empty() {
            return RegionSet::of(*self);
        }
        let mut pieces = Vec::with_capacity(2 * NATTRIBUTES);
        let mut clamped = *self;
        for attribute in Attribute::all() {
            for outside in self.get(attribute).minus(that.get(attribute)) {
                pieces.push(clamped.with(attribute, outside));
            }
            clamped = clamped.with(attribute, overlap.get(attribute));
        }
        RegionSet::from_disjoint(pieces)
    }
}

impl fmt::Display for Constraints {
    /// Format as "{0<x<4001,0<m<2006,...}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for attribute in Attribute::all() {
            if attribute.as_usize() > 0 {
                write!(f, ",")?;
            }
            let interval = self.get(attribute);
            write!(
                f,
                "{}<{}<{}",
                interval.more_than(),
                attribute,
                interval.less_than()
            )?;
        }
        write!(f, "}}")
    }
}
