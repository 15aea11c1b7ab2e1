// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Open integer intervals.
//!
//! An [`Interval`] holds every integer strictly between its two bounds, so
//! `Interval::new(1, 10)` matches `2..=9`. All empty intervals share the single
//! canonical representation [`Interval::EMPTY`], which makes `==` meaningful
//! for emptiness.
//!
//! # Examples
//!
//! ```
//! use workflow_regions::region::Interval;
//!
//! let a = Interval::new(2, 10);
//! let b = Interval::new(4, 8);
//!
//! assert_eq!(a.intersection(b), b);
//! assert_eq!(a.minus(b), vec![Interval::new(2, 5), Interval::new(7, 10)]);
//! assert_eq!(Interval::new(5, 6), Interval::EMPTY);
//! ```

use std::cmp::{max, min};
use std::fmt;

/// Integers `v` with `more_than < v < less_than`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    more_than: i64,
    less_than: i64,
}

impl Interval {
    /// An interval that matches nothing.
    pub const EMPTY: Interval = Interval {
        more_than: 0,
        less_than: 0,
    };

    /// Create an interval, normalizing to [`Interval::EMPTY`] if no integer fits.
    pub fn new(more_than: i64, less_than: i64) -> Self {
        if more_than.saturating_add(1) >= less_than {
            Self::EMPTY
        } else {
            Self {
                more_than,
                less_than,
            }
        }
    }

    /// The exclusive lower bound.
    pub fn more_than(self) -> i64 {
        self.more_than
    }

    /// The exclusive upper bound.
    pub fn less_than(self) -> i64 {
        self.less_than
    }

    pub fn contains(self, value: i64) -> bool {
        value > self.more_than && value < self.less_than
    }

    /// The number of integers in the interval. For `1 < v < 10` this is 8.
    pub fn size(self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.less_than.abs_diff(self.more_than) - 1
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// The interval matching values matched by both `self` and `that`.
    pub fn intersection(self, that: Interval) -> Interval {
        Interval::new(
            max(self.more_than, that.more_than),
            min(self.less_than, that.less_than),
        )
    }

    /// The values matched by `self` but not by `that`, as zero to two intervals.
    ///
    /// The first piece (if any) lies below `that`, the second above it. If the
    /// two intervals do not overlap, `self` is returned unchanged.
    pub fn minus(self, that: Interval) -> Vec<Interval> {
        if self.is_empty() {
            return Vec::new();
        }
        if self.intersection(that).is_empty() {
            return vec![self];
        }
        // If self is 2 < v < 10 and that is 4 < v < 8, then before is 2 < v < 5
        // and after is 7 < v < 10.
        let before = Interval::new(self.more_than, that.more_than.saturating_add(1));
        let after = Interval::new(that.less_than.saturating_sub(1), self.less_than);
        [before, after]
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}

impl fmt::Display for Interval {
    /// Format as "2<_<10".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<_<{}", self.more_than, self.less_than)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(pieces: &[Interval]) -> u64 {
        pieces.iter().map(|i| i.size()).sum()
    }

    #[test]
    fn test_empty_normalization() {
        assert_eq!(Interval::new(5, 6), Interval::EMPTY);
        assert_eq!(Interval::new(5, 5), Interval::EMPTY);
        assert_eq!(Interval::new(9, 3), Interval::EMPTY);
        assert_eq!(Interval::new(i64::MAX, i64::MAX), Interval::EMPTY);
        assert!(Interval::new(5, 7).contains(6));
        assert!(!Interval::new(5, 7).is_empty());
    }

    #[test]
    fn test_size() {
        assert_eq!(Interval::new(1, 10).size(), 8);
        assert_eq!(Interval::new(0, 4001).size(), 4000);
        assert_eq!(Interval::EMPTY.size(), 0);
        assert_eq!(Interval::new(-5, 5).size(), 9);
    }

    #[test]
    fn test_contains_is_exclusive() {
        let i = Interval::new(2, 5);
        assert!(!i.contains(2));
        assert!(i.contains(3));
        assert!(i.contains(4));
        assert!(!i.contains(5));
        assert!(!Interval::EMPTY.contains(0));
    }

    #[test]
    fn test_intersection() {
        let a = Interval::new(0, 100);
        let b = Interval::new(50, 200);
        assert_eq!(a.intersection(b), Interval::new(50, 100));
        assert_eq!(b.intersection(a), Interval::new(50, 100));
        assert_eq!(a.intersection(a), a);
        assert_eq!(a.intersection(Interval::new(100, 200)), Interval::EMPTY);
        assert_eq!(a.intersection(Interval::EMPTY), Interval::EMPTY);
    }

    #[test]
    fn test_minus_inner() {
        let a = Interval::new(2, 10);
        let b = Interval::new(4, 8);
        assert_eq!(a.minus(b), vec![Interval::new(2, 5), Interval::new(7, 10)]);
    }

    #[test]
    fn test_minus_overlapping_low_end() {
        // 1 < v < 6 removes 2..=5, leaving 6..=9.
        let a = Interval::new(2, 10);
        let b = Interval::new(1, 6);
        assert_eq!(a.minus(b), vec![Interval::new(5, 10)]);
    }

    #[test]
    fn test_minus_covering() {
        let a = Interval::new(2, 10);
        assert!(a.minus(Interval::new(0, 20)).is_empty());
        assert!(a.minus(a).is_empty());
    }

    #[test]
    fn test_minus_disjoint_is_unchanged() {
        let a = Interval::new(0, 5);
        assert_eq!(a.minus(Interval::new(10, 20)), vec![a]);
        assert_eq!(a.minus(Interval::new(-20, -3)), vec![a]);
        assert_eq!(a.minus(Interval::EMPTY), vec![a]);
        assert!(Interval::EMPTY.minus(a).is_empty());
    }

    #[test]
    fn test_minus_partitions() {
        let a = Interval::new(0, 4001);
        for b in [
            Interval::new(0, 2006),
            Interval::new(2090, 4001),
            Interval::new(100, 200),
            Interval::new(-50, 5000),
            Interval::new(5000, 6000),
        ] {
            let pieces = a.minus(b);
            assert_eq!(total(&pieces) + a.intersection(b).size(), a.size(), "b = {}", b);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Interval::new(0, 4001)), "0<_<4001");
    }
}
