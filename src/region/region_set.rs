// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disjoint unions of constraint vectors.
//!
//! A [`RegionSet`] represents the union of its elements, and no two elements
//! may overlap. Every operation builds a new set from disjoint pieces, so the
//! invariant holds by construction; [`RegionSet::try_new`] checks it for
//! collections assembled elsewhere.
//!
//! # Examples
//!
//! ```
//! use workflow_regions::region::{Attribute, Constraints, Domain, Interval, RegionSet};
//!
//! let all = Constraints::match_all(Domain::default());
//! let low_x = all.with(Attribute::X, Interval::new(0, 1001));
//! let low_m = all.with(Attribute::M, Interval::new(0, 1001));
//!
//! // The two tests overlap where both x and m are low; `plus` keeps only the new part.
//! let either = RegionSet::of(low_x).plus(&low_m);
//! assert_eq!(either.size(), low_x.size() + low_m.size() - low_x.intersection(&low_m).size());
//! ```

use crate::region::{Constraints, OverlapError, Part};
use std::fmt;

/// A set of pairwise disjoint constraint vectors.
#[derive(Debug, Clone, Default)]
pub struct RegionSet {
    regions: Vec<Constraints>,
}

impl RegionSet {
    /// The set matching nothing.
    pub const fn empty() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// A set holding a single vector (empty if the vector is empty).
    pub fn of(constraints: Constraints) -> Self {
        if constraints.is_empty() {
            Self::empty()
        } else {
            Self {
                regions: vec![constraints],
            }
        }
    }

    /// Create a set from arbitrary vectors, checking that no two overlap.
    ///
    /// Empty vectors are dropped.
    pub fn try_new(regions: Vec<Constraints>) -> Result<Self, OverlapError> {
        let regions: Vec<Constraints> = regions.into_iter().filter(|c| !c.is_empty()).collect();
        match find_overlap(&regions) {
            Some(overlap) => Err(overlap),
            None => Ok(Self { regions }),
        }
    }

    /// Assemble a set from pieces the caller has built to be disjoint.
    ///
    /// The disjointness check is quadratic, so it only runs in debug builds.
    pub(crate) fn from_disjoint(regions: Vec<Constraints>) -> Self {
        let regions: Vec<Constraints> = regions.into_iter().filter(|c| !c.is_empty()).collect();
        debug_assert!(
            find_overlap(&regions).is_none(),
            "{}",
            find_overlap(&regions).map(|o| o.to_string()).unwrap_or_default()
        );
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraints> + '_ {
        self.regions.iter()
    }

    /// The number of attribute combinations matched by any element.
    ///
    /// Saturates at `u64::MAX`, like [`Constraints::size`].
    pub fn size(&self) -> u64 {
        self.regions
            .iter()
            .fold(0, |size, c| size.saturating_add(c.size()))
    }

    /// Whether `part` matches at least one element.
    pub fn matches(&self, part: &Part) -> bool {
        self.regions.iter().any(|c| c.matches(part))
    }

    /// A set matching everything `self` does, and also everything `constraints` does.
    ///
    /// Each existing element is subtracted from the remaining pieces of
    /// `constraints` in turn, so only the uncovered remainder is appended.
    pub fn plus(&self, constraints: &Constraints) -> RegionSet {
        let mut remaining = vec![*constraints];
        for old in &self.regions {
            if remaining.is_empty() {
                break;
            }
            remaining = remaining
                .iter()
                .flat_map(|piece| piece.minus(old).regions)
                .collect();
        }
        let mut regions = self.regions.clone();
        regions.extend(remaining);
        Self::from_disjoint(regions)
    }

    /// A set matching everything `self` does except what `constraints` matches.
    ///
    /// Each element splits into disjoint pieces inside itself, and the elements
    /// were disjoint, so the pieces can be concatenated without re-checking.
    pub fn minus(&self, constraints: &Constraints) -> RegionSet {
        let regions = self
            .regions
            .iter()
            .flat_map(|c| c.minus(constraints).regions)
            .collect();
        Self::from_disjoint(regions)
    }

    /// A set matching what both `self` and `constraints` match.
    pub fn intersection(&self, constraints: &Constraints) -> RegionSet {
        let regions = self
            .regions
            .iter()
            .map(|c| c.intersection(constraints))
            .filter(|c| !c.is_empty())
            .collect();
        Self::from_disjoint(regions)
    }

    /// A set matching what either `self` or `that` matches.
    pub fn union(&self, that: &RegionSet) -> RegionSet {
        that.regions
            .iter()
            .fold(self.clone(), |acc, constraints| acc.plus(constraints))
    }
}

/// The first pair of elements with a non-empty intersection, if any.
fn find_overlap(regions: &[Constraints]) -> Option<OverlapError> {
    for (i, first) in regions.iter().enumerate() {
        for second in &regions[i + 1..] {
            let shared = first.intersection(second);
            if !shared.is_empty() {
                return Some(OverlapError {
                    first: *first,
                    second: *second,
                    shared,
                });
            }
        }
    }
    None
}

impl PartialEq for RegionSet {
    /// Element-wise equality, ignoring order.
    fn eq(&self, other: &Self) -> bool {
        self.regions.len() == other.regions.len()
            && self.regions.iter().all(|c| other.regions.contains(c))
    }
}

impl Eq for RegionSet {}

impl fmt::Display for RegionSet {
    /// Format as "{{...} or {...}}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, constraints) in self.regions.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "{}", constraints)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Attribute, Domain, Interval, NATTRIBUTES};

    fn all() -> Constraints {
        Constraints::match_all(Domain::default())
    }

    fn cube(more_than: i64, less_than: i64) -> Constraints {
        Constraints::new([Interval::new(more_than, less_than); NATTRIBUTES])
    }

    fn assert_disjoint(set: &RegionSet) {
        assert!(find_overlap(&set.regions).is_none(), "overlap in {}", set);
    }

    #[test]
    fn test_empty_and_of() {
        assert!(RegionSet::empty().is_empty());
        assert_eq!(RegionSet::empty().size(), 0);
        assert!(RegionSet::of(Constraints::EMPTY).is_empty());
        assert_eq!(RegionSet::of(all()).size(), 4000u64.pow(4));
    }

    #[test]
    fn test_try_new_rejects_overlap() {
        let err = RegionSet::try_new(vec![cube(0, 10), cube(5, 20)]).unwrap_err();
        assert_eq!(err.shared, cube(5, 10));
        assert!(err.to_string().starts_with("overlapping regions"));
    }

    #[test]
    fn test_try_new_accepts_disjoint_and_drops_empty() {
        let set = RegionSet::try_new(vec![cube(0, 10), Constraints::EMPTY, cube(9, 20)]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_plus_covered_contributes_nothing() {
        let set = RegionSet::of(cube(0, 20));
        let grown = set.plus(&cube(5, 10));
        assert_eq!(grown, set);
        assert_eq!(set.plus(&Constraints::EMPTY), set);
    }

    #[test]
    fn test_plus_overlapping() {
        let set = RegionSet::of(cube(0, 10)).plus(&cube(5, 15));
        assert_disjoint(&set);
        assert_eq!(set.size(), 2 * 9u64.pow(4) - 4u64.pow(4));
    }

    #[test]
    fn test_plus_into_empty() {
        assert_eq!(RegionSet::empty().plus(&cube(0, 10)), RegionSet::of(cube(0, 10)));
    }

    #[test]
    fn test_minus() {
        let set = RegionSet::try_new(vec![cube(0, 10), cube(9, 20)]).unwrap();
        let rest = set.minus(&cube(5, 15));
        assert_disjoint(&rest);
        assert_eq!(rest.size(), set.size() - 4u64.pow(4) - 5u64.pow(4));
        assert!(set.minus(&all()).is_empty());
    }

    #[test]
    fn test_intersection() {
        let set = RegionSet::try_new(vec![cube(0, 10), cube(9, 20)]).unwrap();
        let inside = set.intersection(&cube(5, 15));
        assert_eq!(inside.len(), 2);
        assert_eq!(inside.size(), 4u64.pow(4) + 5u64.pow(4));
        assert_eq!(set.intersection(&all()), set);
        assert!(set.intersection(&cube(100, 200)).is_empty());
    }

    #[test]
    fn test_union_identity() {
        let set = RegionSet::try_new(vec![cube(0, 10), cube(9, 20)]).unwrap();
        assert_eq!(set.union(&RegionSet::empty()), set);
        assert_eq!(RegionSet::empty().union(&set), set);
    }

    #[test]
    fn test_union_overlapping_sets() {
        let a = RegionSet::of(all().with(Attribute::X, Interval::new(0, 2001)));
        let b = RegionSet::of(all().with(Attribute::M, Interval::new(0, 2001)));
        let u = a.union(&b);
        assert_disjoint(&u);
        assert_eq!(u.size(), 4000u64.pow(4) - 2000u64.pow(2) * 4000u64.pow(2));
    }

    #[test]
    fn test_matches() {
        let set = RegionSet::try_new(vec![cube(0, 10), cube(19, 30)]).unwrap();
        assert!(set.matches(&Part::new([5, 5, 5, 5])));
        assert!(set.matches(&Part::new([25, 25, 25, 25])));
        assert!(!set.matches(&Part::new([15, 15, 15, 15])));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = RegionSet::try_new(vec![cube(0, 10), cube(19, 30)]).unwrap();
        let b = RegionSet::try_new(vec![cube(19, 30), cube(0, 10)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RegionSet::empty()), "{}");
        let set = RegionSet::of(cube(0, 10));
        assert_eq!(format!("{}", set), "{{0<x<10,0<m<10,0<a<10,0<s<10}}");
    }
}
