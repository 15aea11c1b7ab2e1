// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region algebra over the part attribute space.
//!
//! This module contains immutable value types, leaf to root:
//! - Attribute: One of the four rated properties (x, m, a, s)
//! - Interval: Open integer range with a canonical empty value
//! - Constraints: One interval per attribute (a hyper-rectangle)
//! - RegionSet: Disjoint union of constraint vectors
//! - Part: A concrete value per attribute, tested for membership

pub mod attribute;
pub mod constraints;
pub mod errors;
pub mod interval;
pub mod part;
pub mod region_set;

// Re-export for convenience
pub use attribute::{Attribute, NATTRIBUTES};
pub use constraints::{Constraints, Domain};
pub use errors::{DomainError, OverlapError};
pub use interval::Interval;
pub use part::Part;
pub use region_set::RegionSet;
