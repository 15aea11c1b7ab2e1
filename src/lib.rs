// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sorting parts through rule workflows, and finding every part that would be accepted.
//!
//! Each part has four integer ratings (`x`, `m`, `a`, `s`). A workflow tests
//! one rating at a time and routes the part to another workflow or to a
//! sink: `A` accepts, `R` rejects.
//!
//! # Architecture
//!
//! The implementation has two layers:
//!
//! ## Region algebra ([`region`])
//!
//! Immutable value types describing subsets of the attribute space:
//! - Interval - open integer range, with one canonical empty value
//! - Constraints - one interval per attribute (a hyper-rectangle)
//! - RegionSet - disjoint union of constraint vectors, closed under
//!   union, intersection and difference
//!
//! ## Workflows ([`workflow`])
//!
//! The parsed, validated rule graph and the two walks over it:
//! - Linear: follow one part to a sink
//! - Region: split the whole attribute space rule by rule, collecting every
//!   region that reaches `A`
//!
//! # Parallelization
//!
//! The graph and the accepted region are read-only once built, so parts are
//! classified and tested for membership independently on the rayon thread
//! pool (`parallel` feature).

pub mod config;
pub mod errors;
pub mod puzzle;
pub mod region;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use errors::Error;
pub use puzzle::{Puzzle, Report};
pub use region::{Constraints, Domain, Interval, Part, RegionSet};
pub use workflow::{Verdict, Walker, Workflows};
