// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use workflow_regions::region::Domain;
use workflow_regions::Puzzle;

/// The worked example: eleven workflows and five parts.
pub const SAMPLE: &str = include_str!("../../data/sample.txt");

/// Accepted combinations over 1..=4000 for the sample workflows.
pub const SAMPLE_COMBINATIONS: u64 = 167_409_079_868_000;

/// Total rating of the three accepted sample parts.
pub const SAMPLE_RATING_TOTAL: i128 = 19_114;

pub fn sample_puzzle() -> Puzzle {
    Puzzle::parse(SAMPLE, Domain::default()).expect("sample input parses")
}
