// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solving a whole input.
//!
//! A [`Puzzle`] is the parsed workflow graph plus the parts to sort. Solving it
//! classifies each part with the linear walk, computes the accepted region
//! with the region walk, and checks that the two agree on every part.

use crate::config::Config;
use crate::errors::Error;
use crate::region::{Domain, Part, RegionSet};
use crate::workflow::{parse, ParseError, Statistics, Verdict, Walker, WorkflowError, Workflows};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Puzzle {
    workflows: Workflows,
    parts: Vec<Part>,
}

/// The answers for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Total rating of the parts the linear walk accepts.
    pub rating_total: i128,
    /// Total rating of the parts inside the accepted region.
    pub region_rating_total: i128,
    /// Number of attribute combinations in the accepted region.
    pub combinations: u64,
    pub accepted: RegionSet,
    pub statistics: Statistics,
}

impl Puzzle {
    pub fn new(workflows: Workflows, parts: Vec<Part>) -> Self {
        Self { workflows, parts }
    }

    pub fn parse(text: &str, domain: Domain) -> Result<Self, ParseError> {
        let (workflows, parts) = parse::parse_input(text, domain)?;
        info!(
            workflows = workflows.len(),
            parts = parts.len(),
            "parsed input"
        );
        Ok(Self::new(workflows, parts))
    }

    pub fn workflows(&self) -> &Workflows {
        &self.workflows
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn solve(&self, config: &Config) -> Result<Report, Error> {
        let mut walker = Walker::new(&self.workflows, &config.root);

        let verdicts = classify_all(&walker, &self.parts, config.parallel)?;
        let accepted = walker.accepted()?;
        info!(
            pieces = accepted.len(),
            combinations = accepted.size(),
            "computed accepted region"
        );
        debug!(statistics = %walker.statistics(), "region walk");

        let memberships = members(&accepted, &self.parts, config.parallel);

        let mut rating_total = 0;
        let mut region_rating_total = 0;
        for ((part, verdict), member) in self.parts.iter().zip(&verdicts).zip(&memberships) {
            debug!(part = %part, verdict = %verdict, member, "classified part");
            if verdict.is_accepted() != *member {
                return Err(Error::Disagreement {
                    part: *part,
                    verdict: *verdict,
                });
            }
            if verdict.is_accepted() {
                rating_total += part.rating();
            }
            if *member {
                region_rating_total += part.rating();
            }
        }

        Ok(Report {
            rating_total,
            region_rating_total,
            combinations: accepted.size(),
            accepted,
            statistics: walker.statistics().clone(),
        })
    }
}

#[cfg(feature = "parallel")]
fn classify_all(walker: &Walker, parts: &[Part], parallel: bool) -> Result<Vec<Verdict>, WorkflowError> {
    use rayon::prelude::*;
    if parallel {
        return parts.par_iter().map(|part| walker.classify(part)).collect();
    }
    parts.iter().map(|part| walker.classify(part)).collect()
}

#[cfg(not(feature = "parallel"))]
fn classify_all(walker: &Walker, parts: &[Part], _parallel: bool) -> Result<Vec<Verdict>, WorkflowError> {
    parts.iter().map(|part| walker.classify(part)).collect()
}

#[cfg(feature = "parallel")]
fn members(accepted: &RegionSet, parts: &[Part], parallel: bool) -> Vec<bool> {
    use rayon::prelude::*;
    if parallel {
        return parts.par_iter().map(|part| accepted.matches(part)).collect();
    }
    parts.iter().map(|part| accepted.matches(part)).collect()
}

#[cfg(not(feature = "parallel"))]
fn members(accepted: &RegionSet, parts: &[Part], _parallel: bool) -> Vec<bool> {
    parts.iter().map(|part| accepted.matches(part)).collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rating total {}", self.rating_total)?;
        writeln!(f, "Rating total {}", self.region_rating_total)?;
        write!(f, "Accepted combinations {}", self.combinations)
    }
}
