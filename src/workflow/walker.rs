// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walking the workflow graph.
//!
//! Two walks are provided:
//!
//! 1. [`Walker::classify`] follows a single part from the root label to a
//!    sink, taking the first matching rule at each workflow.
//! 2. [`Walker::accepted_region`] walks a whole region at once. At each
//!    workflow it splits the current region on every rule in order: the part
//!    inside the rule's test is sent on to the rule's target, and only that
//!    test is removed from what the later rules see. Whatever is left goes to
//!    the default target. The result is the disjoint union of every region
//!    that reaches the accepting sink.
//!
//! Both walks visit at most one workflow per label on any path, so a path
//! longer than the number of workflows means the graph has a cycle.
//!
//! # Example
//!
//! ```
//! use workflow_regions::region::{Domain, Part};
//! use workflow_regions::workflow::{parse, Verdict, Walker};
//!
//! let (workflows, _) = parse::parse_input("in{x<100:A,R}\n\n", Domain::default()).unwrap();
//! let mut walker = Walker::new(&workflows, "in");
//!
//! assert_eq!(walker.classify(&Part::new([50, 1, 1, 1])).unwrap(), Verdict::Accept);
//! assert_eq!(walker.accepted().unwrap().size(), 99 * 4000u64.pow(3));
//! ```

use crate::region::{Constraints, Part, RegionSet};
use crate::workflow::{Counters, Statistics, Target, WorkflowError, Workflows};
use std::fmt;
use tracing::trace;

/// Outcome of classifying one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accept
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accept => write!(f, "accepted"),
            Verdict::Reject => write!(f, "rejected"),
        }
    }
}

/// Walks a [`Workflows`] graph from a root label.
///
/// Classification only reads the graph, so a shared `&Walker` can classify
/// parts from several threads. Region walks record [`Statistics`].
#[derive(Debug)]
pub struct Walker<'a> {
    workflows: &'a Workflows,
    root: Target,
    statistics: Statistics,
}

impl<'a> Walker<'a> {
    pub fn new(workflows: &'a Workflows, root: &str) -> Self {
        Self {
            workflows,
            root: Target::from_label(root),
            statistics: Statistics::new(),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Follow `part` from the root to a sink.
    ///
    /// A part with a value outside the domain is rejected without a walk, as
    /// the accepted region never contains it.
    pub fn classify(&self, part: &Part) -> Result<Verdict, WorkflowError> {
        if !Constraints::match_all(self.workflows.domain()).matches(part) {
            trace!(part = %part, "outside the domain");
            return Ok(Verdict::Reject);
        }
        let mut current = &self.root;
        let mut hops = 0;
        loop {
            match current {
                Target::Accept => return Ok(Verdict::Accept),
                Target::Reject => return Ok(Verdict::Reject),
                Target::Workflow(label) => {
                    let workflow = self.workflows.get(label)?;
                    hops += 1;
                    if hops > self.workflows.len() {
                        return Err(WorkflowError::CycleDetected {
                            label: label.clone(),
                            hops,
                        });
                    }
                    current = workflow.apply(part);
                }
            }
        }
    }

    /// Every point of the domain that reaches the accepting sink from the root.
    pub fn accepted(&mut self) -> Result<RegionSet, WorkflowError> {
        let all = RegionSet::of(Constraints::match_all(self.workflows.domain()));
        let root = self.root.clone();
        self.accepted_region(&root, all)
    }

    /// The part of `current` that reaches the accepting sink from `target`.
    pub fn accepted_region(
        &mut self,
        target: &Target,
        current: RegionSet,
    ) -> Result<RegionSet, WorkflowError> {
        self.walk(target, current, 0)
    }

    fn walk(
        &mut self,
        target: &Target,
        current: RegionSet,
        depth: usize,
    ) -> Result<RegionSet, WorkflowError> {
        let label = match target {
            Target::Accept => {
                self.statistics.increment_counter(Counters::AcceptedBranches);
                return Ok(current);
            }
            Target::Reject => {
                self.statistics.increment_counter(Counters::RejectedBranches);
                return Ok(RegionSet::empty());
            }
            Target::Workflow(label) => label,
        };
        let workflows = self.workflows;
        let workflow = workflows.get(label)?;
        if depth >= workflows.len() {
            return Err(WorkflowError::CycleDetected {
                label: label.clone(),
                hops: depth + 1,
            });
        }
        if current.is_empty() {
            self.statistics.increment_counter(Counters::PrunedBranches);
            return Ok(RegionSet::empty());
        }
        self.statistics.increment_counter(Counters::WorkflowsVisited);
        trace!(label = %label, depth, pieces = current.len(), "entering workflow");

        let mut accepted = RegionSet::empty();
        let mut remaining = current;
        for rule in workflow.rules() {
            let matched = remaining.intersection(rule.test());
            let reached = self.walk(rule.target(), matched, depth + 1)?;
            accepted = accepted.union(&reached);
            // Only this rule's own test is removed; earlier tests were
            // already taken out of `remaining`.
            remaining = remaining.minus(rule.test());
            self.statistics.increment_counter(Counters::RuleSplits);
        }
        let reached = self.walk(workflow.default_target(), remaining, depth + 1)?;
        Ok(accepted.union(&reached))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Attribute, Domain, Interval};
    use crate::workflow::parse::parse_input;

    fn workflows(text: &str) -> Workflows {
        let (workflows, _) = parse_input(&format!("{}\n\n", text), Domain::default()).unwrap();
        workflows
    }

    #[test]
    fn test_classify_chain() {
        let graph = workflows("in{x<100:px,R}\npx{m>10:A,R}");
        let walker = Walker::new(&graph, "in");
        assert_eq!(walker.classify(&Part::new([50, 20, 1, 1])).unwrap(), Verdict::Accept);
        assert_eq!(walker.classify(&Part::new([50, 5, 1, 1])).unwrap(), Verdict::Reject);
        assert_eq!(walker.classify(&Part::new([500, 20, 1, 1])).unwrap(), Verdict::Reject);
    }

    #[test]
    fn test_classify_unknown_root() {
        let graph = workflows("in{x<100:A,R}");
        let walker = Walker::new(&graph, "start");
        assert!(matches!(
            walker.classify(&Part::new([1, 1, 1, 1])),
            Err(WorkflowError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_sink_roots() {
        let graph = workflows("in{x<100:A,R}");
        let mut walker = Walker::new(&graph, "A");
        assert_eq!(walker.classify(&Part::new([1, 1, 1, 1])).unwrap(), Verdict::Accept);
        assert_eq!(walker.accepted().unwrap().size(), 4000u64.pow(4));

        let mut walker = Walker::new(&graph, "R");
        assert!(walker.accepted().unwrap().is_empty());
    }

    #[test]
    fn test_classify_outside_domain() {
        let graph = workflows("in{x<100:R,A}");
        let walker = Walker::new(&graph, "in");
        assert_eq!(walker.classify(&Part::new([200, 1, 1, 1])).unwrap(), Verdict::Accept);
        assert_eq!(walker.classify(&Part::new([4001, 1, 1, 1])).unwrap(), Verdict::Reject);
        assert_eq!(walker.classify(&Part::new([200, 0, 1, 1])).unwrap(), Verdict::Reject);
    }

    #[test]
    fn test_cycle_detected() {
        let graph = workflows("in{x<100:px,R}\npx{m>10:in,A}");
        let mut walker = Walker::new(&graph, "in");
        assert!(matches!(
            walker.classify(&Part::new([50, 20, 1, 1])),
            Err(WorkflowError::CycleDetected { .. })
        ));
        assert!(matches!(
            walker.accepted(),
            Err(WorkflowError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_later_rules_see_only_unmatched() {
        // Parts with x<100 never reach the second rule, so only x>=100 and m>10 count.
        let graph = workflows("in{x<100:R,m>10:A,R}");
        let mut walker = Walker::new(&graph, "in");
        let accepted = walker.accepted().unwrap();
        assert_eq!(accepted.size(), 3901 * 3990 * 4000u64.pow(2));
        assert_eq!(accepted.len(), 1);
        let region = accepted.iter().next().unwrap();
        assert_eq!(region.get(Attribute::X), Interval::new(99, 4001));
        assert_eq!(region.get(Attribute::M), Interval::new(10, 4001));
    }

    #[test]
    fn test_accepted_region_from_subregion() {
        let graph = workflows("in{x<100:A,R}");
        let mut walker = Walker::new(&graph, "in");
        let start = Constraints::match_all(Domain::default()).with(Attribute::X, Interval::new(49, 4001));
        let accepted = walker
            .accepted_region(&Target::from_label("in"), RegionSet::of(start))
            .unwrap();
        assert_eq!(accepted.size(), 50 * 4000u64.pow(3));
    }

    #[test]
    fn test_statistics_recorded() {
        let graph = workflows("in{x<100:px,R}\npx{m>10:A,R}");
        let mut walker = Walker::new(&graph, "in");
        walker.accepted().unwrap();
        let statistics = walker.statistics();
        assert_eq!(statistics.get(Counters::WorkflowsVisited), 2);
        assert_eq!(statistics.get(Counters::RuleSplits), 2);
        assert_eq!(statistics.get(Counters::AcceptedBranches), 1);
        assert_eq!(statistics.get(Counters::RejectedBranches), 2);
    }
}
