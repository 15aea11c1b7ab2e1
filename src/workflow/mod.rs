// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Workflows: labelled, ordered lists of attribute tests.
//!
//! Each [`Workflow`] sends a part to the target of its first matching
//! [`Rule`], or to its default target if none match. Targets are either
//! another workflow or one of the two sinks, `A` (accept) and `R` (reject).
//! The [`Workflows`] collection is the whole graph, checked on construction
//! so that every target resolves.
//!
//! The [`walker`] module walks this graph, one part at a time or over whole
//! regions of the attribute space.

pub mod errors;
pub mod parse;
pub mod statistics;
pub mod walker;

pub use errors::{ParseError, WorkflowError};
pub use statistics::{Counters, Statistics};
pub use walker::{Verdict, Walker};

use crate::region::{Attribute, Constraints, Domain, Interval, Part};
use std::collections::BTreeMap;
use std::fmt;

/// Label of the accepting sink.
pub const ACCEPT: &str = "A";

/// Label of the rejecting sink.
pub const REJECT: &str = "R";

/// Where a rule or workflow sends a part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl Target {
    pub fn from_label(label: &str) -> Self {
        match label {
            ACCEPT => Target::Accept,
            REJECT => Target::Reject,
            _ => Target::Workflow(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Target::Accept => ACCEPT,
            Target::Reject => REJECT,
            Target::Workflow(label) => label,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    LessThan,
    GreaterThan,
}

impl Comparison {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Comparison::LessThan),
            '>' => Some(Comparison::GreaterThan),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Comparison::LessThan => '<',
            Comparison::GreaterThan => '>',
        }
    }
}

/// A single comparison such as `a<2006`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    pub attribute: Attribute,
    pub comparison: Comparison,
    pub value: i64,
}

impl Condition {
    pub fn new(attribute: Attribute, comparison: Comparison, value: i64) -> Self {
        Self {
            attribute,
            comparison,
            value,
        }
    }

    /// The constraint vector narrowing only this condition's attribute.
    ///
    /// The narrowed interval never extends past the domain, so `x<5000`
    /// over `1..=4000` matches the same values as no test at all.
    pub fn constraints(&self, domain: Domain) -> Constraints {
        let all = domain.interval();
        let interval = match self.comparison {
            Comparison::LessThan => Interval::new(all.more_than(), self.value),
            Comparison::GreaterThan => Interval::new(self.value, all.less_than()),
        };
        Constraints::match_all(domain).with(self.attribute, interval.intersection(all))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.attribute, self.comparison.to_char(), self.value)
    }
}

/// A condition and where to go when it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    condition: Condition,
    test: Constraints,
    target: Target,
}

impl Rule {
    pub fn new(condition: Condition, target: Target, domain: Domain) -> Self {
        Self {
            condition,
            test: condition.constraints(domain),
            target,
        }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// The region of the attribute space for which the condition holds.
    pub fn test(&self) -> &Constraints {
        &self.test
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn matches(&self, part: &Part) -> bool {
        self.test.matches(part)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.condition, self.target)
    }
}

/// Ordered rules plus a fallback target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    rules: Vec<Rule>,
    default_target: Target,
}

impl Workflow {
    pub fn new(rules: Vec<Rule>, default_target: Target) -> Self {
        Self {
            rules,
            default_target,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_target(&self) -> &Target {
        &self.default_target
    }

    /// The target of the first rule matching `part`, or the default.
    pub fn apply(&self, part: &Part) -> &Target {
        self.rules
            .iter()
            .find(|rule| rule.matches(part))
            .map(Rule::target)
            .unwrap_or(&self.default_target)
    }

    /// Every target this workflow can send a part to, in rule order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> + '_ {
        self.rules
            .iter()
            .map(Rule::target)
            .chain(std::iter::once(&self.default_target))
    }
}

impl fmt::Display for Workflow {
    /// Format as "a<2006:qkq,m>2090:A,rfg", the input syntax without the label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{},", rule)?;
        }
        write!(f, "{}", self.default_target)
    }
}

/// The complete workflow graph, keyed by label.
#[derive(Debug, Clone)]
pub struct Workflows {
    workflows: BTreeMap<String, Workflow>,
    domain: Domain,
}

impl Workflows {
    /// Build the graph, rejecting duplicate labels and dangling targets.
    pub fn new(
        workflows: impl IntoIterator<Item = (String, Workflow)>,
        domain: Domain,
    ) -> Result<Self, WorkflowError> {
        let mut map = BTreeMap::new();
        for (label, workflow) in workflows {
            if map.contains_key(&label) {
                return Err(WorkflowError::DuplicateLabel { label });
            }
            map.insert(label, workflow);
        }
        for (label, workflow) in &map {
            for target in workflow.targets() {
                if let Target::Workflow(next) = target {
                    if !map.contains_key(next) {
                        return Err(WorkflowError::UnknownLabel {
                            label: next.clone(),
                            referenced_by: Some(label.clone()),
                        });
                    }
                }
            }
        }
        Ok(Self {
            workflows: map,
            domain,
        })
    }

    pub fn get(&self, label: &str) -> Result<&Workflow, WorkflowError> {
        self.workflows
            .get(label)
            .ok_or_else(|| WorkflowError::UnknownLabel {
                label: label.to_string(),
                referenced_by: None,
            })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}
