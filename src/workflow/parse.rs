// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parsing the textual input.
//!
//! The input is a block of workflow lines, a blank line, then a block of
//! part lines:
//!
//! ```text
//! px{a<2006:qkq,m>2090:A,rfg}
//! in{s<1351:px,qqz}
//!
//! {x=787,m=2655,a=1222,s=2876}
//! ```
//!
//! Any malformed line is an error; nothing is skipped.

use crate::region::{Attribute, Domain, Part, NATTRIBUTES};
use crate::workflow::{Comparison, Condition, ParseError, Rule, Target, Workflow, Workflows};
use regex::Regex;

struct Patterns {
    workflow: Regex,
    rule: Regex,
    label: Regex,
    part: Regex,
    rating: Regex,
}

impl Patterns {
    fn new() -> Result<Self, ParseError> {
        let compile = |pattern: &str| Regex::new(pattern).map_err(|e| ParseError::Pattern(e.to_string()));
        Ok(Self {
            // px{a<2006:qkq,m>2090:A,rfg}
            workflow: compile(r"^([a-z]+)\{(.+)\}$")?,
            // a<2006:qkq
            rule: compile(r"^([a-z])([<>])(-?[0-9]+):([A-Za-z]+)$")?,
            label: compile(r"^[A-Za-z]+$")?,
            // {x=787,m=2655,a=1222,s=2876}
            part: compile(r"^\{(.+)\}$")?,
            // x=787
            rating: compile(r"^([a-z])=(-?[0-9]+)$")?,
        })
    }
}

/// Parse the whole input into the workflow graph and the parts to classify.
pub fn parse_input(text: &str, domain: Domain) -> Result<(Workflows, Vec<Part>), ParseError> {
    let patterns = Patterns::new()?;
    let lines: Vec<&str> = text.lines().collect();
    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or(ParseError::MissingSeparator)?;

    let mut workflows = Vec::with_capacity(separator);
    for (index, line) in lines[..separator].iter().enumerate() {
        workflows.push(parse_workflow(&patterns, index + 1, line.trim(), domain)?);
    }
    let workflows = Workflows::new(workflows, domain)?;
    if workflows.is_empty() {
        return Err(ParseError::NoWorkflows);
    }

    let mut parts = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(separator + 1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parts.push(parse_part(&patterns, index + 1, line)?);
    }
    Ok((workflows, parts))
}

fn parse_workflow(
    patterns: &Patterns,
    line: usize,
    text: &str,
    domain: Domain,
) -> Result<(String, Workflow), ParseError> {
    let malformed = || ParseError::MalformedWorkflow {
        line,
        text: text.to_string(),
    };
    let captures = patterns.workflow.captures(text).ok_or_else(malformed)?;
    let label = captures[1].to_string();
    let body: Vec<&str> = captures[2].split(',').collect();
    let (default, rules) = body.split_last().ok_or_else(malformed)?;
    if !patterns.label.is_match(default) {
        return Err(malformed());
    }
    let rules = rules
        .iter()
        .map(|rule| parse_rule(patterns, line, rule, domain))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((label, Workflow::new(rules, Target::from_label(default))))
}

fn parse_rule(patterns: &Patterns, line: usize, text: &str, domain: Domain) -> Result<Rule, ParseError> {
    let malformed = || ParseError::MalformedRule {
        line,
        text: text.to_string(),
    };
    let captures = patterns.rule.captures(text).ok_or_else(malformed)?;
    let attribute = single_char(&captures[1])
        .and_then(Attribute::from_char)
        .ok_or_else(malformed)?;
    let comparison = single_char(&captures[2])
        .and_then(Comparison::from_char)
        .ok_or_else(malformed)?;
    let value = parse_value(line, &captures[3])?;
    Ok(Rule::new(
        Condition::new(attribute, comparison, value),
        Target::from_label(&captures[4]),
        domain,
    ))
}

fn parse_part(patterns: &Patterns, line: usize, text: &str) -> Result<Part, ParseError> {
    let malformed = || ParseError::MalformedPart {
        line,
        text: text.to_string(),
    };
    let captures = patterns.part.captures(text).ok_or_else(malformed)?;
    let mut values: [Option<i64>; NATTRIBUTES] = [None; NATTRIBUTES];
    for rating in captures[1].split(',') {
        let captures = patterns.rating.captures(rating).ok_or_else(malformed)?;
        let attribute = single_char(&captures[1])
            .and_then(Attribute::from_char)
            .ok_or_else(malformed)?;
        let slot = &mut values[attribute.as_usize()];
        if slot.is_some() {
            return Err(ParseError::DuplicateAttribute { line, attribute });
        }
        *slot = Some(parse_value(line, &captures[2])?);
    }
    let mut resolved = [0; NATTRIBUTES];
    for attribute in Attribute::all() {
        resolved[attribute.as_usize()] = values[attribute.as_usize()]
            .ok_or(ParseError::MissingAttribute { line, attribute })?;
    }
    Ok(Part::new(resolved))
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_value(line: usize, text: &str) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::ValueOutOfRange {
        line,
        text: text.to_string(),
    })
}
