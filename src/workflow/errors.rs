// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for workflow parsing and traversal.

use crate::region::Attribute;
use thiserror::Error;

/// The workflow graph is inconsistent or could not be walked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Two workflows share a label.
    #[error("workflow `{label}` is defined twice")]
    DuplicateLabel { label: String },

    /// A rule, default or root refers to a label with no workflow.
    #[error("unknown workflow `{label}`{}", referenced_from(.referenced_by))]
    UnknownLabel {
        label: String,
        referenced_by: Option<String>,
    },

    /// A walk visited more workflows than exist, so the graph has a cycle.
    #[error("workflow `{label}` reached after {hops} hops; the rules contain a cycle")]
    CycleDetected { label: String, hops: usize },
}

fn referenced_from(referenced_by: &Option<String>) -> String {
    match referenced_by {
        Some(label) => format!(" (referenced from `{}`)", label),
        None => String::new(),
    }
}

/// The input text could not be parsed. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No blank line separates the workflows from the parts.
    #[error("missing blank line between workflows and parts")]
    MissingSeparator,

    #[error("no workflows before the blank line")]
    NoWorkflows,

    #[error("line {line}: malformed workflow `{text}`")]
    MalformedWorkflow { line: usize, text: String },

    #[error("line {line}: malformed rule `{text}`")]
    MalformedRule { line: usize, text: String },

    #[error("line {line}: malformed part `{text}`")]
    MalformedPart { line: usize, text: String },

    #[error("line {line}: attribute `{attribute}` given more than once")]
    DuplicateAttribute { line: usize, attribute: Attribute },

    #[error("line {line}: attribute `{attribute}` missing")]
    MissingAttribute { line: usize, attribute: Attribute },

    #[error("line {line}: value `{text}` out of range")]
    ValueOutOfRange { line: usize, text: String },

    #[error(transparent)]
    Graph(#[from] WorkflowError),

    #[error("invalid input pattern: {0}")]
    Pattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_message() {
        let err = WorkflowError::UnknownLabel {
            label: String::from("zz"),
            referenced_by: Some(String::from("px")),
        };
        assert_eq!(err.to_string(), "unknown workflow `zz` (referenced from `px`)");

        let err = WorkflowError::UnknownLabel {
            label: String::from("in"),
            referenced_by: None,
        };
        assert_eq!(err.to_string(), "unknown workflow `in`");
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::MissingAttribute {
            line: 14,
            attribute: Attribute::S,
        };
        assert_eq!(err.to_string(), "line 14: attribute `s` missing");
    }
}
