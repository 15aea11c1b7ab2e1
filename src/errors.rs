// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate-level error type.

use crate::region::{DomainError, OverlapError, Part};
use crate::workflow::{ParseError, Verdict, WorkflowError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The part-by-part walk and the accepted region disagree about a part.
    #[error("part {part} was {verdict} by the workflows but the accepted region disagrees")]
    Disagreement { part: Part, verdict: Verdict },
}
