// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters describing the shape of a region walk. They are stored in the
//! [`Walker`](crate::workflow::Walker) and incremented as it descends.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Workflows entered with a non-empty region.
    WorkflowsVisited,
    /// Rules whose test split a region.
    RuleSplits,
    /// Branches that reached the accepting sink.
    AcceptedBranches,
    /// Branches that reached the rejecting sink.
    RejectedBranches,
    /// Branches cut short because their region was empty.
    PrunedBranches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    /// Format as "WorkflowsVisited=12 RuleSplits=20 ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:?}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
