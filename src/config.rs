// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! The command line fills in a [`Config`]; library callers can build one
//! directly or start from [`Config::default`].

use crate::region::Domain;

/// Label of the workflow every part starts in.
pub const DEFAULT_ROOT: &str = "in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label of the first workflow.
    pub root: String,
    /// Legal values of every attribute.
    pub domain: Domain,
    /// Classify parts on the rayon thread pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Config {
    pub fn with_root(mut self, root: &str) -> Self {
        self.root = root.to_string();
        self
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            domain: Domain::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}
