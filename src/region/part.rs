// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A part to be classified: one concrete value per attribute.

use crate::region::{Attribute, NATTRIBUTES};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Part([i64; NATTRIBUTES]);

impl Part {
    /// Create a part from values indexed by [`Attribute`] (x, m, a, s).
    pub const fn new(values: [i64; NATTRIBUTES]) -> Self {
        Self(values)
    }

    pub fn get(&self, attribute: Attribute) -> i64 {
        self.0[attribute.as_usize()]
    }

    /// The sum of all attribute values, widened so that no values overflow it.
    pub fn rating(&self) -> i128 {
        self.0.iter().map(|&value| i128::from(value)).sum()
    }
}

impl fmt::Display for Part {
    /// Format as "{x=787,m=2655,a=1222,s=2876}", the input syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for attribute in Attribute::all() {
            if attribute.as_usize() > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", attribute, self.get(attribute))?;
        }
        write!(f, "}}")
    }
}
