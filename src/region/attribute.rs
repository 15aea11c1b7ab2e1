// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Attribute type for the rated properties of a part.
//!
//! Every part carries exactly four ratings, named `x`, `m`, `a` and `s`.
//! The attribute doubles as an index into the fixed-size arrays used by
//! [`Constraints`](crate::region::Constraints) and [`Part`](crate::region::Part).

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the four rated attributes of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Attribute {
    X,
    M,
    A,
    S,
}

/// Number of attributes tracked per part.
pub const NATTRIBUTES: usize = Attribute::COUNT;

impl Attribute {
    /// Parse the single-character attribute name used in the input text.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Attribute::X),
            'm' => Some(Attribute::M),
            'a' => Some(Attribute::A),
            's' => Some(Attribute::S),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Attribute::X => 'x',
            Attribute::M => 'm',
            Attribute::A => 'a',
            Attribute::S => 's',
        }
    }

    /// Get the attribute as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Iterate over all attributes in canonical order (x, m, a, s).
    pub fn all() -> impl Iterator<Item = Attribute> {
        Attribute::iter()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
