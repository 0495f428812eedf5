//! Numeric pattern matching implementations

use crate::pattern::traits::NumMatcher;
use std::fmt;

/// A single term of a search expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches exactly one value
    ExactValue {
        /// The numeric value to match
        value: i64,
    },
    /// Matches every value in the closed interval `[from, to]`.
    ///
    /// `from > to` is accepted and matches nothing.
    Range {
        /// Lower bound, inclusive
        from: i64,
        /// Upper bound, inclusive
        to: i64,
    },
}

impl Pattern {
    /// Create a pattern matching a single value
    pub const fn exact(value: i64) -> Self {
        Self::ExactValue { value }
    }

    /// Create a pattern matching an inclusive range
    pub const fn range(from: i64, to: i64) -> Self {
        Self::Range { from, to }
    }

    /// Whether no value can ever match this pattern
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Range { from, to } if from > to)
    }
}

impl NumMatcher for Pattern {
    fn num_match(&self, value: i64) -> bool {
        match *self {
            Self::ExactValue { value: target } => target == value,
            Self::Range { from, to } => from <= value && value <= to,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactValue { value } => write!(f, "{}", value),
            Self::Range { from, to } => write!(f, "{}-{}", from, to),
        }
    }
}

/// Collection of numeric patterns (OR logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumMatchers {
    matchers: Vec<Pattern>,
}

impl NumMatchers {
    /// Create a new collection of numeric patterns
    pub fn new(matchers: Vec<Pattern>) -> Self {
        Self { matchers }
    }

    /// Patterns in the order they were added
    pub fn patterns(&self) -> &[Pattern] {
        &self.matchers
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the collection holds no patterns
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl NumMatcher for NumMatchers {
    fn num_match(&self, value: i64) -> bool {
        self.matchers.iter().any(|m| m.num_match(value))
    }
}

impl fmt::Display for NumMatchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}
