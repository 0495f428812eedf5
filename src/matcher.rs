//! Counting list elements against a search expression

use crate::error::Result;
use crate::parser::{parse_expression, WhitespacePolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options controlling how expressions are parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Whitespace handling around tokens and range separators
    pub whitespace: WhitespacePolicy,
}

/// Counts how many values satisfy at least one pattern of an expression
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatcherOptions,
}

impl Matcher {
    /// Create a matcher with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from explicit options
    pub fn with_options(options: MatcherOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Count the elements of `values` matching any pattern of `expression`.
    ///
    /// The expression is parsed on every call. A value matched by several
    /// patterns counts once; repeated values each count.
    pub fn count_matches(&self, values: &[i64], expression: &str) -> Result<usize> {
        let parsed = parse_expression(expression, self.options.whitespace)?;
        let count = parsed.count_in(values);

        debug!(
            values = values.len(),
            patterns = parsed.len(),
            count,
            "counted matches"
        );

        Ok(count)
    }
}

/// Builder for configuring a [`Matcher`]
#[derive(Debug, Clone, Default)]
pub struct MatcherBuilder {
    /// Whitespace handling around tokens and range separators
    pub whitespace: WhitespacePolicy,
}

impl MatcherBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whitespace policy
    pub fn whitespace(mut self, policy: WhitespacePolicy) -> Self {
        self.whitespace = policy;
        self
    }

    /// Build the matcher
    pub fn build(self) -> Matcher {
        Matcher::with_options(MatcherOptions {
            whitespace: self.whitespace,
        })
    }
}

/// Count the elements of `values` matching any pattern of `expression`,
/// using default options.
///
/// ```
/// let list = [5, 4, 3, 1, 9, 5, 9, 6, 3];
/// assert_eq!(matches_counter::count_matches(&list, "3-8")?, 6);
/// # Ok::<(), matches_counter::MatchError>(())
/// ```
pub fn count_matches(values: &[i64], expression: &str) -> Result<usize> {
    Matcher::new().count_matches(values, expression)
}
