//! Search expression parser
//!
//! An expression is a comma-separated list of tokens. Each token is either a
//! single integer (`5`, `-4`) or an inclusive range of two integers joined by
//! `-` (`3-8`, `-10--3`). A leading `-` on a bound is its sign; the first `-`
//! after a bound's digits is the range separator. Anything else is rejected
//! with [`MatchError::UnrecognizedPattern`].

pub mod whitespace;

pub use whitespace::WhitespacePolicy;

use crate::error::{MatchError, Result};
use crate::pattern::{NumMatcher, NumMatchers, Pattern};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// Token separator within an expression
pub const TOKEN_SEPARATOR: char = ',';

/// Ordered patterns produced from one search expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedExpression {
    matchers: NumMatchers,
}

impl ParsedExpression {
    /// Parse an expression with the given whitespace policy
    pub fn parse(expression: &str, policy: WhitespacePolicy) -> Result<Self> {
        parse_expression(expression, policy)
    }

    /// Patterns in expression order
    pub fn patterns(&self) -> &[Pattern] {
        self.matchers.patterns()
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the expression holds no patterns
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterate over the patterns in expression order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns().iter()
    }

    /// Whether any pattern matches `value`
    pub fn matches(&self, value: i64) -> bool {
        self.matchers.num_match(value)
    }

    /// Count the elements of `values` matched by at least one pattern.
    ///
    /// Every occurrence counts, so duplicates are counted independently.
    pub fn count_in(&self, values: &[i64]) -> usize {
        values.iter().filter(|&&v| self.matches(v)).count()
    }
}

impl NumMatcher for ParsedExpression {
    fn num_match(&self, value: i64) -> bool {
        self.matches(value)
    }
}

impl FromStr for ParsedExpression {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s, WhitespacePolicy::default())
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matchers, f)
    }
}

impl<'a> IntoIterator for &'a ParsedExpression {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse a comma-separated search expression into patterns.
///
/// Fails on the first token that is neither an integer nor a range.
pub fn parse_expression(expression: &str, policy: WhitespacePolicy) -> Result<ParsedExpression> {
    let patterns = expression
        .split(TOKEN_SEPARATOR)
        .enumerate()
        .map(|(position, token)| parse_token(token, position, policy))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        patterns = patterns.len(),
        ?policy,
        "parsed search expression"
    );

    Ok(ParsedExpression {
        matchers: NumMatchers::new(patterns),
    })
}

/// Classify a single token and build its pattern
pub fn parse_token(token: &str, position: usize, policy: WhitespacePolicy) -> Result<Pattern> {
    let unrecognized = || MatchError::unrecognized(token, position);

    if let Some(caps) = policy.range_regex().captures(token) {
        let from = parse_bound(&caps[1]).ok_or_else(unrecognized)?;
        let to = parse_bound(&caps[2]).ok_or_else(unrecognized)?;
        let pattern = Pattern::range(from, to);
        if pattern.is_empty() {
            warn!(token, position, "range lower bound exceeds upper bound, it matches nothing");
        }
        trace!(token, position, %pattern, "range token");
        return Ok(pattern);
    }

    if let Some(caps) = policy.exact_regex().captures(token) {
        let value = parse_bound(&caps[1]).ok_or_else(unrecognized)?;
        trace!(token, position, value, "exact value token");
        return Ok(Pattern::exact(value));
    }

    Err(unrecognized())
}

/// Out-of-range integers yield `None`
fn parse_bound(digits: &str) -> Option<i64> {
    digits.parse::<i64>().ok()
}
