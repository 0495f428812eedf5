//! Whitespace handling for expression tokens

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How whitespace around tokens and range separators is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespacePolicy {
    /// Ignore whitespace around a token and around a range's `-`.
    ///
    /// `"3 - 8"` and `" 5"` parse; `"1 2"` does not.
    #[default]
    Trim,
    /// Any whitespace makes the token unrecognized
    Strict,
}

static EXACT_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[0-9]+)$").expect("Invalid exact value regex"));

static EXACT_TRIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?[0-9]+)\s*$").expect("Invalid exact value regex"));

static RANGE_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[0-9]+)-(-?[0-9]+)$").expect("Invalid range regex"));

static RANGE_TRIM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?[0-9]+)\s*-\s*(-?[0-9]+)\s*$").expect("Invalid range regex")
});

impl WhitespacePolicy {
    /// Regex for a single integer token
    pub(crate) fn exact_regex(self) -> &'static Regex {
        match self {
            Self::Trim => &*EXACT_TRIM,
            Self::Strict => &*EXACT_STRICT,
        }
    }

    /// Regex for an `integer-integer` token
    pub(crate) fn range_regex(self) -> &'static Regex {
        match self {
            Self::Trim => &*RANGE_TRIM,
            Self::Strict => &*RANGE_STRICT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_trim() {
        assert_eq!(WhitespacePolicy::default(), WhitespacePolicy::Trim);
    }

    #[test]
    fn test_trim_accepts_surrounding_whitespace() {
        let policy = WhitespacePolicy::Trim;
        assert!(policy.exact_regex().is_match(" 5 "));
        assert!(policy.exact_regex().is_match("\t-5"));
        assert!(policy.range_regex().is_match("3 - 8"));
        assert!(!policy.exact_regex().is_match("1 2"));
        assert!(!policy.exact_regex().is_match("- 5"));
    }

    #[test]
    fn test_strict_rejects_whitespace() {
        let policy = WhitespacePolicy::Strict;
        assert!(policy.exact_regex().is_match("5"));
        assert!(!policy.exact_regex().is_match(" 5"));
        assert!(policy.range_regex().is_match("3-8"));
        assert!(!policy.range_regex().is_match("3 - 8"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&WhitespacePolicy::Strict).unwrap(),
            "\"strict\""
        );
        let policy: WhitespacePolicy = serde_json::from_str("\"trim\"").unwrap();
        assert_eq!(policy, WhitespacePolicy::Trim);
    }
}
