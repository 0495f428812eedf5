//! Core trait for numeric pattern matching

use std::fmt::Debug;

/// Trait for numeric pattern matchers
pub trait NumMatcher: Debug + Send + Sync {
    /// Match a numeric value against this pattern
    fn num_match(&self, value: i64) -> bool;
}

impl<T: NumMatcher + ?Sized> NumMatcher for &T {
    fn num_match(&self, value: i64) -> bool {
        (**self).num_match(value)
    }
}

impl<T: NumMatcher + ?Sized> NumMatcher for Box<T> {
    fn num_match(&self, value: i64) -> bool {
        (**self).num_match(value)
    }
}
