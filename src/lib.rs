//! Count list elements matching a search expression
//!
//! A search expression is a comma-separated list of exact values and
//! inclusive ranges, such as `3-5,7-9,12`. An element counts once if any
//! pattern matches it, no matter how many do.
//!
//! # Example
//!
//! ```
//! use matches_counter::{count_matches, MatcherBuilder, WhitespacePolicy};
//!
//! # fn example() -> anyhow::Result<()> {
//! let list = [5, 4, 3, 1, 9, 5, 9, 6, 3];
//!
//! assert_eq!(count_matches(&list, "5")?, 2);
//! assert_eq!(count_matches(&list, "3-5,7-9,12")?, 7);
//!
//! // Reject whitespace inside tokens
//! let strict = MatcherBuilder::new()
//!     .whitespace(WhitespacePolicy::Strict)
//!     .build();
//! assert!(strict.count_matches(&list, "3, 5").is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use error::{MatchError, Result};
pub use matcher::{count_matches, Matcher, MatcherBuilder, MatcherOptions};
pub use parser::{parse_expression, ParsedExpression, WhitespacePolicy};
pub use pattern::{NumMatcher, NumMatchers, Pattern};

/// Error types
pub mod error;

/// Expression counting entry points
pub mod matcher;

/// Expression parser
pub mod parser;

/// Pattern types
pub mod pattern;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
