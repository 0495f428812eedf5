//! Error types for expression parsing and matching

use thiserror::Error;

/// Errors raised while turning a search expression into patterns
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A comma-separated token is neither an integer nor an `integer-integer` range
    #[error("unknown pattern type '{token}' at position {position}")]
    UnrecognizedPattern {
        /// The raw token as it appeared in the expression
        token: String,
        /// Zero-based index of the token within the expression
        position: usize,
    },
}

impl MatchError {
    /// Create an unrecognized pattern error for the given token
    pub fn unrecognized(token: impl Into<String>, position: usize) -> Self {
        Self::UnrecognizedPattern {
            token: token.into(),
            position,
        }
    }

    /// The offending token
    pub fn token(&self) -> &str {
        match self {
            Self::UnrecognizedPattern { token, .. } => token,
        }
    }
}

/// Result type for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
