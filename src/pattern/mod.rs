//! Pattern types for search expressions

pub mod num_matcher;
pub mod traits;

pub use num_matcher::*;
pub use traits::*;
