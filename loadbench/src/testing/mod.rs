//! Testing Framework
//!
//! Expectation helpers used by the workloads to check server responses.

pub mod assertions;

// Re-export main types
pub use assertions::{AssertionResult, expect_at_least, expect_community_name, expect_eq};
