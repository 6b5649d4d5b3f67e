//! Expectation helpers
//!
//! A failed expectation aborts the workload with [`BenchError::Assertion`];
//! nothing is retried or reported partially.

use std::fmt::Debug;

use shared::CommunityResponse;

use crate::error::{BenchError, BenchResult};

#[derive(Debug, Clone)]
pub struct AssertionResult {
    pub success: bool,
    pub message: String,
    pub details: Option<String>,
}

impl AssertionResult {
    pub fn success(message: String) -> Self {
        Self { success: true, message, details: None }
    }

    pub fn failure(message: String, details: Option<String>) -> Self {
        Self { success: false, message, details }
    }

    /// Turn a failed result into an error, logging it either way
    pub fn into_result(self) -> BenchResult<()> {
        if self.success {
            tracing::debug!("✅ {}", self.message);
            return Ok(());
        }

        let message = match self.details {
            Some(details) => format!("{} ({})", self.message, details),
            None => self.message,
        };
        tracing::error!("❌ {}", message);
        Err(BenchError::assertion(message))
    }
}

pub fn expect_eq<T: PartialEq + Debug>(what: &str, actual: T, expected: T) -> BenchResult<()> {
    if actual == expected {
        AssertionResult::success(format!("{} is {:?}", what, expected)).into_result()
    } else {
        AssertionResult::failure(
            format!("{} mismatch", what),
            Some(format!("expected {:?}, got {:?}", expected, actual)),
        )
        .into_result()
    }
}

pub fn expect_at_least(what: &str, actual: usize, minimum: usize) -> BenchResult<()> {
    if actual >= minimum {
        AssertionResult::success(format!("{}: {} >= {}", what, actual, minimum)).into_result()
    } else {
        AssertionResult::failure(
            format!("{} below minimum", what),
            Some(format!("expected at least {}, got {}", minimum, actual)),
        )
        .into_result()
    }
}

/// The server must echo back the requested community name
pub fn expect_community_name(response: &CommunityResponse, expected: &str) -> BenchResult<()> {
    expect_eq(
        "community name",
        response.community_view.community.name.as_str(),
        expected,
    )
}
