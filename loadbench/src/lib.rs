//! Lemmy Load Benchmark
//!
//! Drives two federated Lemmy instances through fixed workloads and reports
//! how long they take.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loadbench::*;
//!
//! # async fn run() -> BenchResult<()> {
//! let config = BenchConfig::from_env();
//! let ctx = BenchContext::connect(&config).await?;
//!
//! let elapsed = loop_action_set_a(&ctx, &ctx.alpha, true, &config.tag).await?;
//! println!("13 rounds took {:?}", elapsed);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod runtime;
pub mod scenarios;
pub mod testing;

// Main interfaces - re-exported at crate root for convenience
pub use config::{BenchConfig, BenchConfigBuilder};
pub use error::{BenchError, BenchResult};
pub use runtime::{Api, BenchContext, LemmyApi, LemmyClient, register_user_client};

// Workloads
pub use scenarios::nested::nested_comments_with;
pub use scenarios::series::run_series;
pub use scenarios::{
    NestedStats, ReplyCursor, SERIES_ROUNDS, TestScenarios, loop_action_set_a,
    nested_comments_on_most_recent_posts,
};
