//! Test Scenarios
//!
//! Named workloads runnable from the command line

pub mod nested;
pub mod series;

use std::time::Duration;

use shared::logging;

use crate::error::{BenchError, BenchResult};
use crate::runtime::BenchContext;

pub use nested::{NestedStats, ReplyCursor, nested_comments_on_most_recent_posts};
pub use series::{SERIES_ROUNDS, loop_action_set_a};

pub struct TestScenarios {
    ctx: BenchContext,
    tag: String,
}

impl TestScenarios {
    pub fn new(ctx: BenchContext, tag: impl Into<String>) -> Self {
        Self { ctx, tag: tag.into() }
    }

    /// Run a specific scenario by name
    pub async fn run_scenario(&self, name: &str) -> BenchResult<()> {
        match name {
            // Sessions are established before any scenario runs
            "setup" => {
                logging::log_success("Benchmark accounts ready");
                Ok(())
            }

            "series_local" => self.series(true).await.map(|_| ()),
            "series_federated" => self.series(false).await.map(|_| ()),
            "nested" => self.nested().await.map(|_| ()),

            "all" => {
                tracing::info!("🧪 Running full benchmark");
                let local = self.series(true).await?;
                let federated = self.series(false).await?;
                self.nested().await?;
                tracing::info!(
                    "🏆 Benchmark complete: local {:.3}s, federated {:.3}s",
                    local.as_secs_f64(),
                    federated.as_secs_f64()
                );
                Ok(())
            }

            _ => Err(BenchError::Config(shared::SharedError::InvalidConfig {
                field: "scenario".to_string(),
                value: format!("{} (available: {})", name, Self::available_scenarios().join(", ")),
            })),
        }
    }

    async fn series(&self, local_only: bool) -> BenchResult<Duration> {
        tracing::info!("🧪 Series: local_only={} tag={}", local_only, self.tag);
        loop_action_set_a(&self.ctx, &self.ctx.alpha, local_only, &self.tag).await
    }

    async fn nested(&self) -> BenchResult<NestedStats> {
        tracing::info!("🧪 Nested comments on most recent posts");
        let stats = nested_comments_on_most_recent_posts(&self.ctx.alpha).await?;
        logging::log_success(&format!(
            "Nested: {} replies over {} posts",
            stats.replies_created, stats.posts_visited
        ));
        Ok(stats)
    }

    /// Get list of available scenarios
    pub fn available_scenarios() -> Vec<&'static str> {
        vec!["setup", "series_local", "series_federated", "nested", "all"]
    }
}
