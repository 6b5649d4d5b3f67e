//! Benchmark Runner
//!
//! Connects to the alpha and beta instances, establishes the benchmark
//! accounts and runs one named scenario under a timeout.

use clap::Parser;
use std::time::Duration;
use tokio::time::timeout;

use loadbench::{BenchConfig, BenchContext, BenchResult, TestScenarios};
use shared::logging;

#[derive(Parser)]
#[command(name = "loadbench")]
#[command(about = "Load benchmark for federated Lemmy instances")]
struct Args {
    /// Scenario to run
    #[arg(long, default_value = "all")]
    scenario: String,

    /// Tag appended to created names and the casual account
    #[arg(long)]
    tag: Option<String>,

    /// Alpha instance URL
    #[arg(long)]
    alpha_url: Option<String>,

    /// Beta instance URL
    #[arg(long)]
    beta_url: Option<String>,

    /// Alpha's host as beta resolves it
    #[arg(long)]
    alpha_host: Option<String>,

    /// Scenario timeout in seconds
    #[arg(long, default_value = "600")]
    timeout_secs: u64,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> (String, BenchConfig) {
        let mut builder = BenchConfig::builder_from_env()
            .max_duration(Duration::from_secs(self.timeout_secs))
            .log_level(if self.verbose { "debug" } else { "info" });

        if let Some(tag) = self.tag {
            builder = builder.tag(tag);
        }
        if let Some(url) = self.alpha_url {
            builder = builder.alpha_url(url);
        }
        if let Some(url) = self.beta_url {
            builder = builder.beta_url(url);
        }
        if let Some(host) = self.alpha_host {
            builder = builder.alpha_host(host);
        }

        (self.scenario, builder.build())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (scenario, config) = Args::parse().into_config();

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(&format!("benchmark scenario '{}' with tag '{}'", scenario, config.tag));

    let result = timeout(config.max_duration, run(&scenario, &config)).await;

    match result {
        Ok(Ok(())) => {
            tracing::info!("✅ Scenario '{}' completed successfully", scenario);
            Ok(())
        }
        Ok(Err(e)) => {
            logging::log_error(&format!("Scenario '{}'", scenario), &e);
            Err(e.into())
        }
        Err(_) => {
            tracing::error!(
                "⏰ Scenario '{}' timed out after {}s",
                scenario,
                config.max_duration.as_secs()
            );
            Err("Benchmark timeout".into())
        }
    }
}

async fn run(scenario: &str, config: &BenchConfig) -> BenchResult<()> {
    let ctx = BenchContext::connect(config).await?;
    let scenarios = TestScenarios::new(ctx, config.tag.clone());
    scenarios.run_scenario(scenario).await
}
