//! Benchmark Context
//!
//! Sessions shared by every workload of a run. Built once during setup and
//! passed explicitly to the workloads.

use std::sync::Arc;

use shared::logging;

use super::api_client::{LemmyApi, LemmyClient};
use super::session::{Api, login_user, register_user_client_with_password};
use crate::config::BenchConfig;
use crate::error::BenchResult;

/// Username prefix of the account that casts votes during the series workload
pub const CASUAL_USER_PREFIX: &str = "alpha_casual";

#[derive(Debug, Clone)]
pub struct BenchContext {
    /// Admin session on alpha
    pub alpha: Api,
    /// Admin session on beta
    pub beta: Api,
    /// Secondary alpha account that upvotes new content
    pub casual: Api,
    /// Alpha's host as beta addresses it
    pub alpha_host: String,
}

impl BenchContext {
    /// Connect to both instances and establish every session the workloads need
    pub async fn connect(config: &BenchConfig) -> BenchResult<Self> {
        config.validate()?;

        let alpha_client: Arc<dyn LemmyApi> = Arc::new(LemmyClient::new(&config.alpha_url)?);
        let beta_client: Arc<dyn LemmyApi> = Arc::new(LemmyClient::new(&config.beta_url)?);

        Self::from_clients(config, alpha_client, beta_client).await
    }

    /// Establish sessions over already constructed clients
    pub async fn from_clients(
        config: &BenchConfig,
        alpha_client: Arc<dyn LemmyApi>,
        beta_client: Arc<dyn LemmyApi>,
    ) -> BenchResult<Self> {
        logging::log_progress("Setup", &format!("logging in {} on {}", config.alpha_user, config.alpha_url));
        let alpha = login_user(&Api::anonymous(alpha_client), &config.alpha_user, &config.password).await?;

        logging::log_progress("Setup", &format!("logging in {} on {}", config.beta_user, config.beta_url));
        let beta = login_user(&Api::anonymous(beta_client), &config.beta_user, &config.password).await?;

        let casual = setup_benchmark_logins(&alpha, &config.tag, &config.password).await?;

        Ok(Self {
            alpha,
            beta,
            casual,
            alpha_host: config.alpha_host.clone(),
        })
    }

    /// Handle beta uses to find an alpha community
    pub fn federated_handle(&self, community_name: &str) -> String {
        format!("!{}@{}", community_name, self.alpha_host)
    }
}

/// Log in or register the casual voter for this run's tag
pub async fn setup_benchmark_logins(alpha: &Api, tag: &str, password: &str) -> BenchResult<Api> {
    let username = format!("{}{}", CASUAL_USER_PREFIX, tag);
    register_user_client_with_password(alpha, &username, password).await
}
