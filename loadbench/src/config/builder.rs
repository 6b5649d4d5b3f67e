//! Benchmark Configuration Builder
//!
//! Provides a flexible builder pattern for constructing benchmark configurations

use super::BenchConfig;
use std::time::Duration;

pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn new() -> Self {
        Self { config: BenchConfig::default() }
    }

    /// Start from an existing configuration, e.g. one read from the environment
    pub fn from_config(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Set the alpha instance URL
    pub fn alpha_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.alpha_url = url.into();
        self
    }

    /// Set the beta instance URL
    pub fn beta_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.beta_url = url.into();
        self
    }

    /// Set alpha's host as seen from beta
    pub fn alpha_host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.alpha_host = host.into();
        self
    }

    /// Set the admin accounts of both instances
    pub fn admins<A: Into<String>, B: Into<String>>(mut self, alpha_user: A, beta_user: B) -> Self {
        self.config.alpha_user = alpha_user.into();
        self.config.beta_user = beta_user.into();
        self
    }

    pub fn password<S: Into<String>>(mut self, password: S) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the run tag
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.tag = tag.into();
        self
    }

    /// Set log level (trace, debug, info, warn, error)
    pub fn log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Set maximum duration to wait for completion
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.config.max_duration = duration;
        self
    }

    /// Build the configuration
    pub fn build(self) -> BenchConfig {
        self.config
    }
}

impl Default for BenchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
