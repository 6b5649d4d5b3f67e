//! Benchmark Configuration
//!
//! Where the two federated instances live and which accounts act on them

use shared::{SharedError, SharedResult};
use std::time::Duration;

use crate::runtime::session::DEFAULT_PASSWORD;

pub const ENV_ALPHA_URL: &str = "LEMMY_ALPHA_URL";
pub const ENV_BETA_URL: &str = "LEMMY_BETA_URL";
pub const ENV_ALPHA_HOST: &str = "LEMMY_ALPHA_HOST";
pub const ENV_ALPHA_USER: &str = "LEMMY_ALPHA_USER";
pub const ENV_BETA_USER: &str = "LEMMY_BETA_USER";
pub const ENV_TAG: &str = "LEMMY_BENCH_TAG";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Instance the workloads write to
    pub alpha_url: String,
    /// Instance that resolves and follows alpha's communities
    pub beta_url: String,
    /// Host of alpha as beta addresses it in `!name@host` handles
    pub alpha_host: String,
    pub alpha_user: String,
    pub beta_user: String,
    pub password: String,
    /// Suffix that keeps names from different runs apart
    pub tag: String,
    pub log_level: String,
    pub max_duration: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            alpha_url: "http://localhost:8541".to_string(),
            beta_url: "http://localhost:8551".to_string(),
            alpha_host: "lemmy-alpha:8541".to_string(),
            alpha_user: "lemmy_alpha".to_string(),
            beta_user: "lemmy_beta".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            tag: "a".to_string(),
            log_level: "info".to_string(),
            max_duration: Duration::from_secs(600),
        }
    }
}

impl BenchConfig {
    /// Create a new builder
    pub fn builder() -> crate::config::builder::BenchConfigBuilder {
        crate::config::builder::BenchConfigBuilder::new()
    }

    /// Builder seeded from the environment
    pub fn builder_from_env() -> crate::config::builder::BenchConfigBuilder {
        crate::config::builder::BenchConfigBuilder::from_config(Self::from_env())
    }

    /// Defaults overridden by environment variables, after loading `.env`
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let fields: [(&str, &mut String); 6] = [
            (ENV_ALPHA_URL, &mut config.alpha_url),
            (ENV_BETA_URL, &mut config.beta_url),
            (ENV_ALPHA_HOST, &mut config.alpha_host),
            (ENV_ALPHA_USER, &mut config.alpha_user),
            (ENV_BETA_USER, &mut config.beta_user),
            (ENV_TAG, &mut config.tag),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *field = value.trim().to_string();
            }
        }
        config
    }

    /// Check that every required field is set
    pub fn validate(&self) -> SharedResult<()> {
        let required = [
            ("alpha_url", &self.alpha_url),
            ("beta_url", &self.beta_url),
            ("alpha_host", &self.alpha_host),
            ("alpha_user", &self.alpha_user),
            ("beta_user", &self.beta_user),
            ("tag", &self.tag),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SharedError::InvalidConfig {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        if self.tag.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
            return Err(SharedError::InvalidConfig {
                field: "tag".to_string(),
                value: self.tag.clone(),
            });
        }

        Ok(())
    }
}
