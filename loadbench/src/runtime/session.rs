//! Session handles and account bootstrap

use std::fmt;
use std::sync::Arc;

use shared::logging;
use shared::{Login, Register};

use super::api_client::LemmyApi;
use crate::error::{BenchError, BenchResult};

/// Password shared by every account the benchmark creates
pub const DEFAULT_PASSWORD: &str = "lemmylemmy";

/// A client bound to the token of one account
#[derive(Clone)]
pub struct Api {
    pub client: Arc<dyn LemmyApi>,
    pub auth: String,
}

impl Api {
    pub fn new(client: Arc<dyn LemmyApi>, auth: impl Into<String>) -> Self {
        Self { client, auth: auth.into() }
    }

    /// Handle without a token, usable as a template for bootstrap
    pub fn anonymous(client: Arc<dyn LemmyApi>) -> Self {
        Self::new(client, String::new())
    }

    /// Same client, different account
    pub fn with_auth(&self, auth: impl Into<String>) -> Self {
        Self::new(self.client.clone(), auth)
    }

    pub fn is_authenticated(&self) -> bool {
        !self.auth.is_empty()
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("instance", &self.client.base_url())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Log in as an existing account, failing if no token comes back
pub async fn login_user(api: &Api, username: &str, password: &str) -> BenchResult<Api> {
    let form = Login {
        username_or_email: username.to_string(),
        password: password.to_string(),
        totp_2fa_token: None,
    };
    let response = api.client.login(form).await?;

    match response.token() {
        Some(jwt) => Ok(api.with_auth(jwt)),
        None => Err(BenchError::NoSession { username: username.to_string() }),
    }
}

/// Obtain a session for `username`, registering the account when login fails.
///
/// A previous run may already have created the account, so login is tried
/// first. Any login failure falls through to registration; that is the only
/// recovery path in the harness.
pub async fn register_user_client(withapi: &Api, username: &str) -> BenchResult<Api> {
    register_user_client_with_password(withapi, username, DEFAULT_PASSWORD).await
}

pub async fn register_user_client_with_password(
    withapi: &Api,
    username: &str,
    password: &str,
) -> BenchResult<Api> {
    match login_user(withapi, username, password).await {
        Ok(api) => {
            tracing::debug!("Logged in existing account '{}'", username);
            return Ok(api);
        }
        Err(e) => {
            logging::log_warning(
                "Login",
                &format!("login failed ({}), going to try creating new user for '{}'", e, username),
            );
        }
    }

    let response = withapi.client.register(Register::new(username, password)).await?;
    match response.token() {
        Some(jwt) => {
            logging::log_success(&format!("Registered account '{}'", username));
            Ok(withapi.with_auth(jwt))
        }
        None => Err(BenchError::NoSession { username: username.to_string() }),
    }
}
