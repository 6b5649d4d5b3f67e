//! Account types

use serde::{Deserialize, Serialize};
use crate::PersonId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub local: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Login {
    pub username_or_email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_2fa_token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Register {
    pub username: String,
    pub password: String,
    pub password_verify: String,
    pub show_nsfw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Register {
    /// Registration form with matching password fields and nothing optional set
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            password_verify: password.clone(),
            password,
            show_nsfw: true,
            email: None,
            captcha_uuid: None,
            captcha_answer: None,
            honeypot: None,
            answer: None,
        }
    }
}

/// Response to both login and registration.
///
/// `jwt` is absent when the instance requires email verification or
/// application approval before the account may act.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
    #[serde(default)]
    pub registration_created: bool,
    #[serde(default)]
    pub verify_email_sent: bool,
}

impl LoginResponse {
    /// The token, if one was issued and is non-empty
    pub fn token(&self) -> Option<&str> {
        self.jwt.as_deref().filter(|jwt| !jwt.is_empty())
    }
}
