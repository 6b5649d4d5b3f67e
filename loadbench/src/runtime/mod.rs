//! Runtime Management
//!
//! This module handles the API client, account sessions and content helpers
//! that the workloads are built from.

pub mod api_client;
pub mod content;
pub mod context;
pub mod session;

// Re-export main types
pub use api_client::{LemmyApi, LemmyClient, MockLemmyApi};
pub use context::{BenchContext, CASUAL_USER_PREFIX};
pub use session::{Api, DEFAULT_PASSWORD, login_user, register_user_client};
