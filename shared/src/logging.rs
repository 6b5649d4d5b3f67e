//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{error, info, warn};

/// Build the filter directive used for both the harness and its libraries
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("loadbench={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// `RUST_LOG` wins over the computed directive when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(log_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for recoverable problems
pub fn log_warning(context: &str, details: &str) {
    warn!(timestamp = format_timestamp(), "⚠️ {}: {}", context, details);
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}

/// Contextual logging helper for progress updates
pub fn log_progress(action: &str, details: &str) {
    info!(timestamp = format_timestamp(), "📋 {}: {}", action, details);
}

/// Report the wall-clock duration of a named workload
pub fn log_timing(workload: &str, elapsed: Duration) {
    info!(
        timestamp = format_timestamp(),
        elapsed_ms = elapsed.as_millis() as u64,
        "⏱️ {} took {:.3}s",
        workload,
        elapsed.as_secs_f64()
    );
}
