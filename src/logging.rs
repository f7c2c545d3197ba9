//! Logging and tracing infrastructure for the app verifier.
//!
//! Structured logging goes through the tracing crate, with either
//! human-readable or JSON output and `RUST_LOG`-style filtering.

use crate::config::LoggingConfig;
use std::sync::Once;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "info";

fn env_filter_or(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing() {
    init_text(DEFAULT_FILTER);
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    init_json(DEFAULT_FILTER);
}

/// Initialize tracing according to the `logging` section of the configuration.
///
/// `RUST_LOG` still takes precedence over `default_filter` when set.
pub fn init_from_config(config: &LoggingConfig) {
    if config.json {
        init_json(&config.default_filter);
    } else {
        init_text(&config.default_filter);
    }
}

fn init_text(default_filter: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: an embedding application may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(env_filter_or(default_filter))
            .with(fmt_layer)
            .try_init();

        info!("App verifier tracing initialized");
    });
}

fn init_json(default_filter: &str) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter_or(default_filter))
            .with(fmt_layer)
            .try_init();

        info!("App verifier tracing initialized (JSON mode)");
    });
}

/// Macro for creating spans
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Macro for logging and returning errors
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::error!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::error!(error = %e, message = $msg, "Operation failed");
        e
    }};
}
