//! Structured Logging Configuration
//!
//! JSON output for production (`LOG_FORMAT=json`), human-readable text
//! otherwise. Log levels come from `RUST_LOG` (default: info).
//!
//! ```rust,ignore
//! use tn_common::logging::init_logging;
//!
//! fn main() {
//!     init_logging("tn-platform-server");
//!     tracing::info!(number = %number, "Activating phone number");
//! }
//! ```

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize logging for the given service.
///
/// `LOG_FORMAT=json` selects JSON output for log aggregation; anything else
/// selects ANSI text for development. `RUST_LOG` controls filtering and
/// defaults to `info`.
pub fn init_logging(_service_name: &str) {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .flatten_event(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(true),
            )
            .init();
    }
}
