//! Tracing setup shared by the binary and `server::run`.
//!
//! Output goes to stdout. `RUST_LOG` overrides the per-format default filter.

use std::io;
use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event, for container log collectors.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl LogFormat {
    /// Read `LOG_FORMAT`; unset or unrecognised values fall back to compact.
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    fn default_filter(self) -> &'static str {
        match self {
            LogFormat::Compact => "info,tower_http=info,axum=info",
            // repository round-trips are worth keeping in collected logs
            LogFormat::Json => "info,service=debug",
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format.default_filter()));
    let builder = fmt().with_env_filter(env_filter).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.with_target(false).compact().try_init(),
        LogFormat::Json => builder.with_target(true).json().try_init(),
    };
}

pub fn init_logging_from_env() {
    init_logging(LogFormat::from_env());
}
