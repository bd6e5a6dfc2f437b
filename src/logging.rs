//! Logging setup on top of `tracing-subscriber`.
//!
//! Logs go to stderr. Without `--debug` only warnings and errors are shown;
//! with it the level drops to `debug` and each launched command is echoed
//! with a timestamp. `RUST_LOG` overrides either level.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_timestamps: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_timestamps: false,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Self {
                level: Level::DEBUG,
                with_timestamps: true,
                ..Default::default()
            }
        } else {
            Self::default()
        }
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level);
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false);

    let result = if config.with_timestamps {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time())
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,traymenu={level}"))
    })
}
