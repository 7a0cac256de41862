//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive, e.g. `info` or `stockroom_inventory=debug`.
    pub filter: String,
    /// JSON lines when true, human-readable text otherwise.
    pub json: bool,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: true,
            with_target: false,
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` (filter) and `LOG_FORMAT` (`json` or `pretty`),
    /// falling back to the defaults for anything unset or unrecognised.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    fn from_vars(rust_log: Option<&str>, log_format: Option<&str>) -> Self {
        let defaults = Self::default();
        let filter = rust_log
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.filter);
        let json = match log_format.map(|f| f.trim().to_ascii_lowercase()) {
            Some(f) if f == "pretty" || f == "text" => false,
            _ => defaults.json,
        };
        Self {
            filter,
            json,
            with_target: defaults.with_target,
        }
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(TracingConfig::from_env());
}

/// Initialize tracing/logging from an explicit config.
///
/// An invalid filter directive falls back to `info`. Returns false when a
/// global subscriber was already installed.
pub fn init_with(config: TracingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
