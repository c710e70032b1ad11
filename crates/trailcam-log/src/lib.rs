//! Structured logging for trailcam.
//!
//! Console output with an uptime clock and module paths, plus a JSON file
//! log in debug builds. `RUST_LOG` takes precedence over the configured
//! level.

use std::path::Path;

use trailcam_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "trailcam.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to write the JSON log file
/// * `config` - Source of the `debug.log_level` override
///
/// ```no_run
/// use trailcam_config::Config;
///
/// let config = Config::default();
/// trailcam_log::init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directive taken from `config`, falling back to [`DEFAULT_FILTER`]
/// when absent or blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_directive_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,trailcam_rig=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,trailcam_rig=trace");
    }

    #[test]
    fn test_blank_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filter_parses() {
        for directive in ["info", "warn,trailcam_rig=debug", "trace", "error"] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "failed to parse {directive}"
            );
        }
    }
}
