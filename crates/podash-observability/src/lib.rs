//! Podash Observability Module
//!
//! Sets up `tracing` output for the engine and the CLI:
//! - Console logging to stderr, compact or JSON
//! - Optional daily rolling JSON log file in `LOG_DIR`
//!
//! File output can be disabled at compile time by turning off the default
//! `file-logging` feature; `LOG_DIR` is then ignored.
//!
//! # Examples
//!
//! ```no_run
//! use podash_config::LoggingConfig;
//! use podash_observability::init_logging;
//!
//! let _guard = init_logging(&LoggingConfig::from_env());
//! // ... application code; keep the guard alive until exit ...
//! ```

use podash_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Flushes buffered file logs when dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Default filter: workspace crates at the configured level, everything else at warn.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,podash={level},podash_cli={level},podash_core={level}"
    ))
}

/// Initialize logging from configuration.
///
/// `RUST_LOG`, when set, overrides the level from [`LoggingConfig`]. Calling this
/// twice leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> LoggingGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level));

    let (file_layer, _guard) = file_layer(config);

    let registry = tracing_subscriber::registry().with(file_layer).with(env_filter);

    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("⚠️  Logging already initialized: {e}");
    }

    LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file: _guard,
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[cfg(feature = "file-logging")]
fn file_layer(
    config: &LoggingConfig,
) -> (
    Option<BoxedLayer>,
    Option<tracing_appender::non_blocking::WorkerGuard>,
) {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let Some(dir) = config.log_dir.as_ref() else {
        return (None, None);
    };

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "⚠️  Failed to create log directory {}: {e}. Continuing with console logging only...",
            dir.display()
        );
        return (None, None);
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, dir, "podash.json");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(true)
        .boxed();

    (Some(layer), Some(guard))
}

#[cfg(not(feature = "file-logging"))]
fn file_layer(_config: &LoggingConfig) -> (Option<BoxedLayer>, Option<()>) {
    (None, None)
}
