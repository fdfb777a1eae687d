//! Logging initialization using `tracing` and `tracing-subscriber`.
//!
//! Controlled by:
//! - `RUST_LOG`: log level filtering (standard tracing-subscriber behavior)
//! - `TILEJSON_LAYER_FORMAT`: output format (compact, full, pretty, json)

use std::io;
use std::str::FromStr;

use tracing::Subscriber;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::{DefaultFields, FmtSpan, Format};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _, Registry};

/// Environment variable selecting the [`LogFormat`].
pub const LOG_FORMAT_ENV: &str = "TILEJSON_LAYER_FORMAT";

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, single-line logs.
    Full,
    /// A variant of the full format, optimized for short line lengths (default).
    Compact,
    /// Multi-line logs for local development.
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            "pretty" | "verbose" => Ok(Self::Pretty),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid log format '{s}'. Valid options: full, compact, pretty, json"
            )),
        }
    }
}

/// Installs the global tracing subscriber, and bridges `log` records into it.
///
/// Logs go to stderr, so that stdout only carries the command output.
pub fn init_tracing(filter: &str, format: Option<String>) {
    if let Err(e) = tracing_log::LogTracer::builder()
        .with_interest_cache(tracing_log::InterestCacheConfig::default())
        .init()
    {
        eprintln!("Warning: unable to bridge log records into tracing: {e}");
    }

    let env_filter = EnvFilter::from_str(filter).unwrap_or_else(|_| {
        eprintln!("Warning: Invalid filter string '{filter}', falling back to debug");
        EnvFilter::new("debug")
    });

    let format = format
        .and_then(|s| {
            s.parse::<LogFormat>()
                .map_err(|e| eprintln!("Warning: {e}"))
                .ok()
        })
        .unwrap_or_default();

    let layer = stderr_layer();
    match format {
        LogFormat::Full => Registry::default().with(layer.with_filter(env_filter)).init(),
        LogFormat::Compact => Registry::default()
            .with(layer.compact().with_filter(env_filter))
            .init(),
        LogFormat::Pretty => Registry::default()
            .with(layer.pretty().with_filter(env_filter))
            .init(),
        LogFormat::Json => Registry::default()
            .with(layer.json().with_filter(env_filter))
            .init(),
    }
}

/// Formatting layer writing to stderr, so stdout only carries command output.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_span_events(FmtSpan::NONE)
}

/// Builds the log filter, applying the level given for this crate to the core crate too.
///
/// `RUST_LOG=tilejson_layer=debug` would otherwise leave the parser itself silent.
#[must_use]
pub fn ensure_core_log_level_matches(env_filter: Option<String>, replacement: &str) -> String {
    let Some(rust_log) = env_filter else {
        return format!("{replacement}info,tilejson_layer_core=info");
    };
    if !rust_log.contains(replacement) || rust_log.contains("tilejson_layer_core=") {
        return rust_log;
    }
    match rust_log
        .split(',')
        .find_map(|s| s.strip_prefix(replacement))
    {
        Some(level) => format!("{rust_log},tilejson_layer_core={level}"),
        None => rust_log,
    }
}
