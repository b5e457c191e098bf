#![forbid(unsafe_code)]

//! stderr logging via `tracing-subscriber`.
//!
//! `LUMEN_LOG` takes an `EnvFilter` directive (default `warn`);
//! `LUMEN_LOG_FORMAT=json` switches to one JSON object per event.

use tracing_subscriber::EnvFilter;

/// Log filter used when `LUMEN_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn from_env(val: Option<&str>) -> Self {
        match val.map(str::to_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

fn filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let directive = std::env::var("LUMEN_LOG").ok();
    let format = LogFormat::from_env(std::env::var("LUMEN_LOG_FORMAT").ok().as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true);
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
