use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Crates whose events are shown at debug level unless `RUST_LOG` says
/// otherwise.
const HEARTSYNC_CRATES: [&str; 2] = ["heartsync_shared", "heartsync_store"];

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line output for a terminal.
    Pretty,
    /// One flattened JSON object per event, for log collectors.
    Json,
}

impl LogFormat {
    /// `HEARTSYNC_LOG_FORMAT` wins when set; otherwise production runs log
    /// JSON and everything else logs pretty.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("HEARTSYNC_LOG_FORMAT").ok().as_deref(),
            std::env::var("HEARTSYNC_ENV").ok().as_deref(),
        )
    }

    fn resolve(format: Option<&str>, environment: Option<&str>) -> Self {
        match format.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ if environment == Some("production") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

fn default_directives(service_name: &str) -> String {
    let service = service_name.replace('-', "_");
    let mut directives = vec!["info".to_string()];
    directives.extend(HEARTSYNC_CRATES.iter().map(|c| format!("{c}=debug")));
    if !HEARTSYNC_CRATES.contains(&service.as_str()) {
        directives.push(format!("{service}=debug"));
    }
    directives.join(",")
}

/// Installs the global subscriber for a binary driving the store.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(service_name: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(service_name)));

    let format = LogFormat::from_env();
    let output = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(output)
        .with(env_filter)
        .try_init()?;

    tracing::info!(service = service_name, ?format, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_format_beats_environment() {
        assert_eq!(LogFormat::resolve(Some("pretty"), Some("production")), LogFormat::Pretty);
        assert_eq!(LogFormat::resolve(Some("JSON"), None), LogFormat::Json);
    }

    #[test]
    fn production_defaults_to_json() {
        assert_eq!(LogFormat::resolve(None, Some("production")), LogFormat::Json);
        assert_eq!(LogFormat::resolve(Some("xml"), Some("production")), LogFormat::Json);
        assert_eq!(LogFormat::resolve(None, Some("dev")), LogFormat::Pretty);
        assert_eq!(LogFormat::resolve(None, None), LogFormat::Pretty);
    }

    #[test]
    fn binary_is_added_to_default_directives() {
        assert_eq!(
            default_directives("heartsync-sim"),
            "info,heartsync_shared=debug,heartsync_store=debug,heartsync_sim=debug"
        );
        assert_eq!(
            default_directives("heartsync-store"),
            "info,heartsync_shared=debug,heartsync_store=debug"
        );
    }
}
