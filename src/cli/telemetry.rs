use anyhow::Result;
use std::env::var;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Output format for the fmt layer, picked from `PAYGATE_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

fn log_format(value: Option<&str>) -> LogFormat {
    match value.map(str::trim) {
        Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// Initialize logging
///
/// # Errors
///
/// Returns an error if the filter directives or the global subscriber cannot be set
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    // RUST_LOG=
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?);

    match log_format(var("PAYGATE_LOG_FORMAT").ok().as_deref()) {
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json().with_target(false);
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_target(false)
                .pretty();
            let subscriber = Registry::default().with(fmt_layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format() {
        assert_eq!(log_format(None), LogFormat::Pretty);
        assert_eq!(log_format(Some("json")), LogFormat::Json);
        assert_eq!(log_format(Some(" JSON ")), LogFormat::Json);
        assert_eq!(log_format(Some("pretty")), LogFormat::Pretty);
        assert_eq!(log_format(Some("xml")), LogFormat::Pretty);
    }
}
