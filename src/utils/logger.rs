use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    let directive = match (verbose, level) {
        (true, _) => "client_sheet=debug,info".to_string(),
        (false, Some(level)) => format!("client_sheet={}", level),
        (false, None) => "client_sheet=info".to_string(),
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for
/// the usage line and the path of the written sheet.
pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = default_filter(verbose, level);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // try_init: a subscriber may already be installed.
    let _ = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
    };
}
