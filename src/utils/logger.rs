use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (verbose, level) {
        (true, _) => EnvFilter::new("remote_blackjack=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("remote_blackjack={level}")),
        (false, None) => EnvFilter::new("remote_blackjack=info"),
    })
}

/// Logs go to stderr so the rendered table keeps stdout to itself.
pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose, None, LogFormat::Compact);
}

pub fn init_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = default_filter(verbose, level);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}
