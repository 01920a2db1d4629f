use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "chat_history_stats=info,warn";

/// Install the stderr log subscriber. `--verbose` forces debug output,
/// otherwise `RUST_LOG` applies.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
