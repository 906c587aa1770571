use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Events go to stderr so stdout only ever
/// carries the report.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(false)
        .try_init()
        .ok();
}
