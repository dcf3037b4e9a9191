use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STRUCTURED_LOCALE_LOG";

/// Installs a stderr subscriber filtered by `STRUCTURED_LOCALE_LOG`
/// (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
