use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` when it is unset or invalid.
pub fn init(default_level: &str, with_ansi: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(with_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
