use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: `level` for the binary, warnings only from the engine
fn default_filter(level: &str) -> String {
    format!("paramspace={level},paramspace_core=warn")
}

/// Initialize logging to stderr so plots on stdout stay clean.
///
/// The level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable, which takes precedence.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}
