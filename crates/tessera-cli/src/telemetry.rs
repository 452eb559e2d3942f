use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber.
///
/// `RUST_LOG` picks the level; without it only warnings are shown. `--debug`
/// overrides both and turns on debug output for every crate.
pub fn init_tracing(debug: bool) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter(debug)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}

fn env_filter(debug: bool) -> anyhow::Result<EnvFilter> {
    if debug {
        return EnvFilter::try_new("debug")
            .map_err(|e| anyhow::anyhow!("failed to create env filter: {e}"));
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("failed to create env filter: {e}"))
}
