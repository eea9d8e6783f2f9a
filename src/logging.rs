use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter, e.g. `gitgrowth=debug`.
pub const LOG_ENV: &str = "GITGROWTH_LOG";

/// Install a stderr subscriber so stdout only carries notices and data.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
