use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the diagnostic filter, e.g. `HOOKLOG_LOG=debug`.
pub const LOG_FILTER_ENV: &str = "HOOKLOG_LOG";

/// Install the stderr diagnostic subscriber.
///
/// Stdout belongs to the host, so diagnostics always go to stderr. The
/// default level is `warn`: a normal run is silent.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
