//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for cards and JSON. `RUST_LOG`
//! wins over `-v` when set.

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
