//! Diagnostic logging setup.
//!
//! Logs go to stderr so menu output on stdout stays clean. The level comes
//! from `RUST_LOG` and defaults to `warn`:
//!
//! ```bash
//! RUST_LOG=debug menu_browser list --search dosa
//! ```
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
