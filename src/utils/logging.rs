//! Logging setup: `log` facade with the `env_logger` backend.

use env_logger::Env;

/// Initialize the global logger. `RUST_LOG` wins over `level`.
/// Calling it more than once is harmless.
pub fn init(level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
