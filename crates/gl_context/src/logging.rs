//! Logging setup

pub use log::{debug, error, info, trace, warn};

/// Initialize `env_logger`, falling back to `default_level` when `RUST_LOG` is unset
///
/// Calling this more than once keeps the first logger.
pub fn init(default_level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
