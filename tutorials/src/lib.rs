//! Shared startup for the tutorial programs

use std::path::Path;

use gl_context::prelude::*;

/// Start from `preset`, replacing it with the config file named by the first argument if any
pub fn load_config(preset: TutorialConfig) -> Result<TutorialConfig, ConfigError> {
    match std::env::args_os().nth(1) {
        Some(path) => config_from_file(Path::new(&path)),
        None => Ok(preset),
    }
}

fn config_from_file(path: &Path) -> Result<TutorialConfig, ConfigError> {
    log::info!("Loading configuration from {}", path.display());
    TutorialConfig::load_from_file(path)
}

/// Initialize logging, resolve the configuration and run the tutorial
///
/// Returns the process exit code.
pub fn start(name: &str, preset: TutorialConfig) -> std::process::ExitCode {
    gl_context::logging::init(log::LevelFilter::Info);
    log::info!("Starting {name}");

    let result = load_config(preset)
        .map_err(TutorialError::from)
        .and_then(|config| gl_context::run(&config));

    match result {
        Ok(()) => {
            log::info!("{name} finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{name} failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
