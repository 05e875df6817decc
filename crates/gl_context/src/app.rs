//! Tutorial lifecycle: initialize, configure, create the context, loop, destroy

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::{self, RenderError};
use crate::settings::TutorialConfig;
use crate::window::{Window, WindowError};

/// Errors from a tutorial run
#[derive(Error, Debug)]
pub enum TutorialError {
    /// Configuration was rejected before touching GLFW
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Window or context creation failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Presenting the background failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Run one tutorial to completion
///
/// Returns once the user has closed the window. The window is destroyed and
/// GLFW terminated before this returns.
pub fn run(config: &TutorialConfig) -> Result<(), TutorialError> {
    config.validate()?;

    log::info!("Initializing GLFW");
    let mut window = Window::new(&config.window, &config.context)?;

    match config.background {
        Some(color) => render::present_background(&mut window, color)?,
        None => log::info!("No background requested, leaving the context empty"),
    }

    window.run_until_closed(config.event_mode);

    drop(window);
    log::info!("GLFW terminated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WindowConfig;

    #[test]
    fn test_invalid_config_fails_before_window_creation() {
        let config = TutorialConfig::empty_context().with_window(WindowConfig::new("", 640, 480));
        assert!(matches!(run(&config), Err(TutorialError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_error_messages_carry_source() {
        let error = TutorialError::from(RenderError::FunctionsNotLoaded("glClear"));
        assert_eq!(
            error.to_string(),
            "Render error: OpenGL function glClear could not be loaded from the current context"
        );
    }
}
