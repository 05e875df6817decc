//! # GL Context
//!
//! Opening an OpenGL-capable window with GLFW and clearing its background.
//!
//! A context is the canvas OpenGL draws on. OpenGL itself cannot create
//! windows or read input, so GLFW provides the window the context lives in.
//! Each tutorial follows the same linear lifecycle:
//!
//! 1. Initialize GLFW
//! 2. Configure the window hints (OpenGL version, profile, resizability)
//! 3. Create the window and make its context current
//! 4. Optionally clear the background and swap buffers
//! 5. Poll events until the window is asked to close
//! 6. Destroy the window and terminate GLFW
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_context::prelude::*;
//!
//! fn main() -> Result<(), TutorialError> {
//!     gl_context::logging::init(log::LevelFilter::Info);
//!     gl_context::run(&TutorialConfig::background_color())
//! }
//! ```

pub mod color;
pub mod config;
pub mod logging;
pub mod render;
pub mod settings;
pub mod window;

mod app;

pub use app::{run, TutorialError};

/// Common imports for tutorial programs
pub mod prelude {
    pub use crate::{
        color::ClearColor,
        config::{Config, ConfigError},
        run,
        settings::{ContextConfig, EventMode, GlProfile, TutorialConfig, WindowConfig},
        window::{Window, WindowError},
        TutorialError,
    };
}
