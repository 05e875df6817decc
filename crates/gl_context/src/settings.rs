//! # Tutorial Settings
//!
//! Window and OpenGL context configuration for the tutorials. Every preset
//! reproduces the same setup:
//!
//! - **Window**: 640x480 (VGA), titled "The title of the window", not resizable
//! - **Context**: OpenGL 3.3 with the core profile, so the deprecated fixed
//!   function pipeline is unavailable
//! - **Background**: none for the empty context, dark gray otherwise
//!
//! Presets can be overridden from a TOML or RON file through [`Config`].

use glfw::{ClientApiHint, OpenGlProfileHint, WindowHint};
use serde::{Deserialize, Serialize};

use crate::color::ClearColor;
use crate::config::{Config, ConfigError};

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 640;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 480;
/// Default window title
pub const DEFAULT_TITLE: &str = "The title of the window";
/// Default OpenGL version as (major, minor)
pub const DEFAULT_GL_VERSION: (u32, u32) = (3, 3);

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given title and size
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            resizable: false,
        }
    }

    /// Allow or forbid resizing
    #[must_use]
    pub const fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// GLFW hints for the window itself
    pub fn window_hints(&self) -> Vec<WindowHint> {
        vec![WindowHint::Resizable(self.resizable)]
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("Window title cannot be empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// OpenGL profile requested from GLFW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlProfile {
    /// Modern pipeline only
    #[default]
    Core,
    /// Keeps the classic, deprecated interface available
    Compat,
    /// Let the driver decide
    Any,
}

impl From<GlProfile> for OpenGlProfileHint {
    fn from(profile: GlProfile) -> Self {
        match profile {
            GlProfile::Core => Self::Core,
            GlProfile::Compat => Self::Compat,
            GlProfile::Any => Self::Any,
        }
    }
}

/// OpenGL context configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested OpenGL version as (major, minor)
    pub version: (u32, u32),
    /// Requested OpenGL profile
    pub profile: GlProfile,
}

impl ContextConfig {
    /// Create a context configuration
    pub const fn new(major: u32, minor: u32, profile: GlProfile) -> Self {
        Self {
            version: (major, minor),
            profile,
        }
    }

    /// GLFW hints for the context, in the order they are applied
    pub fn window_hints(&self) -> Vec<WindowHint> {
        let (major, minor) = self.version;
        let mut hints = vec![
            WindowHint::ClientApi(ClientApiHint::OpenGl),
            WindowHint::ContextVersion(major, minor),
            WindowHint::OpenGlProfile(self.profile.into()),
        ];

        // macOS only hands out core contexts that are forward compatible
        if cfg!(target_os = "macos") && self.profile == GlProfile::Core {
            hints.push(WindowHint::OpenGlForwardCompat(true));
        }

        hints
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (major, minor) = self.version;
        if major == 0 {
            return Err(ConfigError::Invalid(format!(
                "OpenGL version {major}.{minor} does not exist"
            )));
        }
        if self.profile != GlProfile::Any && self.version < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "OpenGL profile {:?} requires version 3.2 or newer, got {major}.{minor}",
                self.profile
            )));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        let (major, minor) = DEFAULT_GL_VERSION;
        Self::new(major, minor, GlProfile::Core)
    }
}

/// How the main loop drains pending OS events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventMode {
    /// Process whatever is queued and return immediately
    #[default]
    Poll,
    /// Sleep until at least one event is queued
    Wait,
}

/// Complete configuration for one tutorial run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialConfig {
    /// Event draining strategy for the main loop
    pub event_mode: EventMode,
    /// Window configuration
    pub window: WindowConfig,
    /// OpenGL context configuration
    pub context: ContextConfig,
    /// Color presented once before the main loop; `None` leaves OpenGL untouched
    pub background: Option<ClearColor>,
}

impl TutorialConfig {
    /// An empty, black context
    pub fn empty_context() -> Self {
        Self {
            event_mode: EventMode::Poll,
            window: WindowConfig::default(),
            context: ContextConfig::default(),
            background: None,
        }
    }

    /// The empty context with a dark gray background
    pub fn background_color() -> Self {
        Self::empty_context().with_background(ClearColor::DARK_GRAY)
    }

    /// Set the window configuration
    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the context configuration
    #[must_use]
    pub const fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Set the background color
    #[must_use]
    pub const fn with_background(mut self, color: ClearColor) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the event mode
    #[must_use]
    pub const fn with_event_mode(mut self, event_mode: EventMode) -> Self {
        self.event_mode = event_mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.context.validate()?;
        if let Some(color) = &self.background {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self::empty_context()
    }
}

impl Config for TutorialConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_preset() {
        let config = TutorialConfig::empty_context();
        assert_eq!(config.window.title, "The title of the window");
        assert_eq!((config.window.width, config.window.height), (640, 480));
        assert!(!config.window.resizable);
        assert_eq!(config.context.version, (3, 3));
        assert_eq!(config.context.profile, GlProfile::Core);
        assert_eq!(config.background, None);
        assert_eq!(config.event_mode, EventMode::Poll);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_background_color_preset() {
        let config = TutorialConfig::background_color();
        assert_eq!(config.background, Some(ClearColor::DARK_GRAY));
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_context_hints_order() {
        let hints = ContextConfig::default().window_hints();
        assert!(matches!(hints[0], WindowHint::ClientApi(ClientApiHint::OpenGl)));
        assert!(matches!(hints[1], WindowHint::ContextVersion(3, 3)));
        assert!(matches!(hints[2], WindowHint::OpenGlProfile(OpenGlProfileHint::Core)));

        let expected_len = if cfg!(target_os = "macos") { 4 } else { 3 };
        assert_eq!(hints.len(), expected_len);
    }

    #[test]
    fn test_compat_profile_never_forward_compat() {
        let hints = ContextConfig::new(3, 3, GlProfile::Compat).window_hints();
        assert!(matches!(hints[2], WindowHint::OpenGlProfile(OpenGlProfileHint::Compat)));
        assert!(!hints.iter().any(|hint| matches!(hint, WindowHint::OpenGlForwardCompat(_))));
    }

    #[test]
    fn test_window_hints_resizable() {
        let hints = WindowConfig::default().window_hints();
        assert!(matches!(hints.as_slice(), [WindowHint::Resizable(false)]));

        let hints = WindowConfig::default().with_resizable(true).window_hints();
        assert!(matches!(hints.as_slice(), [WindowHint::Resizable(true)]));
    }

    #[test]
    fn test_invalid_window() {
        assert!(WindowConfig::new("", 640, 480).validate().is_err());
        assert!(WindowConfig::new("title", 0, 480).validate().is_err());
        assert!(WindowConfig::new("title", 640, 0).validate().is_err());
    }

    #[test]
    fn test_profile_requires_modern_version() {
        assert!(ContextConfig::new(2, 1, GlProfile::Core).validate().is_err());
        assert!(ContextConfig::new(3, 1, GlProfile::Compat).validate().is_err());
        assert!(ContextConfig::new(2, 1, GlProfile::Any).validate().is_ok());
        assert!(ContextConfig::new(3, 2, GlProfile::Core).validate().is_ok());
        assert!(ContextConfig::new(0, 5, GlProfile::Any).validate().is_err());
    }

    #[test]
    fn test_invalid_background_rejected() {
        let mut config = TutorialConfig::background_color();
        config.background = Some(ClearColor { r: 2.0, g: 0.0, b: 0.0, a: 1.0 });
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TutorialConfig = toml::from_str(
            r#"
            event_mode = "Wait"

            [window]
            title = "Custom"

            [background]
            r = 0.1
            g = 0.2
            b = 0.3
            a = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, DEFAULT_WIDTH);
        assert_eq!(config.context, ContextConfig::default());
        assert_eq!(config.event_mode, EventMode::Wait);
        assert_eq!(config.background, Some(ClearColor { r: 0.1, g: 0.2, b: 0.3, a: 1.0 }));
    }

    #[test]
    fn test_ron_overrides_profile() {
        let config: TutorialConfig =
            ron::from_str("(context: (version: (4, 1), profile: Compat))").unwrap();
        assert_eq!(config.context, ContextConfig::new(4, 1, GlProfile::Compat));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_file_round_trip_through_config_trait() {
        let path = std::env::temp_dir()
            .join(format!("gl_context_{}_tutorial.toml", std::process::id()));
        let config = TutorialConfig::background_color().with_event_mode(EventMode::Wait);

        config.save_to_file(&path).unwrap();
        let loaded = TutorialConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
