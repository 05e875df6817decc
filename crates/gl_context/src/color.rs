//! RGBA clear colors

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Color used to clear the color buffer
///
/// Components are normalized floats. Alpha is opacity: 1.0 is solid and 0.0
/// is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl ClearColor {
    /// Opaque black, what an untouched context shows
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque dark gray
    pub const DARK_GRAY: Self = Self { r: 0.3, g: 0.3, b: 0.3, a: 1.0 };

    /// Create a color, rejecting components outside `[0, 1]`
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self, ConfigError> {
        let color = Self { r, g, b, a };
        color.validate()?;
        Ok(color)
    }

    /// Create an opaque color
    pub fn rgb(r: f32, g: f32, b: f32) -> Result<Self, ConfigError> {
        Self::new(r, g, b, 1.0)
    }

    /// Components in `[r, g, b, a]` order
    pub const fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check every component is a finite value in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in ["r", "g", "b", "a"].into_iter().zip(self.as_array()) {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "clear color component {name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dark_gray_components() {
        let [r, g, b, a] = ClearColor::DARK_GRAY.as_array();
        assert_relative_eq!(r, 0.3);
        assert_relative_eq!(g, 0.3);
        assert_relative_eq!(b, 0.3);
        assert_relative_eq!(a, 1.0);
    }

    #[test]
    fn test_rgb_is_opaque() {
        let color = ClearColor::rgb(0.1, 0.2, 0.3).unwrap();
        assert_relative_eq!(color.a, 1.0);
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(ClearColor::new(1.5, 0.0, 0.0, 1.0).is_err());
        assert!(ClearColor::new(0.0, -0.1, 0.0, 1.0).is_err());
        assert!(ClearColor::new(0.0, 0.0, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_components() {
        assert!(ClearColor::new(f32::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(ClearColor::new(0.0, 0.0, f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ClearColor::new(0.0, 1.0, 0.0, 1.0).is_ok());
        assert_eq!(ClearColor::default(), ClearColor::BLACK);
    }
}
