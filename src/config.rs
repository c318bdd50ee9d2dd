//! Configuration for the particle field.
//!
//! Every tunable of the animation lives in [`FieldConfig`]. It serializes to
//! JSON so the runner can load it from disk; missing fields fall back to the
//! defaults, which reproduce the site's stock look.

use crate::color::Rgba;
use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An inclusive-exclusive `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample. A degenerate range, or one whose span does not fit
    /// in an `f32`, yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min && (self.max - self.min).is_finite() {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Window settings for the native runner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Antigravity".into(),
            width: 1280,
            height: 720,
        }
    }
}

/// Complete particle field configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Particle count when the viewport is wider than `breakpoint`.
    pub wide_count: u32,
    /// Particle count at or below `breakpoint`.
    pub narrow_count: u32,
    /// Viewport width separating wide and narrow layouts.
    pub breakpoint: f32,
    /// Pairs closer than this are joined by a line.
    pub connection_threshold: f32,
    /// Pointer influence radius.
    pub repulsion_radius: f32,
    /// Scale applied to the repulsion force before it hits velocity.
    pub repulsion_damping: f32,
    /// Initial velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    pub radius: ValueRange,
    /// Per-particle alpha range; hue comes from `particle_color`.
    pub alpha: ValueRange,
    pub particle_color: Rgba,
    /// Link hue; alpha is computed per link from distance.
    pub link_color: Rgba,
    pub link_width: f32,
    /// Clear color for surfaces that own their background.
    pub background: Rgba,
    pub window: WindowConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            wide_count: 100,
            narrow_count: 50,
            breakpoint: 768.0,
            connection_threshold: 150.0,
            repulsion_radius: 200.0,
            repulsion_damping: 0.5,
            max_speed: 0.1,
            radius: ValueRange::new(1.0, 3.0),
            alpha: ValueRange::new(0.2, 0.7),
            particle_color: Rgba::TEAL,
            link_color: Rgba::TEAL,
            link_width: 0.5,
            background: Rgba::rgb(250, 250, 250),
            window: WindowConfig::default(),
        }
    }
}

impl FieldConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of particles to spawn for a viewport of the given width.
    pub fn particle_count_for_width(&self, width: f32) -> usize {
        if width > self.breakpoint {
            self.wide_count as usize
        } else {
            self.narrow_count as usize
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            }
        }
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(invalid(field, "must be a positive finite number"))
            }
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(invalid(field, "must be a non-negative finite number"))
            }
        }
        fn ordered(field: &'static str, range: &ValueRange) -> Result<(), ConfigError> {
            if range.min <= range.max && (range.max - range.min).is_finite() {
                Ok(())
            } else {
                Err(invalid(field, "min must not exceed max and the span must be finite"))
            }
        }

        if self.wide_count == 0 {
            return Err(invalid("wide_count", "must be at least 1"));
        }
        if self.narrow_count == 0 {
            return Err(invalid("narrow_count", "must be at least 1"));
        }
        non_negative("breakpoint", self.breakpoint)?;
        positive("connection_threshold", self.connection_threshold)?;
        positive("repulsion_radius", self.repulsion_radius)?;
        non_negative("repulsion_damping", self.repulsion_damping)?;
        non_negative("max_speed", self.max_speed)?;
        ordered("max_speed", &ValueRange::new(-self.max_speed, self.max_speed))?;
        ordered("radius", &self.radius)?;
        positive("radius", self.radius.min)?;
        ordered("alpha", &self.alpha)?;
        if !(ValueRange::new(0.0, 1.0).contains(self.alpha.min)
            && ValueRange::new(0.0, 1.0).contains(self.alpha.max))
        {
            return Err(invalid("alpha", "must lie within 0.0..=1.0"));
        }
        positive("link_width", self.link_width)?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults_validate() {
        FieldConfig::default().validate().expect("defaults should be valid");
    }

    #[test]
    fn test_count_by_width() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count_for_width(1024.0), 100);
        assert_eq!(config.particle_count_for_width(500.0), 50);
        // The breakpoint itself is still narrow
        assert_eq!(config.particle_count_for_width(768.0), 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FieldConfig::from_json(r#"{ "wide_count": 240 }"#).unwrap();
        assert_eq!(config.wide_count, 240);
        assert_eq!(config.narrow_count, 50);
        assert_eq!(config.connection_threshold, 150.0);
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let err = FieldConfig::from_json(r#"{ "connection_threshold": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "connection_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = FieldConfig {
            radius: ValueRange::new(3.0, 1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_alpha_above_one() {
        let config = FieldConfig {
            alpha: ValueRange::new(0.5, 1.5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "alpha", .. })
        ));
    }

    #[test]
    fn test_rejects_speed_span_overflow() {
        let err = FieldConfig::from_json(r#"{ "max_speed": 3.0e38 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_speed", .. }));
        // Largest speed whose span still fits
        assert!(FieldConfig::from_json(r#"{ "max_speed": 1.0e38 }"#).is_ok());
    }

    #[test]
    fn test_overflowing_range_samples_min() {
        let mut rng = SmallRng::seed_from_u64(1);
        let wide = ValueRange::new(-3.0e38, 3.0e38);
        assert_eq!(wide.sample(&mut rng), -3.0e38);
    }

    #[test]
    fn test_save_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.json");
        let config = FieldConfig {
            wide_count: 180,
            link_color: Rgba::rgb(20, 40, 60),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(FieldConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FieldConfig::load("/nonexistent/field.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            FieldConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_degenerate_range_samples_min() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(ValueRange::new(2.0, 2.0).sample(&mut rng), 2.0);
        for _ in 0..100 {
            let v = ValueRange::new(1.0, 3.0).sample(&mut rng);
            assert!((1.0..3.0).contains(&v));
        }
    }
}
