//! Error types for antigravity.
//!
//! This module provides error types for configuration loading, GPU
//! initialization, raster output, and running the windowed animation.
//! None of these ever reach the end user as a visible fault: the runner
//! degrades to "animation absent" and logs instead.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON for a field configuration.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The adapter cannot present to this surface.
    #[error("surface reports no supported texture formats")]
    UnsupportedSurface,
}

/// Errors that can occur when writing a raster canvas to disk.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Failed to encode the image.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    /// The canvas has no pixels to write.
    #[error("canvas is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// Errors that can occur when writing to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The host refused clipboard access.
    #[error("clipboard access denied")]
    Denied,
    /// The host has no clipboard.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when running a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Failed to create event loop.
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// The configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Writing a snapshot failed.
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::Invalid {
            field: "repulsion_radius",
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for `repulsion_radius`: must be positive"
        );
    }

    #[test]
    fn test_config_error_wraps_into_simulation_error() {
        let err: SimulationError = ConfigError::Invalid {
            field: "wide_count",
            reason: "must be at least 1".into(),
        }
        .into();
        assert!(err.to_string().starts_with("config error:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
