use crate::core::data::complex::Complex;
use crate::core::data::image_size::{ImageSize, ImageSizeError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::Fractal;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 700;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.75, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.3;

pub const JULIA_CENTER: Complex = Complex::ZERO;
pub const JULIA_ZOOM: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum SessionConfigError {
    #[error(transparent)]
    Size(#[from] ImageSizeError),
    #[error("zoom must be a positive finite number, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("center must be finite, got {}+{}i", .center.real, .center.imag)]
    InvalidCenter { center: Complex },
}

/// Initial parameters of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub center: Complex,
    pub zoom: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: Fractal::Mandelbrot.display_name(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl SessionConfig {
    /// Config for a Julia session spawned from a view of `size`.
    #[must_use]
    pub fn julia(seed: Complex, size: ImageSize) -> Self {
        Self {
            title: Fractal::julia(seed).display_name(),
            width: size.width(),
            height: size.height(),
            center: JULIA_CENTER,
            zoom: JULIA_ZOOM,
        }
    }

    pub fn validate(&self) -> Result<(ImageSize, Viewport), SessionConfigError> {
        let size = ImageSize::new(self.width, self.height)?;

        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(SessionConfigError::InvalidZoom { zoom: self.zoom });
        }

        if !self.center.real.is_finite() || !self.center.imag.is_finite() {
            return Err(SessionConfigError::InvalidCenter {
                center: self.center,
            });
        }

        Ok((size, Viewport::new(self.center, self.zoom)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_the_launch_view() {
        let config = SessionConfig::default();
        let (size, viewport) = config.validate().unwrap();

        assert_eq!(config.title, "Mandelbrot");
        assert_eq!((size.width(), size.height()), (800, 700));
        assert_eq!(viewport, Viewport::new(Complex::new(-0.75, 0.0), 1.3));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let config = SessionConfig {
            width: 0,
            ..SessionConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SessionConfigError::Size(ImageSizeError::InvalidSize {
                width: 0,
                height: 700
            }))
        );
    }

    #[test]
    fn test_bad_zoom_is_rejected() {
        for zoom in [0.0, -1.0, f64::INFINITY] {
            let config = SessionConfig {
                zoom,
                ..SessionConfig::default()
            };

            assert_eq!(config.validate(), Err(SessionConfigError::InvalidZoom { zoom }));
        }
    }

    #[test]
    fn test_nan_center_is_rejected() {
        let config = SessionConfig {
            center: Complex::new(f64::NAN, 0.0),
            ..SessionConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(SessionConfigError::InvalidCenter { .. })
        ));
    }

    #[test]
    fn test_julia_config_keeps_parent_size() {
        let size = ImageSize::new(640, 480).unwrap();
        let config = SessionConfig::julia(Complex::new(-0.5, 0.5), size);
        let (julia_size, viewport) = config.validate().unwrap();

        assert_eq!(config.title, "Julia (-0.5, 0.5)");
        assert_eq!(julia_size, size);
        assert_eq!(viewport, Viewport::new(Complex::ZERO, 1.0));
    }
}
