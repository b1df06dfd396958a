use crate::core::data::complex::Complex;

/// Zoom multiplier applied when zooming in.
pub const ZOOM_IN_FACTOR: f64 = 1.25;
/// Zoom multiplier applied when zooming out.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;
/// Zoom limits for `zoom_in` and `zoom_out`. Past `MAX_ZOOM` neighbouring
/// pixels are no longer distinct in double precision.
pub const MIN_ZOOM: f64 = 1e-3;
pub const MAX_ZOOM: f64 = 1e13;

/// The visible region of the complex plane.
///
/// The horizontal span of the view is always `4 / zoom` units wide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(center: Complex, zoom: f64) -> Self {
        Self { center, zoom }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_IN_FACTOR).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom * ZOOM_OUT_FACTOR).max(MIN_ZOOM);
    }

    pub fn pan(&mut self, offset: Complex) {
        self.center = self.center + offset;
    }
}
