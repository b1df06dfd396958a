use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::Viewport;

/// Width of the complex plane visible at zoom 1.
pub const VIEW_SPAN: f64 = 4.0;

/// Converts a pixel displacement into a complex-plane displacement.
///
/// Both axes are scaled by the image width, so pixels are square in the
/// complex plane and the vertical span is `VIEW_SPAN / zoom * height / width`.
#[must_use]
pub fn pixel_delta_to_complex(size: ImageSize, zoom: f64, dx: f64, dy: f64) -> Complex {
    let width = f64::from(size.width());

    Complex {
        real: dx / width * VIEW_SPAN / zoom,
        imag: dy / width * VIEW_SPAN / zoom,
    }
}

/// Maps a pixel position to the complex point it shows.
///
/// The image centre maps exactly onto `viewport.center`.
#[must_use]
pub fn pixel_to_complex(size: ImageSize, viewport: &Viewport, x: f64, y: f64) -> Complex {
    let half_width = f64::from(size.width()) / 2.0;
    let half_height = f64::from(size.height()) / 2.0;

    pixel_delta_to_complex(size, viewport.zoom, x - half_width, y - half_height) + viewport.center
}

/// Inverse of [`pixel_to_complex`]: the pixel position showing `point`.
///
/// The result may lie outside the image.
#[must_use]
pub fn complex_to_pixel(size: ImageSize, viewport: &Viewport, point: Complex) -> PointerPosition {
    let width = f64::from(size.width());
    let height = f64::from(size.height());
    let offset = point - viewport.center;

    PointerPosition::new(
        offset.real * viewport.zoom / VIEW_SPAN * width + width / 2.0,
        offset.imag * viewport.zoom / VIEW_SPAN * width + height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> ImageSize {
        ImageSize::new(width, height).unwrap()
    }

    #[test]
    fn test_image_center_maps_to_viewport_center() {
        let origin = Viewport::new(Complex::ZERO, 1.0);
        assert_eq!(
            pixel_to_complex(size(800, 700), &origin, 400.0, 350.0),
            Complex::ZERO
        );

        let shifted = Viewport::new(Complex::new(-0.75, 0.25), 1.3);
        assert_eq!(
            pixel_to_complex(size(800, 700), &shifted, 400.0, 350.0),
            Complex::new(-0.75, 0.25)
        );
    }

    #[test]
    fn test_top_left_uses_width_for_both_axes() {
        let viewport = Viewport::new(Complex::ZERO, 1.0);
        let top_left = pixel_to_complex(size(800, 700), &viewport, 0.0, 0.0);

        assert_eq!(top_left, Complex::new(-2.0, -1.75));
    }

    #[test]
    fn test_bottom_right() {
        let viewport = Viewport::new(Complex::ZERO, 1.0);
        let bottom_right = pixel_to_complex(size(800, 700), &viewport, 800.0, 700.0);

        assert_eq!(bottom_right, Complex::new(2.0, 1.75));
    }

    #[test]
    fn test_zoom_shrinks_span() {
        let viewport = Viewport::new(Complex::new(1.0, 1.0), 2.0);
        let left_edge = pixel_to_complex(size(100, 100), &viewport, 0.0, 50.0);

        assert_eq!(left_edge, Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_pixel_delta_to_complex() {
        let delta = pixel_delta_to_complex(size(800, 700), 1.0, 200.0, -100.0);

        assert_eq!(delta, Complex::new(1.0, -0.5));
    }

    #[test]
    fn test_complex_to_pixel_inverts_mapping() {
        let viewport = Viewport::new(Complex::new(-0.75, 0.25), 1.3);
        let size = size(800, 700);

        assert_eq!(
            complex_to_pixel(size, &viewport, viewport.center),
            PointerPosition::new(400.0, 350.0)
        );

        for (x, y) in [(0.0, 0.0), (123.0, 456.0), (799.0, 699.0)] {
            let back = complex_to_pixel(size, &viewport, pixel_to_complex(size, &viewport, x, y));
            assert!((back.x - x).abs() < 1e-9 && (back.y - y).abs() < 1e-9, "({x}, {y})");
        }
    }

    #[test]
    fn test_complex_to_pixel_scales_both_axes_by_width() {
        let viewport = Viewport::new(Complex::ZERO, 1.0);

        // one unit is a quarter of the width on either axis
        let position = complex_to_pixel(size(800, 700), &viewport, Complex::new(1.0, 1.0));

        assert_eq!(position, PointerPosition::new(600.0, 550.0));
    }
}
