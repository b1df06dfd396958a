use crate::core::data::complex::Complex;
use std::f64::consts::LN_2;

/// Iteration cap; points still bounded after this many steps are in the set.
pub const MAX_ITERATIONS: u32 = 256;
/// Escape radius.
pub const MAX_MAGNITUDE: f64 = 65536.0;

const MAX_MAGNITUDE_SQUARED: f64 = MAX_MAGNITUDE * MAX_MAGNITUDE;

/// Iterates `z = z² + c` from `z` until `|z|` exceeds [`MAX_MAGNITUDE`] or
/// [`MAX_ITERATIONS`] is reached.
///
/// Non-escaping points return exactly `MAX_ITERATIONS`; escaping points
/// return the continuous iteration count from [`smooth_iterations`].
#[must_use]
pub fn escape_time(mut z: Complex, c: Complex) -> f64 {
    let mut iterations = 0;

    while z.magnitude_squared() <= MAX_MAGNITUDE_SQUARED && iterations < MAX_ITERATIONS {
        z = z * z + c;
        iterations += 1;
    }

    if iterations == MAX_ITERATIONS {
        return f64::from(MAX_ITERATIONS);
    }

    smooth_iterations(iterations, z.magnitude())
}

/// Continuous renormalisation of an integer escape count, removes colour banding.
#[must_use]
pub fn smooth_iterations(iterations: u32, magnitude: f64) -> f64 {
    f64::from(iterations) + 1.0 - (magnitude.ln() / 2.0 / LN_2).ln() / LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_orbit_returns_max_iterations() {
        assert_eq!(escape_time(Complex::ZERO, Complex::ZERO), 256.0);
        assert_eq!(escape_time(Complex::ZERO, Complex::new(-1.0, 0.0)), 256.0);
    }

    #[test]
    fn test_start_outside_radius_escapes_without_iterating() {
        let z = Complex::new(MAX_MAGNITUDE * 2.0, 0.0);
        let expected = smooth_iterations(0, z.magnitude());

        assert_eq!(escape_time(z, Complex::ZERO), expected);
    }

    #[test]
    fn test_boundary_magnitude_is_still_iterated() {
        // |z| == MAX_MAGNITUDE keeps iterating, one step later it escapes
        let z = Complex::new(MAX_MAGNITUDE, 0.0);
        let expected = smooth_iterations(1, (z * z).magnitude());

        assert_eq!(escape_time(z, Complex::ZERO), expected);
    }

    #[test]
    fn test_smooth_iterations_uses_natural_log() {
        // ln(2^16) / 2 / ln(2) = 8, and ln(8) / ln(2) = 3
        let magnitude = 2f64.powi(16);
        let smoothed = smooth_iterations(10, magnitude);

        assert!((smoothed - 8.0).abs() < 1e-12, "got {smoothed}");
    }

    #[test]
    fn test_smoothing_is_continuous_at_escape_radius() {
        let low = smooth_iterations(5, MAX_MAGNITUDE * MAX_MAGNITUDE);
        let high = smooth_iterations(4, MAX_MAGNITUDE);

        assert!((low - high).abs() < 1e-12, "{low} vs {high}");
    }
}
