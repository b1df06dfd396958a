use crate::core::actions::render_image::ports::fractal_function::FractalFunction;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape::escape_time;

/// `z = z² + c` with `z₀ = 0` and `c` the queried point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MandelbrotAlgorithm;

impl FractalFunction for MandelbrotAlgorithm {
    fn iterations(&self, point: Complex) -> f64 {
        escape_time(Complex::ZERO, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape::MAX_ITERATIONS;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(
            MandelbrotAlgorithm.iterations(Complex::ZERO),
            f64::from(MAX_ITERATIONS)
        );
    }

    #[test]
    fn test_points_in_main_cardioid_never_escape() {
        for point in [Complex::new(-0.5, 0.0), Complex::new(0.25, 0.0), Complex::new(-1.0, 0.0)] {
            assert_eq!(MandelbrotAlgorithm.iterations(point), 256.0);
        }
    }

    #[test]
    fn test_far_point_escapes_quickly() {
        let iterations = MandelbrotAlgorithm.iterations(Complex::new(2.0, 2.0));

        assert!(iterations < 5.0, "got {iterations}");
    }

    #[test]
    fn test_further_points_escape_sooner() {
        let near = MandelbrotAlgorithm.iterations(Complex::new(0.4, 0.4));
        let far = MandelbrotAlgorithm.iterations(Complex::new(1.5, 1.5));

        assert!(far < near, "{far} should be below {near}");
    }
}
