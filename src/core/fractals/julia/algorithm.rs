use crate::core::actions::render_image::ports::fractal_function::FractalFunction;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape::escape_time;

/// `z = z² + seed` starting from the queried point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    seed: Complex,
}

impl JuliaAlgorithm {
    #[must_use]
    pub const fn new(seed: Complex) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }
}

impl FractalFunction for JuliaAlgorithm {
    fn iterations(&self, point: Complex) -> f64 {
        escape_time(point, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

    #[test]
    fn test_zero_seed_keeps_unit_disc_bounded() {
        let julia = JuliaAlgorithm::new(Complex::ZERO);

        assert_eq!(julia.iterations(Complex::new(0.5, 0.5)), 256.0);
        assert_eq!(julia.iterations(Complex::new(0.0, -0.99)), 256.0);
    }

    #[test]
    fn test_zero_seed_escapes_outside_unit_circle() {
        let julia = JuliaAlgorithm::new(Complex::ZERO);

        assert!(julia.iterations(Complex::new(1.5, 0.0)) < 256.0);
    }

    #[test]
    fn test_julia_at_origin_matches_mandelbrot_at_seed() {
        // Both iterate 0, seed, seed² + seed, ...
        let seed = Complex::new(0.4, 0.3);
        let julia = JuliaAlgorithm::new(seed);

        assert_eq!(julia.iterations(Complex::ZERO), MandelbrotAlgorithm.iterations(seed));
    }

    #[test]
    fn test_seed_accessor() {
        let seed = Complex::new(-0.7, 0.27);

        assert_eq!(JuliaAlgorithm::new(seed).seed(), seed);
    }
}
