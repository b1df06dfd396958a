use crate::core::actions::render_image::ports::fractal_function::FractalFunction;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The fractal a session renders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fractal {
    #[default]
    Mandelbrot,
    Julia { seed: Complex },
}

impl Fractal {
    #[must_use]
    pub const fn julia(seed: Complex) -> Self {
        Self::Julia { seed }
    }

    #[must_use]
    pub fn is_mandelbrot(&self) -> bool {
        matches!(self, Self::Mandelbrot)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Mandelbrot => "Mandelbrot".to_string(),
            Self::Julia { seed } => format!("Julia ({}, {})", seed.real, seed.imag),
        }
    }
}

impl FractalFunction for Fractal {
    #[inline]
    fn iterations(&self, point: Complex) -> f64 {
        match *self {
            Self::Mandelbrot => MandelbrotAlgorithm.iterations(point),
            Self::Julia { seed } => JuliaAlgorithm::new(seed).iterations(point),
        }
    }
}
