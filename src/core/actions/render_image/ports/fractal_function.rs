use crate::core::data::complex::Complex;

/// A pure escape-time function: complex point in, (possibly fractional)
/// iteration count out.
pub trait FractalFunction: Send + Sync {
    fn iterations(&self, point: Complex) -> f64;
}

impl<F> FractalFunction for F
where
    F: Fn(Complex) -> f64 + Send + Sync,
{
    #[inline]
    fn iterations(&self, point: Complex) -> f64 {
        self(point)
    }
}
