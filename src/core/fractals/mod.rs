pub mod escape;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;

pub use escape::{MAX_ITERATIONS, MAX_MAGNITUDE};
pub use fractal_kinds::Fractal;
