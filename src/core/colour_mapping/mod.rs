pub mod default_gradient;
pub mod gradient;

pub use default_gradient::default_gradient;
pub use gradient::{Gradient, GradientError, GradientStop, Rgb};
