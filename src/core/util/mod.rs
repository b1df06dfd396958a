pub mod pixel_to_complex_coords;

pub use pixel_to_complex_coords::{complex_to_pixel, pixel_delta_to_complex, pixel_to_complex};
