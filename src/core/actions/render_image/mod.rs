pub mod ports;
pub mod render_image;

pub use render_image::{RenderError, Renderer, render_image, render_image_serial};
