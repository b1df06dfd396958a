//! Window surfaces backed by a winit window and a pixels framebuffer.

pub mod factory;
pub mod surface;

pub use factory::{PixelsSurfaceError, PixelsSurfaceFactory};
pub use surface::PixelsSurface;
