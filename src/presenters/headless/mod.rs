pub mod surface;

pub use surface::{HeadlessSurface, HeadlessSurfaceFactory};
