pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::interactive::{
    DisplaySurface, DisplaySurfaceFactory, Explorer, ExplorerError, ExplorerOutcome, InputEvent,
    Key, Modifiers, Session, SessionAction, SessionConfig, SessionConfigError, SessionId,
};
pub use crate::core::actions::render_image::{
    RenderError, Renderer, render_image, render_image_serial,
};
pub use crate::core::actions::translate_pixel_buffer::translate_pixel_buffer;
pub use crate::core::colour_mapping::{Gradient, GradientError, GradientStop, Rgb, default_gradient};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_size::{ImageSize, ImageSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::{Fractal, MAX_ITERATIONS, MAX_MAGNITUDE};
pub use crate::input::cli::ExplorerArgs;
pub use crate::presenters::headless::{HeadlessSurface, HeadlessSurfaceFactory};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
