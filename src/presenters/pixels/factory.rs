use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event_loop::EventLoopWindowTarget;
use winit::window::WindowBuilder;

use crate::controllers::interactive::ports::display_surface::DisplaySurfaceFactory;
use crate::core::data::image_size::ImageSize;
use crate::presenters::pixels::surface::PixelsSurface;

#[derive(Debug, Error)]
pub enum PixelsSurfaceError {
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create framebuffer: {0}")]
    Pixels(#[from] pixels::Error),
}

/// Opens fixed-size windows on the running event loop.
pub struct PixelsSurfaceFactory<'a> {
    target: &'a EventLoopWindowTarget<()>,
}

impl<'a> PixelsSurfaceFactory<'a> {
    pub fn new(target: &'a EventLoopWindowTarget<()>) -> Self {
        Self { target }
    }
}

impl DisplaySurfaceFactory for PixelsSurfaceFactory<'_> {
    type Surface = PixelsSurface;
    type Error = PixelsSurfaceError;

    fn create_surface(
        &mut self,
        title: &str,
        size: ImageSize,
    ) -> Result<PixelsSurface, PixelsSurfaceError> {
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(PhysicalSize::new(size.width(), size.height()))
                .with_resizable(false)
                .build(self.target)?,
        );

        let inner = window.inner_size();
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, Arc::clone(&window));
        let pixels = Pixels::new(size.width(), size.height(), surface_texture)?;

        tracing::debug!(title, width = size.width(), height = size.height(), "window opened");

        Ok(PixelsSurface::new(window, pixels))
    }
}
