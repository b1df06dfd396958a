use std::sync::Arc;

use pixels::Pixels;
use winit::window::{Window, WindowId};

use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

const RGBA_BYTES_PER_PIXEL: usize = 4;

/// One session window. The framebuffer has the session's image size and is
/// scaled onto the window surface by pixels.
pub struct PixelsSurface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl PixelsSurface {
    pub fn new(window: Arc<Window>, pixels: Pixels<'static>) -> Self {
        Self { window, pixels }
    }

    #[must_use]
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Draws the framebuffer to the window. Call on `RedrawRequested`.
    pub fn present(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl DisplaySurface for PixelsSurface {
    fn show_image(&mut self, buffer: &PixelBuffer) {
        let frame = self.pixels.frame_mut();
        let pixel_count = buffer.size().pixel_count();

        if frame.len() != pixel_count * RGBA_BYTES_PER_PIXEL {
            tracing::warn!(
                frame_len = frame.len(),
                width = buffer.size().width(),
                height = buffer.size().height(),
                "image does not match window framebuffer, skipping"
            );
            return;
        }

        for (src, dst) in buffer
            .buffer()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
        {
            dst[..BYTES_PER_PIXEL].copy_from_slice(src);
            dst[BYTES_PER_PIXEL] = u8::MAX;
        }

        self.window.request_redraw();
    }

    fn close(&mut self) {
        self.window.set_visible(false);
    }
}
