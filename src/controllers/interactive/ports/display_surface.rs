use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

/// Where a session's images end up.
///
/// Buffers are packed RGB, row-major, matching the session's image size.
pub trait DisplaySurface {
    fn show_image(&mut self, buffer: &PixelBuffer);

    fn close(&mut self) {}
}

/// Creates one surface per session.
pub trait DisplaySurfaceFactory {
    type Surface: DisplaySurface;
    type Error: Error + Send + Sync + 'static;

    fn create_surface(
        &mut self,
        title: &str,
        size: ImageSize,
    ) -> Result<Self::Surface, Self::Error>;
}
