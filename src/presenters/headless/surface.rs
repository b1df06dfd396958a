use std::convert::Infallible;

use crate::controllers::interactive::ports::display_surface::{
    DisplaySurface, DisplaySurfaceFactory,
};
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;

/// A surface without a window. Counts frames and keeps the latest one.
#[derive(Debug)]
pub struct HeadlessSurface {
    title: String,
    size: ImageSize,
    frames: usize,
    last_frame: Option<PixelBuffer>,
    closed: bool,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(title: impl Into<String>, size: ImageSize) -> Self {
        Self {
            title: title.into(),
            size,
            frames: 0,
            last_frame: None,
            closed: false,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&PixelBuffer> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl DisplaySurface for HeadlessSurface {
    fn show_image(&mut self, buffer: &PixelBuffer) {
        self.frames += 1;
        self.last_frame = Some(buffer.clone());

        tracing::debug!(
            title = %self.title,
            frame = self.frames,
            width = buffer.size().width(),
            height = buffer.size().height(),
            "frame shown"
        );
    }

    fn close(&mut self) {
        self.closed = true;
        self.last_frame = None;
    }
}

#[derive(Debug, Default)]
pub struct HeadlessSurfaceFactory {
    created: usize,
}

impl HeadlessSurfaceFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.created
    }
}

impl DisplaySurfaceFactory for HeadlessSurfaceFactory {
    type Surface = HeadlessSurface;
    type Error = Infallible;

    fn create_surface(
        &mut self,
        title: &str,
        size: ImageSize,
    ) -> Result<HeadlessSurface, Infallible> {
        self.created += 1;
        Ok(HeadlessSurface::new(title, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn size() -> ImageSize {
        ImageSize::new(3, 2).unwrap()
    }

    #[test]
    fn test_keeps_latest_frame_and_counts() {
        let mut surface = HeadlessSurface::new("Mandelbrot", size());
        let mut second = PixelBuffer::new(size());
        second.set_pixel(Point { x: 1, y: 1 }, Colour { r: 9, g: 8, b: 7 }).unwrap();

        surface.show_image(&PixelBuffer::new(size()));
        surface.show_image(&second);

        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.last_frame(), Some(&second));
    }

    #[test]
    fn test_close_drops_frame() {
        let mut surface = HeadlessSurface::new("Mandelbrot", size());
        surface.show_image(&PixelBuffer::new(size()));

        surface.close();

        assert!(surface.is_closed());
        assert!(surface.last_frame().is_none());
    }

    #[test]
    fn test_factory_passes_title_and_size() {
        let mut factory = HeadlessSurfaceFactory::new();

        let surface = factory.create_surface("Julia (0, 1)", size()).unwrap();

        assert_eq!(surface.title(), "Julia (0, 1)");
        assert_eq!(surface.size(), size());
        assert_eq!(factory.created(), 1);
    }
}
