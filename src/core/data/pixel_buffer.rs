use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use thiserror::Error;

/// Bytes per pixel: buffers are packed RGB.
pub const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} image",
        .pixel.x, .pixel.y, .size.width(), .size.height()
    )]
    PixelOutsideBounds { pixel: Point, size: ImageSize },
    #[error("image size {expected_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// A row-major RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates an all-black buffer.
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            buffer: vec![0; image_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: ImageSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = image_size_to_buffer_size(size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Every pixel's colour in row-major order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|pixel| Colour {
                r: pixel[0],
                g: pixel[1],
                b: pixel[2],
            })
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.size.contains(i64::from(pixel.x), i64::from(pixel.y)) {
            return None;
        }

        Some((pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel).map(|index| Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
