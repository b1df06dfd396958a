use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ImageSizeError {
    #[error("image size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Width and height of a rendered image, both guaranteed non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_new_valid() {
        let size = ImageSize::new(800, 700).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 700);
        assert_eq!(size.pixel_count(), 560_000);
    }

    #[test]
    fn test_image_size_rejects_zero_dimensions() {
        assert_eq!(
            ImageSize::new(0, 700),
            Err(ImageSizeError::InvalidSize { width: 0, height: 700 })
        );
        assert_eq!(
            ImageSize::new(800, 0),
            Err(ImageSizeError::InvalidSize { width: 800, height: 0 })
        );
    }

    #[test]
    fn test_image_size_contains() {
        let size = ImageSize::new(3, 2).unwrap();

        assert!(size.contains(0, 0));
        assert!(size.contains(2, 1));
        assert!(!size.contains(3, 1));
        assert!(!size.contains(2, 2));
        assert!(!size.contains(-1, 0));
    }
}
