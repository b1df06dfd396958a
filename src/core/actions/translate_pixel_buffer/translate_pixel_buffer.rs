use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Shifts `source` by `(dx, dy)` pixels without re-rendering.
///
/// The area uncovered by the shift is black.
#[must_use]
pub fn translate_pixel_buffer(source: &PixelBuffer, dx: i64, dy: i64) -> PixelBuffer {
    let size = source.size();
    let width = i64::from(size.width());
    let height = i64::from(size.height());
    let mut translated = PixelBuffer::new(size);

    // Any shift of a full dimension or more leaves the image black.
    let dx = dx.clamp(-width, width);
    let dy = dy.clamp(-height, height);

    // Destination columns that receive a source pixel.
    let dest_x_start = dx.clamp(0, width);
    let dest_x_end = (width + dx).clamp(0, width);

    if dest_x_start >= dest_x_end {
        return translated;
    }

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let copy_bytes = (dest_x_end - dest_x_start) as usize * BYTES_PER_PIXEL;
    let src_offset = (dest_x_start - dx) as usize * BYTES_PER_PIXEL;
    let dest_offset = dest_x_start as usize * BYTES_PER_PIXEL;
    let src = source.buffer();
    let dest = translated.buffer_mut();

    for dest_y in 0..height {
        let src_y = dest_y - dy;

        if !(0..height).contains(&src_y) {
            continue;
        }

        let src_row = src_y as usize * row_bytes + src_offset;
        let dest_row = dest_y as usize * row_bytes + dest_offset;

        dest[dest_row..dest_row + copy_bytes].copy_from_slice(&src[src_row..src_row + copy_bytes]);
    }

    translated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::point::Point;

    /// 3x2 image where every pixel has a distinct red value.
    fn source() -> PixelBuffer {
        let size = ImageSize::new(3, 2).unwrap();
        let data = (1..=6u8).flat_map(|r| [r, 0, 0]).collect();
        PixelBuffer::from_data(size, data).unwrap()
    }

    fn reds(buffer: &PixelBuffer) -> Vec<u8> {
        buffer.buffer().chunks_exact(3).map(|pixel| pixel[0]).collect()
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let original = source();

        assert_eq!(translate_pixel_buffer(&original, 0, 0), original);
    }

    #[test]
    fn test_shift_right_fills_left_edge_with_black() {
        let shifted = translate_pixel_buffer(&source(), 1, 0);

        assert_eq!(reds(&shifted), vec![0, 1, 2, 0, 4, 5]);
    }

    #[test]
    fn test_shift_left_and_down() {
        let shifted = translate_pixel_buffer(&source(), -2, 1);

        assert_eq!(reds(&shifted), vec![0, 0, 0, 3, 0, 0]);
        assert_eq!(shifted.pixel(Point { x: 0, y: 1 }), Some(Colour { r: 3, g: 0, b: 0 }));
    }

    #[test]
    fn test_shift_up() {
        let shifted = translate_pixel_buffer(&source(), 0, -1);

        assert_eq!(reds(&shifted), vec![4, 5, 6, 0, 0, 0]);
    }

    #[test]
    fn test_shift_beyond_image_is_all_black() {
        let original = source();

        for (dx, dy) in [(3, 0), (-3, 0), (0, 2), (0, -2), (100, -100)] {
            let shifted = translate_pixel_buffer(&original, dx, dy);
            assert!(shifted.buffer().iter().all(|&b| b == 0), "offset ({dx}, {dy})");
        }
    }

    #[test]
    fn test_source_is_left_untouched() {
        let original = source();
        let _ = translate_pixel_buffer(&original, 1, 1);

        assert_eq!(original, source());
    }

    #[test]
    fn test_extreme_offsets_are_all_black() {
        let original = source();
        let far = (1e300_f64).round() as i64;
        let near = (-1e300_f64).round() as i64;

        for (dx, dy) in [(far, 0), (0, near), (near, far), (i64::MAX, i64::MIN)] {
            let shifted = translate_pixel_buffer(&original, dx, dy);
            assert!(shifted.buffer().iter().all(|&b| b == 0), "offset ({dx}, {dy})");
        }
    }
}
