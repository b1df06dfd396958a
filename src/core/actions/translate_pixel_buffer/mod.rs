pub mod translate_pixel_buffer;

pub use translate_pixel_buffer::translate_pixel_buffer;
