pub mod render_image;
pub mod translate_pixel_buffer;
