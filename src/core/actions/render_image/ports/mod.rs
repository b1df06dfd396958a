pub mod colour_map;
pub mod fractal_function;
