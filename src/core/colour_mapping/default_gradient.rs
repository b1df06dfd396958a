use crate::core::colour_mapping::gradient::{Gradient, Rgb};

pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 255.0);
pub const LIGHT_BLUE: Rgb = Rgb::new(173.0, 216.0, 230.0);
pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);
pub const YELLOW: Rgb = Rgb::new(255.0, 255.0, 0.0);
pub const ORANGE: Rgb = Rgb::new(255.0, 165.0, 0.0);
pub const RED: Rgb = Rgb::new(255.0, 0.0, 0.0);

pub const DEFAULT_STOPS: [(f64, Rgb); 8] = [
    (0.0, BLACK),
    (0.03, BLUE),
    (0.06, LIGHT_BLUE),
    (0.09, WHITE),
    (0.14, YELLOW),
    (0.19, ORANGE),
    (0.5, RED),
    (1.0, BLACK),
];

/// The standard colour scheme: fast escapes run black through blues to
/// white, slower ones through yellow and orange to red, and points in the
/// set fade back to black.
#[must_use]
pub fn default_gradient() -> Gradient {
    DEFAULT_STOPS
        .iter()
        .fold(Gradient::new(), |gradient, &(position, colour)| {
            gradient.with_colour(position, colour)
        })
}
