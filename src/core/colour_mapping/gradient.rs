use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("gradient has no colour stops")]
    Empty,
}

/// A colour with floating point channels in `[0, 255]`, RGB order.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn lerp(self, other: Self, alpha: f64) -> Self {
        Self {
            r: (1.0 - alpha) * self.r + alpha * other.r,
            g: (1.0 - alpha) * self.g + alpha * other.g,
            b: (1.0 - alpha) * self.b + alpha * other.b,
        }
    }

    /// Truncates each channel to a byte, saturating at the ends of the range.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: self.r as u8,
            g: self.g as u8,
            b: self.b as u8,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub colour: Rgb,
}

/// Piecewise-linear colour ramp over a set of stops with unique positions.
///
/// Stops are kept sorted by position. Lookups below the first stop or above
/// the last one clamp to that stop's colour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a stop, replacing the colour of any stop already at `position`.
    ///
    /// Positions are normally in `[0, 1]`; values outside it are kept and
    /// only widen the clamped range. `-0.0` is the same stop as `0.0`.
    /// `position` must not be NaN.
    pub fn add_colour(&mut self, position: f64, colour: Rgb) {
        debug_assert!(!position.is_nan(), "gradient stop position is NaN");
        let position = if position == 0.0 { 0.0 } else { position };

        match self
            .stops
            .binary_search_by(|stop| stop.position.total_cmp(&position))
        {
            Ok(index) => self.stops[index].colour = colour,
            Err(index) => self.stops.insert(index, GradientStop { position, colour }),
        }
    }

    #[must_use]
    pub fn with_colour(mut self, position: f64, colour: Rgb) -> Self {
        self.add_colour(position, colour);
        self
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn colour_at(&self, value: f64) -> Result<Rgb, GradientError> {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(GradientError::Empty),
        };

        if value.is_nan() || value <= first.position {
            return Ok(first.colour);
        }

        if value >= last.position {
            return Ok(last.colour);
        }

        // first.position < value < last.position, so 0 < upper_index < len
        let upper_index = self.stops.partition_point(|stop| stop.position <= value);
        let lower = &self.stops[upper_index - 1];
        let upper = &self.stops[upper_index];
        let alpha = (value - lower.position) / (upper.position - lower.position);

        Ok(lower.colour.lerp(upper.colour, alpha))
    }
}

impl ColourMap for Gradient {
    type T = f64;
    type Failure = GradientError;

    fn map(&self, value: f64) -> Result<Colour, GradientError> {
        self.colour_at(value).map(Rgb::to_colour)
    }
}
