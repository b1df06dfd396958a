use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::time::Instant;
use thiserror::Error;

use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::actions::render_image::ports::fractal_function::FractalFunction;
use crate::core::colour_mapping::gradient::{Gradient, GradientError};
use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape::MAX_ITERATIONS;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] GradientError),
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

fn pixel_colour<F, C>(
    fractal: &F,
    colour_map: &C,
    size: ImageSize,
    viewport: &Viewport,
    index: usize,
) -> Result<Colour, C::Failure>
where
    F: FractalFunction,
    C: ColourMap<T = f64>,
{
    let width = size.width() as usize;
    let x = (index % width) as f64;
    let y = (index / width) as f64;
    let point = pixel_to_complex(size, viewport, x, y);

    colour_map.map(fractal.iterations(point) / f64::from(MAX_ITERATIONS))
}

fn write_colour(pixel: &mut [u8], colour: Colour) {
    pixel[0] = colour.r;
    pixel[1] = colour.g;
    pixel[2] = colour.b;
}

/// Renders every pixel of `size` in parallel on the current rayon pool.
///
/// Work is a single flat loop over pixel indices. Each pixel is a pure
/// function of its position, so the output does not depend on how rayon
/// splits the work.
pub fn render_image<F, C>(
    fractal: &F,
    colour_map: &C,
    size: ImageSize,
    viewport: &Viewport,
) -> Result<PixelBuffer, C::Failure>
where
    F: FractalFunction,
    C: ColourMap<T = f64>,
    C::Failure: Send,
{
    let mut pixel_buffer = PixelBuffer::new(size);

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .enumerate()
        .try_for_each(|(index, pixel)| {
            let colour = pixel_colour(fractal, colour_map, size, viewport, index)?;
            write_colour(pixel, colour);
            Ok(())
        })?;

    Ok(pixel_buffer)
}

/// Single-threaded reference for [`render_image`].
pub fn render_image_serial<F, C>(
    fractal: &F,
    colour_map: &C,
    size: ImageSize,
    viewport: &Viewport,
) -> Result<PixelBuffer, C::Failure>
where
    F: FractalFunction,
    C: ColourMap<T = f64>,
{
    let mut pixel_buffer = PixelBuffer::new(size);

    for (index, pixel) in pixel_buffer
        .buffer_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .enumerate()
    {
        let colour = pixel_colour(fractal, colour_map, size, viewport, index)?;
        write_colour(pixel, colour);
    }

    Ok(pixel_buffer)
}

/// Owns the colour gradient and, optionally, a dedicated thread pool.
///
/// Shared read-only between sessions.
#[derive(Debug)]
pub struct Renderer {
    gradient: Gradient,
    pool: Option<ThreadPool>,
}

impl Renderer {
    /// Fails if `gradient` has no stops.
    pub fn new(gradient: Gradient) -> Result<Self, RenderError> {
        if gradient.is_empty() {
            return Err(RenderError::ColourMap(GradientError::Empty));
        }

        Ok(Self {
            gradient,
            pool: None,
        })
    }

    /// Like [`Renderer::new`] but renders on a private pool of `threads` workers.
    pub fn with_threads(gradient: Gradient, threads: usize) -> Result<Self, RenderError> {
        let mut renderer = Self::new(gradient)?;
        renderer.pool = Some(ThreadPoolBuilder::new().num_threads(threads).build()?);

        Ok(renderer)
    }

    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(width = size.width(), height = size.height(), zoom = viewport.zoom)
    )]
    pub fn render<F: FractalFunction>(
        &self,
        fractal: &F,
        size: ImageSize,
        viewport: &Viewport,
    ) -> Result<PixelBuffer, RenderError> {
        let start = Instant::now();
        let render = || render_image(fractal, &self.gradient, size, viewport);

        let pixel_buffer = match &self.pool {
            Some(pool) => pool.install(render),
            None => render(),
        }?;

        tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "render finished");

        Ok(pixel_buffer)
    }
}
