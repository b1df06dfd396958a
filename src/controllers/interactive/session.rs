use std::fmt;
use std::sync::Arc;

use crate::controllers::interactive::events::input_event::{InputEvent, Key, Modifiers};
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::actions::render_image::render_image::{RenderError, Renderer};
use crate::core::actions::translate_pixel_buffer::translate_pixel_buffer::translate_pixel_buffer;
use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::PointerPosition;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::Fractal;
use crate::core::util::pixel_to_complex_coords::{pixel_delta_to_complex, pixel_to_complex};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a session did in response to an event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionAction {
    /// Event ignored, nothing changed.
    Ignored,
    /// Pan started; the viewport is untouched until release.
    DragStarted,
    /// A translated copy of the last frame was shown.
    Previewed,
    /// The viewport changed and a fresh frame was shown.
    Rendered,
    /// A Julia session seeded with `seed` should be opened.
    OpenJulia { seed: Complex },
    /// The session should be closed.
    Close,
}

/// One interactive view: its viewport, drag state and the last frame it rendered.
///
/// Rendering is synchronous; a handler does not return until the new frame
/// has been shown.
pub struct Session<S: DisplaySurface> {
    id: SessionId,
    title: String,
    fractal: Fractal,
    size: ImageSize,
    viewport: Viewport,
    initial_viewport: Viewport,
    drag_start: Option<PointerPosition>,
    last_render: Option<PixelBuffer>,
    renderer: Arc<Renderer>,
    surface: S,
}

impl<S: DisplaySurface> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("fractal", &self.fractal)
            .field("size", &self.size)
            .field("viewport", &self.viewport)
            .field("drag_start", &self.drag_start)
            .finish_non_exhaustive()
    }
}

impl<S: DisplaySurface> Session<S> {
    /// Builds a session without rendering; call [`Session::render`] to show the first frame.
    pub fn new(
        id: SessionId,
        title: impl Into<String>,
        fractal: Fractal,
        size: ImageSize,
        viewport: Viewport,
        renderer: Arc<Renderer>,
        surface: S,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            fractal,
            size,
            viewport,
            initial_viewport: viewport,
            drag_start: None,
            last_render: None,
            renderer,
            surface,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn fractal(&self) -> Fractal {
        self.fractal
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    #[must_use]
    pub fn last_render(&self) -> Option<&PixelBuffer> {
        self.last_render.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Renders the current viewport, shows it and keeps it as the last frame.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let buffer = self.renderer.render(&self.fractal, self.size, &self.viewport)?;

        self.surface.show_image(&buffer);
        self.last_render = Some(buffer);

        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Result<SessionAction, RenderError> {
        match event {
            InputEvent::PrimaryPressed {
                position,
                modifiers,
            } => Ok(self.press(position, modifiers)),
            InputEvent::PointerMoved { position, .. } => Ok(self.preview_drag(position)),
            InputEvent::PrimaryReleased { position, .. } => self.release(position),
            InputEvent::Scrolled {
                position,
                delta,
                modifiers,
            } => self.scroll(position, delta, modifiers),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Result<SessionAction, RenderError> {
        match key {
            Key::Escape => Ok(SessionAction::Close),
            Key::F5 => {
                self.viewport = self.initial_viewport;
                tracing::info!(session = %self.id, "view reset");
                self.rerender()
            }
            Key::Plus => {
                self.viewport.zoom_in();
                self.rerender()
            }
            Key::Minus => {
                self.viewport.zoom_out();
                self.rerender()
            }
            Key::Other => {
                tracing::trace!(session = %self.id, "ignoring unrecognised key");
                Ok(SessionAction::Ignored)
            }
        }
    }

    /// Ends the session, dropping its last frame and closing its surface.
    pub fn close(mut self) {
        self.last_render = None;
        self.drag_start = None;
        self.surface.close();
        tracing::info!(session = %self.id, title = %self.title, "session closed");
    }

    fn rerender(&mut self) -> Result<SessionAction, RenderError> {
        tracing::debug!(
            session = %self.id,
            center_re = self.viewport.center.real,
            center_im = self.viewport.center.imag,
            zoom = self.viewport.zoom,
            "viewport changed"
        );
        self.render()?;

        Ok(SessionAction::Rendered)
    }

    fn press(&mut self, position: PointerPosition, modifiers: Modifiers) -> SessionAction {
        if !modifiers.control {
            self.drag_start = Some(position);
            return SessionAction::DragStarted;
        }

        if !self.fractal.is_mandelbrot() {
            return SessionAction::Ignored;
        }

        let seed = pixel_to_complex(self.size, &self.viewport, position.x, position.y);
        SessionAction::OpenJulia { seed }
    }

    fn preview_drag(&mut self, position: PointerPosition) -> SessionAction {
        let (Some(start), Some(last_render)) = (self.drag_start, &self.last_render) else {
            return SessionAction::Ignored;
        };

        let dx = (position.x - start.x).round() as i64;
        let dy = (position.y - start.y).round() as i64;
        let preview = translate_pixel_buffer(last_render, dx, dy);

        self.surface.show_image(&preview);
        SessionAction::Previewed
    }

    fn release(&mut self, position: PointerPosition) -> Result<SessionAction, RenderError> {
        let Some(start) = self.drag_start.take() else {
            return Ok(SessionAction::Ignored);
        };

        let offset = pixel_delta_to_complex(
            self.size,
            self.viewport.zoom,
            start.x - position.x,
            start.y - position.y,
        );
        self.viewport.pan(offset);

        self.rerender()
    }

    fn scroll(
        &mut self,
        position: PointerPosition,
        delta: f64,
        modifiers: Modifiers,
    ) -> Result<SessionAction, RenderError> {
        if !modifiers.control || delta == 0.0 || delta.is_nan() {
            return Ok(SessionAction::Ignored);
        }

        if delta > 0.0 {
            self.viewport.zoom_in();
        } else {
            self.viewport.zoom_out();
        }

        let width = f64::from(self.size.width());
        let height = f64::from(self.size.height());
        self.viewport.pan(Complex {
            real: (position.x / width - 0.5) / self.viewport.zoom,
            imag: (position.y / height - 0.5) / self.viewport.zoom,
        });

        self.rerender()
    }
}
