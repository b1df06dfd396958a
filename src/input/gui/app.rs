use std::collections::HashMap;

use thiserror::Error;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::error::EventLoopError;
use winit::window::WindowId;

use crate::controllers::interactive::data::session_config::SessionConfig;
use crate::controllers::interactive::events::input_event::{InputEvent, Modifiers};
use crate::controllers::interactive::explorer::{Explorer, ExplorerError, ExplorerOutcome};
use crate::controllers::interactive::session::SessionId;
use crate::core::actions::render_image::render_image::Renderer;
use crate::core::data::point::PointerPosition;
use crate::core::fractals::fractal_kinds::Fractal;
use crate::input::gui::events;
use crate::presenters::pixels::{PixelsSurface, PixelsSurfaceFactory};

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

/// Routes window events to the session that owns the window.
struct GuiApp {
    explorer: Explorer<PixelsSurface>,
    windows: HashMap<WindowId, SessionId>,
    cursors: HashMap<WindowId, PointerPosition>,
    modifiers: Modifiers,
}

impl GuiApp {
    fn new(renderer: Renderer) -> Self {
        Self {
            explorer: Explorer::new(renderer),
            windows: HashMap::new(),
            cursors: HashMap::new(),
            modifiers: Modifiers::NONE,
        }
    }

    fn open(
        &mut self,
        target: &EventLoopWindowTarget<()>,
        fractal: Fractal,
        config: &SessionConfig,
    ) -> Result<(), ExplorerError> {
        let mut factory = PixelsSurfaceFactory::new(target);
        let id = self.explorer.create_session(&mut factory, fractal, config)?;
        self.track(id);

        Ok(())
    }

    fn track(&mut self, id: SessionId) {
        if let Some(session) = self.explorer.session(id) {
            self.windows.insert(session.surface().window_id(), id);
        }
    }

    fn forget(&mut self, id: SessionId) {
        self.windows.retain(|_, session| *session != id);
    }

    fn apply(&mut self, outcome: ExplorerOutcome) {
        match outcome {
            ExplorerOutcome::Opened(id) => self.track(id),
            ExplorerOutcome::Closed(id) => self.forget(id),
            ExplorerOutcome::Unchanged | ExplorerOutcome::Updated => {}
        }
    }

    fn pointer_event(&self, window_id: WindowId, event: &WindowEvent) -> Option<InputEvent> {
        let modifiers = self.modifiers;
        let position = self
            .cursors
            .get(&window_id)
            .copied()
            .unwrap_or(PointerPosition::new(0.0, 0.0));

        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PrimaryPressed {
                    position,
                    modifiers,
                },
                ElementState::Released => InputEvent::PrimaryReleased {
                    position,
                    modifiers,
                },
            }),
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved {
                position: PointerPosition::new(position.x, position.y),
                modifiers,
            }),
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scrolled {
                position,
                delta: events::scroll_delta(*delta),
                modifiers,
            }),
            _ => None,
        }
    }

    fn handle_window_event(
        &mut self,
        target: &EventLoopWindowTarget<()>,
        window_id: WindowId,
        event: WindowEvent,
    ) -> Result<(), ExplorerError> {
        let Some(&id) = self.windows.get(&window_id) else {
            return Ok(());
        };

        match &event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.explorer.close_session(id)?;
                self.forget(id);
                self.cursors.remove(&window_id);
            }
            WindowEvent::RedrawRequested => {
                if let Some(session) = self.explorer.session(id) {
                    if let Err(error) = session.surface().present() {
                        tracing::error!(session = %id, %error, "failed to present frame");
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(session) = self.explorer.session_mut(id) {
                    let resized = session.surface_mut().resize_surface(size.width, size.height);
                    if let Err(error) = resized {
                        tracing::warn!(session = %id, %error, "failed to resize surface");
                    }
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = events::modifiers(modifiers.state());
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let key = events::key(
                    &key_event.logical_key,
                    key_event.physical_key,
                    key_event.state,
                );
                if let Some(key) = key {
                    let outcome = self.explorer.handle_key(id, key)?;
                    self.apply(outcome);
                }
            }
            _ => {
                if let WindowEvent::CursorMoved { position, .. } = &event {
                    self.cursors
                        .insert(window_id, PointerPosition::new(position.x, position.y));
                }

                if let Some(input) = self.pointer_event(window_id, &event) {
                    let mut factory = PixelsSurfaceFactory::new(target);
                    let outcome = self.explorer.handle_input(&mut factory, id, input)?;
                    self.apply(outcome);
                }
            }
        }

        Ok(())
    }
}

/// Opens the default Mandelbrot window and runs until every window is closed.
pub fn run_gui(renderer: Renderer) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;
    let mut app = GuiApp::new(renderer);

    app.open(&event_loop, Fractal::Mandelbrot, &SessionConfig::default())?;

    let mut failure = None;

    event_loop.run(|event, target| {
        target.set_control_flow(ControlFlow::Wait);

        if let Event::WindowEvent { window_id, event } = event {
            if let Err(error) = app.handle_window_event(target, window_id, event) {
                tracing::error!(%error, "stopping event loop");
                failure = Some(error);
                target.exit();
                return;
            }

            if app.explorer.is_empty() {
                tracing::info!("all sessions closed");
                target.exit();
            }
        }
    })?;

    match failure {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
