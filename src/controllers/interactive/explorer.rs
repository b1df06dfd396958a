use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::controllers::interactive::data::session_config::{SessionConfig, SessionConfigError};
use crate::controllers::interactive::events::input_event::{InputEvent, Key};
use crate::controllers::interactive::ports::display_surface::{
    DisplaySurface, DisplaySurfaceFactory,
};
use crate::controllers::interactive::session::{Session, SessionAction, SessionId};
use crate::core::actions::render_image::render_image::{RenderError, Renderer};
use crate::core::fractals::fractal_kinds::Fractal;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("no session with id {0}")]
    UnknownSession(SessionId),
    #[error("invalid session config: {0}")]
    Config(#[from] SessionConfigError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("failed to create display surface: {0}")]
    Surface(#[source] Box<dyn StdError + Send + Sync>),
}

/// What an event did to the set of sessions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExplorerOutcome {
    Unchanged,
    Updated,
    Opened(SessionId),
    Closed(SessionId),
}

/// Owns every live session. Sessions share one renderer and nothing else.
pub struct Explorer<S: DisplaySurface> {
    renderer: Arc<Renderer>,
    sessions: BTreeMap<SessionId, Session<S>>,
    next_id: u64,
}

impl<S: DisplaySurface> Explorer<S> {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
            sessions: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&Session<S>> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut Session<S>> {
        self.sessions.get_mut(&id)
    }

    pub fn session_ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Opens a session and shows its first frame.
    ///
    /// Nothing is added if the config is invalid or the surface or the
    /// first render fails.
    #[tracing::instrument(level = "info", skip_all, fields(title = %config.title))]
    pub fn create_session<F>(
        &mut self,
        factory: &mut F,
        fractal: Fractal,
        config: &SessionConfig,
    ) -> Result<SessionId, ExplorerError>
    where
        F: DisplaySurfaceFactory<Surface = S>,
    {
        let (size, viewport) = config.validate()?;
        let surface = factory
            .create_surface(&config.title, size)
            .map_err(|error| ExplorerError::Surface(Box::new(error)))?;

        let id = SessionId(self.next_id);
        let mut session = Session::new(
            id,
            config.title.clone(),
            fractal,
            size,
            viewport,
            Arc::clone(&self.renderer),
            surface,
        );
        session.render()?;

        self.next_id += 1;
        self.sessions.insert(id, session);
        tracing::info!(
            session = %id,
            width = size.width(),
            height = size.height(),
            "session created"
        );

        Ok(id)
    }

    pub fn handle_input<F>(
        &mut self,
        factory: &mut F,
        id: SessionId,
        event: InputEvent,
    ) -> Result<ExplorerOutcome, ExplorerError>
    where
        F: DisplaySurfaceFactory<Surface = S>,
    {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(ExplorerError::UnknownSession(id))?;
        let action = session.handle_input(event)?;

        match action {
            SessionAction::OpenJulia { seed } => {
                let config = SessionConfig::julia(seed, session.size());
                tracing::info!(
                    parent = %id,
                    re = seed.real,
                    im = seed.imag,
                    "opening julia session"
                );

                let opened = self.create_session(factory, Fractal::julia(seed), &config)?;
                Ok(ExplorerOutcome::Opened(opened))
            }
            other => self.settle(id, other),
        }
    }

    pub fn handle_key(
        &mut self,
        id: SessionId,
        key: Key,
    ) -> Result<ExplorerOutcome, ExplorerError> {
        let action = self
            .sessions
            .get_mut(&id)
            .ok_or(ExplorerError::UnknownSession(id))?
            .handle_key(key)?;

        self.settle(id, action)
    }

    /// Closes a session's surface and drops it.
    pub fn close_session(&mut self, id: SessionId) -> Result<(), ExplorerError> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(ExplorerError::UnknownSession(id))?;
        session.close();

        Ok(())
    }

    fn settle(
        &mut self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<ExplorerOutcome, ExplorerError> {
        match action {
            SessionAction::Ignored
            | SessionAction::DragStarted
            | SessionAction::OpenJulia { .. } => Ok(ExplorerOutcome::Unchanged),
            SessionAction::Previewed | SessionAction::Rendered => Ok(ExplorerOutcome::Updated),
            SessionAction::Close => {
                self.close_session(id)?;
                Ok(ExplorerOutcome::Closed(id))
            }
        }
    }
}
