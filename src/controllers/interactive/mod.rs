//! Interactive exploration: sessions, their input and where their frames go.
//!
//! Each session is a small state machine over a viewport. The `Explorer`
//! owns the live sessions and routes input from a display adapter to them.
//! Surfaces are reached only through the `ports` traits.

pub mod data;
pub mod events;
pub mod explorer;
pub mod ports;
pub mod session;

pub use data::session_config::{SessionConfig, SessionConfigError};
pub use events::{InputEvent, Key, Modifiers};
pub use explorer::{Explorer, ExplorerError, ExplorerOutcome};
pub use ports::{DisplaySurface, DisplaySurfaceFactory};
pub use session::{Session, SessionAction, SessionId};
