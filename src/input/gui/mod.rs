//! Windowed front end: one winit window per session, drawn with pixels.

mod app;
pub mod events;

pub use app::{GuiError, run_gui};
