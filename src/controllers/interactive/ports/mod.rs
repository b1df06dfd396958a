//! Port definitions for the interactive controller.
//!
//! Contains the traits a display/windowing adapter implements to host
//! sessions.

pub mod display_surface;

pub use display_surface::{DisplaySurface, DisplaySurfaceFactory};
