//! Input adapters for the explorer.
//!
//! Each adapter receives input from some source and turns it into session
//! events.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
