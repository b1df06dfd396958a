//! Display surface adapters.

pub mod headless;
#[cfg(feature = "gui")]
pub mod pixels;
