use std::num::NonZeroUsize;

use clap::Parser;
use tracing::Level;

use crate::core::actions::render_image::render_image::{RenderError, Renderer};
use crate::core::colour_mapping::default_gradient::default_gradient;

/// Command line options shared by the explorer binaries.
///
/// These select how frames are computed and how much is logged. The view
/// the explorer opens with is fixed.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "escape_explorer", version, about = "Mandelbrot and Julia set explorer")]
pub struct ExplorerArgs {
    /// Render on a dedicated pool of this many threads instead of rayon's global pool.
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    /// More log output; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExplorerArgs {
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Installs a `fmt` subscriber at the requested level.
    pub fn init_tracing(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_target(false)
            .try_init()
    }

    /// Builds a renderer for the standard colour scheme.
    pub fn renderer(&self) -> Result<Renderer, RenderError> {
        match self.threads {
            Some(threads) => Renderer::with_threads(default_gradient(), threads.get()),
            None => Renderer::new(default_gradient()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ExplorerArgs {
        ExplorerArgs::try_parse_from(std::iter::once("escape_explorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.threads, None);
        assert_eq!(args.log_level(), Level::WARN);
    }

    #[test]
    fn test_verbosity_counts_up_to_trace() {
        assert_eq!(parse(&["-v"]).log_level(), Level::INFO);
        assert_eq!(parse(&["-vv"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-v", "--verbose", "-v"]).log_level(), Level::TRACE);
        assert_eq!(parse(&["-vvvvv"]).log_level(), Level::TRACE);
    }

    #[test]
    fn test_threads_builds_dedicated_pool() {
        let args = parse(&["--threads", "2"]);

        assert_eq!(args.threads, NonZeroUsize::new(2));
        assert_eq!(args.renderer().unwrap().threads(), 2);
    }

    #[test]
    fn test_zero_threads_is_rejected() {
        let result = ExplorerArgs::try_parse_from(["escape_explorer", "--threads", "0"]);

        assert!(result.is_err());
    }
}
