use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use escape_explorer::core::data::colour::Colour;
use escape_explorer::{Explorer, ExplorerArgs, Fractal, HeadlessSurfaceFactory, SessionConfig};

fn main() -> anyhow::Result<()> {
    let args = ExplorerArgs::parse();
    args.init_tracing()
        .map_err(|error| anyhow::anyhow!(error))
        .context("install log subscriber")?;

    let renderer = args.renderer().context("build renderer")?;
    let threads = renderer.threads();
    let mut explorer = Explorer::new(renderer);
    let mut factory = HeadlessSurfaceFactory::new();
    let config = SessionConfig::default();

    let start = Instant::now();
    let id = explorer
        .create_session(&mut factory, Fractal::Mandelbrot, &config)
        .context("open default session")?;
    let elapsed = start.elapsed();

    let frame = explorer
        .session(id)
        .and_then(|session| session.surface().last_frame())
        .context("session showed no frame")?;
    let in_set = frame.colours().filter(Colour::is_black).count();

    tracing::info!(
        width = frame.size().width(),
        height = frame.size().height(),
        threads,
        elapsed_ms = elapsed.as_millis() as u64,
        black_pixels = in_set,
        "rendered {}",
        config.title
    );
    println!(
        "{}: {}x{} in {} ms on {threads} threads, {in_set} black pixels",
        config.title,
        frame.size().width(),
        frame.size().height(),
        elapsed.as_millis()
    );

    explorer.close_session(id).context("close session")?;

    Ok(())
}
